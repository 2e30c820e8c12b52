use clap::Parser;

use cinerank::Args;
use cinerank_config::Config;
use cinerank_domain::MovieExport;
use cinerank_testkit::ScratchFile;

const DATABASE: &str = "\
--- 2020 TO 2024 ---
090 088 092 090 085   (2022) Alpha
070 070 070 070 070   (2023) Bravo
050 050 050 050 050 D (2024) Charlie Documentary

--- 2015 TO 2019 ---
080 080 080 080 080   (2017) Delta
088 0.. 094 0.. 084   (2016) Pending Review
";

fn execute(database: &ScratchFile, flags: &[&str]) -> String {
	let path = database.path().to_str().expect("Scratch path must be UTF-8.");
	let argv = ["cinerank", "--database", path, "--year", "2024"].into_iter().chain(flags.iter().copied());
	let args = Args::try_parse_from(argv).expect("Failed to parse arguments.");

	cinerank::execute(&args, &Config::default()).expect("Failed to execute ranking.")
}

#[test]
fn flat_listing_numbers_every_loaded_movie() {
	let database = ScratchFile::with_contents("compute_db", DATABASE);
	let output = execute(&database, &[]);
	let lines: Vec<&str> = output.lines().collect();

	assert_eq!(lines[0], "> Loaded 4 movies");
	assert_eq!(lines[1], "  1. 2022  90|88|92|90|85 (89.0)  Alpha");
	assert_eq!(lines.len(), 5);
}

#[test]
fn grouped_listing_excludes_documentaries_on_request() {
	let database = ScratchFile::with_contents("compute_db", DATABASE);
	let output = execute(&database, &["-y", "-D", "-u", "2015"]);

	assert_eq!(
		output,
		"> Loaded 4 movies\n\
		 --- 2020 TO 2024 ---\n\
		 \x20 1. 2022  90|88|92|90|85 (89.0)  Alpha\n\
		 \x20 2. 2023  70|70|70|70|70 (70.0)  Bravo\n\
		 \n\
		 --- 2015 TO 2019 ---\n\
		 \x20 3. 2017  80|80|80|80|80 (80.0)  Delta\n\
		 \n"
	);
}

#[test]
fn json_export_contains_the_progressive_selection() {
	let database = ScratchFile::with_contents("compute_db", DATABASE);
	let output = execute(&database, &["-y", "-p", "-n", "1", "-u", "2020", "-j"]);
	let exports: Vec<MovieExport> = serde_json::from_str(&output).expect("Output must be JSON.");
	let names: Vec<&str> = exports.iter().map(|export| export.name.as_str()).collect();

	assert_eq!(names, ["Charlie Documentary", "Bravo", "Alpha"]);
}

#[test]
fn sort_by_score_flattens_the_groups() {
	let database = ScratchFile::with_contents("compute_db", DATABASE);
	let output = execute(&database, &["-y", "-s", "score", "-u", "2015"]);
	let names: Vec<&str> =
		output.lines().skip(1).filter_map(|line| line.split("  ").last()).collect();

	assert_eq!(names, ["Alpha", "Delta", "Bravo", "Charlie Documentary"]);
}

#[test]
fn missing_database_is_an_error() {
	let database = ScratchFile::new("compute_missing");
	let path = database.path().to_str().expect("Scratch path must be UTF-8.");
	let args = Args::try_parse_from(["cinerank", "--database", path]).expect("Failed to parse arguments.");

	assert!(cinerank::execute(&args, &Config::default()).is_err());
}

#[test]
fn json_export_follows_the_requested_sort() {
	let database = ScratchFile::with_contents("compute_db", DATABASE);
	let output = execute(&database, &["-y", "-s", "year", "-u", "2015", "-j"]);
	let exports: Vec<MovieExport> = serde_json::from_str(&output).expect("Output must be JSON.");
	let years: Vec<i32> = exports.iter().map(|export| export.year).collect();

	assert_eq!(years, [2024, 2023, 2022, 2017]);
}
