use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use cinerank_config::Config;
use cinerank_service::{RankingRequest, SortKey, rank, render};
use cinerank_storage::database;

/// Ranks the curated composite database.
#[derive(Debug, Parser)]
#[command(
	version = cinerank_cli::VERSION,
	rename_all = "kebab",
	styles = cinerank_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Composite database to read instead of the configured one.
	#[arg(long, value_name = "FILE")]
	pub database: Option<PathBuf>,
	/// Group by years.
	#[arg(long, short = 'y')]
	pub by_years: bool,
	/// Reserve slots for recent movies, carrying runners-up into older groups.
	#[arg(long, short = 'p')]
	pub progressive: bool,
	/// Select the best movie year by year.
	#[arg(long, short = 'i')]
	pub iterative: bool,
	/// Only movies released in this year or later.
	#[arg(long, short = 'u', value_name = "YEAR")]
	pub until: Option<i32>,
	/// Number of years per group.
	#[arg(long, short = 'n', value_name = "YEARS")]
	pub number: Option<u32>,
	#[arg(long = "no-documentary", short = 'D')]
	pub no_documentary: bool,
	/// Sort results instead of showing groups.
	#[arg(long, short = 's', value_enum)]
	pub sort: Option<SortArg>,
	/// Export the selection as JSON.
	#[arg(long, short = 'j')]
	pub json: bool,
	/// Year the windows count back from. Defaults to the current year.
	#[arg(long, value_name = "YEAR")]
	pub year: Option<i32>,
}
impl Args {
	pub fn ranking_request(&self, config: &Config) -> RankingRequest {
		let mut request = RankingRequest::new(self.year.unwrap_or_else(cinerank_cli::current_year));

		request.until = self.until.unwrap_or(config.ranking.until);
		request.group_size = self.number.unwrap_or(config.ranking.group_size);
		request.by_years = self.by_years;
		request.iterative = self.iterative;
		request.progressive = self.progressive;
		request.exclude_documentaries = self.no_documentary;
		request.sort = self.sort.map(SortKey::from);

		request
	}
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
	Year,
	Score,
}
impl From<SortArg> for SortKey {
	fn from(arg: SortArg) -> Self {
		match arg {
			SortArg::Year => Self::Year,
			SortArg::Score => Self::Score,
		}
	}
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = cinerank_config::load_or_default(args.config.as_deref())?;

	cinerank_cli::init_tracing(&config.service.log_level);

	let output = execute(&args, &config)?;

	print!("{output}");

	Ok(())
}

/// Loads the database and renders the requested ranking.
pub fn execute(args: &Args, config: &Config) -> color_eyre::Result<String> {
	let path = args.database.as_deref().unwrap_or(&config.data.database);
	let store = database::load_database(path)?;
	let request = args.ranking_request(config);
	let ranking = rank(&store, &request)?;

	if args.json {
		let mut json = render::render_json(&ranking.movies)?;

		json.push('\n');

		return Ok(json);
	}

	Ok(format!("> Loaded {} movies\n{}", store.len(), render::render_text(&ranking)))
}
