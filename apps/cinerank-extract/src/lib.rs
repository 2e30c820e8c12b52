use std::{
	fmt::Write,
	path::{Path, PathBuf},
};

use clap::{Parser, ValueEnum};

use cinerank_config::Config;
use cinerank_domain::{Criteria, Subscore};
use cinerank_service::{CurationPolicy, OLDIES_FLOOR, curate, curation, render};
use cinerank_sources::Source;
use cinerank_storage::{RecordStore, database};

/// Ingests the raw rating dumps, lists a year range and prepares review sheets.
#[derive(Debug, Parser)]
#[command(
	version = cinerank_cli::VERSION,
	rename_all = "kebab",
	styles = cinerank_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// First year of the listed period.
	#[arg(long, short = 's', value_name = "YEAR", default_value_t = OLDIES_FLOOR)]
	pub start: i32,
	/// Last year of the listed period. Defaults to the current year.
	#[arg(long, short = 'e', value_name = "YEAR")]
	pub end: Option<i32>,
	/// Maximum movies to list.
	#[arg(long, short = 'n', value_name = "COUNT")]
	pub number: Option<usize>,
	/// Ranking criteria of the listing.
	#[arg(long, value_enum, default_value_t = CriteriaArg::All)]
	pub criteria: CriteriaArg,
	/// Write a curation sheet for the composite database to FILE.
	#[arg(long, short = 'x', value_name = "FILE")]
	pub export: Option<PathBuf>,
	/// Year the curation windows count back from. Defaults to the current year.
	#[arg(long, value_name = "YEAR")]
	pub year: Option<i32>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CriteriaArg {
	All,
	Imdb,
	Rotten,
	RottenUser,
	Meta,
	MetaUser,
}
impl From<CriteriaArg> for Criteria {
	fn from(arg: CriteriaArg) -> Self {
		match arg {
			CriteriaArg::All => Self::Composite,
			CriteriaArg::Imdb => Self::Subscore(Subscore::Imdb),
			CriteriaArg::Rotten => Self::Subscore(Subscore::CriticRotten),
			CriteriaArg::RottenUser => Self::Subscore(Subscore::UserRotten),
			CriteriaArg::Meta => Self::Subscore(Subscore::CriticMeta),
			CriteriaArg::MetaUser => Self::Subscore(Subscore::UserMeta),
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

/// Scans every source, renders the listing and writes the curation sheet when asked.
pub fn execute(args: &Args, config: &Config) -> color_eyre::Result<String> {
	let current_year = args.year.unwrap_or_else(cinerank_cli::current_year);
	let mut fresh = RecordStore::new();
	let mut out = String::new();

	for source in Source::ALL {
		let path = source_path(config, source);
		let report = source.scan_file(&mut fresh, path)?;

		write!(out, "> Loaded {} movies from {}", report.loaded, path.display())?;

		if report.skipped > 0 {
			write!(out, " (skipped {})", report.skipped)?;
		}

		out.push('\n');
	}

	writeln!(out, "> Database has {} movies", fresh.len())?;

	let end = args.end.unwrap_or(current_year);
	let movies = fresh.filter(args.start..=end, args.criteria.into(), false);
	let limit = args.number.unwrap_or(config.listing.limit);

	out.push_str(&render::render_listing(&movies, args.start, end, limit));

	if let Some(export) = &args.export {
		let existing = load_existing(config);
		let policy = CurationPolicy {
			stride: config.curation.stride,
			offset: config.curation.offset,
			count: config.curation.count,
		};
		let sections = curate(&fresh, &existing, current_year, policy);

		database::write_database(export, &curation::render_curation(&sections))?;

		tracing::info!(path = %export.display(), windows = sections.len(), "Wrote curation sheet.");
	}

	Ok(out)
}

fn source_path(config: &Config, source: Source) -> &Path {
	match source {
		Source::Imdb => &config.data.imdb,
		Source::Rotten => &config.data.rotten,
		Source::Meta => &config.data.meta,
	}
}

/// The curated database, or an empty store when it cannot be read.
fn load_existing(config: &Config) -> RecordStore {
	database::load_database(&config.data.database).unwrap_or_else(|err| {
		tracing::warn!(error = %err, "Curating without an existing composite database.");

		RecordStore::new()
	})
}
