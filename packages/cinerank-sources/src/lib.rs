//! Scanners for the raw rating dumps. Each one feeds `(name, year, subscore)` triples
//! into a [`RecordStore`], merging by identity.

pub mod imdb;
pub mod meta;
pub mod rotten;

mod error;

pub use error::{Error, Result};

use std::{fs, path::Path};

use cinerank_domain::{MAX_SUBSCORE, Subscore};
use cinerank_storage::{LoadReport, RecordStore};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Source {
	Imdb,
	Rotten,
	Meta,
}
impl Source {
	pub const ALL: [Self; 3] = [Self::Imdb, Self::Rotten, Self::Meta];

	pub fn name(self) -> &'static str {
		match self {
			Self::Imdb => "imdb",
			Self::Rotten => "rotten",
			Self::Meta => "meta",
		}
	}

	/// The subscore this source reports.
	pub fn subscore(self) -> Subscore {
		match self {
			Self::Imdb => Subscore::Imdb,
			Self::Rotten => Subscore::CriticRotten,
			Self::Meta => Subscore::CriticMeta,
		}
	}

	pub fn scan(self, store: &mut RecordStore, text: &str) -> Result<LoadReport> {
		match self {
			Self::Imdb => Ok(imdb::scan(store, text)),
			Self::Rotten => rotten::scan(store, text),
			Self::Meta => meta::scan(store, text),
		}
	}

	pub fn scan_file(self, store: &mut RecordStore, path: &Path) -> Result<LoadReport> {
		let text = fs::read_to_string(path).map_err(|err| Error::ReadSource {
			source_name: self.name(),
			path: path.to_path_buf(),
			source: err,
		})?;
		let report = self.scan(store, &text)?;

		tracing::info!(
			source = self.name(),
			path = %path.display(),
			loaded = report.loaded,
			skipped = report.skipped,
			"Scanned rating source."
		);

		Ok(report)
	}
}

/// Stores `value` under `name`, or returns `false` when it lies outside the subscore scale.
fn merge(store: &mut RecordStore, source: Source, name: &str, year: i32, value: u32) -> bool {
	if value > MAX_SUBSCORE {
		tracing::warn!(source = source.name(), name, year, value, "Skipping out-of-scale rating.");

		return false;
	}

	let record = store.get_or_create(name, year);
	let field = source.subscore();

	if let Some(previous) = record.set_subscore(field, value)
		&& previous != value
	{
		tracing::debug!(
			source = source.name(),
			id = %record.id,
			field = field.as_str(),
			previous,
			value,
			"Overwrote subscore."
		);
	}

	true
}
