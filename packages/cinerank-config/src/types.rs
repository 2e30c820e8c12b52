use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
	pub service: Service,
	pub data: Data,
	pub ranking: Ranking,
	pub curation: Curation,
	pub listing: Listing,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Service {
	pub log_level: String,
}
impl Default for Service {
	fn default() -> Self {
		Self { log_level: default_log_level() }
	}
}

/// Locations of the persisted composite database and the raw source dumps.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Data {
	pub database: PathBuf,
	pub imdb: PathBuf,
	pub rotten: PathBuf,
	pub meta: PathBuf,
}
impl Default for Data {
	fn default() -> Self {
		Self {
			database: PathBuf::from("database.txt"),
			imdb: PathBuf::from("imdb.txt"),
			rotten: PathBuf::from("rotten.txt"),
			meta: PathBuf::from("meta.txt"),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
	/// Years per window when grouping by years.
	pub group_size: u32,
	/// Oldest release year ever considered.
	pub until: i32,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { group_size: 5, until: 1900 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Curation {
	pub stride: u32,
	/// First per-criteria rank (0-based) proposed for review.
	pub offset: usize,
	pub count: usize,
}
impl Default for Curation {
	fn default() -> Self {
		Self { stride: 5, offset: 10, count: 5 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Listing {
	pub limit: usize,
}
impl Default for Listing {
	fn default() -> Self {
		Self { limit: 20 }
	}
}

pub(crate) fn default_log_level() -> String {
	"info".to_string()
}
