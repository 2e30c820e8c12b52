mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Curation, Data, Listing, Ranking, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

/// Loads `path` when given, otherwise falls back to the built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
	let Some(path) = path else {
		let cfg = Config::default();

		validate(&cfg)?;

		return Ok(cfg);
	};

	load(path)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	for (label, path) in [
		("data.database", &cfg.data.database),
		("data.imdb", &cfg.data.imdb),
		("data.rotten", &cfg.data.rotten),
		("data.meta", &cfg.data.meta),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.ranking.group_size == 0 {
		return Err(Error::Validation {
			message: "ranking.group_size must be greater than zero.".to_string(),
		});
	}
	if cfg.curation.stride == 0 {
		return Err(Error::Validation {
			message: "curation.stride must be greater than zero.".to_string(),
		});
	}
	if cfg.curation.count == 0 {
		return Err(Error::Validation {
			message: "curation.count must be greater than zero.".to_string(),
		});
	}
	if cfg.listing.limit == 0 {
		return Err(Error::Validation {
			message: "listing.limit must be greater than zero.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.service.log_level.trim().is_empty() {
		cfg.service.log_level = types::default_log_level();
	}
}
