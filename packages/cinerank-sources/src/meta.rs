//! Metacritic dumps list numbered entries, each spanning four lines:
//!
//! ```text
//! 1. Citizen Kane
//! Released on 1941 ...
//! <summary>
//! 100
//! ```
//!
//! A `(SKIP)` note after the name marks an entry that is counted but not imported.

use regex::Regex;

use crate::{Result, Source, merge};
use cinerank_storage::{LoadReport, RecordStore};

const HEADER_PATTERN: &str = r"^(\d+). ([^(]+)\s*(\([^)]+\))?$";
const SKIP_NOTE: &str = "(SKIP)";
const ENTRY_LINES: usize = 4;

pub fn scan(store: &mut RecordStore, text: &str) -> Result<LoadReport> {
	let pattern = Regex::new(HEADER_PATTERN)?;
	let lines: Vec<&str> = text.lines().collect();
	let mut report = LoadReport::default();
	let mut sequence = 0_u64;
	let mut index = 0;

	while index < lines.len() {
		let Some(caps) = pattern.captures(lines[index].trim()) else {
			index += 1;

			continue;
		};

		if caps[1].parse::<u64>().ok() != Some(sequence + 1) {
			index += 1;

			continue;
		}

		sequence += 1;

		if caps.get(3).map(|note| note.as_str()) == Some(SKIP_NOTE) {
			report.skipped += 1;
			index += 1;

			continue;
		}

		let name = caps[2].trim();
		let year = lines
			.get(index + 1)
			.and_then(|line| line.split_whitespace().nth(2))
			.and_then(|token| token.parse::<i32>().ok());
		let score = lines.get(index + 3).and_then(|line| line.trim().parse::<u32>().ok());
		let (Some(year), Some(score)) = (year, score) else {
			tracing::warn!(entry = sequence, name, "Skipping malformed Metacritic entry.");

			report.skipped += 1;
			index += 1;

			continue;
		};

		if merge(store, Source::Meta, name, year, score) {
			report.loaded += 1;
		} else {
			report.skipped += 1;
		}

		index += ENTRY_LINES;
	}

	Ok(report)
}
