use regex::Regex;

use crate::{Result, Source, merge};
use cinerank_storage::{LoadReport, RecordStore};

const LINE_PATTERN: &str = r"^(\d+)% (.+) \((\d+)\)$";

/// One `NN% Name (YYYY)` entry per line; anything else is ignored.
pub fn scan(store: &mut RecordStore, text: &str) -> Result<LoadReport> {
	let pattern = Regex::new(LINE_PATTERN)?;
	let mut report = LoadReport::default();

	for line in text.lines().map(str::trim) {
		let Some(caps) = pattern.captures(line) else { continue };
		let (Ok(score), Ok(year)) = (caps[1].parse::<u32>(), caps[3].parse::<i32>()) else {
			tracing::warn!(line, "Skipping Rotten Tomatoes entry with out-of-range numbers.");

			report.skipped += 1;

			continue;
		};

		if merge(store, Source::Rotten, &caps[2], year, score) {
			report.loaded += 1;
		} else {
			report.skipped += 1;
		}
	}

	Ok(report)
}
