//! IMDb dumps come in five-line blocks:
//!
//! ```text
//! <rank>
//! <poster>
//! The Godfather
//! 1972 2h 55m R
//! 9.2 (2.1M)
//! ```

use crate::{Source, merge};
use cinerank_storage::{LoadReport, RecordStore};

const BLOCK_LINES: usize = 5;

pub fn scan(store: &mut RecordStore, text: &str) -> LoadReport {
	let lines: Vec<&str> = text.lines().collect();
	let mut report = LoadReport::default();

	for (block_index, block) in lines.chunks_exact(BLOCK_LINES).enumerate() {
		let name = block[2].trim();
		let year = block[3].chars().take(4).collect::<String>().parse::<i32>().ok();
		let rating = block[4].split_whitespace().next().and_then(parse_tenths);
		let (Some(year), Some(rating)) = (year, rating) else {
			tracing::warn!(
				line = block_index * BLOCK_LINES + 1,
				"Skipping malformed IMDb block."
			);

			report.skipped += 1;

			continue;
		};

		if merge(store, Source::Imdb, name, year, rating) {
			report.loaded += 1;
		} else {
			report.skipped += 1;
		}
	}

	report
}

/// Reads a `x.y` rating as tenths, ignoring further decimals.
fn parse_tenths(raw: &str) -> Option<u32> {
	let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
	let whole: u32 = whole.parse().ok()?;
	let tenths = match fraction.chars().next() {
		Some(digit) => digit.to_digit(10)?,
		None => 0,
	};

	if !fraction.chars().all(|ch| ch.is_ascii_digit()) {
		return None;
	}

	whole.checked_mul(10)?.checked_add(tenths)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ratings_are_read_as_exact_tenths() {
		assert_eq!(parse_tenths("7.3"), Some(73));
		assert_eq!(parse_tenths("9"), Some(90));
		assert_eq!(parse_tenths("8.25"), Some(82));
		assert_eq!(parse_tenths("n/a"), None);
		assert_eq!(parse_tenths("8.x"), None);
	}
}
