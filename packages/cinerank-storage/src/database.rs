//! The persisted composite database: one hand-curated line per movie.
//!
//! ```text
//! 088 079 094 091 084   (1995) Heat
//! 090 0.. 100 0.. 076 D (1922) Nanook of the North
//! ```
//!
//! Columns are critic meta, user meta, critic rotten, user rotten and imdb, then an
//! optional `D` documentary marker, the year and the display name. Rows with a `0..`
//! placeholder still await a rating and are not loaded.

use std::{fs, path::Path};

use regex::Regex;

use crate::{Error, LoadReport, RecordStore, Result};
use cinerank_domain::{MovieRecord, Subscore};

const LINE_PATTERN: &str = r"^((\d{3}\s+){5})(D?)\s+\((\d{4})\)\s+(.+)$";
const MISSING_COLUMN: &str = "0..";
const DOCUMENTARY_MARKER: &str = "D";

/// Parses database `text` into `store`.
pub fn read_into(store: &mut RecordStore, text: &str) -> Result<LoadReport> {
	let pattern = Regex::new(LINE_PATTERN)?;
	let mut report = LoadReport::default();

	for line in text.lines().map(str::trim) {
		let Some(caps) = pattern.captures(line) else {
			if !is_layout_line(line) {
				report.skipped += 1;
			}

			continue;
		};
		let Ok(year) = caps[4].parse::<i32>() else {
			report.skipped += 1;

			continue;
		};
		let values: Vec<u32> =
			caps[1].split_whitespace().filter_map(|value| value.parse().ok()).collect();

		if values.len() != Subscore::ALL.len() {
			report.skipped += 1;

			continue;
		}

		let record = store.get_or_create(&caps[5], year);

		record.is_documentary = &caps[3] == DOCUMENTARY_MARKER;

		for (field, value) in Subscore::ALL.into_iter().zip(values) {
			record.set_subscore(field, value);
		}

		report.loaded += 1;
	}

	Ok(report)
}

pub fn parse_database(text: &str) -> Result<RecordStore> {
	let (store, report) = parse(text)?;

	tracing::debug!(loaded = report.loaded, skipped = report.skipped, "Parsed composite database.");

	Ok(store)
}

pub fn load_database(path: &Path) -> Result<RecordStore> {
	let text = fs::read_to_string(path)
		.map_err(|err| Error::ReadDatabase { path: path.to_path_buf(), source: err })?;
	let (store, report) = parse(&text)?;

	tracing::info!(
		path = %path.display(),
		loaded = report.loaded,
		skipped = report.skipped,
		movies = store.len(),
		"Loaded composite database."
	);

	Ok(store)
}

pub fn write_database(path: &Path, contents: &str) -> Result<()> {
	fs::write(path, contents)
		.map_err(|err| Error::WriteDatabase { path: path.to_path_buf(), source: err })
}

/// Renders `record` as one database line. Absent and zero subscores become `0..`.
pub fn format_record(record: &MovieRecord) -> String {
	let mut line = String::new();

	for field in Subscore::ALL {
		match field.get(record) {
			Some(value) if value != 0 => line.push_str(&format!("{value:03} ")),
			_ => line.push_str(&format!("{MISSING_COLUMN} ")),
		}
	}

	let marker = if record.is_documentary { DOCUMENTARY_MARKER } else { " " };

	line.push_str(&format!("{marker} ({}) {}", record.year, record.name));

	line
}

fn parse(text: &str) -> Result<(RecordStore, LoadReport)> {
	let mut store = RecordStore::new();
	let report = read_into(&mut store, text)?;

	Ok((store, report))
}

/// Blank lines and `--- ... ---` window headers.
fn is_layout_line(line: &str) -> bool {
	line.is_empty() || line.starts_with("---")
}
