use std::{collections::HashMap, ops::RangeInclusive};

use cinerank_domain::{Criteria, MovieRecord, normalize};

/// Counts reported by every loader that feeds a [`RecordStore`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoadReport {
	pub loaded: usize,
	pub skipped: usize,
}

/// Deduplicated movie records keyed by normalized identity.
///
/// Records keep their first-insertion order, which is the final tie-break of every
/// ranking after `(score, year)`.
#[derive(Debug, Default)]
pub struct RecordStore {
	records: Vec<MovieRecord>,
	index: HashMap<String, usize>,
}
impl RecordStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the record sharing `name`'s identity, creating it when absent.
	///
	/// An existing record is returned untouched: `name` and `year` only matter for the
	/// first source that mentions a movie.
	pub fn get_or_create(&mut self, name: &str, year: i32) -> &mut MovieRecord {
		let id = normalize(name);

		if let Some(&position) = self.index.get(&id) {
			return &mut self.records[position];
		}

		let position = self.records.len();

		self.index.insert(id, position);
		self.records.push(MovieRecord::new(name, year));

		&mut self.records[position]
	}

	pub fn get(&self, id: &str) -> Option<&MovieRecord> {
		self.index.get(id).map(|&position| &self.records[position])
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
		self.records.iter()
	}

	/// Records released within `years`, best first by `(criteria score, year)`.
	///
	/// A reversed range yields nothing.
	pub fn filter(
		&self,
		years: RangeInclusive<i32>,
		criteria: Criteria,
		exclude_documentaries: bool,
	) -> Vec<&MovieRecord> {
		let mut movies: Vec<&MovieRecord> = self
			.records
			.iter()
			.filter(|record| years.contains(&record.year))
			.filter(|record| !(exclude_documentaries && record.is_documentary))
			.collect();

		movies.sort_by(|lhs, rhs| criteria.compare_desc(lhs, rhs));

		movies
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn identity_equivalent_names_share_one_record() {
		let mut store = RecordStore::new();

		store.get_or_create("Amélie", 2001).imdb = Some(83);

		let again = store.get_or_create("AMELIE!", 1999);

		assert_eq!(again.name, "Amélie");
		assert_eq!(again.year, 2001);
		assert_eq!(again.imdb, Some(83));
		assert_eq!(store.len(), 1);
		assert!(store.contains("amelie"));
	}

	#[test]
	fn reversed_range_is_empty() {
		let mut store = RecordStore::new();

		store.get_or_create("Heat", 1995);

		assert!(store.filter(2000..=1990, Criteria::Composite, false).is_empty());
	}
}
