//! Review sheets for the hand-curated composite database.
//!
//! Every window lists the movies already curated for it plus fresh candidates a little
//! below the top of each source's ranking, so new titles can be triaged by hand.

use std::collections::HashSet;

use crate::partition::{OLDIES_FLOOR, SCAN_YEARS, YearWindow};
use cinerank_domain::{Criteria, MovieRecord, Subscore};
use cinerank_storage::{RecordStore, database};

const REVIEW_CRITERIA: [Criteria; 3] = [
	Criteria::Subscore(Subscore::Imdb),
	Criteria::Subscore(Subscore::CriticRotten),
	Criteria::Subscore(Subscore::CriticMeta),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CurationPolicy {
	pub stride: u32,
	/// First rank (0-based) proposed per criteria.
	pub offset: usize,
	pub count: usize,
}
impl Default for CurationPolicy {
	fn default() -> Self {
		Self { stride: 5, offset: 10, count: 5 }
	}
}

#[derive(Debug)]
pub struct CurationSection<'a> {
	pub window: YearWindow,
	/// Sorted by display name.
	pub movies: Vec<&'a MovieRecord>,
}

/// Fixed-width windows over the scanned century, oldest one reaching back to
/// [`OLDIES_FLOOR`].
pub fn curation_windows(current_year: i32, stride: u32) -> Vec<YearWindow> {
	let Ok(stride) = i32::try_from(stride) else { return Vec::new() };

	if stride == 0 {
		return Vec::new();
	}

	(0..SCAN_YEARS)
		.step_by(stride as usize)
		.map(|index| {
			let end = current_year - index;
			let start = if index + stride >= SCAN_YEARS { OLDIES_FLOOR } else { end - stride + 1 };

			YearWindow { start, end }
		})
		.collect()
}

pub fn curate<'a>(
	fresh: &'a RecordStore,
	existing: &'a RecordStore,
	current_year: i32,
	policy: CurationPolicy,
) -> Vec<CurationSection<'a>> {
	curation_windows(current_year, policy.stride)
		.into_iter()
		.map(|window| {
			let years = window.start..=window.end;
			let mut seen = HashSet::new();
			let mut movies = Vec::new();
			let proposals = REVIEW_CRITERIA.iter().flat_map(|criteria| {
				fresh
					.filter(years.clone(), *criteria, false)
					.into_iter()
					.skip(policy.offset)
					.take(policy.count)
					.filter(move |movie| !existing.contains(&movie.id))
			});

			let curated = existing.filter(years.clone(), Criteria::Composite, false);

			for movie in curated.into_iter().chain(proposals) {
				if seen.insert(movie.id.as_str()) {
					movies.push(movie);
				}
			}

			movies.sort_by(|lhs, rhs| lhs.name.cmp(&rhs.name));

			tracing::debug!(
				start = window.start,
				end = window.end,
				movies = movies.len(),
				"Prepared curation window."
			);

			CurationSection { window, movies }
		})
		.collect()
}

pub fn render_curation(sections: &[CurationSection<'_>]) -> String {
	let mut out = String::new();

	for section in sections {
		out.push_str(&format!("--- {} TO {} ---\n", section.window.start, section.window.end));

		for movie in &section.movies {
			out.push_str(&database::format_record(movie));
			out.push('\n');
		}

		out.push('\n');
	}

	out
}
