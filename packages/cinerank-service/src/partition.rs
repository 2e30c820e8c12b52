//! Temporal ranking: splits the last century into year windows and picks winners per
//! window so recent releases are not drowned out by a hundred years of classics.

use std::{cmp::Ordering, collections::HashSet};

use crate::{Error, Result};
use cinerank_domain::{Criteria, MovieRecord};
use cinerank_storage::RecordStore;

/// How far back from the current year windows are planned.
pub const SCAN_YEARS: i32 = 100;
/// Start year forced onto the oldest window so old catalogs are never cut short.
pub const OLDIES_FLOOR: i32 = 1900;

/// Primary key of the optional flat re-sort applied after the walk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
	Year,
	Score,
}
impl SortKey {
	/// Descending by `(year, score)` or `(score, year)`.
	pub fn compare_desc(self, lhs: &MovieRecord, rhs: &MovieRecord) -> Ordering {
		match self {
			Self::Year => rhs
				.year
				.cmp(&lhs.year)
				.then_with(|| rhs.composite_score().total_cmp(&lhs.composite_score())),
			Self::Score => Criteria::Composite.compare_desc(lhs, rhs),
		}
	}
}

#[derive(Clone, Debug)]
pub struct RankingRequest {
	pub current_year: i32,
	/// Oldest release year considered.
	pub until: i32,
	/// Window width when grouping by years.
	pub group_size: u32,
	pub by_years: bool,
	/// One-year windows with a single winner each.
	pub iterative: bool,
	/// Carry unselected candidates into later windows.
	pub progressive: bool,
	pub exclude_documentaries: bool,
	pub sort: Option<SortKey>,
}
impl RankingRequest {
	pub fn new(current_year: i32) -> Self {
		Self {
			current_year,
			until: OLDIES_FLOOR,
			group_size: 5,
			by_years: false,
			iterative: false,
			progressive: false,
			exclude_documentaries: false,
			sort: None,
		}
	}

	pub fn layout(&self) -> Layout {
		if self.iterative {
			Layout::Iterative
		} else if !self.by_years {
			Layout::Flat
		} else if self.progressive {
			Layout::Progressive
		} else {
			Layout::Years
		}
	}

	pub fn stride(&self) -> u32 {
		if self.iterative { 1 } else { self.group_size }
	}

	pub fn selection_policy(&self) -> SelectionPolicy {
		let limit = (self.iterative || self.progressive).then_some(self.stride() as usize);

		SelectionPolicy { limit, carry: self.progressive }
	}

	/// Only year groups read `group_size`.
	fn validate(&self) -> Result<()> {
		if matches!(self.layout(), Layout::Years | Layout::Progressive) && self.group_size == 0 {
			return Err(Error::InvalidRequest {
				message: "group_size must be greater than zero.".to_string(),
			});
		}

		Ok(())
	}
}

/// How a ranking groups its output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
	/// A single filtered list, no windows.
	Flat,
	Years,
	Progressive,
	Iterative,
}

/// Inclusive range of release years ranked together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct YearWindow {
	pub start: i32,
	pub end: i32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionPolicy {
	/// Winners kept per window; `None` keeps every candidate.
	pub limit: Option<usize>,
	/// Whether losers stay in the pool for the next window.
	pub carry: bool,
}

#[derive(Debug, Default)]
pub struct WindowStep<'a> {
	pub selected: Vec<&'a MovieRecord>,
	pub carry: Vec<&'a MovieRecord>,
}

#[derive(Debug)]
pub struct RankedWindow<'a> {
	pub window: YearWindow,
	/// Number of movies emitted by earlier windows.
	pub offset: usize,
	pub movies: Vec<&'a MovieRecord>,
}

#[derive(Debug)]
pub struct Ranking<'a> {
	pub layout: Layout,
	/// Non-empty windows in emission order. Empty for [`Layout::Flat`].
	pub windows: Vec<RankedWindow<'a>>,
	/// The final selection, flat re-sorted when `sorted` is set.
	pub movies: Vec<&'a MovieRecord>,
	pub sorted: bool,
}

#[derive(Default)]
struct WalkState<'a> {
	carry: Vec<&'a MovieRecord>,
	windows: Vec<RankedWindow<'a>>,
	total: usize,
}

/// Plans the windows walked for `stride`, newest first.
///
/// The oldest window reachable within [`SCAN_YEARS`] always starts at
/// [`OLDIES_FLOOR`], starts never drop below `until`, a sliver narrower than one
/// stride above `until` is folded into the window before it, and the walk stops at the
/// first window spanning fewer than `stride` years.
pub fn plan_windows(current_year: i32, until: i32, stride: u32) -> Vec<YearWindow> {
	if stride == 0 {
		return Vec::new();
	}

	let stride = i64::from(stride);
	let (current_year, until) = (i64::from(current_year), i64::from(until));
	let scan_years = i64::from(SCAN_YEARS);
	let mut windows = Vec::new();
	let mut index = 0;

	while index < scan_years {
		let end = current_year - index;
		let mut start = end - stride + 1;

		if index + stride >= scan_years {
			start = i64::from(OLDIES_FLOOR);
		}

		start = start.max(until);

		if start - stride < until {
			start = until;
		}
		if end - start < stride - 1 {
			break;
		}

		// Both bounds lie between `until` and `current_year` here.
		windows.push(YearWindow { start: start as i32, end: end as i32 });

		index += stride;
	}

	windows
}

/// Ranks one window's `candidates`, together with the `carry` pool when the policy
/// carries, and returns the winners plus the pool left for the next window.
pub fn advance_window<'a>(
	carry: Vec<&'a MovieRecord>,
	candidates: Vec<&'a MovieRecord>,
	policy: SelectionPolicy,
) -> WindowStep<'a> {
	let pool = if policy.carry {
		let mut pool = carry;

		pool.extend(candidates);

		pool
	} else {
		candidates
	};
	let mut selected = pool.clone();

	selected.sort_by(|lhs, rhs| Criteria::Composite.compare_desc(lhs, rhs));

	if let Some(limit) = policy.limit {
		selected.truncate(limit);
	}
	if !policy.carry {
		return WindowStep { selected, carry: Vec::new() };
	}

	let chosen: HashSet<&str> = selected.iter().map(|movie| movie.id.as_str()).collect();
	let carry = pool.into_iter().filter(|movie| !chosen.contains(movie.id.as_str())).collect();

	WindowStep { selected, carry }
}

pub fn rank<'a>(store: &'a RecordStore, request: &RankingRequest) -> Result<Ranking<'a>> {
	request.validate()?;

	let layout = request.layout();
	let (windows, mut movies) = if layout == Layout::Flat {
		let years = request.until..=i32::MAX;

		(Vec::new(), store.filter(years, Criteria::Composite, request.exclude_documentaries))
	} else {
		let windows = walk(store, request);
		let movies: Vec<_> =
			windows.iter().flat_map(|window| window.movies.iter().copied()).collect();

		(windows, movies)
	};

	if let Some(key) = request.sort {
		movies.sort_by(|lhs, rhs| key.compare_desc(lhs, rhs));
	}

	tracing::debug!(?layout, windows = windows.len(), movies = movies.len(), "Ranked movies.");

	Ok(Ranking { layout, windows, movies, sorted: request.sort.is_some() })
}

fn walk<'a>(store: &'a RecordStore, request: &RankingRequest) -> Vec<RankedWindow<'a>> {
	let policy = request.selection_policy();
	let plan = plan_windows(request.current_year, request.until, request.stride());
	let state = plan.into_iter().fold(WalkState::default(), |mut state, window| {
		let candidates = store.filter(
			window.start..=window.end,
			Criteria::Composite,
			request.exclude_documentaries,
		);
		let step = advance_window(state.carry, candidates, policy);

		tracing::debug!(
			start = window.start,
			end = window.end,
			selected = step.selected.len(),
			carried = step.carry.len(),
			"Processed year window."
		);

		state.carry = step.carry;

		if !step.selected.is_empty() {
			let offset = state.total;

			state.total += step.selected.len();
			state.windows.push(RankedWindow { window, offset, movies: step.selected });
		}

		state
	});

	state.windows
}
