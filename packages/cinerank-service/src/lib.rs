pub mod curation;
pub mod partition;
pub mod render;

mod error;

pub use curation::{CurationPolicy, CurationSection, curate};
pub use error::{Error, Result};
pub use partition::{
	Layout, OLDIES_FLOOR, RankedWindow, Ranking, RankingRequest, SCAN_YEARS, SelectionPolicy,
	SortKey, WindowStep, YearWindow, advance_window, plan_windows, rank,
};
