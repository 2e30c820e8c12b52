pub mod identity;
pub mod movie;

pub use identity::normalize;
pub use movie::{Criteria, MAX_SUBSCORE, MovieExport, MovieRecord, Subscore};
