pub mod database;
pub mod store;

mod error;

pub use error::{Error, Result};
pub use store::{LoadReport, RecordStore};
