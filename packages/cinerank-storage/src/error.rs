pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read database file at {path:?}.")]
	ReadDatabase { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to write database file at {path:?}.")]
	WriteDatabase { path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	Pattern(#[from] regex::Error),
}
