pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read {source_name} source at {path:?}.")]
	ReadSource { source_name: &'static str, path: std::path::PathBuf, source: std::io::Error },
	#[error(transparent)]
	Pattern(#[from] regex::Error),
}
