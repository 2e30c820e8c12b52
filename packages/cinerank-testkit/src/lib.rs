use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use cinerank_domain::Subscore;
use cinerank_storage::RecordStore;

/// Builder for one movie inserted into a [`RecordStore`].
#[derive(Clone, Debug)]
pub struct MovieFixture {
	name: String,
	year: i32,
	scores: Vec<(Subscore, u32)>,
	documentary: bool,
}
impl MovieFixture {
	pub fn new(name: impl Into<String>, year: i32) -> Self {
		Self { name: name.into(), year, scores: Vec::new(), documentary: false }
	}

	/// Every subscore set to `score`, so the composite score equals `score`.
	pub fn rated(name: impl Into<String>, year: i32, score: u32) -> Self {
		Subscore::ALL
			.into_iter()
			.fold(Self::new(name, year), |fixture, field| fixture.with(field, score))
	}

	pub fn with(mut self, field: Subscore, value: u32) -> Self {
		self.scores.push((field, value));

		self
	}

	pub fn documentary(mut self) -> Self {
		self.documentary = true;

		self
	}

	/// Inserts the fixture and returns the record id.
	pub fn insert(self, store: &mut RecordStore) -> String {
		let record = store.get_or_create(&self.name, self.year);

		for (field, value) in self.scores {
			record.set_subscore(field, value);
		}

		record.is_documentary = self.documentary;

		record.id.clone()
	}
}

pub fn store_with<I>(fixtures: I) -> RecordStore
where
	I: IntoIterator<Item = MovieFixture>,
{
	let mut store = RecordStore::new();

	for fixture in fixtures {
		fixture.insert(&mut store);
	}

	store
}

/// A uniquely named file under the temp dir, removed on drop.
pub struct ScratchFile {
	path: PathBuf,
}
impl ScratchFile {
	pub fn new(label: &str) -> Self {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.expect("System time must be valid.")
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let pid = std::process::id();
		let mut path = env::temp_dir();

		path.push(format!("cinerank_{label}_{nanos}_{pid}_{ordinal}.txt"));

		Self { path }
	}

	pub fn with_contents(label: &str, contents: &str) -> Self {
		let file = Self::new(label);

		fs::write(&file.path, contents).expect("Failed to write scratch file.");

		file
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn read(&self) -> String {
		fs::read_to_string(&self.path).expect("Failed to read scratch file.")
	}
}
impl Drop for ScratchFile {
	fn drop(&mut self) {
		let _ = fs::remove_file(&self.path);
	}
}
