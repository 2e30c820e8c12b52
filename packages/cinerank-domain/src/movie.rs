use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

use crate::identity;

const NAME_DISPLAY_LIMIT: usize = 60;

/// Upper bound of every subscore scale.
pub const MAX_SUBSCORE: u32 = 100;

/// One of the five independently reported ratings of a movie.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Subscore {
	CriticMeta,
	UserMeta,
	CriticRotten,
	UserRotten,
	/// Tenths of the 0-10 IMDb rating.
	Imdb,
}
impl Subscore {
	/// Column order of the persisted composite database.
	pub const ALL: [Self; 5] =
		[Self::CriticMeta, Self::UserMeta, Self::CriticRotten, Self::UserRotten, Self::Imdb];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::CriticMeta => "meta",
			Self::UserMeta => "meta_user",
			Self::CriticRotten => "rotten",
			Self::UserRotten => "rotten_user",
			Self::Imdb => "imdb",
		}
	}

	pub fn get(self, record: &MovieRecord) -> Option<u32> {
		match self {
			Self::CriticMeta => record.critic_meta,
			Self::UserMeta => record.user_meta,
			Self::CriticRotten => record.critic_rotten,
			Self::UserRotten => record.user_rotten,
			Self::Imdb => record.imdb,
		}
	}

	fn slot(self, record: &mut MovieRecord) -> &mut Option<u32> {
		match self {
			Self::CriticMeta => &mut record.critic_meta,
			Self::UserMeta => &mut record.user_meta,
			Self::CriticRotten => &mut record.critic_rotten,
			Self::UserRotten => &mut record.user_rotten,
			Self::Imdb => &mut record.imdb,
		}
	}
}

/// Score a ranking orders by. Absent subscores count as zero under every criteria.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Criteria {
	#[default]
	Composite,
	Subscore(Subscore),
}
impl Criteria {
	pub fn score(self, record: &MovieRecord) -> f64 {
		match self {
			Self::Composite => record.composite_score(),
			Self::Subscore(field) => f64::from(field.get(record).unwrap_or(0)),
		}
	}

	/// Descending by `(score, year)`.
	pub fn compare_desc(self, lhs: &MovieRecord, rhs: &MovieRecord) -> Ordering {
		self.score(rhs).total_cmp(&self.score(lhs)).then_with(|| rhs.year.cmp(&lhs.year))
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct MovieRecord {
	pub id: String,
	pub name: String,
	pub year: i32,
	pub critic_meta: Option<u32>,
	pub user_meta: Option<u32>,
	pub critic_rotten: Option<u32>,
	pub user_rotten: Option<u32>,
	pub imdb: Option<u32>,
	pub is_documentary: bool,
}
impl MovieRecord {
	pub fn new(name: impl Into<String>, year: i32) -> Self {
		let name = name.into();

		Self {
			id: identity::normalize(&name),
			name,
			year,
			critic_meta: None,
			user_meta: None,
			critic_rotten: None,
			user_rotten: None,
			imdb: None,
			is_documentary: false,
		}
	}

	/// Mean of the five subscores, absent ones counted as zero, always divided by five.
	pub fn composite_score(&self) -> f64 {
		let total: u64 =
			Subscore::ALL.iter().filter_map(|field| field.get(self)).map(u64::from).sum();

		total as f64 / Subscore::ALL.len() as f64
	}

	pub fn subscore(&self, field: Subscore) -> Option<u32> {
		field.get(self)
	}

	/// Stores `value`, returning whatever it replaced. Last write wins.
	pub fn set_subscore(&mut self, field: Subscore, value: u32) -> Option<u32> {
		field.slot(self).replace(value)
	}

	pub fn export(&self) -> MovieExport {
		MovieExport {
			id: self.id.clone(),
			name: self.name.clone(),
			year: self.year,
			imdb: self.imdb,
			rotten: self.critic_rotten,
			meta: self.critic_meta,
			rotten_user: self.user_rotten,
			meta_user: self.user_meta,
			documentary: self.is_documentary,
			score: self.composite_score(),
		}
	}

	pub fn short_name(&self) -> String {
		if self.name.chars().count() <= NAME_DISPLAY_LIMIT {
			return self.name.clone();
		}

		let mut short: String = self.name.chars().take(NAME_DISPLAY_LIMIT - 1).collect();

		short.push('…');

		short
	}

	fn score_columns(&self) -> String {
		Subscore::ALL
			.iter()
			.map(|field| match field.get(self) {
				Some(value) => format!("{:02}", value % 100),
				None => "--".to_string(),
			})
			.collect::<Vec<_>>()
			.join("|")
	}
}
impl fmt::Display for MovieRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{:4}  {} ({:4.1})  {}",
			self.year,
			self.score_columns(),
			self.composite_score(),
			self.short_name()
		)
	}
}

/// Flat attribute mapping consumed by the JSON export and the web view.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MovieExport {
	pub id: String,
	pub name: String,
	pub year: i32,
	pub imdb: Option<u32>,
	pub rotten: Option<u32>,
	pub meta: Option<u32>,
	pub rotten_user: Option<u32>,
	pub meta_user: Option<u32>,
	pub documentary: bool,
	pub score: f64,
}
