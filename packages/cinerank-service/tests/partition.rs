use std::collections::HashSet;

use cinerank_domain::{MovieRecord, Subscore};
use cinerank_service::{
	Error, Layout, RankingRequest, SelectionPolicy, SortKey, YearWindow, advance_window, rank,
};
use cinerank_storage::RecordStore;
use cinerank_testkit::{MovieFixture, store_with};

fn names<'a>(movies: &[&'a MovieRecord]) -> Vec<&'a str> {
	movies.iter().map(|movie| movie.name.as_str()).collect()
}

fn catalog() -> RecordStore {
	store_with([
		MovieFixture::rated("Alpha", 2022, 90),
		MovieFixture::rated("Bravo", 2021, 85),
		MovieFixture::rated("Charlie", 2023, 80),
		MovieFixture::rated("Delta", 2020, 70),
		MovieFixture::rated("Echo", 2024, 60),
		MovieFixture::rated("Foxtrot", 2024, 50),
		MovieFixture::rated("Golf", 2017, 45),
		MovieFixture::rated("Hotel", 2012, 40),
		MovieFixture::rated("India", 1999, 99),
	])
}

fn request(until: i32) -> RankingRequest {
	let mut request = RankingRequest::new(2024);

	request.until = until;

	request
}

#[test]
fn flat_mode_filters_from_the_cutoff_without_windows() {
	let store = catalog();
	let ranking = rank(&store, &request(2010)).expect("Failed to rank.");

	assert_eq!(ranking.layout, Layout::Flat);
	assert!(ranking.windows.is_empty());
	assert_eq!(
		names(&ranking.movies),
		["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel"]
	);
}

#[test]
fn flat_mode_honours_documentary_exclusion() {
	let mut store = catalog();

	MovieFixture::rated("Nature Doc", 2019, 95).documentary().insert(&mut store);

	let mut req = request(2010);

	assert_eq!(rank(&store, &req).expect("Failed to rank.").movies[0].name, "Nature Doc");

	req.exclude_documentaries = true;

	assert_eq!(rank(&store, &req).expect("Failed to rank.").movies[0].name, "Alpha");
}

#[test]
fn flat_mode_applies_the_sort() {
	let store = catalog();
	let mut req = request(2017);

	req.sort = Some(SortKey::Year);

	let ranking = rank(&store, &req).expect("Failed to rank.");

	assert!(ranking.sorted);
	assert_eq!(
		names(&ranking.movies),
		["Echo", "Foxtrot", "Charlie", "Alpha", "Bravo", "Delta", "Golf"]
	);
}

#[test]
fn year_groups_keep_every_candidate_per_window() {
	let store = catalog();
	let mut req = request(2010);

	req.by_years = true;

	let ranking = rank(&store, &req).expect("Failed to rank.");
	let windows: Vec<(YearWindow, usize, Vec<&str>)> = ranking
		.windows
		.iter()
		.map(|ranked| (ranked.window, ranked.offset, names(&ranked.movies)))
		.collect();

	assert_eq!(ranking.layout, Layout::Years);
	assert_eq!(
		windows,
		[
			(
				YearWindow { start: 2020, end: 2024 },
				0,
				vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot"]
			),
			(YearWindow { start: 2015, end: 2019 }, 6, vec!["Golf"]),
			(YearWindow { start: 2010, end: 2014 }, 7, vec!["Hotel"]),
		]
	);
	assert_eq!(ranking.movies.len(), 8);
}

#[test]
fn progressive_carry_lets_near_misses_win_later() {
	let store = catalog();
	let mut req = request(2010);

	req.by_years = true;
	req.progressive = true;

	let ranking = rank(&store, &req).expect("Failed to rank.");
	let per_window: Vec<Vec<&str>> =
		ranking.windows.iter().map(|ranked| names(&ranked.movies)).collect();

	assert_eq!(
		per_window,
		[
			vec!["Alpha", "Bravo", "Charlie", "Delta", "Echo"],
			vec!["Foxtrot", "Golf"],
			vec!["Hotel"],
		]
	);
}

#[test]
fn progressive_selection_never_repeats_a_movie() {
	let store = catalog();
	let mut req = request(1900);

	req.by_years = true;
	req.progressive = true;
	req.group_size = 2;

	let ranking = rank(&store, &req).expect("Failed to rank.");
	let unique: HashSet<&str> = ranking.movies.iter().map(|movie| movie.id.as_str()).collect();

	assert_eq!(unique.len(), ranking.movies.len());
	assert_eq!(ranking.movies.len(), store.len());
	assert!(ranking.windows.iter().all(|ranked| ranked.movies.len() <= 2));
}

#[test]
fn iterative_picks_at_most_one_movie_per_year() {
	let store = catalog();
	let mut req = request(2020);

	req.iterative = true;

	let ranking = rank(&store, &req).expect("Failed to rank.");

	assert!(ranking.windows.iter().all(|ranked| ranked.movies.len() == 1));
	assert_eq!(names(&ranking.movies), ["Echo", "Charlie", "Alpha", "Bravo", "Delta"]);
}

#[test]
fn iterative_progressive_carries_the_runner_up_forward() {
	let store = catalog();
	let mut req = request(2010);

	req.iterative = true;
	req.progressive = true;

	let ranking = rank(&store, &req).expect("Failed to rank.");
	let foxtrot = ranking
		.windows
		.iter()
		.find(|ranked| ranked.movies.iter().any(|movie| movie.name == "Foxtrot"))
		.expect("Foxtrot must be selected eventually.");

	assert_eq!(foxtrot.window, YearWindow { start: 2019, end: 2019 });
	assert_eq!(
		names(&ranking.movies),
		["Echo", "Charlie", "Alpha", "Bravo", "Delta", "Foxtrot", "Golf", "Hotel"]
	);
}

#[test]
fn sort_discards_window_order() {
	let store = catalog();
	let mut req = request(2010);

	req.by_years = true;
	req.progressive = true;
	req.sort = Some(SortKey::Year);

	let by_year = rank(&store, &req).expect("Failed to rank.");

	assert!(by_year.sorted);
	assert_eq!(
		names(&by_year.movies),
		["Echo", "Foxtrot", "Charlie", "Alpha", "Bravo", "Delta", "Golf", "Hotel"]
	);

	req.sort = Some(SortKey::Score);

	let by_score = rank(&store, &req).expect("Failed to rank.");

	assert_eq!(
		names(&by_score.movies),
		["Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel"]
	);
}

#[test]
fn zero_group_size_is_rejected() {
	let store = catalog();
	let mut req = request(1900);

	req.by_years = true;
	req.group_size = 0;

	let err = rank(&store, &req).expect_err("Expected invalid request.");

	assert!(matches!(err, Error::InvalidRequest { .. }), "Unexpected error: {err}");
}

#[test]
fn zero_group_size_is_ignored_outside_year_groups() {
	let store = catalog();
	let mut req = request(2020);

	req.group_size = 0;

	assert_eq!(rank(&store, &req).expect("Flat ranking must succeed.").movies.len(), 6);

	req.iterative = true;

	let ranking = rank(&store, &req).expect("Iterative ranking must succeed.");

	assert_eq!(names(&ranking.movies), ["Echo", "Charlie", "Alpha", "Bravo", "Delta"]);
}

#[test]
fn advance_window_without_carry_drops_losers() {
	let store = catalog();
	let candidates = store.filter(2020..=2024, Default::default(), false);
	let policy = SelectionPolicy { limit: Some(2), carry: false };
	let step = advance_window(Vec::new(), candidates, policy);

	assert_eq!(names(&step.selected), ["Alpha", "Bravo"]);
	assert!(step.carry.is_empty());
}

#[test]
fn advance_window_ranks_the_whole_carried_pool() {
	let store = catalog();
	let policy = SelectionPolicy { limit: Some(2), carry: true };
	let window = |start, end| store.filter(start..=end, Default::default(), false);
	let first = advance_window(Vec::new(), window(2015, 2019), policy);

	assert_eq!(names(&first.selected), ["Golf"]);
	assert!(first.carry.is_empty());

	let second = advance_window(first.carry, window(2010, 2014), policy);

	assert_eq!(names(&second.selected), ["Hotel"]);

	let third = advance_window(second.carry, window(2020, 2024), policy);

	assert_eq!(names(&third.selected), ["Alpha", "Bravo"]);
	assert_eq!(names(&third.carry), ["Charlie", "Delta", "Echo", "Foxtrot"]);

	let fourth = advance_window(third.carry, window(1999, 1999), policy);

	assert_eq!(names(&fourth.selected), ["India", "Charlie"]);
	assert_eq!(names(&fourth.carry), ["Delta", "Echo", "Foxtrot"]);
}

#[test]
fn equal_scores_rank_newer_first() {
	let store = store_with([
		MovieFixture::new("Earlier", 2020).with(Subscore::Imdb, 80),
		MovieFixture::new("Later", 2022).with(Subscore::Imdb, 80),
	]);
	let req = request(2020);

	assert_eq!(names(&rank(&store, &req).expect("Failed to rank.").movies), ["Later", "Earlier"]);
}
