use std::fmt::Write;

use crate::{Layout, Ranking, Result};
use cinerank_domain::{MovieExport, MovieRecord};

/// Text listing of a ranking: one numbered list when flat or sorted, otherwise one block
/// per window with numbering continued across windows.
pub fn render_text(ranking: &Ranking<'_>) -> String {
	let mut out = String::new();

	if ranking.sorted || ranking.layout == Layout::Flat {
		push_numbered(&mut out, &ranking.movies, 0);

		return out;
	}

	for ranked in &ranking.windows {
		let (start, end) = (ranked.window.start, ranked.window.end);

		match ranking.layout {
			Layout::Years => {
				let _ = writeln!(out, "--- {start} TO {end} ---");
			},
			Layout::Progressive => {
				let _ = writeln!(out, "--- FROM {start} AND ON ---");
			},
			Layout::Iterative | Layout::Flat => {},
		}

		push_numbered(&mut out, &ranked.movies, ranked.offset);

		if ranking.layout != Layout::Iterative {
			out.push('\n');
		}
	}

	out
}

/// `--- Movies from START to END ---` followed by at most `limit` numbered rows.
pub fn render_listing(movies: &[&MovieRecord], start: i32, end: i32, limit: usize) -> String {
	let mut out = format!("--- Movies from {start} to {end} ---\n");

	push_numbered(&mut out, &movies[..movies.len().min(limit)], 0);

	if movies.len() > limit {
		let _ = writeln!(out, "... plus other {} movies", movies.len() - limit);
	}

	out
}

pub fn render_json(movies: &[&MovieRecord]) -> Result<String> {
	let exports: Vec<MovieExport> = movies.iter().map(|movie| movie.export()).collect();

	Ok(serde_json::to_string_pretty(&exports)?)
}

fn push_numbered(out: &mut String, movies: &[&MovieRecord], offset: usize) {
	for (index, movie) in movies.iter().enumerate() {
		let _ = writeln!(out, "{:3}. {movie}", offset + index + 1);
	}
}
