use unicode_normalization::{UnicodeNormalization, char::canonical_combining_class};

const SEPARATOR: char = '-';

/// Maps a free-text title to the key used to merge records across sources.
///
/// Accents, case, and punctuation are discarded, so "Amélie", "Amelie" and
/// "  amelie!!  " all share one key. Collisions between distinct titles that only
/// differ in those respects are expected.
pub fn normalize(text: &str) -> String {
	let stripped: String = text.nfd().filter(|ch| canonical_combining_class(*ch) == 0).collect();
	let folded = stripped.to_lowercase();
	let mut key = String::with_capacity(folded.len());

	for ch in folded.trim().chars() {
		if is_word_char(ch) {
			key.push(ch);
		} else if !key.ends_with(SEPARATOR) {
			key.push(SEPARATOR);
		}
	}

	key.trim_matches(SEPARATOR).to_string()
}

fn is_word_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_'
}
