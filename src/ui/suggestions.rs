//! Autocomplete suggestions and their selection cursor.

use tracing::debug;

use crate::autocomplete::Predictor;

/// Outcome of asking the predictor for completions of the current query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
	/// The predictor answered; the list may still be empty.
	Predicted(Vec<String>),
	/// The query holds no word to complete.
	Blank,
	/// More than two words; the predictor only takes one or two words of context.
	TooManyWords,
	/// The predictor failed, so nothing is suggested.
	Failed(String),
	/// The user dismissed the list.
	Dismissed,
}

/// Ask `predictor` for at most `max` completions of `query`.
///
/// Two-word queries yield suggestions that carry the first word, so committing
/// one replaces the whole query.
pub fn complete(predictor: &dyn Predictor, query: &str, max: usize) -> Completion {
	let query = query.to_lowercase();
	let words: Vec<&str> = query.split_whitespace().collect();
	let predicted = match words.as_slice() {
		[] => return Completion::Blank,
		[word] => predictor
			.predict_one_word(word, max)
			.map(|hits| hits.into_iter().map(|(name, _)| name).collect()),
		[first, second] => predictor.predict_next_word(first, second, max).map(|hits| {
			hits.into_iter()
				.map(|(name, _)| format!("{first} {name}"))
				.collect()
		}),
		_ => return Completion::TooManyWords,
	};

	match predicted {
		Ok(list) => Completion::Predicted(list),
		Err(err) => {
			debug!(error = %err, "autocomplete unavailable for query");
			Completion::Failed(err.to_string())
		}
	}
}

/// Suggestions plus a cursor that is either unselected or a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionList {
	completion: Completion,
	cursor: Option<usize>,
}

impl Default for SuggestionList {
	fn default() -> Self {
		Self {
			completion: Completion::Blank,
			cursor: None,
		}
	}
}

impl SuggestionList {
	/// Replace the list; the cursor always returns to unselected.
	pub fn rebuild(&mut self, completion: Completion) {
		self.completion = completion;
		self.cursor = None;
	}

	pub fn dismiss(&mut self) {
		self.rebuild(Completion::Dismissed);
	}

	pub fn entries(&self) -> &[String] {
		match &self.completion {
			Completion::Predicted(list) => list,
			_ => &[],
		}
	}

	pub fn completion(&self) -> &Completion {
		&self.completion
	}

	pub fn len(&self) -> usize {
		self.entries().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries().is_empty()
	}

	pub fn cursor(&self) -> Option<usize> {
		self.cursor
	}

	pub fn selected(&self) -> Option<&str> {
		self.cursor
			.and_then(|idx| self.entries().get(idx))
			.map(String::as_str)
	}

	/// Unselected, 0, 1, ..., last, unselected again.
	pub fn select_next(&mut self) {
		let len = self.len();
		if len == 0 {
			return;
		}
		self.cursor = match self.cursor {
			None => Some(0),
			Some(idx) if idx + 1 >= len => None,
			Some(idx) => Some(idx + 1),
		};
	}

	/// Unselected, last, ..., 0, unselected again.
	pub fn select_previous(&mut self) {
		let len = self.len();
		if len == 0 {
			return;
		}
		self.cursor = match self.cursor {
			None => Some(len - 1),
			Some(0) => None,
			Some(idx) => Some(idx - 1),
		};
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::fakes::FakePredictor;

	fn list(entries: &[&str]) -> SuggestionList {
		let mut list = SuggestionList::default();
		list.rebuild(Completion::Predicted(
			entries.iter().map(|s| s.to_string()).collect(),
		));
		list
	}

	#[test]
	fn down_cycles_through_unselected_once_per_lap() {
		let mut suggestions = list(&["mining", "minimal", "mini"]);
		let n = suggestions.len();
		let mut unselected_seen = 0;
		for _ in 0..2 * (n + 1) {
			suggestions.select_next();
			if suggestions.cursor().is_none() {
				unselected_seen += 1;
			}
		}
		assert_eq!(unselected_seen, 2);
		assert_eq!(suggestions.cursor(), None);
	}

	#[test]
	fn down_walks_indices_in_order() {
		let mut suggestions = list(&["a", "b"]);
		suggestions.select_next();
		assert_eq!(suggestions.selected(), Some("a"));
		suggestions.select_next();
		assert_eq!(suggestions.selected(), Some("b"));
		suggestions.select_next();
		assert_eq!(suggestions.cursor(), None);
	}

	#[test]
	fn up_starts_from_the_last_entry() {
		let mut suggestions = list(&["a", "b", "c"]);
		suggestions.select_previous();
		assert_eq!(suggestions.cursor(), Some(2));
		suggestions.select_previous();
		suggestions.select_previous();
		assert_eq!(suggestions.cursor(), Some(0));
		suggestions.select_previous();
		assert_eq!(suggestions.cursor(), None);
	}

	#[test]
	fn navigation_on_empty_list_is_a_no_op() {
		let mut suggestions = SuggestionList::default();
		suggestions.select_next();
		suggestions.select_previous();
		assert_eq!(suggestions.cursor(), None);
	}

	#[test]
	fn rebuild_resets_cursor() {
		let mut suggestions = list(&["a", "b"]);
		suggestions.select_next();
		suggestions.rebuild(Completion::Predicted(vec!["c".into()]));
		assert_eq!(suggestions.cursor(), None);
	}

	#[test]
	fn one_word_requests_current_word_completion() {
		let predictor = FakePredictor::new(&["mining", "minimal", "data"]);
		assert_eq!(
			complete(&predictor, "MIN", 6),
			Completion::Predicted(vec!["mining".into(), "minimal".into()])
		);
	}

	#[test]
	fn two_words_prefix_suggestions_with_first_word() {
		let predictor = FakePredictor::new(&["mining", "minimal"]);
		assert_eq!(
			complete(&predictor, "data min", 6),
			Completion::Predicted(vec!["data mining".into(), "data minimal".into()])
		);
	}

	#[test]
	fn three_words_force_an_empty_list() {
		let predictor = FakePredictor::new(&["a", "b", "c"]);
		assert_eq!(complete(&predictor, "a b c", 6), Completion::TooManyWords);
	}

	#[test]
	fn predictor_failure_is_distinct_from_no_data() {
		let predictor = FakePredictor::new(&["abc"]);
		assert!(matches!(
			complete(&predictor, "abc10", 6),
			Completion::Failed(_)
		));
		assert_eq!(
			complete(&predictor, "zzz", 6),
			Completion::Predicted(Vec::new())
		);
		assert_eq!(complete(&predictor, "   ", 6), Completion::Blank);
	}
}
