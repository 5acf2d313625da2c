/// Ranked file paths from the latest search and the previewed entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultList {
	paths: Vec<String>,
	cursor: usize,
}

impl ResultList {
	/// Replace the list wholesale and select the best match.
	pub fn replace(&mut self, paths: Vec<String>) {
		self.paths = paths;
		self.cursor = 0;
	}

	pub fn paths(&self) -> &[String] {
		&self.paths
	}

	pub fn is_empty(&self) -> bool {
		self.paths.is_empty()
	}

	/// Cursor position; `None` while the list is empty.
	pub fn cursor(&self) -> Option<usize> {
		(!self.paths.is_empty()).then_some(self.cursor)
	}

	pub fn selected(&self) -> Option<&str> {
		self.paths.get(self.cursor).map(String::as_str)
	}

	pub fn select_next(&mut self) {
		if !self.paths.is_empty() {
			self.cursor = (self.cursor + 1) % self.paths.len();
		}
	}

	pub fn select_previous(&mut self) {
		if !self.paths.is_empty() {
			let len = self.paths.len();
			self.cursor = (self.cursor + len - 1) % len;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn list(n: usize) -> ResultList {
		let mut results = ResultList::default();
		results.replace((0..n).map(|i| format!("file{i}.txt")).collect());
		results
	}

	#[test]
	fn next_wraps_from_last_to_first() {
		let mut results = list(3);
		results.select_next();
		results.select_next();
		assert_eq!(results.cursor(), Some(2));
		results.select_next();
		assert_eq!(results.cursor(), Some(0));
	}

	#[test]
	fn previous_wraps_from_first_to_last() {
		let mut results = list(3);
		results.select_previous();
		assert_eq!(results.cursor(), Some(2));
		assert_eq!(results.selected(), Some("file2.txt"));
	}

	#[test]
	fn single_entry_navigation_stays_put() {
		let mut results = list(1);
		results.select_next();
		assert_eq!(results.cursor(), Some(0));
		results.select_previous();
		assert_eq!(results.cursor(), Some(0));
	}

	#[test]
	fn empty_list_has_no_cursor() {
		let mut results = list(0);
		results.select_next();
		results.select_previous();
		assert_eq!(results.cursor(), None);
		assert_eq!(results.selected(), None);
	}

	#[test]
	fn replace_resets_cursor() {
		let mut results = list(4);
		results.select_previous();
		results.replace(vec!["a.txt".into(), "b.txt".into()]);
		assert_eq!(results.cursor(), Some(0));
	}
}
