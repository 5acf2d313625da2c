//! In-memory collaborators for session tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::autocomplete::{AutocompleteError, Prediction, Predictor};
use crate::index::{DocId, DocMetadata, IndexError, IndexStats, SearchHit, SearchIndex};
use crate::locator::{ContentLocator, LineMatch, LocateError};

/// Completes from a fixed word list, in list order.
pub struct FakePredictor {
	words: Vec<String>,
}

impl FakePredictor {
	pub fn new(words: &[&str]) -> Self {
		Self {
			words: words.iter().map(|w| w.to_string()).collect(),
		}
	}

	fn matching(&self, prefix: &str, max: usize) -> Result<Vec<Prediction>, AutocompleteError> {
		if !prefix.chars().all(|ch| ch.is_ascii_lowercase()) {
			return Err(AutocompleteError::UnsupportedToken(prefix.to_string()));
		}
		Ok(self
			.words
			.iter()
			.filter(|word| word.starts_with(prefix))
			.take(max)
			.map(|word| (word.clone(), 1))
			.collect())
	}
}

impl Predictor for FakePredictor {
	fn predict_one_word(&self, prefix: &str, max: usize) -> Result<Vec<Prediction>, AutocompleteError> {
		self.matching(prefix, max)
	}

	fn predict_next_word(
		&self,
		first: &str,
		prefix: &str,
		max: usize,
	) -> Result<Vec<Prediction>, AutocompleteError> {
		if !first.chars().all(|ch| ch.is_ascii_lowercase()) {
			return Err(AutocompleteError::UnsupportedToken(first.to_string()));
		}
		self.matching(prefix, max)
	}
}

/// Answers canned queries and records every query and hit limit it receives.
#[derive(Default)]
pub struct FakeIndex {
	hits: HashMap<String, Vec<(String, f32)>>,
	paths: RefCell<Vec<String>>,
	searches: Rc<RefCell<Vec<(String, usize)>>>,
}

impl FakeIndex {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_hits(mut self, query: &str, hits: &[(&str, f32)]) -> Self {
		self.hits.insert(
			query.to_string(),
			hits.iter().map(|(path, score)| (path.to_string(), *score)).collect(),
		);
		self
	}

	/// Shared log of the `(query, max)` pairs searched so far.
	pub fn searches(&self) -> Rc<RefCell<Vec<(String, usize)>>> {
		Rc::clone(&self.searches)
	}
}

impl SearchIndex for FakeIndex {
	fn search(&self, query: &str, max: usize) -> Result<Vec<SearchHit>, IndexError> {
		self.searches.borrow_mut().push((query.to_string(), max));
		let Some(hits) = self.hits.get(query) else {
			return Ok(Vec::new());
		};
		let mut paths = self.paths.borrow_mut();
		Ok(hits
			.iter()
			.take(max)
			.map(|(path, score)| {
				let doc = paths.len() as u32;
				paths.push(path.clone());
				SearchHit {
					doc: DocId { segment: 0, doc },
					score: *score,
				}
			})
			.collect())
	}

	fn metadata(&self, doc: DocId) -> Result<DocMetadata, IndexError> {
		self.paths
			.borrow()
			.get(doc.doc as usize)
			.map(|path| DocMetadata { path: path.clone() })
			.ok_or(IndexError::MissingPath(doc))
	}

	fn stats(&self) -> Result<IndexStats, IndexError> {
		let documents = self.hits.values().map(Vec::len).sum::<usize>() as u64;
		Ok(IndexStats {
			documents,
			total_terms: 0,
			unique_terms: 0,
			average_length: 0.0,
		})
	}
}

/// Greps in-memory file contents; unknown paths fail like a missing file.
#[derive(Default)]
pub struct FakeLocator {
	files: HashMap<PathBuf, String>,
}

impl FakeLocator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_file(mut self, path: &str, content: &str) -> Self {
		self.files.insert(PathBuf::from(path), content.to_string());
		self
	}
}

impl ContentLocator for FakeLocator {
	fn grep(&self, path: &Path, term: &str) -> Result<Vec<LineMatch>, LocateError> {
		let content = self.files.get(path).ok_or_else(|| LocateError::Io {
			path: path.to_path_buf(),
			source: io::Error::from(io::ErrorKind::NotFound),
		})?;
		Ok(content
			.lines()
			.enumerate()
			.filter(|(_, line)| line.to_lowercase().contains(term))
			.map(|(idx, line)| LineMatch::new(idx + 1, line))
			.collect())
	}
}
