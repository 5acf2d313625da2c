//! Ranked full-text search over the prepared corpus.
//!
//! [`SearchIndex`] is the request/response contract the session relies on;
//! [`TantivyIndex`] persists an inverted index on disk and ranks with BM25.

mod tantivy;

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub use self::tantivy::TantivyIndex;

/// Stable identifier of an indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocId {
	pub segment: u32,
	pub doc: u32,
}

/// One ranked hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
	pub doc: DocId,
	pub score: f32,
}

/// Stored attributes of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocMetadata {
	/// Path of the source file, as listed in the corpus manifest.
	pub path: String,
}

/// Aggregate statistics printed before the session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexStats {
	pub documents: u64,
	pub total_terms: u64,
	pub unique_terms: u64,
	pub average_length: f64,
}

impl fmt::Display for IndexStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Number of documents indexed     = {}", self.documents)?;
		writeln!(f, "Total number of terms in index  = {}", self.total_terms)?;
		writeln!(f, "Number of unique terms in index = {}", self.unique_terms)?;
		write!(f, "Average document length         = {}", self.average_length)
	}
}

#[derive(Debug, Error)]
pub enum IndexError {
	#[error(transparent)]
	Tantivy(#[from] ::tantivy::TantivyError),
	#[error("index I/O failed: {0}")]
	Io(#[from] std::io::Error),
	#[error("failed to read document {path}: {source}")]
	Document {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("index schema is missing field '{0}'")]
	MissingField(&'static str),
	#[error("document {0:?} has no stored path")]
	MissingPath(DocId),
}

/// Ranked document search.
pub trait SearchIndex {
	/// Return at most `max` hits for `query`, best first.
	fn search(&self, query: &str, max: usize) -> Result<Vec<SearchHit>, IndexError>;

	fn metadata(&self, doc: DocId) -> Result<DocMetadata, IndexError>;

	fn stats(&self) -> Result<IndexStats, IndexError>;
}
