//! Word-completion and next-word prediction used for query suggestions.
//!
//! The [`Predictor`] trait is the seam the interactive session consumes. The
//! bundled implementation is [`NgramModel`], a unigram/bigram frequency model
//! trained over the indexed corpus and persisted as JSON.

mod model;

use std::path::PathBuf;

use thiserror::Error;

pub use model::NgramModel;

/// A predicted word and its corpus weight.
pub type Prediction = (String, u32);

#[derive(Debug, Error)]
pub enum AutocompleteError {
	/// The model only knows lowercase alphabetic words.
	#[error("token '{0}' contains characters the model cannot predict for")]
	UnsupportedToken(String),
	#[error("failed to read autocomplete model {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to write autocomplete model {path}: {source}")]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("autocomplete model {path} is corrupt: {source}")]
	Corrupt {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
}

/// Predicts completions from one or two words of context.
pub trait Predictor {
	/// Complete the word currently being typed.
	fn predict_one_word(&self, prefix: &str, max: usize)
	-> Result<Vec<Prediction>, AutocompleteError>;

	/// Predict the second word given the first one and the typed part of the second.
	fn predict_next_word(
		&self,
		first: &str,
		prefix: &str,
		max: usize,
	) -> Result<Vec<Prediction>, AutocompleteError>;
}
