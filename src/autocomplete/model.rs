use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{AutocompleteError, Prediction, Predictor};

/// Unigram and bigram frequencies over the lowercase alphabetic words of a corpus.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct NgramModel {
	words: HashMap<String, u32>,
	followers: HashMap<String, HashMap<String, u32>>,
}

impl NgramModel {
	/// Count words and adjacent word pairs in `text`.
	pub fn train(text: &str) -> Self {
		let mut model = Self::default();
		let lowered = text.to_lowercase();
		let mut previous: Option<&str> = None;
		for word in lowered
			.split(|c: char| !c.is_ascii_lowercase())
			.filter(|w| !w.is_empty())
		{
			*model.words.entry(word.to_string()).or_default() += 1;
			if let Some(prev) = previous {
				*model
					.followers
					.entry(prev.to_string())
					.or_default()
					.entry(word.to_string())
					.or_default() += 1;
			}
			previous = Some(word);
		}
		model
	}

	pub fn load(path: &Path) -> Result<Self, AutocompleteError> {
		let raw = fs::read(path).map_err(|source| AutocompleteError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		serde_json::from_slice(&raw).map_err(|source| AutocompleteError::Corrupt {
			path: path.to_path_buf(),
			source,
		})
	}

	pub fn save(&self, path: &Path) -> Result<(), AutocompleteError> {
		let write_err = |source| AutocompleteError::Write {
			path: path.to_path_buf(),
			source,
		};
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(write_err)?;
		}
		let encoded = serde_json::to_vec(self).map_err(|source| AutocompleteError::Corrupt {
			path: path.to_path_buf(),
			source,
		})?;
		fs::write(path, encoded).map_err(write_err)
	}

	/// Load the model at `path`, or train one from `corpus` and persist it there.
	pub fn load_or_train<F, E>(path: &Path, corpus: F) -> Result<Self, E>
	where
		F: FnOnce() -> Result<String, E>,
		E: From<AutocompleteError>,
	{
		if path.exists() {
			let model = Self::load(path)?;
			info!(path = %path.display(), words = model.vocabulary_len(), "loaded autocomplete model");
			return Ok(model);
		}

		let model = Self::train(&corpus()?);
		model.save(path)?;
		info!(path = %path.display(), words = model.vocabulary_len(), "trained autocomplete model");
		Ok(model)
	}

	pub fn vocabulary_len(&self) -> usize {
		self.words.len()
	}
}

fn check_token(token: &str) -> Result<(), AutocompleteError> {
	if token.chars().all(|c| c.is_ascii_lowercase()) {
		Ok(())
	} else {
		Err(AutocompleteError::UnsupportedToken(token.to_string()))
	}
}

fn ranked<'a>(
	candidates: impl Iterator<Item = (&'a String, &'a u32)>,
	prefix: &str,
	max: usize,
) -> Vec<Prediction> {
	let mut hits: Vec<Prediction> = candidates
		.filter(|(word, _)| word.starts_with(prefix))
		.map(|(word, &count)| (word.clone(), count))
		.collect();
	hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
	hits.truncate(max);
	hits
}

impl Predictor for NgramModel {
	fn predict_one_word(
		&self,
		prefix: &str,
		max: usize,
	) -> Result<Vec<Prediction>, AutocompleteError> {
		check_token(prefix)?;
		Ok(ranked(self.words.iter(), prefix, max))
	}

	fn predict_next_word(
		&self,
		first: &str,
		prefix: &str,
		max: usize,
	) -> Result<Vec<Prediction>, AutocompleteError> {
		check_token(first)?;
		check_token(prefix)?;
		Ok(self
			.followers
			.get(first)
			.map(|next| ranked(next.iter(), prefix, max))
			.unwrap_or_default())
	}
}
