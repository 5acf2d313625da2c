use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use isearch::corpus::{self, CorpusLayout};
use isearch::index::{SearchIndex, TantivyIndex};
use isearch::ui::{self, Collaborators};
use isearch::{FileLocator, NgramModel};
use tracing::info;

use crate::cli::StartupAction;
use crate::settings::ResolvedConfig;

/// Prepares the corpus, index and autocomplete model, then runs the session.
pub(crate) struct StartupWorkflow {
	config: ResolvedConfig,
	action: StartupAction,
	corpus: CorpusLayout,
}

impl StartupWorkflow {
	pub(crate) fn new(config: ResolvedConfig, action: StartupAction) -> Self {
		let corpus = CorpusLayout::new(&config.files_dir, &config.manifest, config.convert_pdf);
		Self {
			config,
			action,
			corpus,
		}
	}

	pub(crate) fn run(self) -> Result<()> {
		let reload = self.action == StartupAction::Reload;
		if reload {
			self.discard_persisted_state()?;
		}

		let documents = corpus::prepare(&self.corpus)?;

		let index = TantivyIndex::open_or_build(
			&self.config.index_dir,
			&documents,
			self.config.writer_memory_bytes(),
		)
		.with_context(|| format!("failed to open index in {}", self.config.index_dir.display()))?;
		println!("{}", index.stats().context("failed to read index statistics")?);
		println!();

		if reload {
			println!("Training autocomplete model...");
		}
		let model = NgramModel::load_or_train(&self.config.model_path, || corpus_text(&index))
			.with_context(|| {
				format!(
					"failed to prepare autocomplete model {}",
					self.config.model_path.display()
				)
			})?;
		if reload {
			println!("Done");
		}
		println!();

		ui::run(Collaborators {
			index: Box::new(index),
			predictor: Box::new(model),
			locator: Box::new(FileLocator),
		})
	}

	/// Remove the index, model and manifest so they are rebuilt from scratch.
	fn discard_persisted_state(&self) -> Result<()> {
		info!("discarding persisted index, model and manifest");
		TantivyIndex::reset(&self.config.index_dir)?;
		remove_file_if_present(&self.config.model_path)?;
		remove_file_if_present(&self.corpus.manifest)
	}
}

/// Concatenated text of every indexed document, the autocomplete training set.
fn corpus_text(index: &TantivyIndex) -> Result<String> {
	let mut text = String::new();
	for path in index.paths()? {
		let bytes = fs::read(&path).with_context(|| format!("failed to read {path}"))?;
		text.push_str(&String::from_utf8_lossy(&bytes));
		text.push('\n');
	}
	Ok(text)
}

fn remove_file_if_present(path: &Path) -> Result<()> {
	match fs::remove_file(path) {
		Ok(()) => Ok(()),
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
		Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	fn config(root: &Path) -> ResolvedConfig {
		ResolvedConfig {
			files_dir: root.join("dataset/files"),
			manifest: "files-full-corpus.txt".into(),
			convert_pdf: false,
			index_dir: root.join("idx"),
			writer_memory_mb: 20,
			model_path: root.join("autocomplete-model.json"),
			log_filter: "info".into(),
			log_file: PathBuf::from("isearch.log"),
		}
	}

	#[test]
	fn reload_discards_index_model_and_manifest() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(dir.path());
		fs::create_dir_all(config.index_dir.join("segments")).unwrap();
		fs::create_dir_all(&config.files_dir).unwrap();
		fs::write(&config.model_path, "{}").unwrap();
		let workflow = StartupWorkflow::new(config.clone(), StartupAction::Reload);
		fs::write(&workflow.corpus.manifest, "files/a.txt\n").unwrap();

		workflow.discard_persisted_state().unwrap();

		assert!(!config.index_dir.exists());
		assert!(!config.model_path.exists());
		assert!(!workflow.corpus.manifest.exists());
	}

	#[test]
	fn discarding_missing_state_is_not_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let workflow = StartupWorkflow::new(config(dir.path()), StartupAction::Reload);
		workflow.discard_persisted_state().unwrap();
	}

	#[test]
	fn training_text_covers_every_indexed_document() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(dir.path());
		fs::create_dir_all(&config.files_dir).unwrap();
		fs::write(config.files_dir.join("a.txt"), "data mining").unwrap();
		fs::write(config.files_dir.join("b.txt"), "text retrieval").unwrap();
		let workflow = StartupWorkflow::new(config.clone(), StartupAction::Keep);
		let documents = corpus::prepare(&workflow.corpus).unwrap();
		let index = TantivyIndex::open_or_build(
			&config.index_dir,
			&documents,
			config.writer_memory_bytes(),
		)
		.unwrap();

		let text = corpus_text(&index).unwrap();
		assert!(text.contains("data mining"));
		assert!(text.contains("text retrieval"));
	}
}
