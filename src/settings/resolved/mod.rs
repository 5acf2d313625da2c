use std::path::PathBuf;

mod errors;
mod sources;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from config files, environment
/// variables, CLI arguments and defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) files_dir: PathBuf,
	/// Manifest file name, written next to `files_dir`.
	pub(crate) manifest: String,
	pub(crate) convert_pdf: bool,
	pub(crate) index_dir: PathBuf,
	pub(crate) writer_memory_mb: usize,
	pub(crate) model_path: PathBuf,
	pub(crate) log_filter: String,
	pub(crate) log_file: PathBuf,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub(crate) fn writer_memory_bytes(&self) -> usize {
		self.writer_memory_mb * 1024 * 1024
	}
}
