use std::path::Path;

use tracing_subscriber::EnvFilter;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Smallest per-thread indexing budget tantivy accepts.
pub(crate) const MIN_WRITER_MEMORY_MB: usize = 15;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.files_dir.as_os_str().is_empty() {
		return Err(ConfigError::invalid(
			"corpus.files_dir",
			"",
			sources.source_for("corpus.files_dir"),
			"must not be empty",
		));
	}

	let manifest = Path::new(&config.manifest);
	if manifest.file_name().is_none_or(|name| name != manifest.as_os_str()) {
		return Err(ConfigError::invalid(
			"corpus.manifest",
			config.manifest.clone(),
			sources.source_for("corpus.manifest"),
			"must be a plain file name",
		));
	}

	if config.writer_memory_mb < MIN_WRITER_MEMORY_MB {
		return Err(ConfigError::invalid(
			"index.writer_memory_mb",
			config.writer_memory_mb.to_string(),
			sources.source_for("index.writer_memory_mb"),
			format!("must be at least {MIN_WRITER_MEMORY_MB}"),
		));
	}

	if let Err(err) = EnvFilter::try_new(&config.log_filter) {
		return Err(ConfigError::invalid(
			"log.filter",
			config.log_filter.clone(),
			sources.source_for("log.filter"),
			err.to_string(),
		));
	}

	Ok(())
}
