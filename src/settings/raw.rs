use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use isearch::app_dirs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::sources::env_var_for;
use crate::cli::CliArgs;

const DEFAULT_FILES_DIR: &str = "dataset/files";
const DEFAULT_MANIFEST: &str = "files-full-corpus.txt";
const DEFAULT_INDEX_DIR: &str = "idx";
const DEFAULT_WRITER_MEMORY_MB: usize = 50;
const DEFAULT_MODEL: &str = "autocomplete-model.json";
const DEFAULT_LOG_FILTER: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	corpus: CorpusSection,
	index: IndexSection,
	autocomplete: AutocompleteSection,
	log: LogSection,
	#[serde(skip)]
	sources: ConfigSources,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct CorpusSection {
	files_dir: Option<PathBuf>,
	manifest: Option<String>,
	convert_pdf: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct IndexSection {
	dir: Option<PathBuf>,
	writer_memory_mb: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AutocompleteSection {
	model: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LogSection {
	filter: Option<String>,
	file: Option<PathBuf>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(dir) = cli.files_dir.clone() {
			self.corpus.files_dir = Some(dir);
			self.sources.files_dir = Some(SettingSource::CliArgument("FILES_DIR"));
		}
	}

	/// Fill defaults and validate the result.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let log_file = match self.log.file {
			Some(file) => file,
			None => app_dirs::default_log_file()
				.context("no location for the default log file")?,
		};

		let config = ResolvedConfig {
			files_dir: self
				.corpus
				.files_dir
				.unwrap_or_else(|| PathBuf::from(DEFAULT_FILES_DIR)),
			manifest: self
				.corpus
				.manifest
				.unwrap_or_else(|| DEFAULT_MANIFEST.to_string()),
			convert_pdf: self.corpus.convert_pdf.unwrap_or(true),
			index_dir: self
				.index
				.dir
				.unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR)),
			writer_memory_mb: self
				.index
				.writer_memory_mb
				.unwrap_or(DEFAULT_WRITER_MEMORY_MB),
			model_path: self
				.autocomplete
				.model
				.unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL)),
			log_filter: self
				.log
				.filter
				.unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
			log_file,
		};

		config.validate(&self.sources.with_environment())?;
		Ok(config)
	}
}

impl ConfigSources {
	/// Attribute keys that were set through environment variables.
	fn with_environment(mut self) -> Self {
		for key in ConfigSources::KEYS {
			if self.get(key).is_none() && env::var_os(env_var_for(key)).is_some() {
				self.set(key, SettingSource::Environment(env_var_for(key)));
			}
		}
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn raw(toml: &str) -> RawConfig {
		config::Config::builder()
			.add_source(config::File::from_str(toml, config::FileFormat::Toml))
			.build()
			.unwrap()
			.try_deserialize()
			.unwrap()
	}

	#[test]
	fn empty_configuration_uses_defaults() {
		let mut config = raw("");
		config.log.file = Some(PathBuf::from("isearch.log"));
		let resolved = config.resolve().unwrap();

		assert_eq!(resolved.files_dir, PathBuf::from("dataset/files"));
		assert_eq!(resolved.manifest, "files-full-corpus.txt");
		assert!(resolved.convert_pdf);
		assert_eq!(resolved.index_dir, PathBuf::from("idx"));
		assert_eq!(resolved.writer_memory_mb, 50);
		assert_eq!(resolved.model_path, PathBuf::from("autocomplete-model.json"));
		assert_eq!(resolved.log_filter, "info");
	}

	#[test]
	fn file_values_are_read_per_section() {
		let config = raw(
			"[corpus]\nfiles_dir = \"docs\"\nconvert_pdf = false\n\
			 [index]\nwriter_memory_mb = 80\n\
			 [log]\nfile = \"logs/run.log\"\nfilter = \"isearch=debug\"\n",
		);
		let resolved = config.resolve().unwrap();

		assert_eq!(resolved.files_dir, PathBuf::from("docs"));
		assert!(!resolved.convert_pdf);
		assert_eq!(resolved.writer_memory_mb, 80);
		assert_eq!(resolved.log_file, PathBuf::from("logs/run.log"));
		assert_eq!(resolved.log_filter, "isearch=debug");
	}

	#[test]
	fn cli_directory_overrides_configuration() {
		let mut config = raw("[corpus]\nfiles_dir = \"docs\"\n[log]\nfile = \"x.log\"\n");
		let cli = CliArgs {
			action: None,
			files_dir: Some(PathBuf::from("other/files")),
		};
		config.apply_cli_overrides(&cli);
		assert_eq!(config.resolve().unwrap().files_dir, PathBuf::from("other/files"));
	}

	#[test]
	fn undersized_writer_memory_is_rejected() {
		let config = raw("[index]\nwriter_memory_mb = 4\n[log]\nfile = \"x.log\"\n");
		let message = config.resolve().unwrap_err().to_string();
		assert!(message.contains("index.writer_memory_mb"));
		assert!(message.contains("value: 4"));
	}
}
