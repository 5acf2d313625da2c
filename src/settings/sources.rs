use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use isearch::app_dirs;

pub(super) const ENV_PREFIX: &str = "ISEARCH";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the optional `files` plus environment overrides.
pub(super) fn build_config(files: &[PathBuf]) -> Result<Config> {
	let mut builder = Config::builder();

	for path in files {
		builder = builder.add_source(File::from(path.clone()).required(false));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations, lowest priority first.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(file) = app_dirs::config_file() {
		files.push(file);
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".isearch.toml"));
		files.push(current_dir.join("isearch.toml"));
	}

	files
}

/// Environment variable that overrides `key` (e.g. `index.dir`).
pub(super) fn env_var_for(key: &str) -> String {
	let suffix = key.replace('.', ENV_SEPARATOR).to_ascii_uppercase();
	format!("{ENV_PREFIX}{ENV_SEPARATOR}{suffix}")
}
