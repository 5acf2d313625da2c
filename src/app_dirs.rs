//! Per-user locations of the configuration file and the default log file.
//!
//! Each location can be redirected with an `ISEARCH_*_DIR` variable; otherwise
//! the platform directories from the `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "isearch.log";

/// A per-user directory owned by `isearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds the default log file.
	Cache,
}

impl AppDir {
	/// Environment variable that overrides this directory.
	pub fn override_var(self) -> &'static str {
		match self {
			Self::Config => "ISEARCH_CONFIG_DIR",
			Self::Cache => "ISEARCH_CACHE_DIR",
		}
	}

	/// Resolve the directory, preferring a non-empty override.
	pub fn path(self) -> Result<PathBuf> {
		if let Some(dir) = non_empty_var(self.override_var()) {
			return Ok(dir);
		}
		let dirs = ProjectDirs::from("io", "isearch", "isearch")
			.context("no home directory to place isearch files in")?;
		let dir = match self {
			Self::Config => dirs.config_local_dir(),
			Self::Cache => dirs.cache_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

/// The per-user configuration file, lowest-priority config source.
pub fn config_file() -> Result<PathBuf> {
	Ok(AppDir::Config.path()?.join(CONFIG_FILE_NAME))
}

/// Where logs go when `log.file` is not configured.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(AppDir::Cache.path()?.join(LOG_FILE_NAME))
}

fn non_empty_var(name: &str) -> Option<PathBuf> {
	env::var_os(name)
		.filter(|value| !value.is_empty())
		.map(PathBuf::from)
}
