//! Tracing subscriber initialization.
//!
//! The interactive session owns stdout and stderr, so every record goes to a
//! log file instead of the terminal.
//!
//! Filter priority (highest to lowest):
//!
//! 1. `ISEARCH_LOG` env var (per-target directives, e.g. `isearch=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. the configured `log.filter` value

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LOG_ENV: &str = "ISEARCH_LOG";

/// Install the global subscriber writing to `file`.
///
/// Logging is best-effort: when the file cannot be opened, or a subscriber is
/// already installed, the process simply runs without logs.
pub fn initialize(file: &Path, fallback_filter: &str) {
	let Some(sink) = open_sink(file) else {
		return;
	};

	let layer = fmt::layer()
		.with_writer(Mutex::new(sink))
		.with_ansi(false)
		.with_target(true)
		.with_level(true);

	let _ = tracing_subscriber::registry()
		.with(build_env_filter(fallback_filter))
		.with(layer)
		.try_init();
}

fn open_sink(file: &Path) -> Option<File> {
	if let Some(parent) = file.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent).ok()?;
	}
	OpenOptions::new().create(true).append(true).open(file).ok()
}

fn build_env_filter(fallback: &str) -> EnvFilter {
	if let Ok(directives) = std::env::var(LOG_ENV)
		&& let Ok(filter) = EnvFilter::try_new(&directives)
	{
		return filter;
	}

	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	EnvFilter::try_new(fallback).unwrap_or_else(|_| EnvFilter::new("info"))
}
