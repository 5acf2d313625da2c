use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliArgument(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliArgument(name) => write!(f, "CLI argument `{name}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where the validated settings came from, when not a config file.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) files_dir: Option<SettingSource>,
	pub(crate) manifest: Option<SettingSource>,
	pub(crate) writer_memory_mb: Option<SettingSource>,
	pub(crate) log_filter: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) const KEYS: [&'static str; 4] = [
		"corpus.files_dir",
		"corpus.manifest",
		"index.writer_memory_mb",
		"log.filter",
	];

	fn slot(&mut self, key: &str) -> Option<&mut Option<SettingSource>> {
		match key {
			"corpus.files_dir" => Some(&mut self.files_dir),
			"corpus.manifest" => Some(&mut self.manifest),
			"index.writer_memory_mb" => Some(&mut self.writer_memory_mb),
			"log.filter" => Some(&mut self.log_filter),
			_ => None,
		}
	}

	pub(crate) fn get(&self, key: &str) -> Option<&SettingSource> {
		match key {
			"corpus.files_dir" => self.files_dir.as_ref(),
			"corpus.manifest" => self.manifest.as_ref(),
			"index.writer_memory_mb" => self.writer_memory_mb.as_ref(),
			"log.filter" => self.log_filter.as_ref(),
			_ => None,
		}
	}

	pub(crate) fn set(&mut self, key: &str, source: SettingSource) {
		if let Some(slot) = self.slot(key) {
			*slot = Some(source);
		}
	}

	/// Source of `key`, defaulting to the configuration file entry.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.get(key)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}
