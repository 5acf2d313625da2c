//! Line-level, case-insensitive substring search over a single file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Number of leading bytes inspected when sniffing for binary content.
const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// One matching line of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
	/// 1-based line number.
	pub number: usize,
	/// Line text with trailing whitespace removed.
	pub text: String,
}

impl LineMatch {
	pub fn new(number: usize, text: impl Into<String>) -> Self {
		Self {
			number,
			text: text.into(),
		}
	}

	/// Render as `number:text`, the way `grep -n` prints matches.
	pub fn display(&self) -> String {
		format!("{}:{}", self.number, self.text.replace('\t', "    "))
	}
}

#[derive(Debug, Error)]
pub enum LocateError {
	#[error("failed to read {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},
	#[error("{path} looks like a binary file")]
	Binary { path: PathBuf },
}

/// Finds the lines of a file that contain a search term.
pub trait ContentLocator {
	/// Return matching `(line number, text)` pairs in file order.
	///
	/// Matching is case-insensitive; the empty term matches every line.
	fn grep(&self, path: &Path, term: &str) -> Result<Vec<LineMatch>, LocateError>;
}

/// [`ContentLocator`] reading files straight from disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileLocator;

impl ContentLocator for FileLocator {
	fn grep(&self, path: &Path, term: &str) -> Result<Vec<LineMatch>, LocateError> {
		let bytes = fs::read(path).map_err(|source| LocateError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		if is_binary(&bytes) {
			return Err(LocateError::Binary {
				path: path.to_path_buf(),
			});
		}

		let content = String::from_utf8_lossy(&bytes);
		Ok(matching_lines(&content, term))
	}
}

fn is_binary(bytes: &[u8]) -> bool {
	bytes.iter().take(BINARY_SNIFF_LEN).any(|&b| b == 0)
}

fn matching_lines(content: &str, term: &str) -> Vec<LineMatch> {
	let needle = term.to_lowercase();
	content
		.lines()
		.enumerate()
		.filter(|(_, line)| line.to_lowercase().contains(&needle))
		.map(|(idx, line)| LineMatch::new(idx + 1, line.trim_end()))
		.collect()
}
