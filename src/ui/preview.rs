use std::path::Path;

use tracing::debug;

use crate::locator::{ContentLocator, LineMatch};

/// What the preview pane currently reflects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Preview {
	/// No file selected.
	#[default]
	Empty,
	/// Lines of `path` containing the query.
	Matches { path: String, lines: Vec<LineMatch> },
	/// The file could not be searched; the pane stays blank.
	Unavailable { path: String, reason: String },
}

impl Preview {
	/// Grep `path` for `query`, degrading to [`Preview::Unavailable`] on failure.
	pub fn load(locator: &dyn ContentLocator, path: &str, query: &str) -> Self {
		match locator.grep(Path::new(path), &query.to_lowercase()) {
			Ok(lines) => Preview::Matches {
				path: path.to_string(),
				lines,
			},
			Err(err) => {
				debug!(error = %err, path, "preview unavailable");
				Preview::Unavailable {
					path: path.to_string(),
					reason: err.to_string(),
				}
			}
		}
	}

	pub fn path(&self) -> Option<&str> {
		match self {
			Preview::Empty => None,
			Preview::Matches { path, .. } | Preview::Unavailable { path, .. } => Some(path),
		}
	}
}
