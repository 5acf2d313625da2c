use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use tracing::debug;

use super::{Document, which};

/// Decide whether `path` holds plain text.
///
/// Uses the `file` helper when it is installed and falls back to the `.txt`
/// extension otherwise, or when the helper fails.
pub fn is_text_file(path: &Path) -> bool {
	if let Some(file_cmd) = which("file") {
		match Command::new(file_cmd).arg(path).output() {
			Ok(output) if output.status.success() => {
				return describes_text(&String::from_utf8_lossy(&output.stdout));
			}
			Ok(output) => debug!(status = %output.status, path = %path.display(), "file helper failed"),
			Err(err) => debug!(error = %err, "file helper could not be spawned"),
		}
	}
	has_txt_extension(path)
}

fn describes_text(description: &str) -> bool {
	description
		.trim_end()
		.split_once(':')
		.is_some_and(|(_, kind)| kind.contains(" text"))
}

fn has_txt_extension(path: &Path) -> bool {
	path.extension().is_some_and(|ext| ext == "txt")
}

/// List the text files directly inside `files_dir` and write their paths,
/// relative to the manifest's directory, one per line.
pub fn write_manifest(files_dir: &Path, manifest: &Path) -> Result<Vec<Document>> {
	let mut paths = top_level_files(files_dir)?;
	paths.retain(|path| is_text_file(path));
	paths.sort();

	let base = manifest.parent().unwrap_or_else(|| Path::new(""));
	let mut contents = String::new();
	for path in &paths {
		let relative = path.strip_prefix(base).unwrap_or(path);
		contents.push_str(&relative.to_string_lossy());
		contents.push('\n');
	}
	fs::write(manifest, contents)
		.with_context(|| format!("failed to write corpus manifest {}", manifest.display()))?;

	Ok(paths.into_iter().map(|path| Document { path }).collect())
}

pub(super) fn top_level_files(dir: &Path) -> Result<Vec<PathBuf>> {
	let mut files = Vec::new();
	let walker = WalkBuilder::new(dir)
		.standard_filters(false)
		.max_depth(Some(1))
		.build();
	for entry in walker {
		let entry =
			entry.with_context(|| format!("failed to list documents in {}", dir.display()))?;
		if entry.file_type().is_some_and(|kind| kind.is_file()) {
			files.push(entry.into_path());
		}
	}
	Ok(files)
}
