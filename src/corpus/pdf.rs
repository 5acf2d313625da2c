use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use super::manifest::top_level_files;
use super::which;

/// Convert every `*.pdf` in `dir` that has no `*.txt` sibling yet.
///
/// Returns the number of successful conversions. A missing `pdftotext`
/// helper converts nothing.
pub fn convert_pdfs(dir: &Path) -> usize {
	let Some(pdftotext) = which("pdftotext") else {
		debug!("pdftotext not found on PATH; skipping PDF conversion");
		return 0;
	};

	let files = match top_level_files(dir) {
		Ok(files) => files,
		Err(err) => {
			warn!(error = %err, "unable to list PDF candidates");
			return 0;
		}
	};

	pending_pdfs(files)
		.into_iter()
		.filter(|pdf| convert_one(&pdftotext, pdf))
		.count()
}

fn pending_pdfs(files: Vec<PathBuf>) -> Vec<PathBuf> {
	files
		.into_iter()
		.filter(|path| path.extension().is_some_and(|ext| ext == "pdf"))
		.filter(|pdf| !pdf.with_extension("txt").exists())
		.collect()
}

fn convert_one(pdftotext: &Path, pdf: &Path) -> bool {
	match Command::new(pdftotext).arg(pdf).status() {
		Ok(status) if status.success() => true,
		Ok(status) => {
			warn!(%status, pdf = %pdf.display(), "pdftotext failed");
			false
		}
		Err(err) => {
			warn!(error = %err, pdf = %pdf.display(), "pdftotext could not be spawned");
			false
		}
	}
}
