//! Source-document preparation run once before the index is opened.
//!
//! PDF files are converted to text with the external `pdftotext` helper, plain
//! text files are detected (with the `file` helper when available) and listed
//! in a manifest next to the documents directory. Missing helpers only degrade
//! the result; they never fail startup.

mod manifest;
mod pdf;

use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use tracing::info;

pub use manifest::{is_text_file, write_manifest};
pub use pdf::convert_pdfs;

/// A text document that will be indexed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
	/// Path used for display, preview and the index metadata.
	pub path: PathBuf,
}

/// Where the corpus lives and how to prepare it.
#[derive(Debug, Clone)]
pub struct CorpusLayout {
	pub files_dir: PathBuf,
	pub dataset_dir: PathBuf,
	pub manifest: PathBuf,
	pub convert_pdf: bool,
}

impl CorpusLayout {
	/// Derive the layout from the documents directory; the dataset directory is its parent.
	pub fn new(files_dir: impl Into<PathBuf>, manifest_name: &str, convert_pdf: bool) -> Self {
		let files_dir = files_dir.into();
		let dataset_dir = files_dir
			.parent()
			.map(Path::to_path_buf)
			.unwrap_or_else(|| PathBuf::from("."));
		let manifest = dataset_dir.join(manifest_name);
		Self {
			files_dir,
			dataset_dir,
			manifest,
			convert_pdf,
		}
	}
}

/// Convert PDFs, detect text files and rewrite the manifest.
pub fn prepare(layout: &CorpusLayout) -> Result<Vec<Document>> {
	ensure!(
		layout.files_dir.is_dir(),
		"source documents directory {} does not exist",
		layout.files_dir.display()
	);

	if layout.convert_pdf {
		let converted = convert_pdfs(&layout.files_dir);
		if converted > 0 {
			info!(converted, "converted PDF documents to text");
		}
	}

	let documents = write_manifest(&layout.files_dir, &layout.manifest)?;
	info!(
		documents = documents.len(),
		manifest = %layout.manifest.display(),
		"corpus manifest updated"
	);
	Ok(documents)
}

/// Find the full path of an executable on `PATH`.
pub fn which(executable: &str) -> Option<PathBuf> {
	::which::which(executable).ok()
}
