//! Batch processing over directories of PDFs.

mod outline;
mod rank;

pub use outline::{process_directory, BatchSummary};
pub use rank::{discover_tasks, process_tasks, run_task, RankTask};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// List the PDF files in a directory, sorted by file name.
pub(crate) fn pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
