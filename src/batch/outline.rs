//! Outline extraction over a directory of PDFs.

use std::fs;
use std::path::Path;

use crate::analyze::extract_outline;
use crate::error::Result;
use crate::output::{to_json, JsonFormat};
use crate::parser::{DocumentParser, ParseOptions};

/// Result counts for one directory pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Documents processed successfully
    pub processed: usize,
    /// Documents skipped after an error
    pub failed: usize,
}

/// Extract outlines for every PDF in `input_dir`, writing one JSON file
/// per document (named after the PDF's stem) into `output_dir`.
///
/// The output directory is created if missing. A document that fails to
/// parse is logged and skipped; the remaining documents still complete.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    format: JsonFormat,
) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)?;

    let mut summary = BatchSummary::default();

    for path in super::pdf_files(input_dir)? {
        match outline_to_file(&path, output_dir, format) {
            Ok(()) => summary.processed += 1,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

fn outline_to_file(path: &Path, output_dir: &Path, format: JsonFormat) -> Result<()> {
    let parser = DocumentParser::open_with_options(path, ParseOptions::new().lenient())?;
    let document = parser.parse()?;
    let outline = extract_outline(&document);

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());
    let output_path = output_dir.join(format!("{}.json", stem));
    fs::write(&output_path, to_json(&outline, format)?)?;

    log::info!("Processed {} -> {}", path.display(), output_path.display());
    Ok(())
}
