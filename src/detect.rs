//! PDF format detection.
//!
//! Batch pipelines select inputs by extension; the parser confirms the
//! magic bytes here before handing data to lopdf.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// PDF header magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
/// Version digits following the magic, e.g. "1.7".
const VERSION_LEN: usize = 3;

/// Detected PDF header version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfFormat {
    /// PDF version from the header (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Detect the PDF header of a file.
///
/// Returns `Err(Error::UnknownFormat)` when the file does not start with
/// a PDF header.
pub fn detect_pdf<P: AsRef<Path>>(path: P) -> Result<PdfFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    let n = reader.read(&mut header)?;
    detect_pdf_bytes(&header[..n])
}

/// Detect a PDF header in a byte slice.
pub fn detect_pdf_bytes(data: &[u8]) -> Result<PdfFormat> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    let mut chars = version.chars();
    let valid = matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(major), Some('.'), Some(minor))
            if major.is_ascii_digit() && minor.is_ascii_digit()
    );
    if !valid {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfFormat { version })
}

/// Check whether a file carries a PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    detect_pdf(path).is_ok()
}

/// Check whether bytes carry a PDF header.
pub fn is_pdf_bytes(data: &[u8]) -> bool {
    detect_pdf_bytes(data).is_ok()
}
