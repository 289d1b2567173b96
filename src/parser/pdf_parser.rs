//! PDF document parser using lopdf.

use std::path::Path;

use lopdf::{Document as LopdfDocument, ObjectId};
use unicode_normalization::UnicodeNormalization;

use crate::detect::detect_pdf;
use crate::error::{Error, Result};
use crate::model::{PageContent, ParsedDocument};

use super::layout::LayoutAnalyzer;
use super::options::{ErrorMode, ParseOptions};

/// Fallback document name when parsing from bytes without a known source.
const DEFAULT_NAME: &str = "document.pdf";

/// PDF document parser.
pub struct DocumentParser {
    doc: LopdfDocument,
    options: ParseOptions,
    name: String,
}

impl DocumentParser {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a PDF before handing it to lopdf
        detect_pdf(path)?;

        let doc = LopdfDocument::load(path).map_err(Error::from)?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        Ok(Self { doc, options, name })
    }

    /// Parse a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a PDF from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(Error::from)?;

        Ok(Self {
            doc,
            options,
            name: DEFAULT_NAME.to_string(),
        })
    }

    /// Override the document name reported in extraction results.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Parse the document into its page geometry.
    ///
    /// Encrypted documents are rejected with [`Error::Encrypted`]. In
    /// lenient mode a page whose content stream cannot be read is kept
    /// as an empty page; in strict mode the error is returned.
    pub fn parse(&self) -> Result<ParsedDocument> {
        // lopdf 0.34 cannot decrypt; extraction would return ciphertext
        if self.doc.is_encrypted() {
            return Err(Error::Encrypted);
        }

        let mut document = ParsedDocument::new(self.name.clone());
        document.metadata_title = self.metadata_title();

        let analyzer = LayoutAnalyzer::new(&self.doc);
        let pages = self.doc.get_pages();

        for (&number, &page_id) in &pages {
            let (width, height) = self.page_dimensions(page_id);
            let mut page = PageContent::new(number, width, height);

            match analyzer.extract_page_blocks(number) {
                Ok(blocks) => {
                    for block in blocks {
                        page.add_block(block);
                    }
                }
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", number, e);
                }
            }

            document.add_page(page);
        }

        Ok(document)
    }

    /// Document title from the Info dictionary, if present.
    pub fn metadata_title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info_ref = info.as_reference().ok()?;
        let info_dict = self.doc.get_dictionary(info_ref).ok()?;
        get_string_from_dict(info_dict, b"Title").map(|t| t.nfc().collect())
    }

    /// Page dimensions from the MediaBox, defaulting to Letter size.
    fn page_dimensions(&self, page_id: ObjectId) -> (f32, f32) {
        if let Ok(page_dict) = self.doc.get_dictionary(page_id) {
            if let Ok(media_box) = page_dict.get(b"MediaBox") {
                if let Ok(array) = media_box.as_array() {
                    if array.len() >= 4 {
                        let width = array[2].as_float().unwrap_or(612.0);
                        let height = array[3].as_float().unwrap_or(792.0);
                        return (width, height);
                    }
                }
            }
        }

        (612.0, 792.0)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }
}

/// Helper to get a string from a PDF dictionary.
fn get_string_from_dict(dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    dict.get(key).ok().and_then(|obj| {
        match obj {
            lopdf::Object::String(bytes, _) => {
                // Try UTF-16BE first (PDF standard for Unicode)
                if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
                    let utf16: Vec<u16> = bytes[2..]
                        .chunks(2)
                        .filter_map(|c| {
                            if c.len() == 2 {
                                Some(u16::from_be_bytes([c[0], c[1]]))
                            } else {
                                None
                            }
                        })
                        .collect();
                    String::from_utf16(&utf16).ok()
                } else {
                    // Try as Latin-1 or UTF-8
                    String::from_utf8(bytes.clone())
                        .ok()
                        .or_else(|| Some(bytes.iter().map(|&b| b as char).collect()))
                }
            }
            lopdf::Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
            _ => None,
        }
    })
}
