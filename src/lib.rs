//! # docsift
//!
//! Heuristic structure extraction and persona-driven section ranking for
//! PDF documents.
//!
//! docsift parses PDFs into positioned text, infers an outline (a title
//! plus H1-H3 headings) from font statistics and section numbering, and
//! ranks prose sections against a persona description using a
//! deterministic hash embedding with keyword boosts.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docsift::outline_file;
//!
//! fn main() -> docsift::Result<()> {
//!     let outline = outline_file("document.pdf")?;
//!
//!     println!("{}", outline.title);
//!     for heading in &outline.outline {
//!         println!("{} {} (p. {})", heading.level, heading.text, heading.page);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Outline extraction**: title detection and H1-H3 heading inference
//! - **Section ranking**: persona-driven scoring across document sets
//! - **Deterministic**: no model weights, stable output across runs
//! - **Language tagging**: per-line script-based language detection
//! - **Batch processing**: directory and task-folder workflows

pub mod analyze;
pub mod batch;
pub mod detect;
pub mod error;
pub mod lang;
pub mod model;
pub mod output;
pub mod parser;
pub mod rank;

// Re-export commonly used types
pub use analyze::{
    collect_sections, detect_title, extract_lines, extract_outline, FontProfile, OutlineClassifier,
};
pub use batch::{
    discover_tasks, process_directory, process_tasks, run_task, BatchSummary, RankTask,
};
pub use detect::{detect_pdf, detect_pdf_bytes, is_pdf, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use lang::detect_language;
pub use model::{
    DocumentOutline, Heading, HeadingLevel, PageContent, ParsedDocument, RankedSection,
    RankingReport, ReportMetadata, SectionRecord, StyledLine, SubsectionEntry, TextBlock, TextLine,
    TextRun,
};
pub use output::{to_json, JsonFormat};
pub use parser::{DocumentParser, ErrorMode, ParseOptions};
pub use rank::{
    cosine_similarity, Embedder, HashEmbedder, KeywordBooster, SectionRanker, TOP_SECTIONS,
};

use std::path::Path;

/// Parse a PDF file into its page geometry.
///
/// # Example
///
/// ```no_run
/// use docsift::parse_file;
///
/// let doc = parse_file("document.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParsedDocument> {
    let parser = DocumentParser::open(path)?;
    parser.parse()
}

/// Parse a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use docsift::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("document.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParsedDocument> {
    let parser = DocumentParser::open_with_options(path, options)?;
    parser.parse()
}

/// Extract the outline of a PDF file.
///
/// # Example
///
/// ```no_run
/// use docsift::outline_file;
///
/// let outline = outline_file("document.pdf").unwrap();
/// println!("{} headings", outline.outline.len());
/// ```
pub fn outline_file<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    let doc = parse_file(path)?;
    Ok(analyze::extract_outline(&doc))
}

/// Extract the outline of a PDF file with custom options.
pub fn outline_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<DocumentOutline> {
    let doc = parse_file_with_options(path, options)?;
    Ok(analyze::extract_outline(&doc))
}

/// Extract the outline of a PDF held in memory.
///
/// `name` stands in for the file name in title fallbacks and section
/// records.
///
/// # Example
///
/// ```no_run
/// use docsift::outline_bytes;
///
/// let data = std::fs::read("document.pdf").unwrap();
/// let outline = outline_bytes("document.pdf", &data).unwrap();
/// ```
pub fn outline_bytes(name: &str, data: &[u8]) -> Result<DocumentOutline> {
    let parser = DocumentParser::from_bytes(data)?.with_name(name);
    let doc = parser.parse()?;
    Ok(analyze::extract_outline(&doc))
}

/// Collect ranked-section candidates from a PDF file.
///
/// The records come back unscored; feed them to a
/// [`SectionRanker`](rank::SectionRanker) to score and order them.
pub fn sections_file<P: AsRef<Path>>(path: P) -> Result<Vec<SectionRecord>> {
    let doc = parse_file(path)?;
    Ok(analyze::collect_sections(&doc))
}
