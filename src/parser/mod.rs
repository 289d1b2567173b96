//! PDF parsing module.

mod layout;
mod options;
mod pdf_parser;

pub use layout::LayoutAnalyzer;
pub use options::{ErrorMode, ParseOptions};
pub use pdf_parser::DocumentParser;
