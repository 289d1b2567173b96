//! Analysis passes over parsed documents.
//!
//! A document is analyzed in two passes: the font profile is computed
//! over all pages first, then lines are classified against it. Section
//! collection shares the styled-line extraction but applies its own
//! filters.

mod fonts;
mod lines;
mod outline;
mod sections;

pub use fonts::FontProfile;
pub use lines::extract_lines;
pub use outline::{detect_title, extract_outline, OutlineClassifier};
pub use sections::collect_sections;
