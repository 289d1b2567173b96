//! Document model types for extracted PDF content.
//!
//! This module defines the intermediate representation that bridges PDF
//! parsing and the analysis passes: page geometry captured by the parser,
//! styled lines produced from it, and the outline / ranking records
//! serialized as output.

mod document;
mod line;
mod outline;
mod page;
mod report;
mod section;

pub use document::ParsedDocument;
pub use line::StyledLine;
pub use outline::{DocumentOutline, Heading, HeadingLevel};
pub use page::{PageContent, StyleFlags, TextBlock, TextLine, TextRun};
pub use report::{RankedSection, RankingReport, ReportMetadata, SubsectionEntry};
pub use section::SectionRecord;
