//! Document-level types.

use super::PageContent;

/// A parsed PDF document: source name, declared metadata title, and the
/// extracted page geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Source file name, extension included (e.g., "report.pdf")
    pub name: String,

    /// Title declared in the document information dictionary, if any
    pub metadata_title: Option<String>,

    /// Pages in ascending page-number order
    pub pages: Vec<PageContent>,
}

impl ParsedDocument {
    /// Create an empty document with the given source name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            metadata_title: None,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: PageContent) {
        self.pages.push(page);
    }

    /// Whether the document yielded no visible text on any page.
    pub fn is_empty(&self) -> bool {
        self.pages.iter().all(|p| p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TextBlock, TextLine, TextRun};

    #[test]
    fn test_document_new() {
        let doc = ParsedDocument::new("report.pdf");
        assert_eq!(doc.name, "report.pdf");
        assert!(doc.metadata_title.is_none());
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_document_with_text_is_not_empty() {
        let mut doc = ParsedDocument::new("report.pdf");
        let mut page = PageContent::new(1, 612.0, 792.0);
        page.add_block(TextBlock::new(vec![TextLine::new(
            700.0,
            vec![TextRun::new("Overview", 12.0, "Helvetica")],
        )]));
        doc.add_page(page);

        assert!(!doc.is_empty());
        assert_eq!(doc.page_count(), 1);
    }
}
