//! Section records collected for relevance ranking.

use serde::{Deserialize, Serialize};

use crate::model::HeadingLevel;

/// A candidate section extracted from one text line.
///
/// `score` and `rank` start at their zero sentinels and are filled in by
/// the ranker; a record with `rank == 0` has not been ranked yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRecord {
    /// Source document name (with extension)
    pub document: String,
    /// 1-indexed page number
    pub page: u32,
    /// Truncated section title
    pub title: String,
    /// Truncated section body used for scoring
    pub body: String,
    /// Assigned heading level
    pub level: HeadingLevel,
    /// Detected language code, or "unknown"
    pub language: String,
    /// Whether any run in the section uses a bold face
    pub bold: bool,
    /// Boosted relevance score, 0.0 until ranked
    pub score: f32,
    /// 1-indexed importance rank, 0 until ranked
    pub rank: u32,
}

impl SectionRecord {
    /// The text the ranker scores: the body when present, the title otherwise.
    pub fn scoring_text(&self) -> &str {
        if self.body.is_empty() {
            &self.title
        } else {
            &self.body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, body: &str) -> SectionRecord {
        SectionRecord {
            document: "report.pdf".to_string(),
            page: 1,
            title: title.to_string(),
            body: body.to_string(),
            level: HeadingLevel::H1,
            language: "en".to_string(),
            bold: false,
            score: 0.0,
            rank: 0,
        }
    }

    #[test]
    fn test_scoring_text_prefers_body() {
        let rec = record("Revenue", "Revenue grew across all quarters.");
        assert_eq!(rec.scoring_text(), "Revenue grew across all quarters.");
    }

    #[test]
    fn test_scoring_text_falls_back_to_title() {
        let rec = record("Revenue", "");
        assert_eq!(rec.scoring_text(), "Revenue");
    }
}
