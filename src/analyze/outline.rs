//! Heading classification and title detection.

use std::collections::HashSet;

use regex::Regex;

use crate::model::{DocumentOutline, Heading, HeadingLevel, ParsedDocument, StyledLine};

use super::fonts::FontProfile;
use super::lines::extract_lines;

/// Minimum length for an outline candidate, in characters.
const MIN_HEADING_CHARS: usize = 5;

/// Title candidates must be longer than this many characters.
const MIN_TITLE_CHARS: usize = 5;

/// Fraction of the page height that counts as the title band.
const TITLE_BAND: f32 = 0.25;

/// Classifies styled lines into outline headings.
///
/// A line is a heading when any one signal fires: font size over the
/// body size, a bold dominant font, all-caps text, or a numeric section
/// prefix such as "2.1 ". Repeated line texts are considered once, in
/// their first position, whether or not that first occurrence was kept.
pub struct OutlineClassifier {
    profile: FontProfile,
    numeric_prefix: Regex,
}

impl OutlineClassifier {
    pub fn new(profile: FontProfile) -> Self {
        Self {
            profile,
            numeric_prefix: Regex::new(r"^\d+(\.\d+)*\s+").unwrap(),
        }
    }

    /// Classify lines in reading order into headings.
    pub fn classify(&self, lines: &[StyledLine]) -> Vec<Heading> {
        if self.profile.is_empty() {
            return Vec::new();
        }

        let mut outline = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for line in lines {
            if line.text.chars().count() < MIN_HEADING_CHARS || seen.contains(line.text.as_str()) {
                continue;
            }
            seen.insert(line.text.as_str());

            if !self.is_heading(line) {
                continue;
            }

            outline.push(Heading {
                level: self.heading_level(&line.text),
                text: line.text.clone(),
                page: line.page,
                language: line.language.clone(),
            });
        }

        outline
    }

    fn is_heading(&self, line: &StyledLine) -> bool {
        self.profile.is_heading_size(line.font_size)
            || line.bold
            || is_all_caps(&line.text)
            || self.numeric_prefix.is_match(&line.text)
    }

    /// Heading level from the numeric prefix: dots inside the prefix set
    /// the depth ("2 " is H1, "2.1 " H2, "2.1.3 " and deeper H3). Lines
    /// without a prefix are H1.
    fn heading_level(&self, text: &str) -> HeadingLevel {
        match self.numeric_prefix.find(text) {
            Some(m) => HeadingLevel::from_depth(m.as_str().matches('.').count()),
            None => HeadingLevel::H1,
        }
    }
}

/// Extract the outline of a parsed document: inferred title plus
/// headings in reading order.
pub fn extract_outline(doc: &ParsedDocument) -> DocumentOutline {
    let profile = FontProfile::from_pages(&doc.pages);
    let classifier = OutlineClassifier::new(profile);
    let lines = extract_lines(doc);

    DocumentOutline {
        title: detect_title(doc),
        outline: classifier.classify(&lines),
    }
}

/// Infer a document title.
///
/// Preference order: a substantial metadata title, then the first
/// substantial line in the top quarter of the first page, then the
/// source file name.
pub fn detect_title(doc: &ParsedDocument) -> String {
    if let Some(title) = &doc.metadata_title {
        let trimmed = title.trim();
        if trimmed.chars().count() > MIN_TITLE_CHARS {
            return trimmed.to_string();
        }
    }

    if let Some(first_page) = doc.pages.first() {
        let band = first_page.height * TITLE_BAND;
        for block in &first_page.blocks {
            if first_page.height - block.top() >= band {
                continue;
            }
            for line in &block.lines {
                let text = line.text();
                if text.chars().count() > MIN_TITLE_CHARS {
                    return text;
                }
            }
        }
    }

    doc.name.clone()
}

/// Whether the text has at least one cased character and no lowercase ones.
fn is_all_caps(text: &str) -> bool {
    let mut has_cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
