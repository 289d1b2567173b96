//! Section collection for relevance ranking.

use crate::model::{HeadingLevel, ParsedDocument, SectionRecord, StyledLine};

use super::lines::extract_lines;

/// Minimum length for a section candidate, in characters.
const MIN_SECTION_CHARS: usize = 30;

/// Substrings marking code listings or directory trees rather than prose.
const BLOCKLIST: [&str; 5] = [".py", ".keras", "│", "├──", "└──"];

/// Characters kept for a section title.
const TITLE_CHARS: usize = 120;

/// Characters kept for a section body.
const BODY_CHARS: usize = 600;

/// Collect section candidates from one document, in reading order.
///
/// Every sufficiently long prose line becomes one candidate with zeroed
/// score and rank; the ranker fills those in later.
pub fn collect_sections(doc: &ParsedDocument) -> Vec<SectionRecord> {
    extract_lines(doc)
        .into_iter()
        .filter(is_prose_line)
        .map(|line| SectionRecord {
            document: doc.name.clone(),
            page: line.page,
            title: truncate_chars(&line.text, TITLE_CHARS),
            body: truncate_chars(&line.text, BODY_CHARS),
            level: HeadingLevel::H1,
            language: line.language,
            bold: line.bold_face,
            score: 0.0,
            rank: 0,
        })
        .collect()
}

fn is_prose_line(line: &StyledLine) -> bool {
    if line.text.chars().count() < MIN_SECTION_CHARS {
        return false;
    }

    let lowered = line.text.to_lowercase();
    !BLOCKLIST.iter().any(|marker| lowered.contains(marker))
}

/// Truncate to at most `max` characters, on a character boundary.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
