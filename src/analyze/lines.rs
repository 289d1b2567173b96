//! Styled line extraction from parsed page geometry.

use crate::lang::detect_language;
use crate::model::{ParsedDocument, StyledLine, TextLine};

use super::fonts::deci_points;

/// Flatten a document into styled lines in reading order.
///
/// Each non-empty line carries the most frequent (size, font, bold)
/// combination among its runs, the looser any-run bold signal, and the
/// detected language of its text.
pub fn extract_lines(doc: &ParsedDocument) -> Vec<StyledLine> {
    let mut lines = Vec::new();

    for page in &doc.pages {
        for block in &page.blocks {
            for line in &block.lines {
                let text = line.text();
                if text.is_empty() {
                    continue;
                }

                let (font_size, font_name, bold) = match dominant_triple(line) {
                    Some(triple) => triple,
                    None => continue,
                };

                let bold_face = line.runs.iter().any(|r| r.is_bold());
                let language = detect_language(&text);

                lines.push(StyledLine {
                    text,
                    page: page.number,
                    font_size,
                    font_name,
                    bold,
                    bold_face,
                    language,
                });
            }
        }
    }

    lines
}

/// The most frequent (size, font, bold) combination among a line's runs.
/// Sizes are compared at 0.1 pt precision; ties resolve to the run
/// combination seen first.
fn dominant_triple(line: &TextLine) -> Option<(f32, String, bool)> {
    let mut counts: Vec<((i32, &str, bool), usize)> = Vec::new();

    for run in &line.runs {
        if run.text.trim().is_empty() {
            continue;
        }
        let key = (deci_points(run.font_size), run.font_name.as_str(), run.is_bold());
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }

    let mut best: Option<((i32, &str, bool), usize)> = None;
    for (key, n) in counts {
        match best {
            Some((_, best_n)) if n <= best_n => {}
            _ => best = Some((key, n)),
        }
    }

    best.map(|((size, font, bold), _)| (size as f32 / 10.0, font.to_string(), bold))
}
