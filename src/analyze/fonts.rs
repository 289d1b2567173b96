//! Document-wide font size statistics.

use std::collections::BTreeMap;

use crate::model::PageContent;

/// Body size reported for documents without any text.
const DEFAULT_BODY_SIZE: f32 = 12.0;

/// Bucket a font size at 0.1 pt precision.
pub(crate) fn deci_points(size: f32) -> i32 {
    (size * 10.0).round() as i32
}

/// Histogram of run font sizes across a whole document.
///
/// The most frequent size is taken as the body text size. Ties resolve
/// to the smaller size.
#[derive(Debug, Clone)]
pub struct FontProfile {
    histogram: BTreeMap<i32, usize>,
    body_size: f32,
}

impl FontProfile {
    /// Build the profile from all runs on the given pages.
    pub fn from_pages(pages: &[PageContent]) -> Self {
        let mut histogram: BTreeMap<i32, usize> = BTreeMap::new();

        for page in pages {
            for block in &page.blocks {
                for line in &block.lines {
                    for run in &line.runs {
                        if run.text.trim().is_empty() {
                            continue;
                        }
                        *histogram.entry(deci_points(run.font_size)).or_insert(0) += 1;
                    }
                }
            }
        }

        let body_size = body_size_of(&histogram);
        Self {
            histogram,
            body_size,
        }
    }

    /// The estimated body text size at 0.1 pt precision.
    pub fn body_size(&self) -> f32 {
        self.body_size
    }

    /// Whether a line's font size is large enough to signal a heading.
    /// Requires more than 1 pt over the body size.
    pub fn is_heading_size(&self, size: f32) -> bool {
        size > self.body_size + 1.0
    }

    /// Whether the document contributed no sizes at all.
    pub fn is_empty(&self) -> bool {
        self.histogram.is_empty()
    }
}

fn body_size_of(histogram: &BTreeMap<i32, usize>) -> f32 {
    let mut best: Option<(i32, usize)> = None;

    // Ascending key order, strictly-greater replacement: on tied counts
    // the smaller size is kept
    for (&key, &count) in histogram {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }

    best.map(|(key, _)| key as f32 / 10.0)
        .unwrap_or(DEFAULT_BODY_SIZE)
}
