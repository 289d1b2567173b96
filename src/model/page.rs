//! Page-level geometry records produced by the parsing layer.

use bitflags::bitflags;

bitflags! {
    /// Style attributes inferred from a run's font name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
    }
}

/// A run of text sharing one font and size.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    /// The text content
    pub text: String,
    /// Font size in points
    pub font_size: f32,
    /// Resolved base font name (e.g., "Helvetica-Bold")
    pub font_name: String,
    /// Style bits inferred from the font name
    pub flags: StyleFlags,
}

impl TextRun {
    /// Create a run, deriving style flags from the font name.
    pub fn new(text: impl Into<String>, font_size: f32, font_name: impl Into<String>) -> Self {
        let font_name = font_name.into();
        let lower = font_name.to_lowercase();
        let mut flags = StyleFlags::empty();
        if lower.contains("bold") || lower.contains("black") || lower.contains("heavy") {
            flags |= StyleFlags::BOLD;
        }
        if lower.contains("italic") || lower.contains("oblique") {
            flags |= StyleFlags::ITALIC;
        }

        Self {
            text: text.into(),
            font_size,
            font_name,
            flags,
        }
    }

    /// Whether the run's font signals a bold face.
    pub fn is_bold(&self) -> bool {
        self.flags.contains(StyleFlags::BOLD)
    }

    /// Whether the run's font signals an italic face.
    pub fn is_italic(&self) -> bool {
        self.flags.contains(StyleFlags::ITALIC)
    }
}

/// A baseline-aligned line of runs, ordered left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextLine {
    /// Baseline Y position in PDF coordinates (origin at the bottom left)
    pub y: f32,
    /// The runs on this baseline
    pub runs: Vec<TextRun>,
}

impl TextLine {
    /// Create a line from runs on a shared baseline.
    pub fn new(y: f32, runs: Vec<TextRun>) -> Self {
        Self { y, runs }
    }

    /// Combined run text: trimmed runs joined with single spaces, empty
    /// runs skipped.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for run in &self.runs {
            let piece = run.text.trim();
            if piece.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(piece);
        }
        out
    }
}

/// A vertically grouped block of consecutive lines in reading order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlock {
    /// Lines ordered top to bottom
    pub lines: Vec<TextLine>,
}

impl TextBlock {
    /// Create a block from ordered lines.
    pub fn new(lines: Vec<TextLine>) -> Self {
        Self { lines }
    }

    /// Baseline of the topmost line. Lines are ordered top to bottom, so
    /// this is the first line's Y.
    pub fn top(&self) -> f32 {
        self.lines.first().map(|line| line.y).unwrap_or(0.0)
    }

    /// Whether the block carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.text().is_empty())
    }
}

/// One page's extracted content.
#[derive(Debug, Clone, PartialEq)]
pub struct PageContent {
    /// 1-indexed page number
    pub number: u32,
    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,
    /// Page height in points
    pub height: f32,
    /// Text blocks in reading order
    pub blocks: Vec<TextBlock>,
}

impl PageContent {
    /// Create an empty page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            blocks: Vec::new(),
        }
    }

    /// Append a block in reading order.
    pub fn add_block(&mut self, block: TextBlock) {
        self.blocks.push(block);
    }

    /// Whether the page has no visible text.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|b| b.is_empty())
    }
}
