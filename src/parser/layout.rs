//! Layout analysis for PDF pages.
//!
//! Walks page content streams and reconstructs positioned text: spans are
//! grouped into baseline-aligned lines, and lines into blocks separated by
//! vertical gaps. Classification of the result (body size, headings,
//! sections) happens in the analysis passes, not here.

use std::collections::HashMap;

use lopdf::{Document as LopdfDocument, Object, ObjectId};
use unicode_normalization::UnicodeNormalization;

use crate::error::{Error, Result};
use crate::model::{TextBlock, TextLine, TextRun};

/// A decoded text span with its position and font, before line grouping.
#[derive(Debug, Clone)]
struct TextSpan {
    /// Decoded text, NFC-normalized
    text: String,
    /// X position (left edge of the text)
    x: f32,
    /// Y position (baseline, bottom-up PDF coordinates)
    y: f32,
    /// Effective font size in points
    font_size: f32,
    /// Resolved base font name (e.g. "Helvetica-Bold")
    font_name: String,
}

impl TextSpan {
    fn new(text: String, x: f32, y: f32, font_size: f32, font_name: String) -> Self {
        Self {
            text: text.nfc().collect(),
            x,
            y,
            font_size,
            font_name,
        }
    }
}

/// Extracts positioned text blocks from the pages of one document.
pub struct LayoutAnalyzer<'a> {
    doc: &'a LopdfDocument,
}

impl<'a> LayoutAnalyzer<'a> {
    pub fn new(doc: &'a LopdfDocument) -> Self {
        Self { doc }
    }

    /// Extract the text blocks of a page, top to bottom.
    pub fn extract_page_blocks(&self, page_num: u32) -> Result<Vec<TextBlock>> {
        let spans = self.extract_page_spans(page_num)?;
        let lines = group_spans_into_lines(spans);
        Ok(group_lines_into_blocks(lines))
    }

    /// Extract raw text spans from a page with position and font information.
    /// Uses lopdf's font encoding support for proper text decoding.
    fn extract_page_spans(&self, page_num: u32) -> Result<Vec<TextSpan>> {
        let pages = self.doc.get_pages();
        let page_id = pages
            .get(&page_num)
            .ok_or(Error::PageOutOfRange(page_num, pages.len() as u32))?;

        let fonts = self
            .doc
            .get_page_fonts(*page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        // Resolve resource names to base font names up front
        let mut base_fonts = HashMap::new();
        for (name, font) in &fonts {
            let base_font = font
                .get(b"BaseFont")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| String::from_utf8_lossy(n).to_string())
                .unwrap_or_else(|| "Unknown".to_string());
            base_fonts.insert(name.clone(), base_font);
        }

        let content = match self.get_page_content(*page_id)? {
            Some(content) => content,
            None => return Ok(Vec::new()),
        };

        let content =
            lopdf::content::Content::decode(&content).map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut spans = Vec::new();
        let mut current_font = String::new();
        let mut current_font_name: Vec<u8> = Vec::new();
        let mut current_font_size: f32 = 12.0;
        let mut text_matrix = TextMatrix::default();
        let mut in_text_block = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    text_matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(font_name) = &op.operands[0] {
                            current_font_name = font_name.clone();
                            current_font = match base_fonts.get(font_name.as_slice()) {
                                Some(base) => base.clone(),
                                None => String::from_utf8_lossy(font_name.as_slice()).to_string(),
                            };
                        }
                        current_font_size = get_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        text_matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        text_matrix.set(
                            get_number(&op.operands[0]).unwrap_or(1.0),
                            get_number(&op.operands[1]).unwrap_or(0.0),
                            get_number(&op.operands[2]).unwrap_or(0.0),
                            get_number(&op.operands[3]).unwrap_or(1.0),
                            get_number(&op.operands[4]).unwrap_or(0.0),
                            get_number(&op.operands[5]).unwrap_or(0.0),
                        );
                    }
                }
                "T*" => {
                    text_matrix.next_line();
                }
                "Tj" | "TJ" => {
                    if in_text_block {
                        let encoding = fonts
                            .get(&current_font_name)
                            .and_then(|f| f.get_font_encoding(self.doc).ok());

                        let text = if op.operator == "TJ" {
                            if let Some(Object::Array(arr)) = op.operands.first() {
                                decode_tj_array(arr, encoding.as_ref())
                            } else {
                                String::new()
                            }
                        } else if let Some(Object::String(bytes, _)) = op.operands.first() {
                            match encoding.as_ref() {
                                Some(enc) => {
                                    LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                                }
                                None => decode_text_simple(bytes),
                            }
                        } else {
                            String::new()
                        };

                        if !text.trim().is_empty() {
                            let (x, y) = text_matrix.get_position();
                            let effective_size = current_font_size * text_matrix.get_scale();
                            spans.push(TextSpan::new(
                                text,
                                x,
                                y,
                                effective_size,
                                current_font.clone(),
                            ));
                        }
                    }
                }
                "'" | "\"" => {
                    text_matrix.next_line();
                    if in_text_block {
                        let text_idx = if op.operator == "\"" { 2 } else { 0 };
                        if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                            let encoding = fonts
                                .get(&current_font_name)
                                .and_then(|f| f.get_font_encoding(self.doc).ok());

                            let text = match encoding.as_ref() {
                                Some(enc) => {
                                    LopdfDocument::decode_text(enc, bytes).unwrap_or_default()
                                }
                                None => decode_text_simple(bytes),
                            };

                            if !text.trim().is_empty() {
                                let (x, y) = text_matrix.get_position();
                                let effective_size = current_font_size * text_matrix.get_scale();
                                spans.push(TextSpan::new(
                                    text,
                                    x,
                                    y,
                                    effective_size,
                                    current_font.clone(),
                                ));
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(spans)
    }

    /// Get the concatenated content stream of a page. A page without a
    /// Contents entry is a blank page, not an error.
    fn get_page_content(&self, page_id: ObjectId) -> Result<Option<Vec<u8>>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            Err(_) => return Ok(None),
        };

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    let data = s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()))?;
                    return Ok(Some(data));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(Some(content))
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }
}

/// Decode a TJ operand array into text.
///
/// Numbers in the array are kerning adjustments in 1/1000 text space units;
/// large negative values stand in for word spaces in many generators, so
/// they become a space unless the preceding character is from a script
/// written without word spaces.
fn decode_tj_array(arr: &[Object], encoding: Option<&lopdf::Encoding>) -> String {
    let mut combined = String::new();
    let space_threshold = 200.0;

    for item in arr {
        match item {
            Object::String(bytes, _) => match encoding {
                Some(enc) => {
                    if let Ok(decoded) = LopdfDocument::decode_text(enc, bytes) {
                        combined.push_str(&decoded);
                    }
                }
                None => combined.push_str(&decode_text_simple(bytes)),
            },
            Object::Integer(n) => {
                push_kerning_space(&mut combined, -(*n as f32), space_threshold);
            }
            Object::Real(n) => {
                push_kerning_space(&mut combined, -n, space_threshold);
            }
            _ => {}
        }
    }

    combined
}

fn push_kerning_space(combined: &mut String, adjustment: f32, threshold: f32) {
    if adjustment > threshold
        && !combined.is_empty()
        && !combined.ends_with(' ')
        && !combined.ends_with('\u{00A0}')
    {
        if let Some(c) = combined.chars().last() {
            if !is_spaceless_script_char(c) {
                combined.push(' ');
            }
        }
    }
}

/// Group spans into baseline-aligned lines, top to bottom.
fn group_spans_into_lines(spans: Vec<TextSpan>) -> Vec<TextLine> {
    if spans.is_empty() {
        return vec![];
    }

    // Sort spans by Y (descending, since PDF Y is bottom-up) then X
    let mut spans = spans;
    spans.sort_by(|a, b| {
        let y_cmp = b.y.partial_cmp(&a.y).unwrap_or(std::cmp::Ordering::Equal);
        if y_cmp == std::cmp::Ordering::Equal {
            a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal)
        } else {
            y_cmp
        }
    });

    let mut lines: Vec<TextLine> = Vec::new();
    let mut current_line_spans: Vec<TextSpan> = Vec::new();
    let mut current_y: Option<f32> = None;

    for span in spans {
        let y_tolerance = span.font_size * 0.3; // Allow 30% of font size variance

        if let Some(y) = current_y {
            if (span.y - y).abs() <= y_tolerance {
                current_line_spans.push(span);
            } else {
                if !current_line_spans.is_empty() {
                    lines.push(line_from_spans(std::mem::take(&mut current_line_spans)));
                }
                current_y = Some(span.y);
                current_line_spans.push(span);
            }
        } else {
            current_y = Some(span.y);
            current_line_spans.push(span);
        }
    }

    if !current_line_spans.is_empty() {
        lines.push(line_from_spans(current_line_spans));
    }

    lines
}

/// Build a model line from the spans sharing one baseline.
fn line_from_spans(mut spans: Vec<TextSpan>) -> TextLine {
    spans.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));

    let y = spans.first().map(|s| s.y).unwrap_or(0.0);
    let runs = spans
        .into_iter()
        .map(|s| TextRun::new(s.text, s.font_size, s.font_name))
        .collect();

    TextLine::new(y, runs)
}

/// Group consecutive lines into blocks separated by vertical gaps or
/// font size changes.
fn group_lines_into_blocks(lines: Vec<TextLine>) -> Vec<TextBlock> {
    if lines.is_empty() {
        return vec![];
    }

    let avg_spacing = average_line_spacing(&lines);

    let mut blocks: Vec<TextBlock> = Vec::new();
    let mut current_block_lines: Vec<TextLine> = Vec::new();

    for line in lines {
        if let Some(prev_line) = current_block_lines.last() {
            if should_break_block(prev_line, &line, avg_spacing) {
                blocks.push(TextBlock::new(std::mem::take(&mut current_block_lines)));
            }
        }
        current_block_lines.push(line);
    }

    if !current_block_lines.is_empty() {
        blocks.push(TextBlock::new(current_block_lines));
    }

    blocks
}

fn average_line_spacing(lines: &[TextLine]) -> f32 {
    if lines.len() < 2 {
        return 12.0;
    }

    let spacings: Vec<f32> = lines
        .windows(2)
        .map(|w| (w[0].y - w[1].y).abs())
        .filter(|s| *s > 0.1)
        .collect();

    if spacings.is_empty() {
        return 12.0;
    }

    spacings.iter().sum::<f32>() / spacings.len() as f32
}

fn should_break_block(prev_line: &TextLine, curr_line: &TextLine, avg_spacing: f32) -> bool {
    // Large spacing indicates a new block
    let spacing = (prev_line.y - curr_line.y).abs();
    if spacing > avg_spacing * 1.5 {
        return true;
    }

    // Significant font size change
    (dominant_size(prev_line) - dominant_size(curr_line)).abs() > 1.0
}

/// Dominant font size of a line, weighted by run text length.
fn dominant_size(line: &TextLine) -> f32 {
    let total_chars: usize = line.runs.iter().map(|r| r.text.len()).sum();
    if total_chars == 0 {
        return line.runs.first().map(|r| r.font_size).unwrap_or(12.0);
    }

    let weighted: f32 = line
        .runs
        .iter()
        .map(|r| r.font_size * r.text.len() as f32)
        .sum();
    weighted / total_chars as f32
}

/// Text matrix for tracking position in content stream.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default line leading (could be set by TL operator)
        self.f -= 12.0 * self.d;
    }

    fn get_position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn get_scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Check if a character is from a script that doesn't use word spaces.
/// Chinese and Japanese don't use spaces between words, but Korean does.
fn is_spaceless_script_char(c: char) -> bool {
    let code = c as u32;

    // CJK Unified Ideographs (Chinese characters, used in Chinese/Japanese)
    (0x4E00..=0x9FFF).contains(&code)
    // CJK Unified Ideographs Extension A
    || (0x3400..=0x4DBF).contains(&code)
    // CJK Unified Ideographs Extension B-F
    || (0x20000..=0x2A6DF).contains(&code)
    || (0x2A700..=0x2B73F).contains(&code)
    || (0x2B740..=0x2B81F).contains(&code)
    || (0x2B820..=0x2CEAF).contains(&code)
    || (0x2CEB0..=0x2EBEF).contains(&code)
    // Hiragana (Japanese)
    || (0x3040..=0x309F).contains(&code)
    // Katakana (Japanese)
    || (0x30A0..=0x30FF).contains(&code)
    // NOTE: Hangul (Korean) is NOT included - Korean uses word spaces like English
    // CJK Symbols and Punctuation
    || (0x3000..=0x303F).contains(&code)
}

/// Simple text decoding fallback when no encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    // Try UTF-16BE first (BOM marker)
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    // Try UTF-8
    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Fallback: Latin-1
    bytes.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(text: &str, x: f32, y: f32, size: f32, font: &str) -> TextSpan {
        TextSpan::new(text.to_string(), x, y, size, font.to_string())
    }

    #[test]
    fn test_spans_on_same_baseline_form_one_line() {
        let spans = vec![
            span("World", 60.0, 700.0, 12.0, "Helvetica"),
            span("Hello", 10.0, 700.2, 12.0, "Helvetica"),
        ];

        let lines = group_spans_into_lines(spans);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "Hello World");
    }

    #[test]
    fn test_lines_ordered_top_to_bottom() {
        let spans = vec![
            span("bottom", 10.0, 100.0, 12.0, "Helvetica"),
            span("top", 10.0, 700.0, 12.0, "Helvetica"),
        ];

        let lines = group_spans_into_lines(spans);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "top");
        assert_eq!(lines[1].text(), "bottom");
    }

    #[test]
    fn test_wide_gap_splits_blocks() {
        let spans = vec![
            span("First paragraph line one", 10.0, 700.0, 12.0, "Helvetica"),
            span("First paragraph line two", 10.0, 686.0, 12.0, "Helvetica"),
            span("Second paragraph", 10.0, 600.0, 12.0, "Helvetica"),
        ];

        let lines = group_spans_into_lines(spans);
        let blocks = group_lines_into_blocks(lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines.len(), 2);
        assert_eq!(blocks[1].lines.len(), 1);
    }

    #[test]
    fn test_font_size_change_splits_blocks() {
        let spans = vec![
            span("Heading", 10.0, 700.0, 18.0, "Helvetica-Bold"),
            span("Body text follows here", 10.0, 688.0, 10.0, "Helvetica"),
            span("and continues on", 10.0, 676.0, 10.0, "Helvetica"),
        ];

        let lines = group_spans_into_lines(spans);
        let blocks = group_lines_into_blocks(lines);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines[0].text(), "Heading");
    }

    #[test]
    fn test_span_text_is_nfc_normalized() {
        // "e" followed by combining acute accent composes to U+00E9
        let s = span("Caf\u{0065}\u{0301}", 0.0, 0.0, 12.0, "Helvetica");
        assert_eq!(s.text, "Caf\u{00E9}");
    }

    #[test]
    fn test_decode_text_simple_utf16be() {
        let bytes = [0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_text_simple(&bytes), "Hi");
    }

    #[test]
    fn test_decode_text_simple_latin1_fallback() {
        let bytes = [0x48, 0x69, 0xE9];
        assert_eq!(decode_text_simple(&bytes), "Hié");
    }

    #[test]
    fn test_spaceless_script_chars() {
        assert!(is_spaceless_script_char('中'));
        assert!(is_spaceless_script_char('あ'));
        assert!(!is_spaceless_script_char('한'));
        assert!(!is_spaceless_script_char('a'));
    }
}
