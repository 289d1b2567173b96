//! Styled line records, the unit the classification heuristics work on.

/// One visual text line with its dominant style attributes.
///
/// The reported font triple (`font_size`, `font_name`, `bold`) is the most
/// frequent combination among the line's runs, which keeps noisy
/// per-character style runs from skewing classification. `bold_face` is
/// the looser any-run signal used by section collection.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    /// Line text: trimmed runs joined with single spaces
    pub text: String,
    /// 1-indexed page number
    pub page: u32,
    /// Dominant font size in points, at 0.1 pt precision
    pub font_size: f32,
    /// Dominant font name
    pub font_name: String,
    /// Whether the dominant font triple is bold
    pub bold: bool,
    /// Whether any contributing run's font signals a bold face
    pub bold_face: bool,
    /// Detected language code, or "unknown"
    pub language: String,
}
