//! Best-effort language identification for extracted text lines.
//!
//! Classification is deterministic and self-contained: non-Latin scripts
//! are recognized by Unicode block, Latin text by a small stop-word vote.
//! Lines that carry no usable signal are tagged `"unknown"`; detection
//! never fails and never aborts line processing.

/// Sentinel returned when no language signal is present.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Common function words per Latin-script language, lowercase.
const LATIN_PROFILES: &[(&str, &[&str])] = &[
    (
        "en",
        &[
            "the", "and", "of", "to", "in", "is", "that", "for", "with", "as", "on", "are",
        ],
    ),
    (
        "fr",
        &[
            "le", "la", "les", "des", "et", "un", "une", "est", "dans", "que", "pour", "sur",
        ],
    ),
    (
        "de",
        &[
            "der", "die", "das", "und", "ist", "nicht", "mit", "für", "von", "ein", "eine", "zu",
        ],
    ),
    (
        "es",
        &[
            "el", "los", "las", "y", "en", "es", "un", "una", "para", "del", "por", "con",
        ],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Latin,
    Han,
    Kana,
    Hangul,
    Cyrillic,
    Arabic,
    Devanagari,
    Greek,
    Hebrew,
    Thai,
    Other,
}

fn script_of(c: char) -> Script {
    let code = c as u32;
    match code {
        _ if c.is_ascii_alphabetic() => Script::Latin,
        // Latin-1 supplement letters and Latin Extended-A/B
        0x00C0..=0x024F => Script::Latin,
        0x0370..=0x03FF => Script::Greek,
        0x0400..=0x052F => Script::Cyrillic,
        0x0590..=0x05FF => Script::Hebrew,
        0x0600..=0x06FF | 0x0750..=0x077F => Script::Arabic,
        0x0900..=0x097F => Script::Devanagari,
        0x0E00..=0x0E7F => Script::Thai,
        0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
        0x3040..=0x30FF | 0x31F0..=0x31FF => Script::Kana,
        0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF => Script::Han,
        0x20000..=0x2EBEF => Script::Han,
        _ => Script::Other,
    }
}

/// Identify the language of a text line, returning an ISO 639-1 code or
/// [`UNKNOWN_LANGUAGE`].
pub fn detect_language(text: &str) -> String {
    let mut latin = 0usize;
    let mut han = 0usize;
    let mut kana = 0usize;
    let mut hangul = 0usize;
    let mut cyrillic = 0usize;
    let mut arabic = 0usize;
    let mut devanagari = 0usize;
    let mut greek = 0usize;
    let mut hebrew = 0usize;
    let mut thai = 0usize;

    for c in text.chars() {
        match script_of(c) {
            Script::Latin => latin += 1,
            Script::Han => han += 1,
            Script::Kana => kana += 1,
            Script::Hangul => hangul += 1,
            Script::Cyrillic => cyrillic += 1,
            Script::Arabic => arabic += 1,
            Script::Devanagari => devanagari += 1,
            Script::Greek => greek += 1,
            Script::Hebrew => hebrew += 1,
            Script::Thai => thai += 1,
            Script::Other => {}
        }
    }

    // Kana implies Japanese even when Han ideographs dominate the line;
    // Hangul likewise wins over mixed-in Hanja.
    let cjk: Option<(&str, usize)> = if kana > 0 {
        Some(("ja", kana + han))
    } else if hangul > 0 {
        Some(("ko", hangul + han))
    } else if han > 0 {
        Some(("zh", han))
    } else {
        None
    };

    let mut best: Option<(&str, usize)> = cjk;
    for (code, count) in [
        ("ru", cyrillic),
        ("ar", arabic),
        ("hi", devanagari),
        ("el", greek),
        ("he", hebrew),
        ("th", thai),
    ] {
        if count > 0 && best.map_or(true, |(_, c)| count > c) {
            best = Some((code, count));
        }
    }

    if let Some((code, count)) = best {
        if count > latin {
            return code.to_string();
        }
    }

    if latin > 0 {
        return vote_latin(text).to_string();
    }

    UNKNOWN_LANGUAGE.to_string()
}

/// Stop-word vote among Latin-script profiles; English wins ties and
/// stands in when no profile matches.
fn vote_latin(text: &str) -> &'static str {
    let mut scores = [0usize; LATIN_PROFILES.len()];

    for word in text.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.is_empty() {
            continue;
        }
        for (i, (_, stopwords)) in LATIN_PROFILES.iter().enumerate() {
            if stopwords.contains(&word.as_str()) {
                scores[i] += 1;
            }
        }
    }

    let mut best = 0;
    for (i, score) in scores.iter().enumerate() {
        if *score > scores[best] {
            best = i;
        }
    }
    LATIN_PROFILES[best].0
}
