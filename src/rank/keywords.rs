//! Keyword boosting for ranked sections.

/// Score granted per matched vocabulary entry.
const BOOST_WEIGHT: f32 = 0.05;

/// Built-in vocabulary for financial document analysis.
const FINANCIAL_KEYWORDS: [&str; 29] = [
    "revenue",
    "R&D",
    "research and development",
    "investment",
    "funding",
    "capital",
    "expenses",
    "profit",
    "net income",
    "earnings",
    "loss",
    "cost",
    "market",
    "competition",
    "strategy",
    "positioning",
    "growth",
    "trend",
    "Q1",
    "Q2",
    "Q3",
    "Q4",
    "2022",
    "2023",
    "2024",
    "financial performance",
    "annual report",
    "income statement",
    "balance sheet",
];

/// Bumps section scores for vocabulary hits.
///
/// Matching is case-insensitive substring containment. Every vocabulary
/// entry contained in the text counts once; repeated entries in the
/// vocabulary count as many times as they appear.
#[derive(Debug, Clone)]
pub struct KeywordBooster {
    terms: Vec<String>,
    weight: f32,
}

impl KeywordBooster {
    /// Booster over the built-in financial vocabulary.
    pub fn financial() -> Self {
        Self::from_terms(FINANCIAL_KEYWORDS.iter().map(|s| s.to_string()))
    }

    /// Booster over caller-supplied vocabulary, one entry per line.
    /// Blank lines are skipped; order and repeats are preserved.
    pub fn from_lines(text: &str) -> Self {
        Self::from_terms(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        )
    }

    fn from_terms(terms: impl Iterator<Item = String>) -> Self {
        Self {
            terms: terms.map(|t| t.to_lowercase()).collect(),
            weight: BOOST_WEIGHT,
        }
    }

    /// The score bump for a text: matched entries times the boost weight.
    pub fn boost(&self, text: &str) -> f32 {
        let lowered = text.to_lowercase();
        let hits = self
            .terms
            .iter()
            .filter(|term| lowered.contains(term.as_str()))
            .count();
        hits as f32 * self.weight
    }

    /// Number of vocabulary entries.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}

impl Default for KeywordBooster {
    fn default() -> Self {
        Self::financial()
    }
}
