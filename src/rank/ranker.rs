//! Persona-driven section ranking.

use std::cmp::Ordering;

use crate::model::SectionRecord;

use super::embed::{cosine_similarity, Embedder};
use super::keywords::KeywordBooster;

/// Number of sections kept after ranking.
pub const TOP_SECTIONS: usize = 20;

/// Scores section candidates against a persona description and keeps
/// the best.
pub struct SectionRanker<'a> {
    embedder: &'a dyn Embedder,
    booster: KeywordBooster,
}

impl<'a> SectionRanker<'a> {
    pub fn new(embedder: &'a dyn Embedder) -> Self {
        Self {
            embedder,
            booster: KeywordBooster::default(),
        }
    }

    pub fn with_booster(embedder: &'a dyn Embedder, booster: KeywordBooster) -> Self {
        Self { embedder, booster }
    }

    /// Score, order, and rank the candidates.
    ///
    /// Each section's score is the cosine similarity between the persona
    /// and the section's scoring text, plus the keyword boost computed on
    /// that same text. The top candidates return in descending score
    /// order with 1-indexed ranks; tied scores keep their input order.
    pub fn rank(&self, persona: &str, mut sections: Vec<SectionRecord>) -> Vec<SectionRecord> {
        let persona_vector = self.embedder.embed(persona);

        for section in &mut sections {
            let vector = self.embedder.embed(section.scoring_text());
            let boost = self.booster.boost(section.scoring_text());
            section.score = cosine_similarity(&persona_vector, &vector) + boost;
        }

        sections.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        sections.truncate(TOP_SECTIONS);

        for (i, section) in sections.iter_mut().enumerate() {
            section.rank = (i + 1) as u32;
        }

        sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    /// Embeds along one of two axes depending on a marker token, making
    /// similarity outcomes exact.
    struct KeyedEmbedder;

    impl Embedder for KeyedEmbedder {
        fn embed(&self, text: &str) -> Vec<f32> {
            if text.is_empty() {
                vec![0.0, 0.0]
            } else if text.contains("revenue") {
                vec![1.0, 0.0]
            } else {
                vec![0.0, 1.0]
            }
        }

        fn dimension(&self) -> usize {
            2
        }
    }

    fn section(document: &str, body: &str) -> SectionRecord {
        SectionRecord {
            document: document.to_string(),
            page: 1,
            title: body.chars().take(120).collect(),
            body: body.to_string(),
            level: HeadingLevel::H1,
            language: "en".to_string(),
            bold: false,
            score: 0.0,
            rank: 0,
        }
    }

    #[test]
    fn test_similar_section_ranks_first() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::new(&embedder);

        let sections = vec![
            section("a.pdf", "the library opening hours changed"),
            section("b.pdf", "revenue rose across the board"),
        ];

        let ranked = ranker.rank("revenue analyst", sections);
        assert_eq!(ranked[0].document, "b.pdf");
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
        assert!(ranked[0].score > ranked[1].score);
    }

    #[test]
    fn test_keyword_boost_breaks_similarity_ties() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::new(&embedder);

        // Both sections land on the same embedding axis as the persona;
        // only the vocabulary hits differ
        let sections = vec![
            section("a.pdf", "revenue discussion without other terms"),
            section("b.pdf", "revenue growth and profit figures"),
        ];

        let ranked = ranker.rank("revenue analyst", sections);
        assert_eq!(ranked[0].document, "b.pdf");
        // Cosine 1.0 for both; b.pdf adds revenue + growth + profit
        assert!((ranked[0].score - 1.15).abs() < 1e-5);
        assert!((ranked[1].score - 1.05).abs() < 1e-5);
    }

    #[test]
    fn test_tied_scores_keep_input_order() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::with_booster(&embedder, KeywordBooster::from_lines(""));

        let sections = vec![
            section("first.pdf", "revenue statement alpha"),
            section("second.pdf", "revenue statement beta"),
        ];

        let ranked = ranker.rank("revenue analyst", sections);
        assert_eq!(ranked[0].document, "first.pdf");
        assert_eq!(ranked[1].document, "second.pdf");
    }

    #[test]
    fn test_output_truncated_to_top_sections() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::with_booster(&embedder, KeywordBooster::from_lines(""));

        let sections: Vec<SectionRecord> = (0..25)
            .map(|i| section(&format!("doc{}.pdf", i), "revenue line item"))
            .collect();

        let ranked = ranker.rank("revenue analyst", sections);
        assert_eq!(ranked.len(), TOP_SECTIONS);
        let ranks: Vec<u32> = ranked.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, (1..=20).collect::<Vec<u32>>());
    }

    #[test]
    fn test_empty_persona_scores_by_boost_only() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::new(&embedder);

        let sections = vec![
            section("a.pdf", "completely unrelated gardening notes"),
            section("b.pdf", "profit and loss overview statement"),
        ];

        let ranked = ranker.rank("", sections);
        assert_eq!(ranked[0].document, "b.pdf");
        // Zero persona vector contributes no similarity
        assert!((ranked[0].score - 0.10).abs() < 1e-5);
        assert_eq!(ranked[1].score, 0.0);
    }

    #[test]
    fn test_title_used_when_body_empty() {
        let embedder = KeyedEmbedder;
        let ranker = SectionRanker::with_booster(&embedder, KeywordBooster::from_lines(""));

        let mut with_empty_body = section("a.pdf", "revenue overview");
        with_empty_body.body = String::new();
        let sections = vec![section("b.pdf", "unrelated topic"), with_empty_body];

        let ranked = ranker.rank("revenue analyst", sections);
        assert_eq!(ranked[0].document, "a.pdf");
    }
}
