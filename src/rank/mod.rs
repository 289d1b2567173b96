//! Persona-driven relevance ranking.

mod embed;
mod keywords;
mod ranker;

pub use embed::{cosine_similarity, Embedder, HashEmbedder};
pub use keywords::KeywordBooster;
pub use ranker::{SectionRanker, TOP_SECTIONS};
