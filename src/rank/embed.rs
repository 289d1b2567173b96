//! Text embedding for relevance scoring.

/// Default embedding dimension.
const DEFAULT_DIMENSION: usize = 384;

/// Minimum token length kept by the tokenizer, in characters.
const MIN_TOKEN_CHARS: usize = 2;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Turns text into fixed-dimension vectors for cosine comparison.
pub trait Embedder {
    /// Embed a text into a vector of `dimension()` components.
    fn embed(&self, text: &str) -> Vec<f32>;

    /// The embedding dimension.
    fn dimension(&self) -> usize;
}

/// Deterministic bag-of-tokens embedder.
///
/// Tokens are lowercased alphanumeric runs of at least two characters.
/// Each token is hashed (FNV-1a) into one of `dimension` buckets and the
/// bucket counts are L2-normalized, giving texts that share vocabulary a
/// high cosine similarity without any model weights on disk.
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl Embedder for HashEmbedder {
    fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dimension];

        for token in tokenize(text) {
            let bucket = (fnv1a(token.as_bytes()) % self.dimension as u64) as usize;
            vector[bucket] += 1.0;
        }

        normalize(&mut vector);
        vector
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Cosine similarity of two vectors. Returns 0.0 when either vector has
/// no magnitude, so empty texts never score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|v| v * v).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|v| v * v).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

/// Split text into lowercased alphanumeric runs, dropping single
/// characters.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() {
            current.extend(c.to_lowercase());
        } else {
            flush_token(&mut current, &mut tokens);
        }
    }
    flush_token(&mut current, &mut tokens);

    tokens
}

fn flush_token(current: &mut String, tokens: &mut Vec<String>) {
    if current.chars().count() >= MIN_TOKEN_CHARS {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// FNV-1a hash, the bucket function for token counting.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

fn normalize(vector: &mut [f32]) {
    let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in vector.iter_mut() {
            *v /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("A big-data pipeline"), vec!["big", "data", "pipeline"]);
        assert!(tokenize("R&D").is_empty());
        assert_eq!(tokenize("Q1 2024"), vec!["q1", "2024"]);
    }

    #[test]
    fn test_tokenize_handles_unicode() {
        assert_eq!(tokenize("Études économiques"), vec!["études", "économiques"]);
    }

    #[test]
    fn test_embedding_is_normalized() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("revenue growth across markets");
        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        assert_eq!(vector.len(), embedder.dimension());
    }

    #[test]
    fn test_empty_text_embeds_to_zero() {
        let embedder = HashEmbedder::new();
        let vector = embedder.embed("");
        assert!(vector.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_identical_texts_have_unit_similarity() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("net income rose in the final quarter");
        let b = embedder.embed("net income rose in the final quarter");
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_shared_vocabulary_scores_positive() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("revenue analysis for the year");
        let b = embedder.embed("revenue fell sharply");
        assert!(cosine_similarity(&a, &b) > 0.0);
    }

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = HashEmbedder::new();
        let a = embedder.embed("balance sheet positions");
        let b = embedder.embed("balance sheet positions");
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_vector_similarity_is_zero() {
        let zero = vec![0.0f32; 4];
        let unit = vec![1.0f32, 0.0, 0.0, 0.0];
        assert_eq!(cosine_similarity(&zero, &unit), 0.0);
        assert_eq!(cosine_similarity(&unit, &zero), 0.0);
    }

    #[test]
    fn test_custom_dimension() {
        let embedder = HashEmbedder::with_dimension(16);
        assert_eq!(embedder.dimension(), 16);
        assert_eq!(embedder.embed("anything at all").len(), 16);
    }
}
