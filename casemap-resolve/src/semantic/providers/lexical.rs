//! Deterministic lexical embedding provider.
//!
//! Hashes unigrams and adjacent bigrams into fixed-dimension buckets with
//! sublinear term-frequency weights, then L2-normalizes. No model files,
//! no network — always available, and identical output for identical
//! input, which is what makes resolution reproducible in tests.

use std::collections::HashMap;

use casemap_core::errors::CasemapResult;
use casemap_core::traits::EmbeddingProvider;

/// Bigrams carry more phrase identity than single words.
const BIGRAM_WEIGHT: f32 = 1.5;

pub struct LexicalProvider {
    dimensions: usize,
}

impl LexicalProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket index, namespaced so a unigram and a bigram of the
    /// same bytes land in different buckets.
    fn bucket(namespace: u8, term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        h ^= namespace as u64;
        h = h.wrapping_mul(0x100000001b3);
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|s| s.len() >= 2)
            .map(|s| s.to_lowercase())
            .collect()
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let tokens = Self::tokenize(text);
        let mut vec = vec![0.0f32; self.dimensions];
        if tokens.is_empty() {
            return vec;
        }

        let mut counts: HashMap<(u8, String), f32> = HashMap::new();
        for tok in &tokens {
            *counts.entry((0, tok.clone())).or_default() += 1.0;
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            *counts.entry((1, bigram)).or_default() += 1.0;
        }

        for ((namespace, term), count) in &counts {
            let tf = 1.0 + count.ln();
            let weight = if *namespace == 1 { BIGRAM_WEIGHT } else { 1.0 };
            let bucket = Self::bucket(*namespace, term, self.dimensions);
            vec[bucket] += tf * weight;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl EmbeddingProvider for LexicalProvider {
    fn embed(&self, text: &str) -> CasemapResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> CasemapResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "lexical"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::cosine_similarity;

    #[test]
    fn empty_text_is_a_zero_vector() {
        let p = LexicalProvider::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_has_configured_dimensions() {
        let p = LexicalProvider::new(384);
        assert_eq!(p.embed("modular construction").unwrap().len(), 384);
    }

    #[test]
    fn output_is_unit_norm() {
        let p = LexicalProvider::new(256);
        let v = p.embed("supplier fragmentation and holdup risk").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = LexicalProvider::new(256);
        assert_eq!(
            p.embed("network effects").unwrap(),
            p.embed("network effects").unwrap()
        );
    }

    #[test]
    fn shared_words_raise_similarity() {
        let p = LexicalProvider::new(256);
        let a = p.embed("network effects").unwrap();
        let b = p.embed("network externalities").unwrap();
        let c = p.embed("regulatory compliance cost").unwrap();
        assert!(cosine_similarity(&a, &b) > cosine_similarity(&a, &c));
    }

    #[test]
    fn batch_matches_individual() {
        let p = LexicalProvider::new(128);
        let texts = vec!["switching costs".to_string(), "learning curve".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }
}
