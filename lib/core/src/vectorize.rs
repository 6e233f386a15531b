//! TF-IDF vectorization of feature text.
//!
//! Builds a vocabulary over a corpus of feature strings and produces one
//! L2-normalized dense weight vector per document. Term weight is
//! `tf * ln(N / df)`, so tokens appearing in every document weigh zero
//! and tokens concentrated in few documents dominate.

use crate::tokenize::tokenize_filtered;
use crate::{Error, Result, Vector};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Mapping from token to column index, shared by all vectors of a corpus
///
/// Columns are assigned in lexicographic token order so the mapping is
/// reproducible across runs on the same corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: Vec<String>) -> Self {
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { terms, index }
    }

    /// Column index of a token, if present
    #[inline]
    pub fn get(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Token at a column index
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get(index).map(String::as_str)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// TF-IDF vectorizer with English stop-word filtering
#[derive(Debug, Clone, Copy, Default)]
pub struct TfidfVectorizer;

impl TfidfVectorizer {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the vocabulary and produce one normalized vector per document
    ///
    /// Deterministic for identical input. A corpus whose documents all
    /// share the same token set is valid but degenerate: every term has
    /// `df == N`, every weight is zero and all similarities collapse to
    /// zero.
    pub fn fit_transform(&self, corpus: &[String]) -> Result<(Vocabulary, Vec<Vector>)> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = corpus.iter().map(|d| tokenize_filtered(d)).collect();

        // Document frequency per surviving token
        let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
        for tokens in &tokenized {
            let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        // Lexicographic column order for reproducibility
        let terms: Vec<String> = doc_freq
            .keys()
            .map(|t| t.to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let vocabulary = Vocabulary::from_terms(terms);

        let n = corpus.len() as f32;
        let idf: Vec<f32> = vocabulary
            .terms
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f32;
                (n / df).ln()
            })
            .collect();

        let vectors = tokenized
            .iter()
            .map(|tokens| {
                let mut tf: AHashMap<&str, f32> = AHashMap::new();
                for token in tokens {
                    *tf.entry(token.as_str()).or_insert(0.0) += 1.0;
                }

                let mut weights = vec![0.0f32; vocabulary.len()];
                for (token, count) in tf {
                    if let Some(col) = vocabulary.get(token) {
                        weights[col] = count * idf[col];
                    }
                }

                let mut vector = Vector::new(weights);
                vector.normalize();
                vector
            })
            .collect();

        Ok((vocabulary, vectors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(docs: &[&str]) -> Vec<String> {
        docs.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_empty_corpus_fails() {
        let vectorizer = TfidfVectorizer::new();
        assert!(matches!(
            vectorizer.fit_transform(&[]),
            Err(Error::EmptyCorpus)
        ));
    }

    #[test]
    fn test_vector_dimensions_match_vocabulary() {
        let vectorizer = TfidfVectorizer::new();
        let (vocabulary, vectors) = vectorizer
            .fit_transform(&corpus(&["space wormhole travel", "dream heist"]))
            .unwrap();

        assert_eq!(vectors.len(), 2);
        for v in &vectors {
            assert_eq!(v.dim(), vocabulary.len());
        }
    }

    #[test]
    fn test_vocabulary_is_lexicographic() {
        let vectorizer = TfidfVectorizer::new();
        let (vocabulary, _) = vectorizer
            .fit_transform(&corpus(&["zebra apple", "mango apple"]))
            .unwrap();

        assert_eq!(vocabulary.term(0), Some("apple"));
        assert_eq!(vocabulary.term(1), Some("mango"));
        assert_eq!(vocabulary.term(2), Some("zebra"));
    }

    #[test]
    fn test_ubiquitous_terms_weigh_zero() {
        let vectorizer = TfidfVectorizer::new();
        let (vocabulary, vectors) = vectorizer
            .fit_transform(&corpus(&["thriller heist", "thriller space"]))
            .unwrap();

        let col = vocabulary.get("thriller").unwrap();
        for v in &vectors {
            assert_eq!(v.as_slice()[col], 0.0);
        }
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let vectorizer = TfidfVectorizer::new();
        let (_, vectors) = vectorizer
            .fit_transform(&corpus(&["dream heist thief", "space travel"]))
            .unwrap();

        for v in &vectors {
            assert!((v.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_identical_corpus_is_degenerate_not_error() {
        let vectorizer = TfidfVectorizer::new();
        let (_, vectors) = vectorizer
            .fit_transform(&corpus(&["same words here", "same words here"]))
            .unwrap();

        // df == N for every term, so all weights are zero
        for v in &vectors {
            assert_eq!(v.norm(), 0.0);
        }
    }

    #[test]
    fn test_determinism() {
        let docs = corpus(&["dream heist thief", "space wormhole travel", "dream space"]);
        let vectorizer = TfidfVectorizer::new();
        let (vocab_a, vecs_a) = vectorizer.fit_transform(&docs).unwrap();
        let (vocab_b, vecs_b) = vectorizer.fit_transform(&docs).unwrap();

        assert_eq!(vocab_a, vocab_b);
        assert_eq!(vecs_a, vecs_b);
    }
}
