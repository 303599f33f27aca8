//! TF-IDF weighting.
//!
//! The engine is a trait so alternative weighting strategies can be plugged
//! into [`CorpusVectorizer`](super::CorpusVectorizer); `DefaultTfIdfEngine`
//! implements the textbook scheme with smoothed IDF:
//!
//! - `tf[i][j]    = count(term j in doc i) / len(doc i)`
//! - `idf[j]      = ln((N + 1) / (df[j] + 1)) + 1`
//! - `tfidf[i][j] = tf[i][j] * idf[j]`
//!
//! A zero-token document yields an all-zero TF row instead of dividing by
//! zero. Each document is scanned once into a term-count map, so the build is
//! O(doc_count * avg_doc_length) plus the O(doc_count * vocab_size) matrix
//! fill.

use std::collections::{HashMap, HashSet};

use ndarray::{Array1, Array2};
use rayon::prelude::*;

use super::vocab::Vocabulary;

/// Pluggable TF-IDF weighting strategy.
pub trait TfIdfEngine {
    /// Row-per-document term-frequency matrix, shape (doc_count, vocab_size).
    fn tf_matrix(tokenized: &[Vec<String>], vocab: &Vocabulary) -> Array2<f64>;

    /// Number of documents containing each vocabulary term at least once.
    fn df_vec(tokenized: &[Vec<String>], vocab: &Vocabulary) -> Vec<u64>;

    /// Inverse document frequency per vocabulary term.
    fn idf_vec(df: &[u64], doc_count: usize) -> Array1<f64>;

    /// Elementwise product broadcast over columns.
    fn tfidf_matrix(tf: &Array2<f64>, idf: &Array1<f64>) -> Array2<f64> {
        tf * idf
    }
}

/// Textbook TF-IDF with add-one smoothed IDF.
#[derive(Debug, Default)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    fn tf_matrix(tokenized: &[Vec<String>], vocab: &Vocabulary) -> Array2<f64> {
        // term counting per document is independent work, done in parallel;
        // the sequential fill afterwards keeps the matrix write single-owner
        let rows: Vec<Vec<(usize, f64)>> = tokenized
            .par_iter()
            .map(|doc| {
                if doc.is_empty() {
                    // zero-token guard: the row stays all-zero
                    return Vec::new();
                }
                let mut counts: HashMap<&str, u32> = HashMap::new();
                for token in doc {
                    *counts.entry(token.as_str()).or_insert(0) += 1;
                }
                let doc_len = doc.len() as f64;
                counts
                    .into_iter()
                    .filter_map(|(term, count)| {
                        vocab.index_of(term).map(|j| (j, f64::from(count) / doc_len))
                    })
                    .collect()
            })
            .collect();

        let mut tf = Array2::<f64>::zeros((tokenized.len(), vocab.len()));
        for (i, row) in rows.into_iter().enumerate() {
            for (j, value) in row {
                tf[[i, j]] = value;
            }
        }
        tf
    }

    fn df_vec(tokenized: &[Vec<String>], vocab: &Vocabulary) -> Vec<u64> {
        let mut df = vec![0u64; vocab.len()];
        for doc in tokenized {
            let unique: HashSet<&str> = doc.iter().map(String::as_str).collect();
            for term in unique {
                if let Some(j) = vocab.index_of(term) {
                    df[j] += 1;
                }
            }
        }
        df
    }

    fn idf_vec(df: &[u64], doc_count: usize) -> Array1<f64> {
        let n = doc_count as f64;
        df.iter()
            .map(|&freq| ((n + 1.0) / (freq as f64 + 1.0)).ln() + 1.0)
            .collect()
    }
}
