//! Tokenization and vocabulary construction.
//!
//! Tokens are lowercase whitespace-split words. The vocabulary keeps terms in
//! first-occurrence order scanning documents in corpus order; the position of
//! a term inside the set is its canonical dimension everywhere else in the
//! crate (TF columns, query vectors).

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::corpus::Corpus;

/// Lowercase + whitespace-split every document.
///
/// Produces exactly one token list per corpus entry, so a document that
/// contains no tokens still occupies an (empty) slot and a matrix row later.
pub fn tokenize_documents(corpus: &Corpus) -> Vec<Vec<String>> {
    corpus
        .documents()
        .iter()
        .map(|doc| {
            doc.to_lowercase()
                .split_whitespace()
                .map(str::to_owned)
                .collect()
        })
        .collect()
}

/// Ordered, deduplicated term set of a tokenized corpus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    terms: IndexSet<String>,
}

impl Vocabulary {
    /// First-occurrence-ordered deduplication across all tokens.
    pub fn build(tokenized: &[Vec<String>]) -> Self {
        let mut terms = IndexSet::new();
        for doc in tokenized {
            for token in doc {
                // clone only on first occurrence; duplicates are the common case
                if !terms.contains(token.as_str()) {
                    terms.insert(token.clone());
                }
            }
        }
        Self { terms }
    }

    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }

    /// Canonical dimension of a term, if it is part of the vocabulary.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
