//! Binary bag-of-words query vectorization.
//!
//! Maps arbitrary text onto the fixed vocabulary: entry `j` is 1 when
//! vocabulary term `j` occurs in the text as an exact lowercase token, 0
//! otherwise. No stemming, no partial matching. Terms outside the vocabulary
//! are silently ignored.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::vocab::Vocabulary;

/// Presence vector for a query text, in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryVector {
    /// 0/1 per vocabulary term.
    pub vector: Vec<u8>,
    /// Vocabulary terms present in the query, in vocabulary order.
    /// Derived from `vector`, returned as a caller convenience.
    pub matched_terms: Vec<String>,
}

/// Vectorize a query text against the vocabulary.
///
/// Pure and idempotent; an empty text yields an all-zero vector.
pub fn vectorize_query(text: &str, vocab: &Vocabulary) -> QueryVector {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = lowered.split_whitespace().collect();

    let mut vector = vec![0u8; vocab.len()];
    let mut matched_terms = Vec::new();
    for (j, term) in vocab.iter().enumerate() {
        if tokens.contains(term) {
            vector[j] = 1;
            matched_terms.push(term.to_owned());
        }
    }
    QueryVector {
        vector,
        matched_terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::from_terms(["кот", "сидит", "на", "окне", "спит"])
    }

    #[test]
    fn marks_present_terms_in_vocabulary_order() {
        let qv = vectorize_query("кот спит", &vocab());
        assert_eq!(qv.vector, vec![1, 0, 0, 0, 1]);
        assert_eq!(qv.matched_terms, vec!["кот", "спит"]);
    }

    #[test]
    fn empty_text_gives_all_zero_vector() {
        let qv = vectorize_query("", &vocab());
        assert_eq!(qv.vector, vec![0; 5]);
        assert!(qv.matched_terms.is_empty());
    }

    #[test]
    fn unknown_terms_are_ignored() {
        let qv = vectorize_query("собака лает на кота", &vocab());
        assert_eq!(qv.vector, vec![0, 0, 1, 0, 0]);
        assert_eq!(qv.matched_terms, vec!["на"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_exact() {
        let qv = vectorize_query("КОТ коты", &vocab());
        // "кот" matches after lowercasing, "коты" is not a partial match
        assert_eq!(qv.vector, vec![1, 0, 0, 0, 0]);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let v = vocab();
        assert_eq!(vectorize_query("кот на окне", &v), vectorize_query("кот на окне", &v));
    }
}
