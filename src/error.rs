//! Error types for the corpus vectorizer.
//!
//! Uses `thiserror` for `Display` and `Error` implementations. Numeric edge
//! cases (zero-token documents, out-of-range component counts) are caught at
//! the boundary of the responsible component and surfaced here; they are never
//! allowed to escape as a panic from the linear algebra layer.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, VectorizerError>;

#[derive(Debug, Error)]
pub enum VectorizerError {
    /// Requested LSA rank is outside `1..limit` where
    /// `limit = min(doc_count, vocab_size)`.
    #[error("invalid component count {requested}: must satisfy 1 <= n < {limit}")]
    InvalidComponents { requested: usize, limit: usize },

    /// I/O failure while reading or writing a snapshot.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot encode/decode failure.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_cbor::Error),

    /// A deserialized snapshot whose matrices do not agree on shape.
    #[error("inconsistent snapshot: {0}")]
    InconsistentSnapshot(String),
}
