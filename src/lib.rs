/// This crate is a corpus vectorization engine: TF-IDF term weighting,
/// binary bag-of-words query vectors and latent semantic analysis over a
/// fixed document collection.
pub mod error;
pub mod utils;
pub mod vectorizer;

/// Corpus Vectorizer
/// The top-level struct of this crate. Built exactly once from a `Corpus`,
/// it tokenizes the documents, derives the first-occurrence-ordered
/// vocabulary and computes the TF / DF / IDF / TF-IDF matrices.
///
/// Internally, it holds:
/// - The corpus and its tokenized documents
/// - The vocabulary (term -> dimension mapping)
/// - The dense TF matrix and DF / IDF vectors
/// - The cached TF-IDF matrix
///
/// `CorpusVectorizer<E>` has one generic parameter:
/// - `E`: TF-IDF weighting engine (e.g. `DefaultTfIdfEngine`)
///
/// All methods after construction take `&self`, so the built state can be
/// shared across concurrently running requests without synchronization.
pub use vectorizer::CorpusVectorizer;

/// Corpus for the vectorizer
/// Ordered, immutable collection of raw document strings. Loadable from a
/// newline-delimited file; an unreadable file falls back to a single
/// synthetic placeholder document so startup never fails on a missing corpus.
pub use vectorizer::corpus::Corpus;

/// Vocabulary
/// First-occurrence-ordered, deduplicated term set. The index of a term is
/// its canonical dimension in every matrix and vector of this crate.
pub use vectorizer::vocab::Vocabulary;

/// TF-IDF Engine trait and default implementation
/// Implementing `TfIdfEngine` plugs a different weighting strategy into
/// `CorpusVectorizer<E>`. `DefaultTfIdfEngine` performs textbook TF-IDF with
/// add-one smoothed IDF (`ln((N+1)/(df+1)) + 1`).
pub use vectorizer::tfidf::{DefaultTfIdfEngine, TfIdfEngine};

/// Query vector
/// Binary presence vector of an arbitrary text against the fixed vocabulary,
/// with the matched vocabulary terms as a derived summary.
pub use vectorizer::bow::QueryVector;

/// Latent semantic reduction
/// `TruncatedSvd` is the pluggable decomposition capability; `GramSvd` is the
/// provided Jacobi-based backend. `LsaProjection` carries the document
/// projection, the retained singular values and the variance-explained
/// fraction.
pub use vectorizer::lsa::{GramSvd, LsaProjection, TruncatedSvd};

/// Snapshot data structure
/// A serializable, engine-independent image of a built vectorizer, CBOR
/// encoded on disk. Expand it back with `into_vectorizer`.
pub use vectorizer::snapshot::VectorizerData;

/// Error taxonomy and crate-wide `Result` alias.
pub use error::{Result, VectorizerError};
