pub mod bow;
pub mod corpus;
pub mod lsa;
pub mod snapshot;
pub mod tfidf;
pub mod vocab;

use std::marker::PhantomData;
use std::time::Instant;

use log::{debug, info};
use ndarray::{Array1, Array2};

use crate::error::Result;
use self::bow::QueryVector;
use self::corpus::Corpus;
use self::lsa::{GramSvd, LsaProjection, TruncatedSvd};
use self::tfidf::{DefaultTfIdfEngine, TfIdfEngine};
use self::vocab::Vocabulary;

/// One-shot-built, read-only vectorization state.
///
/// Construction tokenizes the corpus, builds the vocabulary and computes the
/// TF / DF / IDF / TF-IDF matrices exactly once. Every method afterwards takes
/// `&self`, so a built vectorizer can be shared freely across threads with no
/// locking; per-request outputs (query vectors, LSA projections) are computed
/// fresh on every call and never cached.
///
/// The weighting strategy is the type parameter `E`; `DefaultTfIdfEngine`
/// is the smoothed textbook scheme.
#[derive(Debug, Clone)]
pub struct CorpusVectorizer<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    corpus: Corpus,
    tokenized: Vec<Vec<String>>,
    vocabulary: Vocabulary,
    tf: Array2<f64>,
    df: Vec<u64>,
    idf: Array1<f64>,
    tfidf: Array2<f64>,
    _engine: PhantomData<E>,
}

impl<E> CorpusVectorizer<E>
where
    E: TfIdfEngine,
{
    /// Build the full vectorization state from a corpus.
    pub fn build(corpus: Corpus) -> Self {
        let start = Instant::now();
        let tokenized = vocab::tokenize_documents(&corpus);
        let vocabulary = Vocabulary::build(&tokenized);
        let tf = E::tf_matrix(&tokenized, &vocabulary);
        let df = E::df_vec(&tokenized, &vocabulary);
        let idf = E::idf_vec(&df, tokenized.len());
        let tfidf = E::tfidf_matrix(&tf, &idf);
        info!(
            "vectorizer ready: {} documents, {} terms ({:.2}ms)",
            corpus.doc_count(),
            vocabulary.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );
        Self {
            corpus,
            tokenized,
            vocabulary,
            tf,
            df,
            idf,
            tfidf,
            _engine: PhantomData,
        }
    }

    pub(crate) fn from_parts(
        corpus: Corpus,
        tokenized: Vec<Vec<String>>,
        vocabulary: Vocabulary,
        tf: Array2<f64>,
        df: Vec<u64>,
        idf: Array1<f64>,
        tfidf: Array2<f64>,
    ) -> Self {
        Self {
            corpus,
            tokenized,
            vocabulary,
            tf,
            df,
            idf,
            tfidf,
            _engine: PhantomData,
        }
    }

    /// Binary bag-of-words vector of `text` against the fixed vocabulary.
    pub fn bag_of_words(&self, text: &str) -> QueryVector {
        debug!("bag-of-words over {} chars", text.len());
        bow::vectorize_query(text, &self.vocabulary)
    }

    /// Latent semantic projection with the default Gram-matrix SVD backend.
    pub fn lsa(&self, n_components: usize) -> Result<LsaProjection> {
        self.lsa_with(n_components, &GramSvd)
    }

    /// Latent semantic projection with a caller-supplied SVD backend.
    pub fn lsa_with<S: TruncatedSvd>(
        &self,
        n_components: usize,
        backend: &S,
    ) -> Result<LsaProjection> {
        let start = Instant::now();
        let result = lsa::reduce(&self.tfidf, n_components, backend)?;
        debug!(
            "lsa k={} variance={:.4} ({:.2}ms)",
            n_components,
            result.variance_explained,
            start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(result)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn tokenized_documents(&self) -> &[Vec<String>] {
        &self.tokenized
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn tf(&self) -> &Array2<f64> {
        &self.tf
    }

    pub fn df(&self) -> &[u64] {
        &self.df
    }

    pub fn idf(&self) -> &Array1<f64> {
        &self.idf
    }

    /// The cached TF-IDF matrix, shape (doc_count, vocab_size).
    pub fn tfidf(&self) -> &Array2<f64> {
        &self.tfidf
    }

    pub fn doc_count(&self) -> usize {
        self.corpus.doc_count()
    }

    pub fn vocab_size(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built() -> CorpusVectorizer {
        CorpusVectorizer::build(Corpus::from_documents(["кот сидит на окне", "кот спит"]))
    }

    #[test]
    fn build_computes_the_worked_example() {
        let v = built();
        assert_eq!(v.doc_count(), 2);
        assert_eq!(v.vocab_size(), 5);
        assert_eq!(v.df(), &[2, 1, 1, 1, 1]);
        assert!((v.idf()[0] - 1.0).abs() < 1e-12);
        assert!((v.tfidf()[[1, 0]] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tf_entries_stay_within_unit_interval() {
        let v: CorpusVectorizer = CorpusVectorizer::build(Corpus::from_documents([
            "a a a a",
            "b",
            "",
            "a b c d e f",
        ]));
        assert!(v.tf().iter().all(|&x| (0.0..=1.0).contains(&x)));
        assert!(v.tf().row(2).iter().all(|&x| x == 0.0));
    }

    #[test]
    fn empty_corpus_builds_zero_row_state() {
        let v: CorpusVectorizer = CorpusVectorizer::build(Corpus::from_documents(Vec::<String>::new()));
        assert_eq!(v.doc_count(), 0);
        assert_eq!(v.vocab_size(), 0);
        assert_eq!(v.tfidf().shape(), &[0, 0]);
        assert!(v.lsa(1).is_err());
    }

    #[test]
    fn lsa_validates_against_matrix_dimensions() {
        let v = built();
        // min(2 docs, 5 terms) = 2, so only k = 1 is valid
        assert!(v.lsa(0).is_err());
        assert!(v.lsa(2).is_err());
        let lsa = v.lsa(1).unwrap();
        assert_eq!(lsa.projection.shape(), &[2, 1]);
        assert!(lsa.variance_explained > 0.0 && lsa.variance_explained <= 1.0);
    }

    #[test]
    fn bag_of_words_marks_known_terms() {
        let v = built();
        assert_eq!(v.bag_of_words("кот спит").vector, vec![1, 0, 0, 0, 1]);
    }
}
