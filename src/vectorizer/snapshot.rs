//! Serializable vectorizer state.
//!
//! `VectorizerData` is a plain-data image of a built [`CorpusVectorizer`]:
//! everything the vectorizer computed at startup, with no engine marker
//! attached. It is CBOR-encoded on disk and can be expanded back into a
//! vectorizer without recomputing any matrix.

use std::io::{Read, Write};

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::corpus::Corpus;
use super::tfidf::TfIdfEngine;
use super::vocab::{tokenize_documents, Vocabulary};
use super::CorpusVectorizer;
use crate::error::{Result, VectorizerError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerData {
    pub documents: Vec<String>,
    pub terms: Vec<String>,
    pub tf: Array2<f64>,
    pub df: Vec<u64>,
    pub idf: Array1<f64>,
    pub tfidf: Array2<f64>,
}

impl VectorizerData {
    pub fn from_vectorizer<E: TfIdfEngine>(vectorizer: &CorpusVectorizer<E>) -> Self {
        Self {
            documents: vectorizer.corpus().documents().to_vec(),
            terms: vectorizer.vocabulary().iter().map(str::to_owned).collect(),
            tf: vectorizer.tf().clone(),
            df: vectorizer.df().to_vec(),
            idf: vectorizer.idf().clone(),
            tfidf: vectorizer.tfidf().clone(),
        }
    }

    /// Expand back into a vectorizer, re-deriving only the token lists.
    ///
    /// Matrix shapes are checked against the document and term counts so a
    /// truncated or mixed-up snapshot is rejected instead of panicking later.
    pub fn into_vectorizer<E: TfIdfEngine>(self) -> Result<CorpusVectorizer<E>> {
        let docs = self.documents.len();
        let terms = self.terms.len();
        for (name, shape) in [("tf", self.tf.shape()), ("tfidf", self.tfidf.shape())] {
            if shape != [docs, terms] {
                return Err(VectorizerError::InconsistentSnapshot(format!(
                    "{name} matrix is {shape:?}, expected [{docs}, {terms}]"
                )));
            }
        }
        if self.df.len() != terms || self.idf.len() != terms {
            return Err(VectorizerError::InconsistentSnapshot(format!(
                "df/idf length {}/{} does not match {terms} terms",
                self.df.len(),
                self.idf.len()
            )));
        }

        let corpus = Corpus::from_documents(self.documents);
        let tokenized = tokenize_documents(&corpus);
        Ok(CorpusVectorizer::from_parts(
            corpus,
            tokenized,
            Vocabulary::from_terms(self.terms),
            self.tf,
            self.df,
            self.idf,
            self.tfidf,
        ))
    }

    /// CBOR-encode into a writer.
    pub fn save<W: Write>(&self, writer: W) -> Result<()> {
        serde_cbor::to_writer(writer, self)?;
        Ok(())
    }

    /// Decode a CBOR snapshot from a reader.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_cbor::from_reader(reader)?)
    }
}
