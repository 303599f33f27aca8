//! Corpus loading.
//!
//! A `Corpus` is the fixed, ordered document collection the vectorizer is
//! built from. It is loaded once at startup and never mutated afterwards.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Ordered, immutable collection of raw document strings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Corpus {
    documents: Vec<String>,
}

impl Corpus {
    /// Build a corpus from an in-memory document list.
    pub fn from_documents<I, S>(documents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a corpus from a newline-delimited text file.
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped. If the
    /// file cannot be read the corpus falls back to a single synthetic
    /// placeholder document so that startup always succeeds.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::read_lines(path) {
            Ok(documents) => {
                info!(
                    "loaded corpus: {} documents from {}",
                    documents.len(),
                    path.display()
                );
                Self { documents }
            }
            Err(err) => {
                warn!(
                    "corpus file {} unreadable ({err}), falling back to placeholder",
                    path.display()
                );
                Self::placeholder(path)
            }
        }
    }

    fn read_lines(path: &Path) -> std::io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(path)?);
        let mut documents = Vec::new();
        for line in reader.lines() {
            let line = line?.trim().to_lowercase();
            if !line.is_empty() {
                documents.push(line);
            }
        }
        Ok(documents)
    }

    /// Single-document stand-in corpus naming the missing file.
    fn placeholder(path: &Path) -> Self {
        Self {
            documents: vec![format!("corpus file {} not found", path.display())],
        }
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn doc_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_trims_lowercases_and_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  The Cat Sat  ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "ANOTHER doc").unwrap();
        file.flush().unwrap();

        let corpus = Corpus::load(file.path());
        assert_eq!(corpus.documents(), &["the cat sat", "another doc"]);
    }

    #[test]
    fn missing_file_falls_back_to_one_placeholder_document() {
        let corpus = Corpus::load("definitely/not/here.txt");
        assert_eq!(corpus.doc_count(), 1);
        assert!(corpus.documents()[0].contains("not found"));
    }
}
