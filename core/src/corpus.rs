//! Per-document term counts and corpus-wide document frequencies.
//!
//! [`CorpusBuilder`] collects documents; [`CorpusBuilder::freeze`] runs the
//! global document-frequency pass and yields a read-only [`Corpus`]. Scores can
//! only be computed from a `Corpus`, so no score ever sees partial counts.

use crate::error::{Result, TfidfError};
use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    local_freq: HashMap<String, u32>,
    max_freq: u32,
    num_terms: usize,
}

impl Document {
    /// Reduce an ordered term sequence to counts.
    pub fn from_terms<P: Into<PathBuf>>(path: P, terms: Vec<String>) -> Self {
        let num_terms = terms.len();
        let mut local_freq: HashMap<String, u32> = HashMap::new();
        for term in terms {
            *local_freq.entry(term).or_insert(0) += 1;
        }
        let max_freq = local_freq.values().copied().max().unwrap_or(0);
        Self { path: path.into(), local_freq, max_freq, num_terms }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn local_freq(&self) -> &HashMap<String, u32> {
        &self.local_freq
    }

    pub fn term_freq(&self, term: &str) -> u32 {
        self.local_freq.get(term).copied().unwrap_or(0)
    }

    /// Largest local count, 0 for a document without terms.
    pub fn max_freq(&self) -> u32 {
        self.max_freq
    }

    /// Total terms, counting repeats.
    pub fn num_terms(&self) -> usize {
        self.num_terms
    }

    pub fn is_empty(&self) -> bool {
        self.local_freq.is_empty()
    }
}

/// Mutable phase: documents are added in any order, tagged with their list position.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    documents: Vec<(usize, Document)>,
    seen: HashSet<PathBuf>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { documents: Vec::with_capacity(n), seen: HashSet::with_capacity(n) }
    }

    /// Add the document found at `position` in the input list.
    pub fn add(&mut self, position: usize, doc: Document) -> Result<()> {
        if !self.seen.insert(identity(&doc.path)) {
            return Err(TfidfError::DuplicateDocument { path: doc.path });
        }
        self.documents.push((position, doc));
        Ok(())
    }

    /// Restore input order and count, for every term, the documents containing it.
    pub fn freeze(mut self) -> Corpus {
        self.documents.sort_by_key(|(position, _)| *position);
        let documents: Vec<Document> = self.documents.into_iter().map(|(_, doc)| doc).collect();

        let mut global_doc_freq: HashMap<String, u32> = HashMap::new();
        for doc in &documents {
            for term in doc.local_freq.keys() {
                *global_doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let num_docs = documents.len() as u32;
        let corpus = Corpus { documents, global_doc_freq, num_docs };
        tracing::info!(num_docs, num_terms = corpus.vocabulary_len(), "aggregated corpus");
        corpus
    }
}

/// `./a.txt` and `a.txt` name the same document.
fn identity(path: &Path) -> PathBuf {
    path.components().filter(|c| !matches!(c, Component::CurDir)).collect()
}

/// Frozen phase: read-only, safe to share across scoring workers.
#[derive(Debug)]
pub struct Corpus {
    documents: Vec<Document>,
    global_doc_freq: HashMap<String, u32>,
    num_docs: u32,
}

impl Corpus {
    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of documents containing `term` at least once.
    pub fn doc_freq(&self, term: &str) -> u32 {
        self.global_doc_freq.get(term).copied().unwrap_or(0)
    }

    /// Distinct terms across the corpus.
    pub fn vocabulary_len(&self) -> usize {
        self.global_doc_freq.len()
    }
}
