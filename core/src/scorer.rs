//! TF-IDF over a frozen [`Corpus`].

use crate::config::TermFrequency;
use crate::corpus::{Corpus, Document};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

/// `ln((1 + N) / (1 + df))`. Non-negative whenever `df <= N`.
pub fn idf(num_docs: u32, doc_freq: u32) -> f64 {
    ((1.0 + num_docs as f64) / (1.0 + doc_freq as f64)).ln()
}

/// Score every distinct term of `doc`. An empty document yields an empty vector.
pub fn score_document(corpus: &Corpus, doc: &Document, mode: TermFrequency) -> Vec<ScoredTerm> {
    let n = corpus.num_docs();
    let max_freq = doc.max_freq() as f64;
    doc.local_freq()
        .iter()
        .map(|(term, &freq)| {
            let df = corpus.doc_freq(term);
            let idf = idf(n, df);
            let tf = match mode {
                TermFrequency::Raw => freq as f64,
                TermFrequency::MaxNormalized => freq as f64 / max_freq,
            };
            tracing::debug!(%term, tf, df, idf, "scored term");
            ScoredTerm { term: term.clone(), score: tf * idf }
        })
        .collect()
}
