//! Corpus-wide TF-IDF scoring: tokenize, normalize, filter, aggregate, score,
//! rank and export one ranked term list per document.

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod lemmatizer;
pub mod normalizer;
pub mod pipeline;
pub mod rank;
pub mod scorer;
pub mod stopwords;
pub mod tokenizer;

pub use config::{DisplayMode, PipelineConfig, TermFrequency};
pub use corpus::{Corpus, CorpusBuilder, Document};
pub use error::{Result, TfidfError};
pub use pipeline::{Analyzer, Pipeline, RunSummary};
pub use scorer::ScoredTerm;
