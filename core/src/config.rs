//! Run configuration for the scoring pipeline.
//!
//! Defaults are compiled in; a JSON file (camelCase keys) may override them and
//! the command line overrides the file.

use crate::error::{Result, TfidfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File-name prefix of every exported artifact.
pub const ARTIFACT_PREFIX: &str = "tfidf_";

/// Second lexicon field meaning "no mapping for this surface form".
pub const LEXICON_PLACEHOLDER: &str = "-";

/// Tokens with this many chars or fewer are dropped after normalization.
pub const MIN_TERM_CHARS: usize = 1;

/// How a document's raw term counts become the `tf` factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TermFrequency {
    /// The raw occurrence count.
    #[default]
    Raw,
    /// The count divided by the largest count in the same document.
    MaxNormalized,
}

/// What each exported line contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// `term<TAB>score`
    #[default]
    Both,
    /// `term`
    Term,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for TermFrequency {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "raw" => Ok(TermFrequency::Raw),
            "max-normalized" => Ok(TermFrequency::MaxNormalized),
            other => Err(ParseModeError(format!("unknown term frequency mode `{other}` (expected raw or max-normalized)"))),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "both" => Ok(DisplayMode::Both),
            "term" => Ok(DisplayMode::Term),
            other => Err(ParseModeError(format!("unknown display mode `{other}` (expected both or term)"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Keep only the first k ranked terms per document; unset or k <= 0 keeps all.
    pub top_k: Option<i64>,
    pub display_mode: DisplayMode,
    /// `surface lemma` lexicon; when set the dictionary normalizer replaces lemmatization.
    pub language_resource: Option<PathBuf>,
    pub term_frequency_mode: TermFrequency,
    /// Stopword file, one word per line.
    pub stopwords: Option<PathBuf>,
    /// Add the built-in English stopword list.
    pub english_stopwords: bool,
    /// Base-form word list enabling the morphy lemmatizer instead of Snowball stemming.
    pub wordlist: Option<PathBuf>,
    /// Write artifacts here instead of next to each document.
    pub output_dir: Option<PathBuf>,
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            top_k: None,
            display_mode: DisplayMode::default(),
            language_resource: None,
            term_frequency_mode: TermFrequency::default(),
            stopwords: None,
            english_stopwords: false,
            wordlist: None,
            output_dir: None,
            parallel: true,
        }
    }
}

impl PipelineConfig {
    /// Load a config file. Keys absent from the file keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TfidfError::unavailable(path, e))?;
        serde_json::from_str(&text).map_err(|source| TfidfError::InvalidConfig { path: path.to_path_buf(), source })
    }

    /// The top-k cutoff as a length, `None` meaning "keep everything".
    pub fn cutoff(&self) -> Option<usize> {
        self.top_k.filter(|k| *k > 0).map(|k| k as usize)
    }
}
