//! Morphological lemma lookup.
//!
//! The normalizer asks a [`Lemmatizer`] for the noun form of a token first and
//! falls back to the verb form when that leaves the token unchanged. Two
//! backends exist: Snowball stemming, which needs no resources, and a
//! WordNet-style morphy that only accepts candidates found in a base-form word
//! list.

use crate::error::{Result, TfidfError};
use crate::tokenizer::fold;
use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

pub trait Lemmatizer: Send + Sync {
    /// Best-effort lemma of `word` read as `pos`; returns `word` itself when no rule applies.
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String;
}

/// Snowball English stemmer. Part of speech is ignored.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn english() -> Self {
        Self { stemmer: Stemmer::create(Algorithm::English) }
    }
}

impl Default for SnowballLemmatizer {
    fn default() -> Self {
        Self::english()
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, word: &str, _pos: PartOfSpeech) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

lazy_static! {
    static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("children", "child"), ("men", "man"), ("women", "woman"), ("feet", "foot"),
        ("teeth", "tooth"), ("geese", "goose"), ("mice", "mouse"), ("people", "person"),
        ("oxen", "ox"), ("indices", "index"), ("criteria", "criterion"), ("phenomena", "phenomenon"),
        ("leaves", "leaf"), ("wives", "wife"), ("knives", "knife"), ("lives", "life"),
        ("wolves", "wolf"), ("halves", "half"), ("analyses", "analysis"), ("theses", "thesis"),
    ]
    .into_iter()
    .collect();

    static ref VERB_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("was", "be"), ("were", "be"), ("is", "be"), ("are", "be"), ("am", "be"), ("been", "be"),
        ("being", "be"), ("has", "have"), ("had", "have"), ("did", "do"), ("does", "do"),
        ("done", "do"), ("went", "go"), ("gone", "go"), ("ran", "run"), ("running", "run"),
        ("ate", "eat"), ("eaten", "eat"), ("saw", "see"), ("seen", "see"), ("took", "take"),
        ("taken", "take"), ("made", "make"), ("said", "say"), ("got", "get"), ("getting", "get"),
        ("came", "come"), ("wrote", "write"), ("written", "write"), ("thought", "think"),
        ("brought", "bring"), ("bought", "buy"), ("began", "begin"), ("begun", "begin"),
        ("stopped", "stop"), ("stopping", "stop"), ("sitting", "sit"), ("swimming", "swim"),
    ]
    .into_iter()
    .collect();
}

/// WordNet-style morphy over a caller-supplied lexicon of base forms.
#[derive(Debug, Default, Clone)]
pub struct MorphyLemmatizer {
    nouns: HashSet<String>,
    verbs: HashSet<String>,
}

impl MorphyLemmatizer {
    /// Every word is accepted as both a noun and a verb base form.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lemmatizer = Self::default();
        for w in words {
            let w = fold(w.as_ref());
            lemmatizer.nouns.insert(w.clone());
            lemmatizer.verbs.insert(w);
        }
        lemmatizer
    }

    /// Parse a word list: `word` or `word n|v` per line, blank lines and `#` comments ignored.
    pub fn parse(text: &str) -> Self {
        let mut lemmatizer = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else { continue };
            let word = fold(word);
            match fields.next() {
                Some("n") | Some("noun") => {
                    lemmatizer.nouns.insert(word);
                }
                Some("v") | Some("verb") => {
                    lemmatizer.verbs.insert(word);
                }
                _ => {
                    lemmatizer.nouns.insert(word.clone());
                    lemmatizer.verbs.insert(word);
                }
            }
        }
        lemmatizer
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TfidfError::unavailable(path, e))?;
        let lemmatizer = Self::parse(&text);
        tracing::info!(path = %path.display(), nouns = lemmatizer.nouns.len(), verbs = lemmatizer.verbs.len(), "loaded word list");
        Ok(lemmatizer)
    }

    fn known(&self, pos: PartOfSpeech) -> &HashSet<String> {
        match pos {
            PartOfSpeech::Noun => &self.nouns,
            PartOfSpeech::Verb => &self.verbs,
        }
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str, pos: PartOfSpeech) -> String {
        let (exceptions, rules) = match pos {
            PartOfSpeech::Noun => (&*NOUN_EXCEPTIONS, NOUN_RULES),
            PartOfSpeech::Verb => (&*VERB_EXCEPTIONS, VERB_RULES),
        };
        if let Some(base) = exceptions.get(word) {
            return (*base).to_string();
        }

        let known = self.known(pos);
        let detached = rules.iter().filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix).map(|stem| format!("{stem}{replacement}"))
        });
        // Shortest accepted candidate wins; the first one on ties.
        std::iter::once(word.to_string())
            .chain(detached)
            .filter(|candidate| !candidate.is_empty() && known.contains(candidate))
            .fold(None::<String>, |best, candidate| match best {
                Some(b) if b.chars().count() <= candidate.chars().count() => Some(b),
                _ => Some(candidate),
            })
            .unwrap_or_else(|| word.to_string())
    }
}
