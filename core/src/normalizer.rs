//! Token → root-form normalization, selected once per run.

use crate::config::LEXICON_PLACEHOLDER;
use crate::error::{Result, TfidfError};
use crate::lemmatizer::{Lemmatizer, PartOfSpeech, SnowballLemmatizer};
use crate::tokenizer::fold;
use std::collections::HashMap;
use std::path::Path;

/// Fixed surface-form → lemma mapping for a foreign-language run.
#[derive(Debug, Default, Clone)]
pub struct Lexicon {
    entries: HashMap<String, String>,
}

impl Lexicon {
    /// Parse `surface lemma` lines. `origin` is only used in error reports.
    ///
    /// Both fields are folded like tokens. Blank lines, identity pairs and
    /// placeholder lemmas are skipped; a line with a surface form but no lemma
    /// is rejected.
    pub fn parse(origin: &Path, text: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(surface) = fields.next() else { continue };
            let Some(lemma) = fields.next() else {
                return Err(TfidfError::MalformedLexiconLine { path: origin.to_path_buf(), line: idx + 1 });
            };
            if lemma == LEXICON_PLACEHOLDER {
                continue;
            }
            let (surface, lemma) = (fold(surface), fold(lemma));
            if surface == lemma {
                continue;
            }
            entries.insert(surface, lemma);
        }
        Ok(Self { entries })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TfidfError::unavailable(path, e))?;
        let lexicon = Self::parse(path, &text)?;
        tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded language resource");
        Ok(lexicon)
    }

    pub fn get(&self, surface: &str) -> Option<&str> {
        self.entries.get(surface).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<S: Into<String>> FromIterator<(S, S)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (S, S)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(s, l)| (s.into(), l.into())).collect() }
    }
}

pub enum Normalizer {
    /// Noun lemma, else verb lemma, else the token itself.
    Morphological(Box<dyn Lemmatizer>),
    /// Lexicon lookup; misses pass through.
    Dictionary(Lexicon),
}

/// Snowball stemming: roots are stems, not always dictionary words.
impl Default for Normalizer {
    fn default() -> Self {
        Normalizer::Morphological(Box::new(SnowballLemmatizer::english()))
    }
}

impl Normalizer {
    pub fn normalize(&self, token: &str) -> String {
        let token = strip_quotes(token);
        match self {
            Normalizer::Morphological(lemmatizer) => {
                let noun = lemmatizer.lemmatize(token, PartOfSpeech::Noun);
                if noun == token {
                    lemmatizer.lemmatize(token, PartOfSpeech::Verb)
                } else {
                    noun
                }
            }
            Normalizer::Dictionary(lexicon) => lexicon.get(token).unwrap_or(token).to_string(),
        }
    }
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}

/// Drop at most one quote character from each end.
fn strip_quotes(token: &str) -> &str {
    let token = token.strip_prefix(is_quote).unwrap_or(token);
    token.strip_suffix(is_quote).unwrap_or(token)
}
