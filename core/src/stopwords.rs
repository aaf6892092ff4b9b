//! Case-insensitive stopword filtering.

use crate::error::{Result, TfidfError};
use crate::tokenizer::fold;
use std::collections::HashSet;
use std::path::Path;

const ENGLISH: &[&str] = &[
    "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
    "be","because","been","before","being","below","between","both","but","by",
    "can","can't","cannot","could","couldn't",
    "did","didn't","do","does","doesn't","doing","don't","down","during",
    "each","few","for","from","further",
    "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
    "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
    "let's","me","more","most","mustn't","my","myself",
    "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
    "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
    "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
    "under","until","up","very",
    "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
    "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves",
];

/// Stored folded like tokens; lookups lowercase the candidate.
#[derive(Debug, Default, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self { words: words.into_iter().map(|w| fold(w.as_ref())).collect() }
    }

    /// One word per line; blank lines and `#` comments are ignored.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TfidfError::unavailable(path, e))?;
        let set = Self::from_words(
            text.lines().map(str::trim).filter(|l| !l.is_empty() && !l.starts_with('#')),
        );
        tracing::info!(path = %path.display(), words = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn extend(&mut self, other: StopwordSet) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(&token.to_lowercase())
    }

    /// Keep the tokens that are not stopwords, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens.into_iter().filter(|t| !self.contains(t)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}
