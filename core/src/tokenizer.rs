use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    // Anchor spans and other tags stay whole; otherwise runs of word chars plus ' @ #.
    static ref RE: Regex = Regex::new(r"<a.*?/a>|<[^>]*>|[\w'@#]+").expect("valid regex");
}

/// Split text into lowercase candidate terms after NFKC normalization.
///
/// Punctuation other than `'`, `@` and `#` separates tokens. Never fails; empty
/// input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = fold(text);
    RE.find_iter(&normalized).map(|m| m.as_str().to_string()).collect()
}

/// NFKC then lowercase. Resources matched against tokens go through the same fold.
pub fn fold(text: &str) -> String {
    text.nfkc().collect::<String>().to_lowercase()
}
