//! Script-agnostic word tokenizer and acronym detector.

use std::sync::OnceLock;

use regex::Regex;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // \W-negated runs of word characters, optionally followed by an
        // apostrophe (ASCII or typographic) and a further word run — so
        // "couldn't" tokenizes as one token, not two.
        Regex::new(r"[^\W_]+['’]*[^\W_]*").expect("static tokenizer pattern is valid")
    })
}

fn acronym_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Z0-9]{2,}$").expect("static acronym pattern is valid"))
}

/// Extracts a non-unique word list from `phrase`. Non-word runs are
/// separators and discarded. Lowercases unless `preserve_case` is set.
pub fn parse_words(phrase: &str, preserve_case: bool) -> Vec<String> {
    if preserve_case {
        word_pattern().find_iter(phrase).map(|m| m.as_str().to_string()).collect()
    } else {
        let lower = phrase.to_lowercase();
        word_pattern().find_iter(&lower).map(|m| m.as_str().to_string()).collect()
    }
}

/// A token is an acronym iff it is entirely uppercase letters/digits and has
/// length at least 2 (e.g. `ABCDE`, `AB12C`).
pub fn is_acronym(word: &str) -> bool {
    acronym_pattern().is_match(word)
}
