//! Parallel batch correction over many tokens at once.

use rayon::prelude::*;

use crate::error::SpellCheckError;
use crate::index::SymSpell;
use crate::suggestion::Suggestion;
use crate::verbosity::Verbosity;

impl SymSpell {
    /// Runs [`SymSpell::lookup`] across `tokens` concurrently via `rayon`.
    /// Safe only when no `create_dictionary_entry`/`load_dictionary` call is
    /// in flight on the same instance — mirrors the teacher's
    /// `suggest_word_corrections`, which assumes a read-only, fully-built
    /// dictionary.
    pub fn correct_tokens(
        &self,
        tokens: &[String],
        verbosity: Verbosity,
        max_edit_distance: Option<i64>,
    ) -> Result<Vec<Vec<Suggestion>>, SpellCheckError> {
        tokens
            .par_iter()
            .map(|token| self.lookup(token, verbosity, max_edit_distance, false, None))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrects_every_token_in_the_batch() {
        let mut sym = SymSpell::new(16, 2, 7, 1).unwrap();
        sym.create_dictionary_entry("hello", 10, None);
        sym.create_dictionary_entry("world", 10, None);

        let tokens = vec!["hllo".to_string(), "wrold".to_string(), "hello".to_string()];
        let results = sym.correct_tokens(&tokens, Verbosity::Top, Some(2)).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0][0].term, "hello");
        assert_eq!(results[1][0].term, "world");
        assert_eq!(results[2][0].distance, 0);
    }

    #[test]
    fn propagates_a_bad_max_edit_distance_as_an_error() {
        let sym = SymSpell::new(16, 2, 7, 1).unwrap();
        let tokens = vec!["anything".to_string()];
        assert!(sym.correct_tokens(&tokens, Verbosity::Top, Some(5)).is_err());
    }
}
