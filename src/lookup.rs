//! Single-token correction: candidate generation via the delete index,
//! verification via the edit-distance kernel, and verbosity filtering.

use std::collections::HashSet;

use regex::Regex;

use crate::deletes::edits_prefix;
use crate::distance::distance;
use crate::error::SpellCheckError;
use crate::index::SymSpell;
use crate::suggestion::Suggestion;
use crate::verbosity::Verbosity;

impl SymSpell {
    /// Resolves `input` to a ranked list of dictionary suggestions.
    ///
    /// `max_edit_distance` defaults to `self.max_dictionary_edit_distance`
    /// when `None`; passing a value above that ceiling is a
    /// [`SpellCheckError::LookupParameter`]. `ignore_token`, when it matches
    /// `input`, bypasses both correction and the suggestion cache, returning
    /// the input verbatim.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: Option<i64>,
        include_unknown: bool,
        ignore_token: Option<&Regex>,
    ) -> Result<Vec<Suggestion>, SpellCheckError> {
        let max_edit_distance = max_edit_distance.unwrap_or(self.max_dictionary_edit_distance);
        if max_edit_distance < 0 || max_edit_distance > self.max_dictionary_edit_distance {
            return Err(SpellCheckError::LookupParameter(format!(
                "max_edit_distance {max_edit_distance} must be within [0, {}]",
                self.max_dictionary_edit_distance
            )));
        }

        if let Some(pattern) = ignore_token {
            if pattern.is_match(input) {
                return Ok(vec![Suggestion::verbatim(input)]);
            }
        }

        let cache_key = format!("{input}\u{1}{verbosity:?}\u{1}{max_edit_distance}");
        let matches = if let Some(cached) = self.suggestion_cache.get(&cache_key) {
            tracing::trace!(%input, "suggestion cache hit");
            cached
        } else {
            tracing::trace!(%input, "suggestion cache miss");
            let matches = self.lookup_uncached(input, verbosity, max_edit_distance);
            self.suggestion_cache.set(cache_key, matches.clone());
            matches
        };

        if matches.is_empty() {
            Ok(unknown_or_empty(input, max_edit_distance, include_unknown))
        } else {
            Ok(matches)
        }
    }

    /// Returns only verified dictionary matches (never the synthetic
    /// "unknown" record) so the cached value is independent of
    /// `include_unknown`.
    fn lookup_uncached(&self, input: &str, verbosity: Verbosity, max_edit_distance: i64) -> Vec<Suggestion> {
        let lower = input.to_lowercase();
        let phrase_len = lower.chars().count();

        if (phrase_len as i64 - self.max_length as i64) > max_edit_distance {
            return Vec::new();
        }

        let mut suggestions: Vec<Suggestion> = Vec::new();
        let mut considered: HashSet<String> = HashSet::new();

        if let Some(entry) = self.words.get(&lower) {
            let term = entry.canonical.clone().unwrap_or_else(|| lower.clone());
            suggestions.push(Suggestion::new(input, lower.clone(), term, 0, entry.frequency));
            considered.insert(lower.clone());
        }

        let delete_keys = edits_prefix(&lower, self.prefix_length, max_edit_distance.max(0) as usize);
        for key in &delete_keys {
            let Some(sources) = self.deletes.get(key) else {
                continue;
            };
            for term in sources {
                if considered.contains(term) {
                    continue;
                }
                considered.insert(term.clone());

                let term_len = term.chars().count();
                if (term_len as i64 - phrase_len as i64).abs() > max_edit_distance {
                    continue;
                }

                let d = distance(&lower, term, max_edit_distance);
                if d < 0 {
                    continue;
                }

                let Some(entry) = self.words.get(term) else {
                    continue;
                };
                let output = entry.canonical.clone().unwrap_or_else(|| term.clone());
                suggestions.push(Suggestion::new(input, term.clone(), output, d, entry.frequency));
            }
        }

        suggestions.sort();

        match verbosity {
            Verbosity::Top => suggestions.into_iter().take(1).collect(),
            Verbosity::Closest => {
                let best = suggestions.first().map(|s| s.distance);
                match best {
                    Some(best) => suggestions.into_iter().filter(|s| s.distance == best).collect(),
                    None => Vec::new(),
                }
            }
            Verbosity::All => suggestions,
        }
    }
}

fn unknown_or_empty(input: &str, max_edit_distance: i64, include_unknown: bool) -> Vec<Suggestion> {
    if include_unknown {
        vec![Suggestion::unknown(input, max_edit_distance)]
    } else {
        Vec::new()
    }
}
