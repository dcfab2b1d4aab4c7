//! Whole-phrase compound correction: tokenization, per-token correction,
//! and the join/split heuristics that repair whitespace damage.

use crate::distance::distance;
use crate::error::SpellCheckError;
use crate::index::SymSpell;
use crate::suggestion::Suggestion;
use crate::tokenize::{is_acronym, parse_words};
use crate::verbosity::Verbosity;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end - start).collect()
}

impl SymSpell {
    /// Resolves a whitespace-damaged, noisily misspelled phrase into the
    /// best-matching sequence of dictionary terms. Always returns exactly
    /// one suggestion on success: the summed distance and minimum count
    /// over the chosen per-token corrections.
    pub fn lookup_compound(
        &self,
        phrase: &str,
        max_edit_distance: i64,
        ignore_non_words: bool,
    ) -> Result<Vec<Suggestion>, SpellCheckError> {
        if max_edit_distance > self.max_dictionary_edit_distance || max_edit_distance < 0 {
            return Err(SpellCheckError::LookupParameter(format!(
                "max_edit_distance {max_edit_distance} must be within [0, {}]",
                self.max_dictionary_edit_distance
            )));
        }

        let raw_tokens = parse_words(phrase, true);
        if raw_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut parts: Vec<Suggestion> = Vec::with_capacity(raw_tokens.len());
        let mut pieces: Vec<String> = Vec::with_capacity(raw_tokens.len());
        let mut just_joined = false;

        for raw in &raw_tokens {
            if ignore_non_words && is_acronym(raw) {
                parts.push(Suggestion::verbatim(raw.clone()));
                pieces.push(raw.clone());
                just_joined = false;
                continue;
            }

            let lower = raw.to_lowercase();
            let single = self
                .lookup(&lower, Verbosity::Top, Some(max_edit_distance), true, None)?
                .into_iter()
                .next()
                .unwrap_or_else(|| Suggestion::unknown(&lower, max_edit_distance));

            if !just_joined && !pieces.is_empty() {
                let joined_text = format!("{}{}", pieces[pieces.len() - 1], lower);
                if let Some(joined) = self
                    .lookup(&joined_text, Verbosity::Top, Some(max_edit_distance), true, None)?
                    .into_iter()
                    .next()
                {
                    if joined.distance <= max_edit_distance {
                        let prev = parts.last().expect("pieces non-empty implies parts non-empty");
                        let separate_distance = prev.distance + single.distance;
                        let separate_count = prev.count.min(single.count);
                        let joined_distance = joined.distance + 1; // penalize the removed space
                        let strictly_better = joined_distance < separate_distance;
                        let tie_wins_on_count = joined_distance == separate_distance && joined.count > separate_count;
                        if strictly_better || tie_wins_on_count {
                            let mut merged = joined;
                            merged.distance = joined_distance;
                            merged.input = format!("{} {}", prev.input, raw);
                            let last = parts.len() - 1;
                            parts[last] = merged;
                            let last_piece = pieces.len() - 1;
                            pieces[last_piece] = joined_text;
                            just_joined = true;
                            continue;
                        }
                    }
                }
            }
            just_joined = false;

            let part = if single.distance == 0 || char_len(&lower) == 1 {
                single
            } else {
                best_split(self, &lower, &single, max_edit_distance)
            };

            parts.push(part);
            pieces.push(lower);
        }

        let total_distance: i64 = parts.iter().map(|p| p.distance).sum();
        let min_count = parts.iter().map(|p| p.count).min().unwrap_or(0);
        let term = parts.iter().map(|p| p.term.as_str()).collect::<Vec<_>>().join(" ");

        Ok(vec![Suggestion::new(phrase, term.clone(), term, total_distance, min_count)])
    }
}

/// Tries every split position of `token` into two dictionary words and
/// returns whichever of the single-token correction or the best split
/// scores lower (distance, then higher count).
fn best_split(symspell: &SymSpell, token: &str, single: &Suggestion, max_edit_distance: i64) -> Suggestion {
    let len = char_len(token);
    let mut best_split: Option<Suggestion> = None;

    for j in 1..len {
        let left = char_slice(token, 0, j);
        let right = char_slice(token, j, len);

        let Ok(left_sugg) = symspell.lookup(&left, Verbosity::Top, Some(max_edit_distance), true, None) else {
            continue;
        };
        let Ok(right_sugg) = symspell.lookup(&right, Verbosity::Top, Some(max_edit_distance), true, None) else {
            continue;
        };
        let (Some(l), Some(r)) = (left_sugg.into_iter().next(), right_sugg.into_iter().next()) else {
            continue;
        };
        if l.distance > max_edit_distance || r.distance > max_edit_distance {
            continue;
        }

        let combined_term = format!("{} {}", l.term, r.term);
        let combined_distance = distance(token, &combined_term, char_len(token) as i64 + char_len(&combined_term) as i64);
        let count = l.count.min(r.count);
        let candidate = Suggestion::new(token, format!("{}|{}", l.matched_term, r.matched_term), combined_term, combined_distance, count);

        let keep = match &best_split {
            None => true,
            Some(current) => {
                candidate.distance < current.distance
                    || (candidate.distance == current.distance && candidate.count > current.count)
            }
        };
        if keep {
            best_split = Some(candidate);
        }
    }

    match best_split {
        Some(split) if single.distance > max_edit_distance => split,
        Some(split) if split.distance < single.distance => split,
        Some(split) if split.distance == single.distance && split.count > single.count => split,
        _ => single.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_dictionary() -> SymSpell {
        let mut sym = SymSpell::new(16, 2, 7, 1).unwrap();
        for (term, count) in [("the", 100), ("love", 50), ("is", 90), ("where", 40)] {
            sym.create_dictionary_entry(term, count, None);
        }
        sym
    }

    #[test]
    fn splits_a_run_together_token_into_two_words() {
        let sym = small_dictionary();
        let result = sym.lookup_compound("thelove", 2, false).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].term, "the love");
    }

    #[test]
    fn joins_spuriously_split_words() {
        let mut sym = SymSpell::new(16, 2, 7, 1).unwrap();
        sym.create_dictionary_entry("inspired", 30, None);
        let result = sym.lookup_compound("ins pired", 2, false).unwrap();
        assert_eq!(result[0].term, "inspired");
    }

    #[test]
    fn preserves_acronyms_and_numbers_when_requested() {
        let mut sym = small_dictionary();
        sym.create_dictionary_entry("fun", 20, None);
        let result = sym.lookup_compound("the love PLETY 12 funn", 2, true).unwrap();
        assert!(result[0].term.contains("PLETY"));
        assert!(result[0].term.contains("12"));
        assert!(result[0].term.ends_with("fun"));
    }

    #[test]
    fn empty_phrase_yields_no_suggestions() {
        let sym = small_dictionary();
        let result = sym.lookup_compound("   ", 2, false).unwrap();
        assert!(result.is_empty());
    }
}
