//! Suggestion records and their total ordering.

use std::cmp::Ordering;

use serde::Serialize;

use crate::distance::{distance, to_similarity};

/// A single candidate correction produced by [`crate::SymSpell::lookup`] or
/// [`crate::SymSpell::lookup_compound`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// The token that was looked up.
    pub input: String,
    /// The dictionary key that was matched (lowercased, post-normalization).
    pub matched_term: String,
    /// The term to display: `canonical` if the dictionary entry has one,
    /// otherwise equal to `matched_term`.
    pub term: String,
    pub distance: i64,
    pub count: i64,
}

impl Suggestion {
    pub fn new(input: impl Into<String>, matched_term: impl Into<String>, term: impl Into<String>, distance: i64, count: i64) -> Self {
        Self {
            input: input.into(),
            matched_term: matched_term.into(),
            term: term.into(),
            distance,
            count,
        }
    }

    /// A suggestion for a token that bypassed correction (ignore pattern or
    /// acronym preservation): the input is echoed back verbatim.
    pub fn verbatim(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            matched_term: token.clone(),
            term: token.clone(),
            input: token,
            distance: 0,
            count: i64::MAX,
        }
    }

    /// The synthetic record returned when `include_unknown` is set and no
    /// suggestion was found.
    pub fn unknown(input: impl Into<String>, max_edit_distance: i64) -> Self {
        let input = input.into();
        Self {
            matched_term: input.clone(),
            term: input.clone(),
            input,
            distance: max_edit_distance + 1,
            count: 0,
        }
    }

    /// Similarity between this suggestion's input and its displayed term,
    /// used to break ties between otherwise-equal suggestions (4.4 rule 3).
    fn output_similarity(&self) -> f64 {
        let len = self.term.chars().count();
        if len == 0 {
            return -1.0;
        }
        let d = distance(&self.input, &self.term, i64::MAX);
        to_similarity(d, len)
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| other.count.cmp(&self.count))
            .then_with(|| {
                other
                    .output_similarity()
                    .partial_cmp(&self.output_similarity())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sort(mut items: Vec<Suggestion>) -> Vec<Suggestion> {
        items.sort();
        items
    }

    #[test]
    fn smaller_distance_wins() {
        let a = Suggestion::new("x", "a", "a", 1, 1);
        let b = Suggestion::new("x", "b", "b", 2, 100);
        let sorted = sort(vec![b, a]);
        assert_eq!(sorted[0].matched_term, "a");
    }

    #[test]
    fn tie_on_distance_prefers_higher_count() {
        let items = vec![
            Suggestion::new("Ste-Paule", "St-Paul", "Saint-Paul-d'Abbotsford", 2, 1),
            Suggestion::new("Ste-Paule", "St-Paul", "Saint-Paul", 2, 10),
            Suggestion::new("Ste-Paule", "St-Paul", "Saint-Paul-de-l'Île-aux-Noix", 2, 7),
        ];
        let sorted = sort(items);
        assert_eq!(sorted[0].term, "Saint-Paul");
        assert_eq!(sorted[0].count, 10);
    }

    #[test]
    fn canonical_similarity_breaks_ties() {
        let items = vec![
            Suggestion::new("San Pualo", "San Paulo", "San Paulo City", 1, 1),
            Suggestion::new("San Paulo", "Sao Paulo", "São Paulo", 1, 1),
        ];
        let sorted = sort(items);
        assert_eq!(sorted[0].term, "São Paulo");
        assert_eq!(sorted[0].matched_term, "Sao Paulo");
    }
}
