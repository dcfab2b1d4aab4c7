//! The symmetric-delete index: dictionary storage, delete-key index, and
//! construction-time parameter validation.

use std::collections::HashMap;

use cachers::{Cache, LFUCache};
use serde::Serialize;

use crate::deletes::edits_prefix;
use crate::error::SpellCheckError;

const SUGGESTION_CACHE_CAPACITY: usize = 10_000;

/// A single dictionary term's stored frequency and optional preferred
/// display spelling.
#[derive(Debug, Clone, Serialize)]
pub struct WordEntry {
    pub frequency: i64,
    pub canonical: Option<String>,
}

/// Owns a dictionary (`words`), its delete-key index (`deletes`), and the
/// tuning parameters fixed at construction. One instance is a fully
/// independent corrector; nothing here is process-global.
pub struct SymSpell {
    pub(crate) words: HashMap<String, WordEntry>,
    pub(crate) below_threshold_words: HashMap<String, i64>,
    pub(crate) deletes: HashMap<String, Vec<String>>,
    pub(crate) max_length: usize,
    /// Reserved for future use; not populated by any current operation.
    #[allow(dead_code)]
    pub(crate) bigrams: HashMap<String, i64>,

    pub(crate) initial_capacity: usize,
    pub max_dictionary_edit_distance: i64,
    pub(crate) prefix_length: usize,
    pub(crate) count_threshold: i64,

    pub(crate) suggestion_cache: LFUCache<String, Vec<crate::suggestion::Suggestion>>,
}

impl SymSpell {
    /// Constructs an empty index. `prefix_length` must be at least
    /// `max_dictionary_edit_distance`, and `max_dictionary_edit_distance`
    /// must be nonnegative, or construction fails with
    /// [`SpellCheckError::Configuration`].
    pub fn new(
        initial_capacity: usize,
        max_dictionary_edit_distance: i64,
        prefix_length: usize,
        count_threshold: i64,
    ) -> Result<Self, SpellCheckError> {
        if max_dictionary_edit_distance < 0 {
            return Err(SpellCheckError::Configuration(
                "max_dictionary_edit_distance must be nonnegative".to_string(),
            ));
        }
        if (prefix_length as i64) < max_dictionary_edit_distance {
            return Err(SpellCheckError::Configuration(format!(
                "prefix_length ({prefix_length}) must be >= max_dictionary_edit_distance ({max_dictionary_edit_distance})"
            )));
        }
        if count_threshold < 0 {
            return Err(SpellCheckError::Configuration(
                "count_threshold must be nonnegative".to_string(),
            ));
        }

        Ok(Self {
            words: HashMap::with_capacity(initial_capacity),
            below_threshold_words: HashMap::new(),
            deletes: HashMap::with_capacity(initial_capacity),
            max_length: 0,
            bigrams: HashMap::new(),
            initial_capacity,
            max_dictionary_edit_distance,
            prefix_length,
            count_threshold,
            suggestion_cache: LFUCache::new(SUGGESTION_CACHE_CAPACITY),
        })
    }

    /// The number of dictionary keys currently in `words` (terms still
    /// below `count_threshold` are not counted).
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Inserts or accumulates one dictionary entry. Returns `true` iff a
    /// new key was created in `words` (a count bump on an existing key
    /// returns `false`).
    pub fn create_dictionary_entry(&mut self, term: &str, count: i64, canonical: Option<&str>) -> bool {
        if count <= 0 && !self.words.contains_key(term) {
            return false;
        }

        if let Some(entry) = self.words.get_mut(term) {
            entry.frequency = entry.frequency.saturating_add(count);
            if let Some(canonical) = canonical {
                if entry.canonical.as_deref() != Some(canonical) {
                    tracing::warn!(%term, %canonical, "overwriting canonical form for existing dictionary entry");
                }
                entry.canonical = Some(canonical.to_string());
            }
            self.suggestion_cache.clear();
            return false;
        }

        let previous_below_threshold = self.below_threshold_words.remove(term).unwrap_or(0);
        let accumulated = previous_below_threshold.saturating_add(count);

        if accumulated < self.count_threshold {
            self.below_threshold_words.insert(term.to_string(), accumulated);
            return false;
        }

        self.words.insert(
            term.to_string(),
            WordEntry {
                frequency: accumulated,
                canonical: canonical.map(|c| c.to_string()),
            },
        );

        let term_len = term.chars().count();
        if term_len > self.max_length {
            self.max_length = term_len;
        }

        let max_delete_distance = self.max_dictionary_edit_distance as usize;
        for key in edits_prefix(term, self.prefix_length, max_delete_distance) {
            let sources = self.deletes.entry(key).or_default();
            if !sources.contains(&term.to_string()) {
                sources.push(term.to_string());
            }
        }

        self.suggestion_cache.clear();
        true
    }

    /// Consumes a dictionary-entry iterator, calling
    /// [`SymSpell::create_dictionary_entry`] for each `(term, count,
    /// canonical)` triple after lowercasing `term`. Returns the number of
    /// terms newly created (not merely count-bumped).
    pub fn load_dictionary<I>(&mut self, iter: I) -> Result<usize, SpellCheckError>
    where
        I: IntoIterator<Item = (String, i64, Option<String>)>,
    {
        let mut created = 0;
        let mut total = 0;
        for (term, count, canonical) in iter {
            total += 1;
            let lower = term.to_lowercase();
            if self.create_dictionary_entry(&lower, count, canonical.as_deref()) {
                created += 1;
            }
        }
        tracing::info!(
            total_records = total,
            new_words = created,
            word_count = self.word_count(),
            below_threshold = self.below_threshold_words.len(),
            "dictionary load complete"
        );
        Ok(created)
    }
}
