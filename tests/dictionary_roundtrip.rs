//! Integration tests driving the public API end to end: a reader loads
//! records, `SymSpell` indexes them, and `lookup`/`lookup_compound` resolve
//! queries against the result.

use std::io::Write;

use symcorrect::dictionary::{CsvFileIterator, ListIterator};
use symcorrect::{SymSpell, Verbosity};

#[test]
fn canonical_term_survives_a_csv_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "term,count,canonical_term").unwrap();
    for _ in 0..10 {
        writeln!(file, "test,1,canonical test").unwrap();
    }

    let mut sym_spell = SymSpell::new(16, 2, 7, 1).unwrap();
    let entries = CsvFileIterator::new(file.path()).unwrap();
    sym_spell.load_dictionary(entries).unwrap();

    let suggestions = sym_spell.lookup("Test", Verbosity::Closest, None, false, None).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].term, "canonical test");
}

#[test]
fn list_iterator_builds_a_usable_dictionary() {
    let words = vec!["Hello".to_string(), "World".to_string(), "Rust".to_string()];
    let mut sym_spell = SymSpell::new(16, 2, 7, 1).unwrap();
    sym_spell.load_dictionary(ListIterator::new(words.into_iter())).unwrap();

    let suggestions = sym_spell.lookup("helo", Verbosity::Top, Some(2), false, None).unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].term, "Hello");
}

#[test]
fn compound_lookup_joins_spuriously_split_words() {
    let mut sym_spell = SymSpell::new(16, 2, 7, 1).unwrap();
    sym_spell.create_dictionary_entry("inspired", 30, None);

    let result = sym_spell.lookup_compound("ins pired", 2, false).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].term, "inspired");
}

#[test]
fn compound_lookup_splits_a_run_together_token() {
    let mut sym_spell = SymSpell::new(16, 2, 7, 1).unwrap();
    for (term, count) in [("the", 100), ("love", 50), ("is", 90), ("where", 40)] {
        sym_spell.create_dictionary_entry(term, count, None);
    }

    let result = sym_spell.lookup_compound("thelove", 2, false).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].term, "the love");
}
