//! Delete-neighborhood generation for the symmetric-delete index.

use std::collections::HashSet;

/// Recursively adds to `accumulator` every string obtainable from `term` by
/// deleting up to `max_distance - current_distance` further characters.
/// Recursion depth is bounded by `max_distance` (typically 2).
fn edits(term: &[char], current_distance: usize, max_distance: usize, accumulator: &mut HashSet<String>) {
    if current_distance >= max_distance {
        return;
    }
    for i in 0..term.len() {
        let mut shorter = Vec::with_capacity(term.len() - 1);
        shorter.extend_from_slice(&term[..i]);
        shorter.extend_from_slice(&term[i + 1..]);
        let shorter_str: String = shorter.iter().collect();
        if accumulator.insert(shorter_str) {
            edits(&shorter, current_distance + 1, max_distance, accumulator);
        }
    }
}

/// Caps `term` to its first `prefix_length` code points, includes the capped
/// term itself as a key, and generates every further delete-key within
/// `max_distance` deletions. Returns a deduplicated set.
pub fn edits_prefix(term: &str, prefix_length: usize, max_distance: usize) -> HashSet<String> {
    let chars: Vec<char> = term.chars().collect();
    let capped: Vec<char> = if chars.len() > prefix_length {
        chars[..prefix_length].to_vec()
    } else {
        chars
    };

    let mut accumulator = HashSet::new();
    accumulator.insert(capped.iter().collect());
    edits(&capped, 0, max_distance, &mut accumulator);
    accumulator
}
