//! Controls which suggestions a lookup returns.

/// - `Top`: return a single best suggestion (closest distance, then highest count).
/// - `Closest`: return all suggestions at the minimal edit distance.
/// - `All`: return every suggestion within the edit-distance budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verbosity {
    Top,
    Closest,
    All,
}
