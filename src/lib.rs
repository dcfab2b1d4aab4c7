//! Symmetric-delete spelling correction for single tokens and for
//! whitespace-damaged phrases.
//!
//! Build an index with [`SymSpell::new`], load a dictionary with
//! [`SymSpell::load_dictionary`] from one of the readers in
//! [`dictionary`], then call [`SymSpell::lookup`] or
//! [`SymSpell::lookup_compound`].

pub mod batch;
pub mod compound;
pub mod deletes;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod index;
pub mod lookup;
pub mod suggestion;
pub mod tokenize;
pub mod verbosity;

pub use error::SpellCheckError;
pub use index::{SymSpell, WordEntry};
pub use suggestion::Suggestion;
pub use verbosity::Verbosity;
