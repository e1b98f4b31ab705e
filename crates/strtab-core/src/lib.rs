#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! De-duplicating string table with paired text and id indices.
//!
//! Stores each distinct text value exactly once and hands out a stable
//! numeric [`StringId`] for it. Records live in a single owning arena;
//! two ordered indices (by text, by id) resolve to the same arena slot,
//! so a text hit and an id hit always see the same reference count.
//!
//! - `record` - the interned value: reference count, id, owned text
//! - `table` - the table: add/remove/find, ordered walks, renumbering,
//!   re-interning duplication

mod record;
mod table;


pub use record::{StringId, StringRecord};
pub use table::{KeyOrder, StringTable};

/// Errors from table operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Identifier space exhausted (the id counter would overflow u32).
    #[error("too many strings: {0} (id space exhausted)")]
    TooManyStrings(usize),

    /// No entry with the given text.
    #[error("no entry for text {0:?}")]
    TextNotFound(String),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
