//! Change notifications for adapters that subscribe instead of polling.
//!
//! Mutations enqueue events while they run; the store emits the queue once
//! the mutation has left the catalog in a consistent state.

mod catalog_emitter;

use std::fmt;

pub use catalog_emitter::CatalogEmitter;

/// Kinds of change a listener can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CatalogEventKind {
    FiltersChanged,
    DraftChanged,
    MovieAdded,
    DraftRejected,
}

impl CatalogEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogEventKind::FiltersChanged => "FiltersChanged",
            CatalogEventKind::DraftChanged => "DraftChanged",
            CatalogEventKind::MovieAdded => "MovieAdded",
            CatalogEventKind::DraftRejected => "DraftRejected",
        }
    }
}

impl fmt::Display for CatalogEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A queued notification. `data` is JSON for state changes and the plain
/// error message for `DraftRejected`.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEvent {
    pub kind: CatalogEventKind,
    pub data: String,
}

impl CatalogEvent {
    pub fn new(kind: CatalogEventKind, data: impl Into<String>) -> Self {
        CatalogEvent {
            kind,
            data: data.into(),
        }
    }
}
