//! The catalog store: records, filters, the add-entry draft and its error.

mod id;
mod snapshot;
mod store;

pub use id::IdGenerator;
pub use snapshot::CatalogSnapshot;
pub use store::{CatalogStore, DEFAULT_RESET_DRAFT_RATING};
