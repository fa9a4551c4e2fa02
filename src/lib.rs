mod catalog;
mod config;
mod emitter;
mod error;
mod filter;
mod movie;
mod seed;

pub mod view;

pub use catalog::{CatalogSnapshot, CatalogStore, IdGenerator, DEFAULT_RESET_DRAFT_RATING};
pub use config::{CatalogConfig, SeedMovie, ENV_INITIAL_RATING, ENV_RESET_RATING};
pub use emitter::{CatalogEmitter, CatalogEvent, CatalogEventKind};
pub use error::{CatalogError, ConfigError, INCOMPLETE_DRAFT_MESSAGE};
pub use filter::{filter_movies, FilterCriteria};
pub use movie::{
    normalize_rating, parse_number, DraftField, DraftMovie, DraftValue, MovieId, MovieRecord,
    MAX_RATING, MIN_RATING,
};
pub use seed::default_movies;
