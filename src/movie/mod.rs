mod draft;
mod rating;
mod record;

pub use draft::{DraftField, DraftMovie, DraftValue};
pub use rating::{normalize_rating, parse_number, MAX_RATING, MIN_RATING};
pub use record::{MovieId, MovieRecord};
