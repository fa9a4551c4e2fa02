use std::fmt;

use serde::{Deserialize, Serialize};

use super::rating::normalize_rating;

/// Opaque identifier of a committed record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        MovieId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        MovieId::new(id)
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        MovieId(id)
    }
}

/// A committed catalog entry. Immutable once built.
///
/// Deserialization goes through the same checks as a commit: text fields
/// must be non-blank and the rating is normalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MovieRecordFields")]
pub struct MovieRecord {
    id: MovieId,
    title: String,
    description: String,
    #[serde(rename = "posterURL")]
    poster_url: String,
    rating: f64,
}

#[derive(Deserialize)]
struct MovieRecordFields {
    id: String,
    title: String,
    description: String,
    #[serde(rename = "posterURL", alias = "poster_url")]
    poster_url: String,
    rating: f64,
}

impl TryFrom<MovieRecordFields> for MovieRecord {
    type Error = String;

    fn try_from(fields: MovieRecordFields) -> Result<Self, Self::Error> {
        for (name, value) in [
            ("id", &fields.id),
            ("title", &fields.title),
            ("description", &fields.description),
            ("posterURL", &fields.poster_url),
        ] {
            if value.trim().is_empty() {
                return Err(format!("movie {} is blank", name));
            }
        }

        Ok(MovieRecord::new(
            fields.id,
            fields.title,
            fields.description,
            fields.poster_url,
            fields.rating,
        ))
    }
}

impl MovieRecord {
    /// Build a record. The rating is normalized into `[0, 5]`.
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        description: impl Into<String>,
        poster_url: impl Into<String>,
        rating: f64,
    ) -> Self {
        MovieRecord {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            poster_url: poster_url.into(),
            rating: normalize_rating(rating),
        }
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }
}
