//! Filter criteria and the derived, filtered view of the catalog.

use serde::{Deserialize, Serialize};

use crate::movie::{normalize_rating, MovieRecord};

/// Title/rating constraints used to derive the visible subset of records.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "FilterFields")]
pub struct FilterCriteria {
    title_query: String,
    min_rating: f64,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct FilterFields {
    title_query: String,
    min_rating: f64,
}

impl From<FilterFields> for FilterCriteria {
    fn from(fields: FilterFields) -> Self {
        FilterCriteria::new(fields.title_query, fields.min_rating)
    }
}

impl FilterCriteria {
    pub fn new(title_query: impl Into<String>, min_rating: f64) -> Self {
        FilterCriteria {
            title_query: title_query.into(),
            min_rating: normalize_rating(min_rating),
        }
    }

    pub fn title_query(&self) -> &str {
        &self.title_query
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn set_title_query(&mut self, value: impl Into<String>) {
        self.title_query = value.into();
    }

    /// NaN becomes 0, anything else is clamped into `[0, 5]`. Never fails.
    pub fn set_min_rating(&mut self, value: f64) {
        self.min_rating = normalize_rating(value);
    }

    /// Case-insensitive substring match on the title and `rating >= min_rating`.
    pub fn matches(&self, movie: &MovieRecord) -> bool {
        let matches_title = movie
            .title()
            .to_lowercase()
            .contains(&self.title_query.to_lowercase());
        matches_title && movie.rating() >= self.min_rating
    }
}

/// Stable filter over `movies`: matching records in their original order.
pub fn filter_movies<'a>(movies: &'a [MovieRecord], criteria: &FilterCriteria) -> Vec<&'a MovieRecord> {
    movies.iter().filter(|movie| criteria.matches(movie)).collect()
}
