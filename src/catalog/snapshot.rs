use serde::Serialize;

use crate::filter::FilterCriteria;
use crate::movie::{DraftMovie, MovieRecord};

/// Everything a view needs to render the catalog, captured at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub movies: Vec<MovieRecord>,
    pub filters: FilterCriteria,
    pub draft: DraftMovie,
    pub form_error: Option<String>,
    pub visible: Vec<MovieRecord>,
}
