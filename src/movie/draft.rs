use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::rating::{normalize_rating, parse_number};
use crate::error::CatalogError;

/// The editable fields of the add-entry form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftField {
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "posterURL")]
    PosterUrl,
    #[serde(rename = "rating")]
    Rating,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Title,
        DraftField::Description,
        DraftField::PosterUrl,
        DraftField::Rating,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::PosterUrl => "posterURL",
            DraftField::Rating => "rating",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DraftField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" => Ok(DraftField::Title),
            "description" => Ok(DraftField::Description),
            "posterurl" | "poster_url" | "poster" => Ok(DraftField::PosterUrl),
            "rating" => Ok(DraftField::Rating),
            _ => Err(CatalogError::UnknownField(s.to_string())),
        }
    }
}

/// A raw value forwarded from the form, before any validation.
#[derive(Clone, Debug, PartialEq)]
pub enum DraftValue {
    Text(String),
    Number(f64),
}

impl DraftValue {
    fn into_text(self) -> String {
        match self {
            DraftValue::Text(text) => text,
            DraftValue::Number(n) => n.to_string(),
        }
    }

    fn into_number(self) -> f64 {
        match self {
            DraftValue::Text(text) => parse_number(&text),
            DraftValue::Number(n) => n,
        }
    }
}

impl From<&str> for DraftValue {
    fn from(value: &str) -> Self {
        DraftValue::Text(value.to_string())
    }
}

impl From<String> for DraftValue {
    fn from(value: String) -> Self {
        DraftValue::Text(value)
    }
}

impl From<f64> for DraftValue {
    fn from(value: f64) -> Self {
        DraftValue::Number(value)
    }
}

/// The in-progress, uncommitted entry.
///
/// Fields hold whatever the user typed. `rating` may be NaN or out of range
/// until commit.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DraftMovie {
    pub title: String,
    pub description: String,
    #[serde(rename = "posterURL")]
    pub poster_url: String,
    pub rating: f64,
}

impl Default for DraftMovie {
    fn default() -> Self {
        DraftMovie::with_rating(0.0)
    }
}

/// Trimmed, validated draft contents ready to become a record.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ValidDraft {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub rating: f64,
}

impl DraftMovie {
    /// An empty draft whose rating starts at `rating`.
    pub fn with_rating(rating: f64) -> Self {
        DraftMovie {
            title: String::new(),
            description: String::new(),
            poster_url: String::new(),
            rating,
        }
    }

    /// Replace one field, leaving the rest untouched. No validation.
    pub fn set(&mut self, field: DraftField, value: impl Into<DraftValue>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value.into_text(),
            DraftField::Description => self.description = value.into_text(),
            DraftField::PosterUrl => self.poster_url = value.into_text(),
            DraftField::Rating => self.rating = value.into_number(),
        }
    }

    /// Required text fields that are blank after trimming, in check order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push(DraftField::Title);
        }
        if self.description.trim().is_empty() {
            missing.push(DraftField::Description);
        }
        if self.poster_url.trim().is_empty() {
            missing.push(DraftField::PosterUrl);
        }
        missing
    }

    pub(crate) fn validate(&self) -> Result<ValidDraft, CatalogError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CatalogError::IncompleteDraft { missing });
        }

        Ok(ValidDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            poster_url: self.poster_url.trim().to_string(),
            rating: normalize_rating(self.rating),
        })
    }
}
