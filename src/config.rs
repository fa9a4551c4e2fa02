//! Catalog settings: draft rating defaults and an optional seed list.
//!
//! Layered as defaults, then an optional TOML file, then environment.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::DEFAULT_RESET_DRAFT_RATING;
use crate::error::ConfigError;
use crate::movie::{normalize_rating, MovieRecord};
use crate::seed::default_movies;

pub const ENV_INITIAL_RATING: &str = "WATCHLIST_INITIAL_RATING";
pub const ENV_RESET_RATING: &str = "WATCHLIST_RESET_RATING";

/// One seed entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedMovie {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(alias = "posterURL")]
    pub poster_url: String,
    pub rating: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Draft rating when the store is created.
    pub initial_draft_rating: f64,
    /// Draft rating after each successful commit.
    pub reset_draft_rating: f64,
    /// Seed records; `None` means the built-in examples.
    pub movies: Option<Vec<SeedMovie>>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_draft_rating: 0.0,
            reset_draft_rating: DEFAULT_RESET_DRAFT_RATING,
            movies: None,
        }
    }
}

impl CatalogConfig {
    /// Defaults, overlaid by `path` when given, overlaid by the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_toml_str(&raw)?
            }
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.seed_movies()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Overlay rating defaults from `lookup`. Values that do not parse are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_INITIAL_RATING) {
            if let Ok(parsed) = v.trim().parse::<f64>() {
                self.initial_draft_rating = parsed;
            }
        }
        if let Some(v) = lookup(ENV_RESET_RATING) {
            if let Ok(parsed) = v.trim().parse::<f64>() {
                self.reset_draft_rating = parsed;
            }
        }
    }

    /// Validated seed records in file order.
    pub fn seed_movies(&self) -> Result<Vec<MovieRecord>, ConfigError> {
        let Some(seeds) = &self.movies else {
            return Ok(default_movies());
        };

        let mut seen = HashSet::new();
        let mut movies = Vec::with_capacity(seeds.len());

        for (index, seed) in seeds.iter().enumerate() {
            for (name, value) in [
                ("id", &seed.id),
                ("title", &seed.title),
                ("description", &seed.description),
                ("poster_url", &seed.poster_url),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::InvalidSeed {
                        index,
                        reason: format!("{} is blank", name),
                    });
                }
            }

            let id = seed.id.trim();
            if !seen.insert(id.to_string()) {
                return Err(ConfigError::DuplicateSeedId(id.to_string()));
            }

            let rating = normalize_rating(seed.rating);
            if rating != seed.rating {
                tracing::warn!(id, requested = seed.rating, rating, "seed rating clamped");
            }

            movies.push(MovieRecord::new(
                id,
                seed.title.trim(),
                seed.description.trim(),
                seed.poster_url.trim(),
                rating,
            ));
        }

        Ok(movies)
    }
}
