use std::fmt;

use serde::Serialize;

use super::{CatalogSnapshot, IdGenerator};
use crate::config::CatalogConfig;
use crate::emitter::{CatalogEmitter, CatalogEvent, CatalogEventKind};
use crate::error::{CatalogError, ConfigError};
use crate::filter::{filter_movies, FilterCriteria};
use crate::movie::{DraftField, DraftMovie, DraftValue, MovieId, MovieRecord};
use crate::seed::default_movies;

/// Rating the draft is reset to after a successful commit.
pub const DEFAULT_RESET_DRAFT_RATING: f64 = 3.0;

/// Authoritative movie list plus filter, draft and form-error state.
///
/// Every mutation runs to completion before listeners are notified, so
/// nothing outside the store can observe a half-applied change.
pub struct CatalogStore {
    movies: Vec<MovieRecord>,
    filters: FilterCriteria,
    draft: DraftMovie,
    form_error: Option<String>,
    reset_draft_rating: f64,
    ids: IdGenerator,
    emitter: CatalogEmitter,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore")
            .field("movies", &self.movies)
            .field("filters", &self.filters)
            .field("draft", &self.draft)
            .field("form_error", &self.form_error)
            .field("reset_draft_rating", &self.reset_draft_rating)
            .field("queued_events", &self.emitter.queued_len())
            .finish()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(default_movies())
    }
}

impl CatalogStore {
    /// Create a store holding `seed` in the given order, with an empty draft.
    ///
    /// Ids must be unique; a seed whose id repeats an earlier one is dropped.
    pub fn new(seed: Vec<MovieRecord>) -> Self {
        let mut movies: Vec<MovieRecord> = Vec::with_capacity(seed.len());
        for movie in seed {
            if movies.iter().any(|kept| kept.id() == movie.id()) {
                tracing::warn!(id = %movie.id(), title = movie.title(), "duplicate seed id dropped");
                continue;
            }
            movies.push(movie);
        }

        CatalogStore {
            movies,
            filters: FilterCriteria::default(),
            draft: DraftMovie::default(),
            form_error: None,
            reset_draft_rating: DEFAULT_RESET_DRAFT_RATING,
            ids: IdGenerator::new(),
            emitter: CatalogEmitter::new(),
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Result<Self, ConfigError> {
        let mut store = Self::new(config.seed_movies()?);
        store.draft = DraftMovie::with_rating(config.initial_draft_rating);
        store.reset_draft_rating = config.reset_draft_rating;
        Ok(store)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    pub fn get(&self, id: &MovieId) -> Option<&MovieRecord> {
        self.movies.iter().find(|movie| movie.id() == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn draft(&self) -> &DraftMovie {
        &self.draft
    }

    /// Message from the last rejected commit, cleared by the next successful one.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Records matching the current filters, in catalog order. Recomputed on
    /// every call.
    pub fn filtered_view(&self) -> Vec<&MovieRecord> {
        filter_movies(&self.movies, &self.filters)
    }

    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            movies: self.movies.clone(),
            filters: self.filters.clone(),
            draft: self.draft.clone(),
            form_error: self.form_error.clone(),
            visible: self.filtered_view().into_iter().cloned().collect(),
        }
    }

    pub fn set_title_filter(&mut self, value: impl Into<String>) {
        self.filters.set_title_query(value);
        tracing::debug!(title_query = self.filters.title_query(), "title filter updated");
        self.notify_filters();
    }

    /// Accepts any number; NaN reads as 0 and the rest is clamped to `[0, 5]`.
    pub fn set_rating_filter(&mut self, value: f64) {
        self.filters.set_min_rating(value);
        tracing::debug!(
            requested = value,
            min_rating = self.filters.min_rating(),
            "rating filter updated"
        );
        self.notify_filters();
    }

    /// Replace one draft field. Validation waits for `commit_draft`.
    pub fn update_draft_field(&mut self, field: DraftField, value: impl Into<DraftValue>) {
        self.draft.set(field, value);
        tracing::debug!(%field, "draft field updated");
        let payload = to_payload(&self.draft);
        self.emitter
            .enqueue(CatalogEvent::new(CatalogEventKind::DraftChanged, payload));
        self.emitter.emit_queued();
    }

    /// Promote the draft to a record.
    ///
    /// On a blank title, description or poster URL the form error is set and
    /// both the list and the draft are left exactly as they were. On success
    /// the record is appended, the draft reset and the form error cleared.
    pub fn commit_draft(&mut self) -> Result<MovieId, CatalogError> {
        let valid = match self.draft.validate() {
            Ok(valid) => valid,
            Err(err) => {
                if let CatalogError::IncompleteDraft { missing } = &err {
                    tracing::warn!(?missing, "rejected incomplete draft");
                }
                let message = err.to_string();
                self.form_error = Some(message.clone());
                self.emitter
                    .enqueue(CatalogEvent::new(CatalogEventKind::DraftRejected, message));
                self.emitter.emit_queued();
                return Err(err);
            }
        };

        let id = self.ids.next_id(&self.movies);
        let movie = MovieRecord::new(
            id.clone(),
            valid.title,
            valid.description,
            valid.poster_url,
            valid.rating,
        );
        tracing::info!(id = %movie.id(), title = movie.title(), rating = movie.rating(), "movie added");

        let added = to_payload(&movie);
        self.movies.push(movie);
        self.draft = DraftMovie::with_rating(self.reset_draft_rating);
        self.form_error = None;

        self.emitter
            .enqueue(CatalogEvent::new(CatalogEventKind::MovieAdded, added));
        self.emitter.enqueue(CatalogEvent::new(
            CatalogEventKind::DraftChanged,
            to_payload(&self.draft),
        ));
        self.emitter.emit_queued();

        Ok(id)
    }

    /// Register a listener for one kind of change. Returns its id.
    pub fn subscribe<F>(&mut self, kind: CatalogEventKind, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(kind, listener)
    }

    pub fn unsubscribe(&mut self, listener_id: &str) -> bool {
        self.emitter.remove(listener_id)
    }

    fn notify_filters(&mut self) {
        let payload = to_payload(&self.filters);
        self.emitter
            .enqueue(CatalogEvent::new(CatalogEventKind::FiltersChanged, payload));
        self.emitter.emit_queued();
    }
}

fn to_payload<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to encode catalog event payload");
        String::new()
    })
}
