use watchlist::{CatalogStore, DraftField, MovieRecord};

pub fn movie(id: &str, title: &str, rating: f64) -> MovieRecord {
    MovieRecord::new(id, title, format!("About {}", title), format!("http://{}", id), rating)
}

pub fn fill_draft(store: &mut CatalogStore, title: &str, description: &str, poster: &str) {
    store.update_draft_field(DraftField::Title, title);
    store.update_draft_field(DraftField::Description, description);
    store.update_draft_field(DraftField::PosterUrl, poster);
}

pub fn titles(store: &CatalogStore) -> Vec<String> {
    store
        .filtered_view()
        .iter()
        .map(|movie| movie.title().to_string())
        .collect()
}
