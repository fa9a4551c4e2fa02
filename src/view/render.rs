use crate::movie::{DraftField, DraftMovie, MovieRecord};

/// Shown in place of the list when nothing matches the filters.
pub const EMPTY_STATE: &str = "No movies match your filters yet.";

pub fn render_card(movie: &MovieRecord) -> String {
    format!(
        "{}  ⭐ {:.1} / 5\n  {}\n  poster: {}",
        movie.title(),
        movie.rating(),
        movie.description(),
        movie.poster_url()
    )
}

pub fn render_list(movies: &[&MovieRecord]) -> String {
    if movies.is_empty() {
        return EMPTY_STATE.to_string();
    }

    movies
        .iter()
        .map(|movie| render_card(movie))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_form(draft: &DraftMovie, form_error: Option<&str>) -> String {
    let mut lines = vec![
        format!("{:<12}{}", DraftField::Title.name(), draft.title),
        format!("{:<12}{}", DraftField::Description.name(), draft.description),
        format!("{:<12}{}", DraftField::PosterUrl.name(), draft.poster_url),
        format!("{:<12}{}", DraftField::Rating.name(), draft.rating),
    ];
    if let Some(message) = form_error {
        lines.push(format!("! {}", message));
    }
    lines.join("\n")
}
