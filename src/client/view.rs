use std::fmt::Write;

use super::state::ViewState;
use crate::models::Movie;

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w200";
const NO_DESCRIPTION: &str = "No description available.";

pub fn poster_url(movie: &Movie) -> Option<String> {
    movie.poster_path.as_deref().map(|path| format!("{POSTER_BASE_URL}{path}"))
}

pub fn watched_label(movie: &Movie) -> &'static str {
    if movie.watched { "Watched" } else { "To Watch" }
}

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Movie List [{}]", state.filter);

    if state.loading {
        out.push_str("Loading...\n");
    } else if state.visible.is_empty() {
        out.push_str("No matches found.\n");
    } else {
        for movie in &state.visible {
            let _ = writeln!(out, "  {:>4}  {:<40}  [{}]", movie.id, movie.title, watched_label(movie));
        }
    }

    if let Some(movie) = &state.selected {
        out.push('\n');
        out.push_str(&render_detail(movie));
    }

    out
}

fn render_detail(movie: &Movie) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ==", movie.title);
    if let Some(url) = poster_url(movie) {
        let _ = writeln!(out, "Poster: {url}");
    }
    let plot = movie.overview.as_deref().filter(|o| !o.is_empty()).unwrap_or(NO_DESCRIPTION);
    let _ = writeln!(out, "Plot: {plot}");
    let action = if movie.watched { "Unwatched" } else { "Watched" };
    let _ = writeln!(out, "(toggle {} to mark as {action}, close to dismiss)", movie.id);
    out
}
