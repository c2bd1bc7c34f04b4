use std::{fmt, str::FromStr};

use super::api::MovieApi;
use crate::models::Movie;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Filter {
    #[default]
    All,
    Watched,
    Unwatched,
}

impl Filter {
    pub fn keeps(self, movie: &Movie) -> bool {
        match self {
            Filter::All => true,
            Filter::Watched => movie.watched,
            Filter::Unwatched => !movie.watched,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Watched => "watched",
            Filter::Unwatched => "unwatched",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "watched" => Ok(Filter::Watched),
            "unwatched" | "to-watch" | "towatch" => Ok(Filter::Unwatched),
            other => Err(format!("unknown filter '{other}' (expected all, watched or unwatched)")),
        }
    }
}

pub fn apply_filter(movies: &[Movie], filter: Filter) -> Vec<Movie> {
    movies.iter().filter(|m| filter.keeps(m)).cloned().collect()
}

pub fn search_titles(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.to_lowercase();
    movies.iter().filter(|m| m.title.to_lowercase().contains(&needle)).cloned().collect()
}

/// `movies` is always the last list fetched from the server; `visible` is
/// derived from it. Changing the filter or reloading recomputes `visible`
/// from `movies` and drops any search constraint.
#[derive(Clone, Debug)]
pub struct ViewState {
    pub movies: Vec<Movie>,
    pub visible: Vec<Movie>,
    pub new_title: String,
    pub query: String,
    pub filter: Filter,
    pub selected: Option<Movie>,
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            movies: Vec::new(),
            visible: Vec::new(),
            new_title: String::new(),
            query: String::new(),
            filter: Filter::All,
            selected: None,
            loading: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load<A: MovieApi>(&mut self, api: &A) {
        self.loading = true;
        match api.list().await {
            Ok(movies) => {
                self.visible = apply_filter(&movies, self.filter);
                self.movies = movies;
            }
            Err(err) => tracing::error!(error = %err, "error fetching movies"),
        }
        self.loading = false;
    }

    pub async fn add<A: MovieApi>(&mut self, api: &A) {
        if self.new_title.trim().is_empty() {
            return;
        }

        match api.create(&self.new_title).await {
            Ok(movie) => {
                tracing::debug!(id = movie.id, "movie added");
                self.new_title.clear();
                self.load(api).await;
            }
            Err(err) => tracing::error!(error = %err, "error adding movie"),
        }
    }

    pub async fn delete<A: MovieApi>(&mut self, api: &A, id: i32) {
        match api.delete(id).await {
            Ok(()) => {
                if self.selected.as_ref().is_some_and(|m| m.id == id) {
                    self.selected = None;
                }
                self.load(api).await;
            }
            Err(err) => tracing::error!(error = %err, id, "error deleting movie"),
        }
    }

    pub async fn toggle<A: MovieApi>(&mut self, api: &A, id: i32) {
        match api.toggle(id).await {
            Ok(_) => {
                self.load(api).await;
                // The open detail is a snapshot, so flip it here rather than re-reading it.
                if let Some(selected) = self.selected.as_mut().filter(|m| m.id == id) {
                    selected.watched = !selected.watched;
                }
            }
            Err(err) => tracing::error!(error = %err, id, "error toggling watched"),
        }
    }

    pub fn search(&mut self) {
        let matches = search_titles(&self.movies, &self.query);
        self.visible = apply_filter(&matches, self.filter);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        self.visible = apply_filter(&self.movies, filter);
    }

    pub fn select(&mut self, id: i32) -> bool {
        match self.visible.iter().find(|m| m.id == id) {
            Some(movie) => {
                self.selected = Some(movie.clone());
                true
            }
            None => false,
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }
}
