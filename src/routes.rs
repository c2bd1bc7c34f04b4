use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{CreateMovie, Movie},
};

const TITLE_REQUIRED: &str = "Title is required";

pub async fn index() -> &'static str {
    "Movie API"
}

pub async fn list_movies(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.store.list().await?;
    Ok(Json(movies))
}

pub async fn create_movie(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateMovie>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let req = match body {
        Ok(Json(req)) => req,
        // A body that isn't declared as JSON carries no title.
        Err(JsonRejection::MissingJsonContentType(_)) => CreateMovie::default(),
        Err(rejection) => return Err(AppError::BadRequest(rejection.body_text())),
    };

    let Some(title) = req.title() else {
        return Err(AppError::BadRequest(TITLE_REQUIRED.to_string()));
    };

    let movie = state.store.create(title).await?;
    tracing::debug!(id = movie.id, title = %movie.title, "movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

pub async fn delete_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<StatusCode> {
    let id = movie_id(id)?;
    let removed = state.store.delete(id).await?;
    tracing::debug!(id, removed, "movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_movie(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let id = movie_id(id)?;
    match state.store.toggle(id).await? {
        Some(movie) => Ok(Json(movie)),
        None => Err(AppError::NotFound("Movie not found".to_string())),
    }
}

fn movie_id(id: Result<Path<i32>, PathRejection>) -> AppResult<i32> {
    id.map(|Path(id)| id).map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
