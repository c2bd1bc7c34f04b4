pub mod client;
pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    Router,
    http::Method,
    routing::{get, patch},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::store::MovieStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::PATCH]);

    Router::new()
        .route("/", get(routes::index))
        .route("/movies", get(routes::list_movies).post(routes::create_movie))
        .route("/movies/{id}", axum::routing::delete(routes::delete_movie))
        .route("/movies/{id}/toggle", patch(routes::toggle_movie))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
