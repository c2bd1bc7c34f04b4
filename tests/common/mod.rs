#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, header::CONTENT_TYPE},
    response::Response,
};
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use movielist::{AppState, store::MovieStore};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower::ServiceExt;

/// A fresh in-memory database with the schema applied.
pub async fn test_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await.expect("connect sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn build_test_app() -> Router {
    build_test_app_with_db().await.0
}

/// The router plus a handle on its database, for tests that tamper with the store.
pub async fn build_test_app_with_db() -> (Router, DatabaseConnection) {
    let db = test_db().await;
    let app = movielist::app(Arc::new(AppState { store: MovieStore::new(db.clone()) }));
    (app, db)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            req = req.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.clone().oneshot(req.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, json: &str) -> Response {
    send(app, Method::POST, uri, Some(json)).await
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
