use axum::Router;
use axum::routing::get;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;
pub mod timeline;

pub fn router() -> axum::Router<AppState> {
    Router::new()
        .route("/", get(handler::list_shows).post(handler::create_show))
        .route("/{id}", get(handler::get_show))
}
