use axum::Router;
use axum::routing::{get, post};
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router() -> axum::Router<AppState> {
    Router::new()
        .route("/", get(handler::list_artists).post(handler::create_artist))
        .route("/search", post(handler::search_artists))
        .route(
            "/{id}",
            get(handler::get_artist)
                .put(handler::update_artist)
                .delete(handler::delete_artist),
        )
        .route("/{id}/edit", get(handler::edit_artist))
        .route("/{id}/shows", get(handler::artist_shows))
}
