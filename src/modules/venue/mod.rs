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
        .route("/", get(handler::list_venues).post(handler::create_venue))
        .route("/search", post(handler::search_venues))
        .route(
            "/{id}",
            get(handler::get_venue)
                .put(handler::update_venue)
                .delete(handler::delete_venue),
        )
        .route("/{id}/edit", get(handler::edit_venue))
        .route("/{id}/shows", get(handler::venue_shows))
}
