use super::model::Genre;
use crate::common::response::{ApiResponse, ApiSuccess};
use axum::response::IntoResponse;

/// List the genre choices accepted by venue and artist forms
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "Genre choices", body = ApiResponse<Vec<Genre>>)
    ),
    tag = "Genres"
)]
pub async fn list_genres() -> impl IntoResponse {
    ApiSuccess::ok(Genre::ALL.to_vec(), "Genres retrieved successfully")
}
