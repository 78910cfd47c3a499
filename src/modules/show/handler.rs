use super::dto::ShowRequest;
use super::model::{Show, ShowListing};
use super::service::ShowService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

/// List every show with its venue and artist
#[utoipa::path(
    get,
    path = "/api/v1/shows",
    responses(
        (status = 200, description = "Shows ordered by start time", body = ApiResponse<Vec<ShowListing>>)
    ),
    tag = "Shows"
)]
pub async fn list_shows(State(state): State<AppState>) -> impl IntoResponse {
    match ShowService::list(state).await {
        Ok(shows) => ApiSuccess::ok(shows, "Shows retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/shows/{id}",
    params(
        ("id" = Uuid, Path, description = "Show ID")
    ),
    responses(
        (status = 200, description = "Show", body = ApiResponse<Show>),
        (status = 404, description = "Show not found")
    ),
    tag = "Shows"
)]
pub async fn get_show(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ShowService::find_by_id(state, id).await {
        Ok(show) => ApiSuccess::ok(show, "Show retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Book an artist at a venue
#[utoipa::path(
    post,
    path = "/api/v1/shows",
    request_body = ShowRequest,
    responses(
        (status = 201, description = "Show listed", body = ApiResponse<Show>),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Artist or venue does not exist")
    ),
    tag = "Shows"
)]
pub async fn create_show(
    State(state): State<AppState>,
    payload: Result<Json<ShowRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ShowService::create(state, req).await {
        Ok(show) => ApiSuccess::created(show, "Show was successfully listed!").into_response(),
        Err(e) => e.into_response(),
    }
}
