use super::dto::{VenueArea, VenueDetail, VenueRequest};
use super::model::Venue;
use super::service::VenueService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::search::dto::{SearchRequest, SearchResponse};
use crate::modules::show::dto::{ArtistShowSummary, ShowsView};
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

/// List venues grouped by city and state
#[utoipa::path(
    get,
    path = "/api/v1/venues",
    responses(
        (status = 200, description = "Venues by area", body = ApiResponse<Vec<VenueArea>>)
    ),
    tag = "Venues"
)]
pub async fn list_venues(State(state): State<AppState>) -> impl IntoResponse {
    match VenueService::list_by_area(state).await {
        Ok(areas) => ApiSuccess::ok(areas, "Venues retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Case-insensitive partial-name search
#[utoipa::path(
    post,
    path = "/api/v1/venues/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching venues", body = ApiResponse<SearchResponse>),
        (status = 400, description = "Malformed body")
    ),
    tag = "Venues"
)]
pub async fn search_venues(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::search(state, &req.search_term).await {
        Ok(res) => ApiSuccess::ok(res, "Search completed").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Venue page: every field plus past and upcoming shows
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue details", body = ApiResponse<VenueDetail>),
        (status = 404, description = "Venue not found")
    ),
    tag = "Venues"
)]
pub async fn get_venue(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::detail(state, id).await {
        Ok(venue) => ApiSuccess::ok(venue, "Venue retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Current field values, for pre-filling the edit form
#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}/edit",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue fields", body = ApiResponse<Venue>),
        (status = 404, description = "Venue not found")
    ),
    tag = "Venues"
)]
pub async fn edit_venue(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::find_by_id(state, id).await {
        Ok(venue) => ApiSuccess::ok(venue, "Venue retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/venues/{id}/shows",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Past and upcoming shows", body = ApiResponse<ShowsView<ArtistShowSummary>>),
        (status = 404, description = "Venue not found")
    ),
    tag = "Venues"
)]
pub async fn venue_shows(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::shows(state, id).await {
        Ok(shows) => ApiSuccess::ok(shows, "Shows retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// List a new venue
#[utoipa::path(
    post,
    path = "/api/v1/venues",
    request_body = VenueRequest,
    responses(
        (status = 201, description = "Venue listed", body = ApiResponse<Venue>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Venues"
)]
pub async fn create_venue(
    State(state): State<AppState>,
    payload: Result<Json<VenueRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::create(state, req).await {
        Ok(venue) => {
            let message = format!("Venue {} was successfully listed!", venue.name);
            ApiSuccess::created(venue, message).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Replace every field of a venue
#[utoipa::path(
    put,
    path = "/api/v1/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    request_body = VenueRequest,
    responses(
        (status = 200, description = "Venue updated", body = ApiResponse<Venue>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Venue not found")
    ),
    tag = "Venues"
)]
pub async fn update_venue(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<VenueRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::update(state, id, req).await {
        Ok(venue) => {
            let message = format!("Venue {} was successfully updated!", venue.name);
            ApiSuccess::ok(venue, message).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Delete a venue and its shows
#[utoipa::path(
    delete,
    path = "/api/v1/venues/{id}",
    params(
        ("id" = Uuid, Path, description = "Venue ID")
    ),
    responses(
        (status = 200, description = "Venue deleted", body = ApiResponse<String>),
        (status = 404, description = "Venue not found")
    ),
    tag = "Venues"
)]
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match VenueService::delete(state, id).await {
        Ok(_) => ApiSuccess::ok((), "Venue deleted successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
