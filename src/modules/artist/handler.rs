use super::dto::{ArtistDetail, ArtistRequest};
use super::model::Artist;
use super::service::ArtistService;
use crate::common::error::AppError;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::modules::search::dto::{EntitySummary, SearchRequest, SearchResponse};
use crate::modules::show::dto::{ShowsView, VenueShowSummary};
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

/// List every artist with their upcoming show count
#[utoipa::path(
    get,
    path = "/api/v1/artists",
    responses(
        (status = 200, description = "Artists", body = ApiResponse<Vec<EntitySummary>>)
    ),
    tag = "Artists"
)]
pub async fn list_artists(State(state): State<AppState>) -> impl IntoResponse {
    match ArtistService::list(state).await {
        Ok(artists) => ApiSuccess::ok(artists, "Artists retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Case-insensitive partial-name search
#[utoipa::path(
    post,
    path = "/api/v1/artists/search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching artists", body = ApiResponse<SearchResponse>),
        (status = 400, description = "Malformed body")
    ),
    tag = "Artists"
)]
pub async fn search_artists(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::search(state, &req.search_term).await {
        Ok(res) => ApiSuccess::ok(res, "Search completed").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Artist page: every field plus past and upcoming shows
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist details", body = ApiResponse<ArtistDetail>),
        (status = 404, description = "Artist not found")
    ),
    tag = "Artists"
)]
pub async fn get_artist(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::detail(state, id).await {
        Ok(artist) => ApiSuccess::ok(artist, "Artist retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// Current field values, for pre-filling the edit form
#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}/edit",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist fields", body = ApiResponse<Artist>),
        (status = 404, description = "Artist not found")
    ),
    tag = "Artists"
)]
pub async fn edit_artist(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::find_by_id(state, id).await {
        Ok(artist) => ApiSuccess::ok(artist, "Artist retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/artists/{id}/shows",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Past and upcoming shows", body = ApiResponse<ShowsView<VenueShowSummary>>),
        (status = 404, description = "Artist not found")
    ),
    tag = "Artists"
)]
pub async fn artist_shows(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::shows(state, id).await {
        Ok(shows) => ApiSuccess::ok(shows, "Shows retrieved successfully").into_response(),
        Err(e) => e.into_response(),
    }
}

/// List a new artist
#[utoipa::path(
    post,
    path = "/api/v1/artists",
    request_body = ArtistRequest,
    responses(
        (status = 201, description = "Artist listed", body = ApiResponse<Artist>),
        (status = 400, description = "Validation failed")
    ),
    tag = "Artists"
)]
pub async fn create_artist(
    State(state): State<AppState>,
    payload: Result<Json<ArtistRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::create(state, req).await {
        Ok(artist) => {
            let message = format!("Artist {} was successfully listed!", artist.name);
            ApiSuccess::created(artist, message).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Replace every field of an artist
#[utoipa::path(
    put,
    path = "/api/v1/artists/{id}",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    request_body = ArtistRequest,
    responses(
        (status = 200, description = "Artist updated", body = ApiResponse<Artist>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Artist not found")
    ),
    tag = "Artists"
)]
pub async fn update_artist(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<ArtistRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };
    let Json(req) = match payload {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::update(state, id, req).await {
        Ok(artist) => {
            let message = format!("Artist {} was successfully updated!", artist.name);
            ApiSuccess::ok(artist, message).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Delete an artist and their shows
#[utoipa::path(
    delete,
    path = "/api/v1/artists/{id}",
    params(
        ("id" = Uuid, Path, description = "Artist ID")
    ),
    responses(
        (status = 200, description = "Artist deleted", body = ApiResponse<String>),
        (status = 404, description = "Artist not found")
    ),
    tag = "Artists"
)]
pub async fn delete_artist(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> impl IntoResponse {
    let Path(id) = match path {
        Ok(p) => p,
        Err(e) => return AppError::from(e).into_response(),
    };

    match ArtistService::delete(state, id).await {
        Ok(_) => ApiSuccess::ok((), "Artist deleted successfully").into_response(),
        Err(e) => e.into_response(),
    }
}
