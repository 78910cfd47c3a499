use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

use crate::common::response::ApiError;
use crate::infrastructure::db::store::StoreError;

/// Failure kinds surfaced by the directory services.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field is missing or malformed; nothing was written.
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    /// A show referenced an artist or venue that does not exist.
    #[error("{0}")]
    Referential(String),

    #[error("Storage error: {0}")]
    Store(StoreError),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Referential(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingReference(entity) => {
                AppError::Referential(format!("The {} selected does not exist.", entity))
            }
            other => AppError::Store(other),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(msg) => msg.to_string(),
                    None => format!("{} is invalid", field),
                })
            })
            .collect();
        // field_errors() is a HashMap, keep the message stable
        messages.sort();
        AppError::Validation(messages.join("; "))
    }
}

/// Malformed bodies (bad JSON, unknown genre, bad UUID or timestamp) are
/// reported like any other validation failure.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// An id segment that is not a UUID.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Store(e) => {
                error!("store failure: {}", e);
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        ApiError(message, status).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_reference_becomes_referential() {
        let err: AppError = StoreError::MissingReference("Artist").into();
        assert!(matches!(err, AppError::Referential(_)));
        assert_eq!(err.to_string(), "The Artist selected does not exist.");
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn status_mapping() {
        assert_eq!(AppError::Validation("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        let db: AppError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
