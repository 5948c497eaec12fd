//! Centralized error normalization.
//!
//! Handlers and the store return `ApiError` and propagate with `?`; the
//! `IntoResponse` impl below is the only place status codes are decided.
//! Every failure ends the request with a `{"success": false, "error": ...}`
//! body and is logged before the response is written.

use crate::api::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced recipe does not exist.
    #[error("Recipe not found")]
    NotFound,

    /// The path segment is not a well-formed store identifier.
    #[error("Resource not found with id of {0}")]
    InvalidIdentifier(String),

    /// One or more field constraints were violated; one message per field.
    #[error("{}", .0.join(", "))]
    Validation(Vec<String>),

    /// A required request parameter is missing or unusable.
    #[error("{0}")]
    BadRequest(String),

    #[error("Server Error")]
    Pool(String),

    #[error("Server Error")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => ApiError::NotFound,
            other => ApiError::Database(other),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound | ApiError::InvalidIdentifier(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Pool(_) | ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Pool(err) => {
                tracing::error!(error = %err, "database connection failed");
            }
            ApiError::Database(err) => {
                tracing::error!(error = %err, "database query failed");
            }
            other => {
                tracing::warn!(error = %other, "request rejected");
            }
        }

        (
            self.status_code(),
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::NotFound.to_string(), "Recipe not found");
    }

    #[test]
    fn malformed_id_maps_to_404_and_names_the_id() {
        let err = ApiError::InvalidIdentifier("not-a-uuid".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Resource not found with id of not-a-uuid");
    }

    #[test]
    fn validation_joins_all_messages() {
        let err = ApiError::Validation(vec![
            "Please add ingredients".to_string(),
            "Please add cooking steps".to_string(),
        ]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            err.to_string(),
            "Please add ingredients, Please add cooking steps"
        );
    }

    #[test]
    fn bad_request_maps_to_400() {
        let err = ApiError::BadRequest("Query parameter \"q\" is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_errors_are_hidden_behind_a_generic_message() {
        let err = ApiError::Database(diesel::result::Error::RollbackTransaction);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Server Error");
    }

    #[test]
    fn diesel_not_found_becomes_not_found() {
        let err: ApiError = diesel::result::Error::NotFound.into();
        assert!(matches!(err, ApiError::NotFound));
    }
}
