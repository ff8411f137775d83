//! Translation of domain failures into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;

use crate::domain::time_format::FormatError;
use crate::domain::TimetableError;

pub const INVALID_FORMAT_MESSAGE: &str = "Invalid date or time format!";
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Error type returned by the REST handlers
#[derive(Debug)]
pub enum ApiError {
    /// A required field is missing or blank
    Validation(String),
    /// Date or time text could not be parsed
    InvalidFormat(FormatError),
    /// The body is not JSON of the expected shape
    MalformedRequest(String),
    /// Query string parameters are missing, mistyped or out of range
    BadQuery(String),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(message) | ApiError::BadQuery(message) => ErrorResponse {
                error: message,
                details: None,
            },
            ApiError::InvalidFormat(e) => ErrorResponse {
                error: INVALID_FORMAT_MESSAGE.to_string(),
                details: Some(e.to_string()),
            },
            ApiError::MalformedRequest(details) => ErrorResponse {
                error: INVALID_JSON_MESSAGE.to_string(),
                details: Some(details),
            },
            // Storage details stay in the server log
            ApiError::Internal(_) => ErrorResponse {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TimetableError> for ApiError {
    fn from(err: TimetableError) -> Self {
        match err {
            TimetableError::Validation(message) => ApiError::Validation(message),
            TimetableError::Format(e) => ApiError::InvalidFormat(e),
            TimetableError::Storage(e) => ApiError::Internal(e),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(error: ApiError) -> (StatusCode, ErrorResponse) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_bad_request() {
        let (status, body) = body_of(TimetableError::Validation("All fields are required!".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "All fields are required!");
        assert_eq!(body.details, None);
    }

    #[tokio::test]
    async fn test_format_error_keeps_reason_in_details() {
        let (status, body) = body_of(TimetableError::Format(FormatError::HourOutOfRange(13)).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, INVALID_FORMAT_MESSAGE);
        assert_eq!(body.details.as_deref(), Some("Hour 13 is outside 1..12"));
    }

    #[tokio::test]
    async fn test_storage_failure_hides_details() {
        let (status, body) = body_of(anyhow::anyhow!("lock poisoned").into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR_MESSAGE);
        assert_eq!(body.details, None);
    }
}
