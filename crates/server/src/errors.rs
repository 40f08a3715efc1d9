//! Error envelope returned by every handler.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use service::storage::StorageError;

/// JSON error body paired with an HTTP status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: impl Into<String>) -> Self {
        Self {
            status,
            title,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, detail = %self.detail, "request failed");
        }
        let body = Json(json!({
            "error": self.title,
            "detail": self.detail,
        }));
        (self.status, body).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", msg),
            ServiceError::Model(e) => Self::new(StatusCode::BAD_REQUEST, "Validation Error", e.to_string()),
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", msg),
            ServiceError::Storage(e) => match e {
                StorageError::Download(msg) => Self::new(StatusCode::BAD_GATEWAY, "Download Failed", msg),
                StorageError::TooLarge(limit) => Self::new(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Payload Too Large",
                    format!("download exceeds the {limit} byte limit"),
                ),
                other => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", other.to_string()),
            },
            ServiceError::Db(msg) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Database Error", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let cases = [
            (ServiceError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (ServiceError::not_found("article"), StatusCode::NOT_FOUND),
            (ServiceError::conflict("duplicate word"), StatusCode::CONFLICT),
            (ServiceError::Db("pool closed".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }
}
