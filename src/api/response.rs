//! Response types for the production estimation engine API.
//!
//! This module defines the error response structures and the bodies of the
//! persistence and export endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::CalculationResult;
use crate::persistence::CodecWarning;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }
}

/// An API error paired with the HTTP status it renders as.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 validation error response.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::validation_error(message),
        }
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(err: EngineError) -> Self {
        let (status, code) = match &err {
            EngineError::DocumentNotFound { .. } => {
                (StatusCode::NOT_FOUND, "DOCUMENT_NOT_FOUND")
            }
            EngineError::DocumentParse { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOCUMENT_PARSE_ERROR")
            }
            EngineError::DocumentWrite { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DOCUMENT_WRITE_ERROR")
            }
            EngineError::UnsupportedFormat { .. } => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT")
            }
            EngineError::ExportDirectory { .. } | EngineError::ExportWrite { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR")
            }
            EngineError::WorkerIndexOutOfRange { .. }
            | EngineError::TaskIndexOutOfRange { .. } => {
                (StatusCode::NOT_FOUND, "INDEX_OUT_OF_RANGE")
            }
        };
        Self {
            status,
            error: ApiError::new(code, err.to_string()),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Body returned by `POST /save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// The path the document was written to.
    pub path: String,
}

/// Body returned by `POST /load`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadResponse {
    /// Non-fatal advisories raised by the codec.
    pub warnings: Vec<CodecWarning>,
    /// The recompute result for the freshly loaded model.
    pub result: CalculationResult,
}

/// Body returned by `POST /export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// The directory the sheets were written into.
    pub directory: String,
    /// The names of the sheets written.
    pub sheets: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_errors_map_to_statuses() {
        let response: ApiErrorResponse = EngineError::DocumentNotFound {
            path: "x.json".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "DOCUMENT_NOT_FOUND");

        let response: ApiErrorResponse = EngineError::WorkerIndexOutOfRange {
            index: 3,
            count: 1,
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "INDEX_OUT_OF_RANGE");

        let response: ApiErrorResponse = EngineError::UnsupportedFormat {
            path: "x.xml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_skips_absent_details() {
        let json = serde_json::to_string(&ApiError::validation_error("bad")).unwrap();
        assert!(!json.contains("details"));
    }
}
