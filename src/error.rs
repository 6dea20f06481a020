use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde_json::error::Category;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Validation failed",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidQuery(_) => "invalid_query",
        }
    }

    fn detail(&self) -> &str {
        match self {
            ApiError::Validation(msg) | ApiError::InvalidJson(msg) | ApiError::InvalidQuery(msg) => msg,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidJson(_) | ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ErrorResponse {
            error: self.label().to_string(),
            message: self.detail().to_string(),
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors.
///
/// Bodies that parse but don't fit the schema are validation failures;
/// anything else is malformed JSON.
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let api_error = match err {
        error::JsonPayloadError::Deserialize(e) if e.classify() == Category::Data => {
            ApiError::Validation(e.to_string())
        }
        other => ApiError::InvalidJson(other.to_string()),
    };
    api_error.into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidQuery(err.to_string()).into()
}
