//! HTTP error responses
//!
//! Every failure leaves the service as a status code plus a
//! `{"detail": "..."}` body.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors returned by request handlers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request was well-formed but its content was rejected
    #[error("{0}")]
    BadRequest(String),

    /// The body could not be parsed into the expected shape
    #[error("{0}")]
    UnprocessableEntity(String),

    /// The body was not sent as JSON
    #[error("{0}")]
    UnsupportedMediaType(String),

    /// Server-side failure; carries only a generic, caller-safe message
    #[error("{0}")]
    Internal(&'static str),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                ApiError::UnprocessableEntity(rejection.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::UnsupportedMediaType(rejection.body_text())
            }
            _ => ApiError::BadRequest(rejection.body_text()),
        }
    }
}
