//! Request body extraction
//!
//! [`JsonBody`] parses the body as JSON when the `Content-Type` header is
//! absent or names a JSON type, and answers 415 for anything else.
//! [`lenient_floats`] reads a list of JSON numbers, turning numbers too large
//! for `f64` into infinities so the model can judge them.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

use crate::error::ApiError;

const UNSUPPORTED_MEDIA_TYPE: &str = "Expected request with `Content-Type: application/json`";

/// JSON request body tolerant of a missing `Content-Type`
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !accepts_json(req.headers()) {
            return Err(ApiError::UnsupportedMediaType(UNSUPPORTED_MEDIA_TYPE.to_string()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// True when the header is absent, `application/json`, or `application/*+json`
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Deserialize a list of JSON numbers into `f64`s
///
/// Numbers beyond the `f64` range become `±inf` instead of failing the whole
/// body. Non-numeric entries are still rejected.
pub fn lenient_floats<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Box<RawValue>> = Vec::deserialize(deserializer)?;
    raw.iter()
        .enumerate()
        .map(|(index, value)| {
            parse_number(value.get()).ok_or_else(|| {
                D::Error::custom(format!(
                    "invalid type at index {}: expected a number, found {}",
                    index,
                    value.get()
                ))
            })
        })
        .collect()
}

fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    // Only JSON number literals; rules out strings, literals and containers
    match text.as_bytes().first() {
        Some(b'-') | Some(b'0'..=b'9') => text.parse().ok(),
        _ => None,
    }
}
