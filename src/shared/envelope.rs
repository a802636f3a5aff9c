//! Response Envelope
//!
//! Every endpoint answers `{code, message, data}` with HTTP 200; list
//! endpoints put `{total, list}` into `data`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::response_code::ResponseCode;

/// Fixed JSON wrapper around every response body
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: ResponseCode,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful response carrying a payload
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: ResponseCode::Success,
            message: ResponseCode::Success.message(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Successful response without payload
    #[must_use]
    pub fn ok() -> Self {
        Self::from_code(ResponseCode::Success)
    }

    /// Response for the given code without payload
    #[must_use]
    pub fn from_code(code: ResponseCode) -> Self {
        Self {
            code,
            message: code.message(),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Paginated payload: total row count plus the current page
#[derive(Debug, Serialize)]
pub struct PageData<T: Serialize> {
    pub total: i64,
    pub list: Vec<T>,
}

impl<T: Serialize> Envelope<PageData<T>> {
    /// Successful paginated response
    #[must_use]
    pub fn page(total: i64, list: Vec<T>) -> Self {
        Self::success(PageData { total, list })
    }
}
