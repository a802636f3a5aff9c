//! Token Authentication Middleware
//!
//! Verifies the bearer token of protected routes and hands the caller's id
//! to handlers through the `uid` header. A `uid` header sent by the client is
//! always discarded first.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderName, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::models::user::UserId;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Header carrying the verified caller id
pub static UID_HEADER: HeaderName = HeaderName::from_static("uid");

fn bearer_token(request: &Request) -> Result<&str, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Unauthorized("Invalid Authorization header format".to_string()))
}

/// Middleware guarding every route outside the public user routes
pub async fn require_auth(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    request.headers_mut().remove(&UID_HEADER);

    let uid = match bearer_token(&request).and_then(|token| {
        state.tokens.verify(token).map_err(|e| {
            // Don't expose token validation details to the client
            tracing::debug!(error = %e, "Rejected token");
            ApiError::Unauthorized("Invalid or expired token".to_string())
        })
    }) {
        Ok(uid) => uid,
        Err(e) => return e.into_response(),
    };

    tracing::Span::current().record("uid", uid.value());
    request
        .headers_mut()
        .insert(UID_HEADER.clone(), HeaderValue::from(uid.value()));

    next.run(request).await
}

/// The authenticated caller, read from the `uid` header
#[derive(Debug, Clone, Copy)]
pub struct Uid(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for Uid
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uid = parts
            .headers
            .get(&UID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::BadRequest("missing or invalid uid".to_string()))?;

        Ok(Uid(UserId::new(uid)))
    }
}
