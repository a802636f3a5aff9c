//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, StatusCode},
    middleware::{from_fn, from_fn_with_state, map_response},
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};

use crate::application::use_cases::UseCases;
use crate::domain::gateways::TokenService;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::shared::envelope::Envelope;
use crate::shared::response_code::ResponseCode;

use self::middleware::{request_id_middleware, require_auth};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tokens: Arc<dyn TokenService>,
    pub use_cases: Arc<UseCases>,
}

/// Build the full API router
///
/// `wrap_public` receives the unauthenticated user routes so the caller can
/// add layers (rate limiting) to them alone.
pub fn router<F>(state: AppState, wrap_public: F) -> Router
where
    F: FnOnce(Router<AppState>) -> Router<AppState>,
{
    let public =
        wrap_public(handlers::users::public_router()).layer(map_response(rate_limit_envelope));

    let protected = Router::new()
        .merge(handlers::users::router())
        .nest("/contract", handlers::contracts::router())
        .nest("/customer", handlers::customers::router())
        .nest("/product", handlers::products::router())
        .nest("/subscribe", handlers::subscriptions::router())
        .nest("/notice", handlers::notices::router())
        .nest("/mailconfig", handlers::mail_configs::router())
        .nest("/common", handlers::files::router(state.config.file.max_bytes))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    let files = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .service(ServeDir::new(&state.config.file.path));

    Router::new()
        .merge(public)
        .merge(protected)
        .nest_service("/files", files)
        .fallback(unknown_route)
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn unknown_route() -> Response {
    Envelope::from_code(ResponseCode::ParamInvalid).into_response()
}

/// Rewrite a rate limiter rejection into the response envelope
async fn rate_limit_envelope(response: Response) -> Response {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!("Rate limit exceeded");
        return Envelope::from_code(ResponseCode::TooManyRequests).into_response();
    }
    response
}
