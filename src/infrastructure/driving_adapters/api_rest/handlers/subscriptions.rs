//! Subscription Handlers

use axum::{extract::State, routing::get, Router};

use crate::infrastructure::driving_adapters::api_rest::dto::SubscriptionResponseDto;
use crate::infrastructure::driving_adapters::api_rest::middleware::Uid;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new().route("/info", get(get_subscription))
}

/// GET /subscribe/info - The caller's plan
///
/// # Responses
///
/// * `Success` - `{uid, version, expired_at}`
/// * `UserNotExist` - No subscription row for the caller
#[axum::debug_handler]
async fn get_subscription(
    Uid(uid): Uid,
    State(state): State<AppState>,
) -> Result<Envelope<SubscriptionResponseDto>, ApiError> {
    let subscription = state.use_cases.subscription.execute(uid).await?;
    Ok(Envelope::success(SubscriptionResponseDto::from(subscription)))
}
