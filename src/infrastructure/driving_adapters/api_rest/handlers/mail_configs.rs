//! Mail Configuration Handlers
//!
//! Each user has at most one outbound mail configuration.

use axum::{
    extract::State,
    routing::{delete, get, post},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{MailConfigDto, MailConfigResponseDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::{Uid, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/info", get(get_mail_config))
        .route("/save", post(save_mail_config))
        .route("/delete", delete(delete_mail_config))
}

/// GET /mailconfig/info
///
/// # Responses
///
/// * `MailConfigNotExist` - Nothing saved yet
#[axum::debug_handler]
async fn get_mail_config(
    Uid(uid): Uid,
    State(state): State<AppState>,
) -> Result<Envelope<MailConfigResponseDto>, ApiError> {
    let config = state.use_cases.mail_configs.get.execute(uid).await?;
    Ok(Envelope::success(MailConfigResponseDto::from(config)))
}

/// POST /mailconfig/save - Create or replace the caller's configuration
#[axum::debug_handler]
async fn save_mail_config(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<MailConfigDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.mail_configs.save.execute(uid, dto.into()).await?;
    Ok(Envelope::ok())
}

/// DELETE /mailconfig/delete
///
/// # Responses
///
/// * `MailConfigNotExist` - Nothing to delete
#[axum::debug_handler]
async fn delete_mail_config(
    Uid(uid): Uid,
    State(state): State<AppState>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.mail_configs.delete.execute(uid).await?;
    Ok(Envelope::ok())
}
