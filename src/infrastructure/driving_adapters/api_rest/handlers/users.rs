//! User Handlers
//!
//! Registration, login, verification codes and password reset are public;
//! account deletion and the profile require a token.

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{
    DeleteAccountDto, LoginDto, LoginResponseDto, RegisterDto, ResetPasswordDto, UserInfoDto,
    VerifyCodeDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::{Uid, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

/// Routes reachable without a token
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/user/register", post(register))
        .route("/user/login", post(login))
        .route("/user/verifycode", post(send_verify_code))
        .route("/user/forgotpass", post(forgot_password))
}

/// Routes behind the auth middleware
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/user/delete", post(delete_account))
        .route("/user/info", get(get_info))
}

/// POST /user/register - Create an account
///
/// # Responses
///
/// * `UserHasExist` - Email already registered
/// * `VerifyCodeInvalid` - Code missing, expired or different
/// * `ParamInvalid` - Validation error
#[axum::debug_handler]
async fn register(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.users.register.execute(dto.into()).await?;
    Ok(Envelope::ok())
}

/// POST /user/login - Exchange credentials for a token
///
/// # Responses
///
/// * `Success` - `{uid, token}`
/// * `UserNotExist` - Unknown email
/// * `UserEmailOrPass` - Wrong password
#[axum::debug_handler]
async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginDto>,
) -> Result<Envelope<LoginResponseDto>, ApiError> {
    let session = state.use_cases.users.login.execute(dto.into()).await?;
    Ok(Envelope::success(LoginResponseDto::from(session)))
}

/// POST /user/verifycode - Mail a fresh verification code
///
/// # Responses
///
/// * `VerifyCodeSendFailed` - The mail could not be delivered
#[axum::debug_handler]
async fn send_verify_code(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<VerifyCodeDto>,
) -> Result<Envelope<()>, ApiError> {
    state
        .use_cases
        .users
        .send_verify_code
        .execute(&dto.normalized_email())
        .await?;
    Ok(Envelope::ok())
}

/// POST /user/forgotpass - Reset the password with a verification code
///
/// # Responses
///
/// * `UserNotExist` - Unknown email
/// * `VerifyCodeInvalid` - Code missing, expired or different
/// * `UserPassResetFailed` - The new password could not be stored
#[axum::debug_handler]
async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<ResetPasswordDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.users.forgot_password.execute(dto.into()).await?;
    Ok(Envelope::ok())
}

/// POST /user/delete - Delete the caller's account and every record it owns
///
/// # Authentication
///
/// Requires valid token in Authorization header.
///
/// # Responses
///
/// * `ParamInvalid` - The email is not the caller's
/// * `VerifyCodeInvalid` - Code missing, expired or different
#[axum::debug_handler]
async fn delete_account(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<DeleteAccountDto>,
) -> Result<Envelope<()>, ApiError> {
    state
        .use_cases
        .users
        .delete_account
        .execute(dto.into_data(uid))
        .await?;
    Ok(Envelope::ok())
}

/// GET /user/info - Account details with the subscription
///
/// # Authentication
///
/// Requires valid token in Authorization header.
#[axum::debug_handler]
async fn get_info(
    Uid(uid): Uid,
    State(state): State<AppState>,
) -> Result<Envelope<UserInfoDto>, ApiError> {
    let profile = state.use_cases.users.get_info.execute(uid).await?;
    Ok(Envelope::success(UserInfoDto::from(profile)))
}
