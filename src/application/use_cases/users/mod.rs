//! User Use Cases
//!
//! Account lifecycle: registration, login, verification codes, password
//! reset, deletion and profile lookup.

mod delete_account;
mod forgot_password;
mod get_user_info;
mod login;
mod register;
mod send_verify_code;
mod verify_code;

use std::time::Duration;

pub use delete_account::DeleteAccountUseCase;
pub use forgot_password::ForgotPasswordUseCase;
pub use get_user_info::GetUserInfoUseCase;
pub use login::LoginUseCase;
pub use register::RegisterUseCase;
pub use send_verify_code::SendVerifyCodeUseCase;

use crate::application::use_cases::Gateways;
use crate::domain::gateways::NoticeRepository;
use crate::domain::models::user::UserId;
use verify_code::CodeVerifier;

/// Write a notice for the user; failures are logged and never surface
pub(crate) async fn record_notice(repository: &dyn NoticeRepository, uid: UserId, content: &str) {
    if let Err(e) = repository.create(uid, content).await {
        tracing::warn!(uid = %uid, error = %e, "Failed to record notice");
    }
}

/// All user use cases, wired against one set of gateways
pub struct UserUseCases {
    pub register: RegisterUseCase,
    pub login: LoginUseCase,
    pub send_verify_code: SendVerifyCodeUseCase,
    pub forgot_password: ForgotPasswordUseCase,
    pub delete_account: DeleteAccountUseCase,
    pub get_info: GetUserInfoUseCase,
}

impl UserUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways, code_ttl: Duration) -> Self {
        let codes = CodeVerifier::new(gateways.verify_codes.clone());
        Self {
            register: RegisterUseCase::new(
                gateways.users.clone(),
                gateways.subscriptions.clone(),
                gateways.notices.clone(),
                gateways.password_hasher.clone(),
                codes.clone(),
            ),
            login: LoginUseCase::new(
                gateways.users.clone(),
                gateways.notices.clone(),
                gateways.password_hasher.clone(),
                gateways.tokens.clone(),
            ),
            send_verify_code: SendVerifyCodeUseCase::new(
                gateways.verify_codes.clone(),
                gateways.mailer.clone(),
                code_ttl,
            ),
            forgot_password: ForgotPasswordUseCase::new(
                gateways.users.clone(),
                gateways.password_hasher.clone(),
                codes.clone(),
            ),
            delete_account: DeleteAccountUseCase::new(gateways.users.clone(), codes),
            get_info: GetUserInfoUseCase::new(gateways.users.clone()),
        }
    }
}
