//! Mail Configuration Use Cases

mod manage_mail_config;

pub use manage_mail_config::{DeleteMailConfigUseCase, GetMailConfigUseCase, SaveMailConfigUseCase};

use crate::application::use_cases::Gateways;

pub struct MailConfigUseCases {
    pub get: GetMailConfigUseCase,
    pub save: SaveMailConfigUseCase,
    pub delete: DeleteMailConfigUseCase,
}

impl MailConfigUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways) -> Self {
        Self {
            get: GetMailConfigUseCase::new(gateways.mail_configs.clone()),
            save: SaveMailConfigUseCase::new(gateways.mail_configs.clone()),
            delete: DeleteMailConfigUseCase::new(gateways.mail_configs.clone()),
        }
    }
}
