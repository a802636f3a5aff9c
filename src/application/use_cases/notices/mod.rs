//! Notice Use Cases

mod manage_notices;

pub use manage_notices::{DeleteNoticesUseCase, ListNoticesUseCase, MarkNoticesReadUseCase};

use crate::application::use_cases::Gateways;

pub struct NoticeUseCases {
    pub list: ListNoticesUseCase,
    pub delete: DeleteNoticesUseCase,
    pub mark_read: MarkNoticesReadUseCase,
}

impl NoticeUseCases {
    #[must_use]
    pub fn new(gateways: &Gateways) -> Self {
        Self {
            list: ListNoticesUseCase::new(gateways.notices.clone()),
            delete: DeleteNoticesUseCase::new(gateways.notices.clone()),
            mark_read: MarkNoticesReadUseCase::new(gateways.notices.clone()),
        }
    }
}
