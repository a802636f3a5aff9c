//! Notice DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::notice::Notice;

#[derive(Debug, Clone, Serialize)]
pub struct NoticeResponseDto {
    pub id: i64,
    pub content: String,
    pub status: i16,
    pub created_at: DateTime<Utc>,
}

impl From<Notice> for NoticeResponseDto {
    fn from(notice: Notice) -> Self {
        Self {
            id: notice.id,
            content: notice.content,
            status: notice.status.value(),
            created_at: notice.created_at,
        }
    }
}
