//! Notice Handlers

use axum::{
    extract::State,
    routing::{delete, post, put},
    Router,
};

use crate::domain::models::notice::NoticeQuery;
use crate::infrastructure::driving_adapters::api_rest::dto::{IdsDto, NoticeResponseDto, PageDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::{Uid, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::{Envelope, PageData};
use crate::shared::errors::ApiError;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/list", post(list_notices))
        .route("/delete", delete(delete_notices))
        .route("/read", put(mark_notices_read))
}

/// POST /notice/list - The caller's notices, newest first
#[axum::debug_handler]
async fn list_notices(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<PageDto>,
) -> Result<Envelope<PageData<NoticeResponseDto>>, ApiError> {
    let query = NoticeQuery {
        creator: uid,
        page: dto.page()?,
    };
    let page = state
        .use_cases
        .notices
        .list
        .execute(query)
        .await?
        .map(NoticeResponseDto::from);
    Ok(Envelope::page(page.total, page.items))
}

#[axum::debug_handler]
async fn delete_notices(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IdsDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.notices.delete.execute(uid, dto.ids).await?;
    Ok(Envelope::ok())
}

/// PUT /notice/read - Mark notices as read
#[axum::debug_handler]
async fn mark_notices_read(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<IdsDto>,
) -> Result<Envelope<()>, ApiError> {
    state.use_cases.notices.mark_read.execute(uid, dto.ids).await?;
    Ok(Envelope::ok())
}
