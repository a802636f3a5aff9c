//! File Handlers
//!
//! Uploads land in the configured directory and are served under `/files/`.

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::{delete, post},
    Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::{FileInfoDto, RemoveFileDto};
use crate::infrastructure::driving_adapters::api_rest::middleware::{Uid, ValidatedJson};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::envelope::Envelope;
use crate::shared::errors::ApiError;

/// Multipart name of the uploaded file
const FILE_FIELD: &str = "file";

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Create the router for file endpoints; bodies above `max_bytes` are refused
pub fn router(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/upload",
            post(upload_file)
                .layer(DefaultBodyLimit::max(max_bytes.saturating_add(MULTIPART_OVERHEAD))),
        )
        .route("/remove", delete(remove_file))
}

/// POST /common/upload - Store the multipart field `file`
///
/// # Responses
///
/// * `Success` - `{url, name}`
/// * `ParamInvalid` - Field missing or file larger than the configured limit
/// * `FileUploadFailed` - The file could not be written
#[axum::debug_handler]
async fn upload_file(
    Uid(uid): Uid,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Envelope<FileInfoDto>, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let max_bytes = state.config.file.max_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        if bytes.len() > max_bytes {
            return Err(ApiError::BadRequest(format!(
                "file is {} bytes, the limit is {max_bytes}",
                bytes.len()
            )));
        }

        tracing::info!(uid = %uid, original_name = %original_name, size = bytes.len(), "Uploading file");
        let info = state.use_cases.upload_file.execute(&original_name, &bytes).await?;
        return Ok(Envelope::success(FileInfoDto::from(info)));
    }

    Err(ApiError::BadRequest(format!("missing multipart field '{FILE_FIELD}'")))
}

/// DELETE /common/remove - Remove a stored upload by name
///
/// # Responses
///
/// * `ParamInvalid` - The name contains a path separator or `..`
/// * `FileRemoveFailed` - No such file or it could not be removed
#[axum::debug_handler]
async fn remove_file(
    Uid(uid): Uid,
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RemoveFileDto>,
) -> Result<Envelope<()>, ApiError> {
    tracing::info!(uid = %uid, name = %dto.name, "Removing file");
    state.use_cases.remove_file.execute(&dto.name).await?;
    Ok(Envelope::ok())
}
