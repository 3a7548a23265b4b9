use axum::{Json, extract::Multipart, extract::State};
use serde::Serialize;

use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::upload::{UploadFileUseCase, UploadInput};

// ── POST /api/upload ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadResponse {
    pub file_url: String,
    pub file_name: String,
}

/// Public — customers attach payment receipts before any session exists.
/// Type/size limits are enforced in the usecase; the router raises the body
/// limit above the 5 MiB cap so the domain check is the one that answers.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, StoreError> {
    let mut input = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| StoreError::Internal(e.into()))?
    {
        if field.name() == Some("file") {
            let content_type = field.content_type().unwrap_or_default().to_owned();
            let original_name = field.file_name().map(str::to_owned);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| StoreError::Internal(e.into()))?;
            input = Some(UploadInput {
                bytes: bytes.to_vec(),
                content_type,
                original_name,
            });
            break;
        }
    }
    let input = input.ok_or(StoreError::MissingFile)?;

    let usecase = UploadFileUseCase {
        store: state.file_store(),
    };
    let out = usecase.execute(input).await?;
    Ok(Json(UploadResponse {
        file_url: out.file_url,
        file_name: out.file_name,
    }))
}
