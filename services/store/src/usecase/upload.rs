use uuid::Uuid;

use crate::domain::repository::FileStore;
use crate::domain::types::{ALLOWED_UPLOAD_TYPES, MAX_UPLOAD_BYTES};
use crate::error::StoreError;

pub struct UploadInput {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub original_name: Option<String>,
}

#[derive(Debug)]
pub struct UploadOutput {
    pub file_url: String,
    pub file_name: String,
}

pub struct UploadFileUseCase<S: FileStore> {
    pub store: S,
}

impl<S: FileStore> UploadFileUseCase<S> {
    pub async fn execute(&self, input: UploadInput) -> Result<UploadOutput, StoreError> {
        if !ALLOWED_UPLOAD_TYPES.contains(&input.content_type.as_str()) {
            return Err(StoreError::UnsupportedFileType);
        }
        if input.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(StoreError::FileTooLarge);
        }

        // Stored name is a fresh UUID; only the extension survives from the
        // client-supplied name.
        let ext = input
            .original_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_owned()))
            .unwrap_or_else(|| "jpg".to_owned());
        let file_name = format!("{}.{}", Uuid::new_v4(), ext);

        let file_url = self.store.store(&input.bytes, &file_name).await?;
        Ok(UploadOutput {
            file_url,
            file_name,
        })
    }
}
