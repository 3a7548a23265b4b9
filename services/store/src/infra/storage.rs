use std::path::PathBuf;

use anyhow::Context as _;

use crate::domain::repository::FileStore;
use crate::error::StoreError;

/// Blob store backed by a local directory served under `/uploads`.
///
/// File names are generated by the caller and collision-free (UUID-based), so
/// writes never clobber existing files.
#[derive(Clone)]
pub struct LocalFileStore {
    pub root: PathBuf,
    pub public_base_url: String,
}

impl FileStore for LocalFileStore {
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<String, StoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .context("create upload directory")?;
        let path = self.root.join(file_name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("write upload {}", path.display()))?;
        Ok(format!(
            "{}/uploads/{}",
            self.public_base_url.trim_end_matches('/'),
            file_name
        ))
    }
}
