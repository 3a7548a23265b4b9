use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::VideoRepository;
use crate::domain::types::{MediaType, Video, VideoPatch};
use crate::error::StoreError;

// ── CreateVideo ──────────────────────────────────────────────────────────────

pub struct CreateVideoInput {
    pub title: String,
    pub media_type: MediaType,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

pub struct CreateVideoUseCase<R: VideoRepository> {
    pub repo: R,
}

impl<R: VideoRepository> CreateVideoUseCase<R> {
    pub async fn execute(&self, input: CreateVideoInput) -> Result<Video, StoreError> {
        let now = Utc::now();
        let video = Video {
            id: Uuid::new_v4(),
            title: input.title,
            media_type: input.media_type,
            youtube_url: input.youtube_url,
            image_url: input.image_url,
            sort_order: input.sort_order,
            active: input.active,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&video).await?;
        Ok(video)
    }
}

// ── ListVideos ───────────────────────────────────────────────────────────────

pub struct ListVideosUseCase<R: VideoRepository> {
    pub repo: R,
}

impl<R: VideoRepository> ListVideosUseCase<R> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<Video>, StoreError> {
        self.repo.list(only_active).await
    }
}

// ── UpdateVideo ──────────────────────────────────────────────────────────────

pub struct UpdateVideoUseCase<R: VideoRepository> {
    pub repo: R,
}

impl<R: VideoRepository> UpdateVideoUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: VideoPatch) -> Result<Video, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::VideoNotFound)?;

        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::VideoNotFound)
    }
}

// ── DeleteVideo ──────────────────────────────────────────────────────────────

pub struct DeleteVideoUseCase<R: VideoRepository> {
    pub repo: R,
}

impl<R: VideoRepository> DeleteVideoUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::VideoNotFound);
        }
        Ok(())
    }
}
