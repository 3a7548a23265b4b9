use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::SlideRepository;
use crate::domain::types::{MediaType, Slide, SlidePatch};
use crate::error::StoreError;

// ── CreateSlide ──────────────────────────────────────────────────────────────

pub struct CreateSlideInput {
    pub title: String,
    pub media_type: MediaType,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
}

pub struct CreateSlideUseCase<R: SlideRepository> {
    pub repo: R,
}

impl<R: SlideRepository> CreateSlideUseCase<R> {
    pub async fn execute(&self, input: CreateSlideInput) -> Result<Slide, StoreError> {
        let now = Utc::now();
        let slide = Slide {
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
        self.repo.create(&slide).await?;
        Ok(slide)
    }
}

// ── ListSlides ───────────────────────────────────────────────────────────────

pub struct ListSlidesUseCase<R: SlideRepository> {
    pub repo: R,
}

impl<R: SlideRepository> ListSlidesUseCase<R> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<Slide>, StoreError> {
        self.repo.list(only_active).await
    }
}

// ── UpdateSlide ──────────────────────────────────────────────────────────────

pub struct UpdateSlideUseCase<R: SlideRepository> {
    pub repo: R,
}

impl<R: SlideRepository> UpdateSlideUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: SlidePatch) -> Result<Slide, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::SlideNotFound)?;

        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::SlideNotFound)
    }
}

// ── DeleteSlide ──────────────────────────────────────────────────────────────

pub struct DeleteSlideUseCase<R: SlideRepository> {
    pub repo: R,
}

impl<R: SlideRepository> DeleteSlideUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::SlideNotFound);
        }
        Ok(())
    }
}
