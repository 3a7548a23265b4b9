use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::BannerRepository;
use crate::domain::types::{Banner, BannerPatch};
use crate::error::StoreError;

// ── CreateBanner ─────────────────────────────────────────────────────────────

pub struct CreateBannerInput {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub active: bool,
}

pub struct CreateBannerUseCase<R: BannerRepository> {
    pub repo: R,
}

impl<R: BannerRepository> CreateBannerUseCase<R> {
    pub async fn execute(&self, input: CreateBannerInput) -> Result<Banner, StoreError> {
        let now = Utc::now();
        let banner = Banner {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            image_url: input.image_url,
            link_url: input.link_url,
            active: input.active,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&banner).await?;
        Ok(banner)
    }
}

// ── ListBanners ──────────────────────────────────────────────────────────────

pub struct ListBannersUseCase<R: BannerRepository> {
    pub repo: R,
}

impl<R: BannerRepository> ListBannersUseCase<R> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<Banner>, StoreError> {
        self.repo.list(only_active).await
    }
}

// ── UpdateBanner ─────────────────────────────────────────────────────────────

pub struct UpdateBannerUseCase<R: BannerRepository> {
    pub repo: R,
}

impl<R: BannerRepository> UpdateBannerUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: BannerPatch) -> Result<Banner, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::BannerNotFound)?;

        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::BannerNotFound)
    }
}

// ── DeleteBanner ─────────────────────────────────────────────────────────────

pub struct DeleteBannerUseCase<R: BannerRepository> {
    pub repo: R,
}

impl<R: BannerRepository> DeleteBannerUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::BannerNotFound);
        }
        Ok(())
    }
}
