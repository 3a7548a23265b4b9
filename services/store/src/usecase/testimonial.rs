use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::TestimonialRepository;
use crate::domain::types::{Testimonial, TestimonialPatch};
use crate::error::StoreError;

// ── CreateTestimonial ────────────────────────────────────────────────────────

pub struct CreateTestimonialInput {
    pub customer_name: String,
    pub customer_image: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub active: bool,
}

pub struct CreateTestimonialUseCase<R: TestimonialRepository> {
    pub repo: R,
}

impl<R: TestimonialRepository> CreateTestimonialUseCase<R> {
    pub async fn execute(&self, input: CreateTestimonialInput) -> Result<Testimonial, StoreError> {
        let now = Utc::now();
        let testimonial = Testimonial {
            id: Uuid::new_v4(),
            customer_name: input.customer_name,
            customer_image: input.customer_image,
            rating: input.rating,
            comment: input.comment,
            active: input.active,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&testimonial).await?;
        Ok(testimonial)
    }
}

// ── ListTestimonials ─────────────────────────────────────────────────────────

pub struct ListTestimonialsUseCase<R: TestimonialRepository> {
    pub repo: R,
}

impl<R: TestimonialRepository> ListTestimonialsUseCase<R> {
    pub async fn execute(&self, only_active: bool) -> Result<Vec<Testimonial>, StoreError> {
        self.repo.list(only_active).await
    }
}

// ── UpdateTestimonial ────────────────────────────────────────────────────────

pub struct UpdateTestimonialUseCase<R: TestimonialRepository> {
    pub repo: R,
}

impl<R: TestimonialRepository> UpdateTestimonialUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        patch: TestimonialPatch,
    ) -> Result<Testimonial, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::TestimonialNotFound)?;

        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::TestimonialNotFound)
    }
}

// ── DeleteTestimonial ────────────────────────────────────────────────────────

pub struct DeleteTestimonialUseCase<R: TestimonialRepository> {
    pub repo: R,
}

impl<R: TestimonialRepository> DeleteTestimonialUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::TestimonialNotFound);
        }
        Ok(())
    }
}
