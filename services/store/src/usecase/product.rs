use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, ProductPatch, ProductVariant};
use crate::error::StoreError;

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub stock: i32,
    pub is_package: bool,
    pub has_variants: bool,
    pub variants: Vec<ProductVariant>,
}

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub async fn execute(&self, input: CreateProductInput) -> Result<Product, StoreError> {
        // `has_variants` with an empty list is deliberately accepted — the
        // storefront treats it as "out of stock", nothing breaks server-side.
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            description: input.description,
            price: input.price,
            image_url: input.image_url,
            category: input.category,
            stock: input.stock,
            is_package: input.is_package,
            has_variants: input.has_variants,
            variants: input.variants,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&product).await?;
        Ok(product)
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Product, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::ProductNotFound)
    }
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self, is_package: Option<bool>) -> Result<Vec<Product>, StoreError> {
        self.repo.list(is_package).await
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: ProductPatch) -> Result<Product, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::ProductNotFound)?;

        // An all-None patch skips the write entirely and echoes current state.
        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::ProductNotFound)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::ProductNotFound);
        }
        Ok(())
    }
}
