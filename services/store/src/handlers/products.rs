use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{Product, ProductPatch, ProductVariant};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductUseCase,
};

fn default_stock() -> i32 {
    100
}

fn default_true() -> bool {
    true
}

/// Variant shape shared by requests and responses.
#[derive(Serialize, Deserialize)]
pub struct VariantBody {
    pub name: String,
    #[serde(default = "default_stock")]
    pub stock: i32,
    pub image_url: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

impl From<ProductVariant> for VariantBody {
    fn from(v: ProductVariant) -> Self {
        Self {
            name: v.name,
            stock: v.stock,
            image_url: v.image_url,
            is_available: v.is_available,
        }
    }
}

impl From<VariantBody> for ProductVariant {
    fn from(v: VariantBody) -> Self {
        Self {
            name: v.name,
            stock: v.stock,
            image_url: v.image_url,
            is_available: v.is_available,
        }
    }
}

#[derive(Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub stock: i32,
    pub is_package: bool,
    pub has_variants: bool,
    pub variants: Vec<VariantBody>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image_url: product.image_url,
            category: product.category,
            stock: product.stock,
            is_package: product.is_package,
            has_variants: product.has_variants,
            variants: product.variants.into_iter().map(VariantBody::from).collect(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

// ── GET /api/products ────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct ProductListQuery {
    pub is_package: Option<bool>,
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<ProductResponse>>, StoreError> {
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    let products = usecase.execute(query.is_package).await?;
    Ok(Json(
        products.into_iter().map(ProductResponse::from).collect(),
    ))
}

// ── GET /api/products/{id} ───────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProductResponse>, StoreError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(id).await?;
    Ok(Json(product.into()))
}

// ── POST /api/products ───────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    #[serde(default = "default_stock")]
    pub stock: i32,
    #[serde(default)]
    pub is_package: bool,
    #[serde(default)]
    pub has_variants: bool,
    #[serde(default)]
    pub variants: Vec<VariantBody>,
}

pub async fn create_product(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), StoreError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase
        .execute(CreateProductInput {
            name: body.name,
            description: body.description,
            price: body.price,
            image_url: body.image_url,
            category: body.category,
            stock: body.stock,
            is_package: body.is_package,
            has_variants: body.has_variants,
            variants: body.variants.into_iter().map(ProductVariant::from).collect(),
        })
        .await?;
    Ok((StatusCode::CREATED, Json(product.into())))
}

// ── PUT /api/products/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub is_package: Option<bool>,
    pub has_variants: Option<bool>,
    pub variants: Option<Vec<VariantBody>>,
}

pub async fn update_product(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductResponse>, StoreError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase
        .execute(
            id,
            ProductPatch {
                name: body.name,
                description: body.description,
                price: body.price,
                image_url: body.image_url,
                category: body.category,
                stock: body.stock,
                is_package: body.is_package,
                has_variants: body.has_variants,
                variants: body
                    .variants
                    .map(|v| v.into_iter().map(ProductVariant::from).collect()),
            },
        )
        .await?;
    Ok(Json(product.into()))
}

// ── DELETE /api/products/{id} ────────────────────────────────────────────────

pub async fn delete_product(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}
