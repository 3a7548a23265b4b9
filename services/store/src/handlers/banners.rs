use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{Banner, BannerPatch};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::banner::{
    CreateBannerInput, CreateBannerUseCase, DeleteBannerUseCase, ListBannersUseCase,
    UpdateBannerUseCase,
};

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
pub struct BannerResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub active: bool,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Banner> for BannerResponse {
    fn from(banner: Banner) -> Self {
        Self {
            id: banner.id.to_string(),
            title: banner.title,
            description: banner.description,
            image_url: banner.image_url,
            link_url: banner.link_url,
            active: banner.active,
            created_at: banner.created_at,
            updated_at: banner.updated_at,
        }
    }
}

// ── GET /api/banners ─────────────────────────────────────────────────────────

pub async fn list_banners(
    State(state): State<AppState>,
) -> Result<Json<Vec<BannerResponse>>, StoreError> {
    let usecase = ListBannersUseCase {
        repo: state.banner_repo(),
    };
    let banners = usecase.execute(true).await?;
    Ok(Json(banners.into_iter().map(BannerResponse::from).collect()))
}

// ── GET /api/banners/all ─────────────────────────────────────────────────────

pub async fn list_all_banners(
    _identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<BannerResponse>>, StoreError> {
    let usecase = ListBannersUseCase {
        repo: state.banner_repo(),
    };
    let banners = usecase.execute(false).await?;
    Ok(Json(banners.into_iter().map(BannerResponse::from).collect()))
}

// ── POST /api/banners ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateBannerRequest {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

pub async fn create_banner(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateBannerRequest>,
) -> Result<(StatusCode, Json<BannerResponse>), StoreError> {
    let usecase = CreateBannerUseCase {
        repo: state.banner_repo(),
    };
    let banner = usecase
        .execute(CreateBannerInput {
            title: body.title,
            description: body.description,
            image_url: body.image_url,
            link_url: body.link_url,
            active: body.active,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(banner.into())))
}

// ── PUT /api/banners/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_banner(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBannerRequest>,
) -> Result<Json<BannerResponse>, StoreError> {
    let usecase = UpdateBannerUseCase {
        repo: state.banner_repo(),
    };
    let banner = usecase
        .execute(
            id,
            BannerPatch {
                title: body.title,
                description: body.description,
                image_url: body.image_url,
                link_url: body.link_url,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(banner.into()))
}

// ── DELETE /api/banners/{id} ─────────────────────────────────────────────────

pub async fn delete_banner(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    let usecase = DeleteBannerUseCase {
        repo: state.banner_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Banner deleted",
    }))
}
