use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{MediaType, Slide, SlidePatch};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::slide::{
    CreateSlideInput, CreateSlideUseCase, DeleteSlideUseCase, ListSlidesUseCase,
    UpdateSlideUseCase,
};

fn default_media_type() -> String {
    "video".to_owned()
}

fn default_true() -> bool {
    true
}

fn parse_media_type(raw: &str) -> Result<MediaType, StoreError> {
    MediaType::parse(raw).ok_or(StoreError::InvalidMediaType)
}

/// Wire field is `order`; the column is `sort_order` (reserved word in SQL).
#[derive(Serialize)]
pub struct SlideResponse {
    pub id: String,
    pub title: String,
    pub media_type: String,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub order: i32,
    pub active: bool,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Slide> for SlideResponse {
    fn from(slide: Slide) -> Self {
        Self {
            id: slide.id.to_string(),
            title: slide.title,
            media_type: slide.media_type.as_str().to_owned(),
            youtube_url: slide.youtube_url,
            image_url: slide.image_url,
            order: slide.sort_order,
            active: slide.active,
            created_at: slide.created_at,
            updated_at: slide.updated_at,
        }
    }
}

// ── GET /api/slides ──────────────────────────────────────────────────────────

pub async fn list_slides(
    State(state): State<AppState>,
) -> Result<Json<Vec<SlideResponse>>, StoreError> {
    let usecase = ListSlidesUseCase {
        repo: state.slide_repo(),
    };
    let slides = usecase.execute(true).await?;
    Ok(Json(slides.into_iter().map(SlideResponse::from).collect()))
}

// ── GET /api/slides/all ──────────────────────────────────────────────────────

pub async fn list_all_slides(
    _identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<SlideResponse>>, StoreError> {
    let usecase = ListSlidesUseCase {
        repo: state.slide_repo(),
    };
    let slides = usecase.execute(false).await?;
    Ok(Json(slides.into_iter().map(SlideResponse::from).collect()))
}

// ── POST /api/slides ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateSlideRequest {
    pub title: String,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

pub async fn create_slide(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateSlideRequest>,
) -> Result<(StatusCode, Json<SlideResponse>), StoreError> {
    let media_type = parse_media_type(&body.media_type)?;
    let usecase = CreateSlideUseCase {
        repo: state.slide_repo(),
    };
    let slide = usecase
        .execute(CreateSlideInput {
            title: body.title,
            media_type,
            youtube_url: body.youtube_url,
            image_url: body.image_url,
            sort_order: body.order,
            active: body.active,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(slide.into())))
}

// ── PUT /api/slides/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateSlideRequest {
    pub title: Option<String>,
    pub media_type: Option<String>,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub order: Option<i32>,
    pub active: Option<bool>,
}

pub async fn update_slide(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSlideRequest>,
) -> Result<Json<SlideResponse>, StoreError> {
    let media_type = body.media_type.as_deref().map(parse_media_type).transpose()?;
    let usecase = UpdateSlideUseCase {
        repo: state.slide_repo(),
    };
    let slide = usecase
        .execute(
            id,
            SlidePatch {
                title: body.title,
                media_type,
                youtube_url: body.youtube_url,
                image_url: body.image_url,
                sort_order: body.order,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(slide.into()))
}

// ── DELETE /api/slides/{id} ──────────────────────────────────────────────────

pub async fn delete_slide(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    let usecase = DeleteSlideUseCase {
        repo: state.slide_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Slide deleted",
    }))
}
