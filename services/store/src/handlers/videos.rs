use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{MediaType, Video, VideoPatch};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::video::{
    CreateVideoInput, CreateVideoUseCase, DeleteVideoUseCase, ListVideosUseCase,
    UpdateVideoUseCase,
};

// Legacy surface: pre-slides storefront builds consume `/api/videos` with
// `youtube_url` as the primary field. Shape mirrors handlers/slides.rs.

fn default_media_type() -> String {
    "video".to_owned()
}

fn default_true() -> bool {
    true
}

fn parse_media_type(raw: &str) -> Result<MediaType, StoreError> {
    MediaType::parse(raw).ok_or(StoreError::InvalidMediaType)
}

#[derive(Serialize)]
pub struct VideoResponse {
    pub id: String,
    pub title: String,
    pub youtube_url: Option<String>,
    pub media_type: String,
    pub image_url: Option<String>,
    pub order: i32,
    pub active: bool,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.title,
            youtube_url: video.youtube_url,
            media_type: video.media_type.as_str().to_owned(),
            image_url: video.image_url,
            order: video.sort_order,
            active: video.active,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

// ── GET /api/videos ──────────────────────────────────────────────────────────

pub async fn list_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoResponse>>, StoreError> {
    let usecase = ListVideosUseCase {
        repo: state.video_repo(),
    };
    let videos = usecase.execute(true).await?;
    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

// ── GET /api/videos/all ──────────────────────────────────────────────────────

pub async fn list_all_videos(
    _identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<VideoResponse>>, StoreError> {
    let usecase = ListVideosUseCase {
        repo: state.video_repo(),
    };
    let videos = usecase.execute(false).await?;
    Ok(Json(videos.into_iter().map(VideoResponse::from).collect()))
}

// ── POST /api/videos ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub youtube_url: Option<String>,
    #[serde(default = "default_media_type")]
    pub media_type: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

pub async fn create_video(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>), StoreError> {
    let media_type = parse_media_type(&body.media_type)?;
    let usecase = CreateVideoUseCase {
        repo: state.video_repo(),
    };
    let video = usecase
        .execute(CreateVideoInput {
            title: body.title,
            media_type,
            youtube_url: body.youtube_url,
            image_url: body.image_url,
            sort_order: body.order,
            active: body.active,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(video.into())))
}

// ── PUT /api/videos/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub youtube_url: Option<String>,
    pub media_type: Option<String>,
    pub image_url: Option<String>,
    pub order: Option<i32>,
    pub active: Option<bool>,
}

pub async fn update_video(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateVideoRequest>,
) -> Result<Json<VideoResponse>, StoreError> {
    let media_type = body.media_type.as_deref().map(parse_media_type).transpose()?;
    let usecase = UpdateVideoUseCase {
        repo: state.video_repo(),
    };
    let video = usecase
        .execute(
            id,
            VideoPatch {
                title: body.title,
                media_type,
                youtube_url: body.youtube_url,
                image_url: body.image_url,
                sort_order: body.order,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(video.into()))
}

// ── DELETE /api/videos/{id} ──────────────────────────────────────────────────

pub async fn delete_video(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    let usecase = DeleteVideoUseCase {
        repo: state.video_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Video deleted",
    }))
}
