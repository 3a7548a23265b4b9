use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{Testimonial, TestimonialPatch};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::testimonial::{
    CreateTestimonialInput, CreateTestimonialUseCase, DeleteTestimonialUseCase,
    ListTestimonialsUseCase, UpdateTestimonialUseCase,
};

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
pub struct TestimonialResponse {
    pub id: String,
    pub customer_name: String,
    pub customer_image: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub active: bool,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Testimonial> for TestimonialResponse {
    fn from(t: Testimonial) -> Self {
        Self {
            id: t.id.to_string(),
            customer_name: t.customer_name,
            customer_image: t.customer_image,
            rating: t.rating,
            comment: t.comment,
            active: t.active,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

// ── GET /api/testimonials ────────────────────────────────────────────────────

pub async fn list_testimonials(
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, StoreError> {
    let usecase = ListTestimonialsUseCase {
        repo: state.testimonial_repo(),
    };
    let testimonials = usecase.execute(true).await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}

// ── GET /api/testimonials/all ────────────────────────────────────────────────

pub async fn list_all_testimonials(
    _identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<TestimonialResponse>>, StoreError> {
    let usecase = ListTestimonialsUseCase {
        repo: state.testimonial_repo(),
    };
    let testimonials = usecase.execute(false).await?;
    Ok(Json(
        testimonials
            .into_iter()
            .map(TestimonialResponse::from)
            .collect(),
    ))
}

// ── POST /api/testimonials ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateTestimonialRequest {
    pub customer_name: String,
    pub customer_image: Option<String>,
    pub rating: i32,
    pub comment: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

pub async fn create_testimonial(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateTestimonialRequest>,
) -> Result<(StatusCode, Json<TestimonialResponse>), StoreError> {
    let usecase = CreateTestimonialUseCase {
        repo: state.testimonial_repo(),
    };
    let testimonial = usecase
        .execute(CreateTestimonialInput {
            customer_name: body.customer_name,
            customer_image: body.customer_image,
            rating: body.rating,
            comment: body.comment,
            active: body.active,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(testimonial.into())))
}

// ── PUT /api/testimonials/{id} ───────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateTestimonialRequest {
    pub customer_name: Option<String>,
    pub customer_image: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub active: Option<bool>,
}

pub async fn update_testimonial(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTestimonialRequest>,
) -> Result<Json<TestimonialResponse>, StoreError> {
    let usecase = UpdateTestimonialUseCase {
        repo: state.testimonial_repo(),
    };
    let testimonial = usecase
        .execute(
            id,
            TestimonialPatch {
                customer_name: body.customer_name,
                customer_image: body.customer_image,
                rating: body.rating,
                comment: body.comment,
                active: body.active,
            },
        )
        .await?;
    Ok(Json(testimonial.into()))
}

// ── DELETE /api/testimonials/{id} ────────────────────────────────────────────

pub async fn delete_testimonial(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    let usecase = DeleteTestimonialUseCase {
        repo: state.testimonial_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Testimonial deleted",
    }))
}
