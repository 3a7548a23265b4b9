use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::AdminIdentity;
use crate::domain::types::{Admin, AdminRole};
use crate::error::StoreError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::admin::{
    CreateAdminInput, CreateAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase, UpdateAdminInput,
    UpdateAdminUseCase,
};

// Every route in this file is Yönetici-only.

/// Admin record as exposed over the API — `password_hash` never appears here.
#[derive(Serialize)]
pub struct AdminResponse {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            email: admin.email,
            role: admin.role.as_str().to_owned(),
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

fn parse_role(raw: &str) -> Result<AdminRole, StoreError> {
    AdminRole::parse(raw).ok_or(StoreError::InvalidRole)
}

// ── GET /api/admins ──────────────────────────────────────────────────────────

pub async fn list_admins(
    identity: AdminIdentity,
    State(state): State<AppState>,
) -> Result<Json<Vec<AdminResponse>>, StoreError> {
    identity.require_super()?;
    let usecase = ListAdminsUseCase {
        repo: state.admin_repo(),
    };
    let admins = usecase.execute().await?;
    Ok(Json(admins.into_iter().map(AdminResponse::from).collect()))
}

// ── POST /api/admins ─────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateAdminRequest {
    pub email: String,
    pub password: String,
    pub role: Option<String>,
}

pub async fn create_admin(
    identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<CreateAdminRequest>,
) -> Result<(StatusCode, Json<AdminResponse>), StoreError> {
    identity.require_super()?;
    let role = match body.role.as_deref() {
        Some(raw) => parse_role(raw)?,
        None => AdminRole::Standard,
    };
    let usecase = CreateAdminUseCase {
        repo: state.admin_repo(),
    };
    let admin = usecase
        .execute(CreateAdminInput {
            email: body.email,
            password: body.password,
            role,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(admin.into())))
}

// ── PUT /api/admins/{id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateAdminRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

pub async fn update_admin(
    identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAdminRequest>,
) -> Result<Json<AdminResponse>, StoreError> {
    identity.require_super()?;
    let role = body.role.as_deref().map(parse_role).transpose()?;
    let usecase = UpdateAdminUseCase {
        repo: state.admin_repo(),
    };
    let admin = usecase
        .execute(
            id,
            UpdateAdminInput {
                email: body.email,
                password: body.password,
                role,
            },
        )
        .await?;
    Ok(Json(admin.into()))
}

// ── DELETE /api/admins/{id} ──────────────────────────────────────────────────

pub async fn delete_admin(
    identity: AdminIdentity,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, StoreError> {
    identity.require_super()?;
    let usecase = DeleteAdminUseCase {
        repo: state.admin_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Admin deleted",
    }))
}
