use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::auth::AdminIdentity;
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::token::{LoginInput, LoginUseCase, RegisterAdminInput, RegisterAdminUseCase};

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub role: String,
}

// ── POST /api/auth/register ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

pub async fn register_admin(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), StoreError> {
    let usecase = RegisterAdminUseCase {
        repo: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(RegisterAdminInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(TokenResponse {
            token: out.token,
            role: out.role.as_str().to_owned(),
        }),
    ))
}

// ── POST /api/auth/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub async fn login_admin(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, StoreError> {
    let usecase = LoginUseCase {
        repo: state.admin_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(TokenResponse {
        token: out.token,
        role: out.role.as_str().to_owned(),
    }))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct MeResponse {
    pub id: String,
    pub email: String,
    pub role: String,
}

pub async fn get_me(identity: AdminIdentity) -> Json<MeResponse> {
    Json(MeResponse {
        id: identity.id.to_string(),
        email: identity.email,
        role: identity.role.as_str().to_owned(),
    })
}
