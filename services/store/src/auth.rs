//! Session tokens and the request authorization gate.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::repository::AdminRepository;
use crate::domain::types::{Admin, AdminRole, TOKEN_TTL_SECS};
use crate::error::StoreError;
use crate::state::AppState;

/// JWT claims carried by admin session tokens.
///
/// `sub` is the admin email. `role` is the wire string at issuance time; the
/// gate reloads the account on every request, so the database row stays
/// authoritative if the role changes before the token expires.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub role: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_secs()
}

/// Sign a 7-day session token for the given admin.
pub fn issue_token(admin: &Admin, secret: &str) -> Result<String, StoreError> {
    let claims = TokenClaims {
        sub: admin.email.clone(),
        role: admin.role.as_str().to_owned(),
        exp: now_secs() + TOKEN_TTL_SECS,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| StoreError::Internal(e.into()))
}

/// Decode and validate a session token.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s — tolerates clock skew against the issuer.
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, StoreError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => StoreError::TokenExpired,
        _ => StoreError::InvalidToken,
    })?;

    Ok(data.claims)
}

/// Authenticated admin resolved from the `Authorization: Bearer` header.
///
/// A valid signature alone is not enough: the account row is reloaded on every
/// request, so tokens held by deleted admins fail closed with 401. Tokens are
/// otherwise irrevocable until their natural expiry — logout is client-side
/// discard.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub id: Uuid,
    pub email: String,
    pub role: AdminRole,
}

impl AdminIdentity {
    /// Second gate for routes reserved to Yönetici accounts.
    pub fn require_super(&self) -> Result<(), StoreError> {
        if self.role != AdminRole::SuperAdmin {
            return Err(StoreError::Forbidden(AdminRole::SuperAdmin));
        }
        Ok(())
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|v| v.trim().to_owned())
}

impl FromRequestParts<AppState> for AdminIdentity {
    type Rejection = StoreError;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract header values synchronously, then run the async lookup in a
    // 'static async move block to avoid capturing `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let token = bearer_token(parts);
        let state = state.clone();
        async move {
            let token = token.ok_or(StoreError::InvalidToken)?;
            let claims = validate_token(&token, &state.jwt_secret)?;
            let admin = state
                .admin_repo()
                .find_by_email(&claims.sub)
                .await?
                .ok_or(StoreError::Unauthorized)?;
            Ok(AdminIdentity {
                id: admin.id,
                email: admin.email,
                role: admin.role,
            })
        }
    }
}
