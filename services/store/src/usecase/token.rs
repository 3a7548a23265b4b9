use chrono::Utc;
use uuid::Uuid;

use crate::auth::issue_token;
use crate::domain::repository::AdminRepository;
use crate::domain::types::{Admin, AdminRole};
use crate::error::StoreError;

pub fn hash_password(password: &str) -> Result<String, StoreError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| StoreError::Internal(e.into()))
}

/// Comparison goes through bcrypt's own verify; a hash that fails to parse
/// counts as a mismatch, not an internal error.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterAdminInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct AuthOutput {
    pub token: String,
    pub role: AdminRole,
}

pub struct RegisterAdminUseCase<R: AdminRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: AdminRepository> RegisterAdminUseCase<R> {
    pub async fn execute(&self, input: RegisterAdminInput) -> Result<AuthOutput, StoreError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(StoreError::AdminExists);
        }
        // The very first account becomes Yönetici so a fresh deployment can
        // always reach the admin-management endpoints.
        let role = if self.repo.count().await? == 0 {
            AdminRole::SuperAdmin
        } else {
            AdminRole::Standard
        };
        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            email: input.email,
            password_hash: hash_password(&input.password)?,
            role,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&admin).await?;
        let token = issue_token(&admin, &self.jwt_secret)?;
        Ok(AuthOutput { token, role })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: AdminRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: AdminRepository> LoginUseCase<R> {
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, StoreError> {
        // Unknown email and wrong password are indistinguishable to the caller.
        let admin = self
            .repo
            .find_by_email(&input.email)
            .await?
            .ok_or(StoreError::InvalidCredentials)?;
        if !verify_password(&input.password, &admin.password_hash) {
            return Err(StoreError::InvalidCredentials);
        }
        let token = issue_token(&admin, &self.jwt_secret)?;
        Ok(AuthOutput {
            token,
            role: admin.role,
        })
    }
}
