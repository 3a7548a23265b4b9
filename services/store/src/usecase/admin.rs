use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::AdminRepository;
use crate::domain::types::{Admin, AdminPatch, AdminRole};
use crate::error::StoreError;
use crate::usecase::token::hash_password;

// ── ListAdmins ───────────────────────────────────────────────────────────────

pub struct ListAdminsUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> ListAdminsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Admin>, StoreError> {
        self.repo.list().await
    }
}

// ── CreateAdmin ──────────────────────────────────────────────────────────────

pub struct CreateAdminInput {
    pub email: String,
    pub password: String,
    pub role: AdminRole,
}

pub struct CreateAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> CreateAdminUseCase<R> {
    pub async fn execute(&self, input: CreateAdminInput) -> Result<Admin, StoreError> {
        if self.repo.find_by_email(&input.email).await?.is_some() {
            return Err(StoreError::AdminExists);
        }
        let now = Utc::now();
        let admin = Admin {
            id: Uuid::new_v4(),
            email: input.email,
            password_hash: hash_password(&input.password)?,
            role: input.role,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&admin).await?;
        Ok(admin)
    }
}

// ── UpdateAdmin ──────────────────────────────────────────────────────────────

pub struct UpdateAdminInput {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<AdminRole>,
}

pub struct UpdateAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> UpdateAdminUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: UpdateAdminInput) -> Result<Admin, StoreError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::AdminNotFound)?;

        let patch = AdminPatch {
            email: input.email,
            password_hash: input.password.map(|p| hash_password(&p)).transpose()?,
            role: input.role,
        };
        if !patch.is_empty() {
            self.repo.update(id, &patch).await?;
        }
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(StoreError::AdminNotFound)
    }
}

// ── DeleteAdmin ──────────────────────────────────────────────────────────────

pub struct DeleteAdminUseCase<R: AdminRepository> {
    pub repo: R,
}

impl<R: AdminRepository> DeleteAdminUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), StoreError> {
        if !self.repo.delete(id).await? {
            return Err(StoreError::AdminNotFound);
        }
        Ok(())
    }
}
