use sea_orm::DatabaseConnection;

use crate::infra::db::{
    DbAdminRepository, DbBannerRepository, DbOrderRepository, DbPaymentSettingsStore,
    DbProductRepository, DbSiteSettingsStore, DbSlideRepository, DbTestimonialRepository,
    DbVideoRepository,
};
use crate::infra::storage::LocalFileStore;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub upload_dir: String,
    pub public_base_url: String,
}

impl AppState {
    pub fn admin_repo(&self) -> DbAdminRepository {
        DbAdminRepository {
            db: self.db.clone(),
        }
    }

    pub fn product_repo(&self) -> DbProductRepository {
        DbProductRepository {
            db: self.db.clone(),
        }
    }

    pub fn slide_repo(&self) -> DbSlideRepository {
        DbSlideRepository {
            db: self.db.clone(),
        }
    }

    pub fn video_repo(&self) -> DbVideoRepository {
        DbVideoRepository {
            db: self.db.clone(),
        }
    }

    pub fn banner_repo(&self) -> DbBannerRepository {
        DbBannerRepository {
            db: self.db.clone(),
        }
    }

    pub fn testimonial_repo(&self) -> DbTestimonialRepository {
        DbTestimonialRepository {
            db: self.db.clone(),
        }
    }

    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn payment_settings_store(&self) -> DbPaymentSettingsStore {
        DbPaymentSettingsStore {
            db: self.db.clone(),
        }
    }

    pub fn site_settings_store(&self) -> DbSiteSettingsStore {
        DbSiteSettingsStore {
            db: self.db.clone(),
        }
    }

    pub fn file_store(&self) -> LocalFileStore {
        LocalFileStore {
            root: std::path::PathBuf::from(&self.upload_dir),
            public_base_url: self.public_base_url.clone(),
        }
    }
}
