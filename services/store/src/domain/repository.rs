#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{
    Admin, AdminPatch, Banner, BannerPatch, Order, PaymentSettings, Product, ProductPatch,
    SiteSettings, Slide, SlidePatch, Testimonial, TestimonialPatch, Video, VideoPatch,
};
use crate::error::StoreError;

/// Repository for back-office accounts. Email is the unique lookup key
/// (case-sensitive, matching token claims).
pub trait AdminRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError>;
    async fn count(&self) -> Result<u64, StoreError>;
    async fn list(&self) -> Result<Vec<Admin>, StoreError>;
    async fn create(&self, admin: &Admin) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &AdminPatch) -> Result<(), StoreError>;

    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for catalog products.
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError>;

    /// List products, optionally filtered to packages / single items.
    async fn list(&self, is_package: Option<bool>) -> Result<Vec<Product>, StoreError>;

    async fn create(&self, product: &Product) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<(), StoreError>;

    /// Delete a product. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for homepage slides, sorted by `sort_order` ascending.
pub trait SlideRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Slide>, StoreError>;

    /// `only_active` restricts the listing to storefront-visible rows.
    async fn list(&self, only_active: bool) -> Result<Vec<Slide>, StoreError>;

    async fn create(&self, slide: &Slide) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &SlidePatch) -> Result<(), StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for legacy promo videos; same contract as [`SlideRepository`].
pub trait VideoRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, StoreError>;
    async fn list(&self, only_active: bool) -> Result<Vec<Video>, StoreError>;
    async fn create(&self, video: &Video) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &VideoPatch) -> Result<(), StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for campaign banners.
pub trait BannerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, StoreError>;
    async fn list(&self, only_active: bool) -> Result<Vec<Banner>, StoreError>;
    async fn create(&self, banner: &Banner) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &BannerPatch) -> Result<(), StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for customer testimonials.
pub trait TestimonialRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Testimonial>, StoreError>;
    async fn list(&self, only_active: bool) -> Result<Vec<Testimonial>, StoreError>;
    async fn create(&self, testimonial: &Testimonial) -> Result<(), StoreError>;
    async fn update(&self, id: Uuid, patch: &TestimonialPatch) -> Result<(), StoreError>;
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// Repository for customer orders.
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError>;

    /// Lookup by tracking code; callers pass the uppercased form.
    async fn find_by_code(&self, code: &str) -> Result<Option<Order>, StoreError>;

    /// All orders, newest first.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;

    async fn create(&self, order: &Order) -> Result<(), StoreError>;
    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), StoreError>;
}

/// Store for the payment settings singleton.
pub trait PaymentSettingsStore: Send + Sync {
    /// Insert `default` iff no row exists yet. Atomic on the fixed id — two
    /// racing first reads converge on a single document.
    async fn ensure_default(&self, default: &PaymentSettings) -> Result<(), StoreError>;

    async fn get(&self) -> Result<Option<PaymentSettings>, StoreError>;

    /// Full-document upsert keyed by the fixed id.
    async fn replace(&self, settings: &PaymentSettings) -> Result<(), StoreError>;
}

/// Store for the site settings singleton; same contract as payment settings.
pub trait SiteSettingsStore: Send + Sync {
    async fn ensure_default(&self, default: &SiteSettings) -> Result<(), StoreError>;
    async fn get(&self) -> Result<Option<SiteSettings>, StoreError>;
    async fn replace(&self, settings: &SiteSettings) -> Result<(), StoreError>;
}

/// Port for the blob store behind `/api/upload`. Returns the public URL of the
/// stored file.
pub trait FileStore: Send + Sync {
    async fn store(&self, bytes: &[u8], file_name: &str) -> Result<String, StoreError>;
}
