use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Session token lifetime: 7 days.
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// Fixed primary keys of the two settings singletons.
pub const PAYMENT_SETTINGS_ID: &str = "payment_settings";
pub const SITE_SETTINGS_ID: &str = "site_settings";

/// Upload constraints: JPEG/PNG/PDF only, at most 5 MiB.
pub const ALLOWED_UPLOAD_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "application/pdf"];
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Admin permission level.
///
/// Wire format: Turkish display strings. "Yönetici" manages everything
/// including other admin accounts; "Admin" manages catalog and content only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    SuperAdmin,
    Standard,
}

impl AdminRole {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Yönetici" => Some(Self::SuperAdmin),
            "Admin" => Some(Self::Standard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "Yönetici",
            Self::Standard => "Admin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Media kind of a slide or legacy video entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Video,
    Image,
}

impl MediaType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "video" => Some(Self::Video),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
        }
    }
}

/// Card payment gateway selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPaymentProvider {
    None,
    Iyzico,
    Paytr,
    Both,
}

impl CardPaymentProvider {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "none" => Some(Self::None),
            "iyzico" => Some(Self::Iyzico),
            "paytr" => Some(Self::Paytr),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Iyzico => "iyzico",
            Self::Paytr => "paytr",
            Self::Both => "both",
        }
    }

    /// Provider names the storefront may offer at checkout. Empty unless card
    /// payment is switched on.
    pub fn available(self, enabled: bool) -> Vec<&'static str> {
        if !enabled {
            return Vec::new();
        }
        match self {
            Self::None => Vec::new(),
            Self::Iyzico => vec!["iyzico"],
            Self::Paytr => vec!["paytr"],
            Self::Both => vec!["iyzico", "paytr"],
        }
    }
}

/// Back-office account. `password_hash` never leaves the service.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for an admin account; `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct AdminPatch {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub role: Option<AdminRole>,
}

impl AdminPatch {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.role.is_none()
    }
}

/// Catalog product with embedded variants.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub category: String,
    pub stock: i32,
    pub is_package: bool,
    pub has_variants: bool,
    pub variants: Vec<ProductVariant>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A purchasable sub-option of a product. `is_available` is set by the admin
/// independently of `stock` — zero stock does not force it off.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariant {
    pub name: String,
    pub stock: i32,
    pub image_url: Option<String>,
    pub is_available: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub is_package: Option<bool>,
    pub has_variants: Option<bool>,
    pub variants: Option<Vec<ProductVariant>>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.stock.is_none()
            && self.is_package.is_none()
            && self.has_variants.is_none()
            && self.variants.is_none()
    }
}

/// Homepage hero slide.
#[derive(Debug, Clone)]
pub struct Slide {
    pub id: Uuid,
    pub title: String,
    pub media_type: MediaType,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct SlidePatch {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

impl SlidePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.media_type.is_none()
            && self.youtube_url.is_none()
            && self.image_url.is_none()
            && self.sort_order.is_none()
            && self.active.is_none()
    }
}

/// Legacy promo video. Same shape as [`Slide`]; `youtube_url` is the primary
/// field for pre-slides storefront builds.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: Uuid,
    pub title: String,
    pub media_type: MediaType,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

impl VideoPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.media_type.is_none()
            && self.youtube_url.is_none()
            && self.image_url.is_none()
            && self.sort_order.is_none()
            && self.active.is_none()
    }
}

/// Campaign banner.
#[derive(Debug, Clone)]
pub struct Banner {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct BannerPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub link_url: Option<String>,
    pub active: Option<bool>,
}

impl BannerPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image_url.is_none()
            && self.link_url.is_none()
            && self.active.is_none()
    }
}

/// Customer testimonial.
#[derive(Debug, Clone)]
pub struct Testimonial {
    pub id: Uuid,
    pub customer_name: String,
    pub customer_image: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct TestimonialPatch {
    pub customer_name: Option<String>,
    pub customer_image: Option<String>,
    pub rating: Option<i32>,
    pub comment: Option<String>,
    pub active: Option<bool>,
}

impl TestimonialPatch {
    pub fn is_empty(&self) -> bool {
        self.customer_name.is_none()
            && self.customer_image.is_none()
            && self.rating.is_none()
            && self.comment.is_none()
            && self.active.is_none()
    }
}

/// Customer order. `order_code` is the public tracking key; `status` is free
/// text so operations can invent stages without a deploy.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub order_code: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub receipt_file_url: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Line-item snapshot taken at submission time. `product_id` is a plain
/// string copy, not a foreign key — deleting the product keeps the order intact.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
    pub variant: Option<String>,
}

/// Payment configuration singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentSettings {
    pub account_holder_name: String,
    pub iban: String,
    pub bank_name: Option<String>,
    pub card_payment_enabled: bool,
    pub card_payment_provider: CardPaymentProvider,
    pub iyzico_api_key: Option<String>,
    pub iyzico_secret_key: Option<String>,
    pub iyzico_sandbox: bool,
    pub paytr_merchant_id: Option<String>,
    pub paytr_merchant_key: Option<String>,
    pub paytr_merchant_salt: Option<String>,
    pub paytr_sandbox: bool,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_ACCOUNT_HOLDER: &str = "Vitrin Sağlık Ürünleri";
pub const DEFAULT_IBAN: &str = "TR00 0000 0000 0000 0000 0000 00";
pub const DEFAULT_BANK_NAME: &str = "Banka Adı";

impl PaymentSettings {
    /// Document written on first read when no row exists yet.
    pub fn default_document(now: DateTime<Utc>) -> Self {
        Self {
            account_holder_name: DEFAULT_ACCOUNT_HOLDER.to_owned(),
            iban: DEFAULT_IBAN.to_owned(),
            bank_name: Some(DEFAULT_BANK_NAME.to_owned()),
            card_payment_enabled: false,
            card_payment_provider: CardPaymentProvider::None,
            iyzico_api_key: None,
            iyzico_secret_key: None,
            iyzico_sandbox: true,
            paytr_merchant_id: None,
            paytr_merchant_key: None,
            paytr_merchant_salt: None,
            paytr_sandbox: true,
            updated_at: now,
        }
    }
}

/// Site chrome singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteSettings {
    pub logo_url: String,
    pub topbar_message: String,
    pub footer_about: String,
    pub footer_phone: String,
    pub footer_email: String,
    pub updated_at: DateTime<Utc>,
}

pub const DEFAULT_LOGO_URL: &str = "/uploads/logo.png";
pub const DEFAULT_TOPBAR_MESSAGE: &str = "🚚 Kargo Ücretsizdir!";
pub const DEFAULT_FOOTER_ABOUT: &str = "Sağlıklı yaşamınız için doğru adres";
pub const DEFAULT_FOOTER_PHONE: &str = "+90 542 000 00 55";
pub const DEFAULT_FOOTER_EMAIL: &str = "info@vitrin.com.tr";

impl SiteSettings {
    /// Document written on first read when no row exists yet.
    pub fn default_document(now: DateTime<Utc>) -> Self {
        Self {
            logo_url: DEFAULT_LOGO_URL.to_owned(),
            topbar_message: DEFAULT_TOPBAR_MESSAGE.to_owned(),
            footer_about: DEFAULT_FOOTER_ABOUT.to_owned(),
            footer_phone: DEFAULT_FOOTER_PHONE.to_owned(),
            footer_email: DEFAULT_FOOTER_EMAIL.to_owned(),
            updated_at: now,
        }
    }
}
