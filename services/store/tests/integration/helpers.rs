use std::sync::{Arc, Mutex};

use chrono::{Duration, Utc};
use uuid::Uuid;

use vitrin_store::domain::repository::{
    AdminRepository, BannerRepository, OrderRepository, PaymentSettingsStore, ProductRepository,
    SiteSettingsStore, SlideRepository, TestimonialRepository, VideoRepository,
};
use vitrin_store::domain::types::{
    Admin, AdminPatch, AdminRole, Banner, BannerPatch, MediaType, Order, OrderItem,
    PaymentSettings, Product, ProductPatch, ProductVariant, SiteSettings, Slide, SlidePatch,
    Testimonial, TestimonialPatch, Video, VideoPatch,
};
use vitrin_store::error::StoreError;

// In-memory mocks mirror the contracts of the sea-orm repositories: merge
// updates overwrite only `Some` patch fields and re-stamp `updated_at`,
// deletes report whether a row went away, list filters/sorts match the real
// queries.

// ── MockAdminRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockAdminRepo {
    pub admins: Arc<Mutex<Vec<Admin>>>,
}

impl AdminRepository for MockAdminRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        Ok(self
            .admins
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        Ok(self.admins.lock().unwrap().len() as u64)
    }

    async fn list(&self) -> Result<Vec<Admin>, StoreError> {
        Ok(self.admins.lock().unwrap().clone())
    }

    async fn create(&self, admin: &Admin) -> Result<(), StoreError> {
        self.admins.lock().unwrap().push(admin.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &AdminPatch) -> Result<(), StoreError> {
        let mut admins = self.admins.lock().unwrap();
        if let Some(admin) = admins.iter_mut().find(|a| a.id == id) {
            if let Some(ref email) = patch.email {
                admin.email = email.clone();
            }
            if let Some(ref hash) = patch.password_hash {
                admin.password_hash = hash.clone();
            }
            if let Some(role) = patch.role {
                admin.role = role;
            }
            admin.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut admins = self.admins.lock().unwrap();
        let before = admins.len();
        admins.retain(|a| a.id != id);
        Ok(admins.len() < before)
    }
}

// ── MockProductRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProductRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for MockProductRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn list(&self, is_package: Option<bool>) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| is_package.is_none_or(|flag| p.is_package == flag))
            .cloned()
            .collect())
    }

    async fn create(&self, product: &Product) -> Result<(), StoreError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<(), StoreError> {
        let mut products = self.products.lock().unwrap();
        if let Some(product) = products.iter_mut().find(|p| p.id == id) {
            if let Some(ref name) = patch.name {
                product.name = name.clone();
            }
            if let Some(ref description) = patch.description {
                product.description = description.clone();
            }
            if let Some(price) = patch.price {
                product.price = price;
            }
            if let Some(ref image_url) = patch.image_url {
                product.image_url = image_url.clone();
            }
            if let Some(ref category) = patch.category {
                product.category = category.clone();
            }
            if let Some(stock) = patch.stock {
                product.stock = stock;
            }
            if let Some(is_package) = patch.is_package {
                product.is_package = is_package;
            }
            if let Some(has_variants) = patch.has_variants {
                product.has_variants = has_variants;
            }
            if let Some(ref variants) = patch.variants {
                product.variants = variants.clone();
            }
            product.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

// ── MockSlideRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSlideRepo {
    pub slides: Arc<Mutex<Vec<Slide>>>,
}

impl SlideRepository for MockSlideRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Slide>, StoreError> {
        Ok(self
            .slides
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Slide>, StoreError> {
        let mut slides: Vec<Slide> = self
            .slides
            .lock()
            .unwrap()
            .iter()
            .filter(|s| !only_active || s.active)
            .cloned()
            .collect();
        slides.sort_by_key(|s| s.sort_order);
        Ok(slides)
    }

    async fn create(&self, slide: &Slide) -> Result<(), StoreError> {
        self.slides.lock().unwrap().push(slide.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &SlidePatch) -> Result<(), StoreError> {
        let mut slides = self.slides.lock().unwrap();
        if let Some(slide) = slides.iter_mut().find(|s| s.id == id) {
            if let Some(ref title) = patch.title {
                slide.title = title.clone();
            }
            if let Some(media_type) = patch.media_type {
                slide.media_type = media_type;
            }
            if let Some(ref youtube_url) = patch.youtube_url {
                slide.youtube_url = Some(youtube_url.clone());
            }
            if let Some(ref image_url) = patch.image_url {
                slide.image_url = Some(image_url.clone());
            }
            if let Some(sort_order) = patch.sort_order {
                slide.sort_order = sort_order;
            }
            if let Some(active) = patch.active {
                slide.active = active;
            }
            slide.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut slides = self.slides.lock().unwrap();
        let before = slides.len();
        slides.retain(|s| s.id != id);
        Ok(slides.len() < before)
    }
}

// ── MockVideoRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockVideoRepo {
    pub videos: Arc<Mutex<Vec<Video>>>,
}

impl VideoRepository for MockVideoRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, StoreError> {
        Ok(self
            .videos
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Video>, StoreError> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| !only_active || v.active)
            .cloned()
            .collect();
        videos.sort_by_key(|v| v.sort_order);
        Ok(videos)
    }

    async fn create(&self, video: &Video) -> Result<(), StoreError> {
        self.videos.lock().unwrap().push(video.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &VideoPatch) -> Result<(), StoreError> {
        let mut videos = self.videos.lock().unwrap();
        if let Some(video) = videos.iter_mut().find(|v| v.id == id) {
            if let Some(ref title) = patch.title {
                video.title = title.clone();
            }
            if let Some(media_type) = patch.media_type {
                video.media_type = media_type;
            }
            if let Some(ref youtube_url) = patch.youtube_url {
                video.youtube_url = Some(youtube_url.clone());
            }
            if let Some(ref image_url) = patch.image_url {
                video.image_url = Some(image_url.clone());
            }
            if let Some(sort_order) = patch.sort_order {
                video.sort_order = sort_order;
            }
            if let Some(active) = patch.active {
                video.active = active;
            }
            video.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut videos = self.videos.lock().unwrap();
        let before = videos.len();
        videos.retain(|v| v.id != id);
        Ok(videos.len() < before)
    }
}

// ── MockBannerRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockBannerRepo {
    pub banners: Arc<Mutex<Vec<Banner>>>,
}

impl BannerRepository for MockBannerRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, StoreError> {
        Ok(self
            .banners
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Banner>, StoreError> {
        Ok(self
            .banners
            .lock()
            .unwrap()
            .iter()
            .filter(|b| !only_active || b.active)
            .cloned()
            .collect())
    }

    async fn create(&self, banner: &Banner) -> Result<(), StoreError> {
        self.banners.lock().unwrap().push(banner.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &BannerPatch) -> Result<(), StoreError> {
        let mut banners = self.banners.lock().unwrap();
        if let Some(banner) = banners.iter_mut().find(|b| b.id == id) {
            if let Some(ref title) = patch.title {
                banner.title = title.clone();
            }
            if let Some(ref description) = patch.description {
                banner.description = description.clone();
            }
            if let Some(ref image_url) = patch.image_url {
                banner.image_url = image_url.clone();
            }
            if let Some(ref link_url) = patch.link_url {
                banner.link_url = Some(link_url.clone());
            }
            if let Some(active) = patch.active {
                banner.active = active;
            }
            banner.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut banners = self.banners.lock().unwrap();
        let before = banners.len();
        banners.retain(|b| b.id != id);
        Ok(banners.len() < before)
    }
}

// ── MockTestimonialRepo ──────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTestimonialRepo {
    pub testimonials: Arc<Mutex<Vec<Testimonial>>>,
}

impl TestimonialRepository for MockTestimonialRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Testimonial>, StoreError> {
        Ok(self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Testimonial>, StoreError> {
        Ok(self
            .testimonials
            .lock()
            .unwrap()
            .iter()
            .filter(|t| !only_active || t.active)
            .cloned()
            .collect())
    }

    async fn create(&self, testimonial: &Testimonial) -> Result<(), StoreError> {
        self.testimonials.lock().unwrap().push(testimonial.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &TestimonialPatch) -> Result<(), StoreError> {
        let mut testimonials = self.testimonials.lock().unwrap();
        if let Some(t) = testimonials.iter_mut().find(|t| t.id == id) {
            if let Some(ref customer_name) = patch.customer_name {
                t.customer_name = customer_name.clone();
            }
            if let Some(ref customer_image) = patch.customer_image {
                t.customer_image = Some(customer_image.clone());
            }
            if let Some(rating) = patch.rating {
                t.rating = rating;
            }
            if let Some(ref comment) = patch.comment {
                t.comment = comment.clone();
            }
            if let Some(active) = patch.active {
                t.active = active;
            }
            t.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut testimonials = self.testimonials.lock().unwrap();
        let before = testimonials.len();
        testimonials.retain(|t| t.id != id);
        Ok(testimonials.len() < before)
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
}

impl OrderRepository for MockOrderRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Order>, StoreError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_code == code)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let mut orders = self.orders.lock().unwrap().clone();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    async fn create(&self, order: &Order) -> Result<(), StoreError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), StoreError> {
        let mut orders = self.orders.lock().unwrap();
        if let Some(order) = orders.iter_mut().find(|o| o.id == id) {
            order.status = status.to_owned();
            order.updated_at = Utc::now();
        }
        Ok(())
    }
}

// ── Mock settings stores ─────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPaymentSettingsStore {
    pub doc: Arc<Mutex<Option<PaymentSettings>>>,
}

impl PaymentSettingsStore for MockPaymentSettingsStore {
    async fn ensure_default(&self, default: &PaymentSettings) -> Result<(), StoreError> {
        let mut doc = self.doc.lock().unwrap();
        if doc.is_none() {
            *doc = Some(default.clone());
        }
        Ok(())
    }

    async fn get(&self) -> Result<Option<PaymentSettings>, StoreError> {
        Ok(self.doc.lock().unwrap().clone())
    }

    async fn replace(&self, settings: &PaymentSettings) -> Result<(), StoreError> {
        *self.doc.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockSiteSettingsStore {
    pub doc: Arc<Mutex<Option<SiteSettings>>>,
}

impl SiteSettingsStore for MockSiteSettingsStore {
    async fn ensure_default(&self, default: &SiteSettings) -> Result<(), StoreError> {
        let mut doc = self.doc.lock().unwrap();
        if doc.is_none() {
            *doc = Some(default.clone());
        }
        Ok(())
    }

    async fn get(&self) -> Result<Option<SiteSettings>, StoreError> {
        Ok(self.doc.lock().unwrap().clone())
    }

    async fn replace(&self, settings: &SiteSettings) -> Result<(), StoreError> {
        *self.doc.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}

// ── Test fixtures ────────────────────────────────────────────────────────────

pub fn test_admin(email: &str, role: AdminRole) -> Admin {
    Admin {
        id: Uuid::new_v4(),
        email: email.to_owned(),
        password_hash: "$2b$12$fixture-hash-not-verifiable".to_owned(),
        role,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_variant(name: &str, stock: i32, is_available: bool) -> ProductVariant {
    ProductVariant {
        name: name.to_owned(),
        stock,
        image_url: None,
        is_available,
    }
}

pub fn test_slide(title: &str, sort_order: i32, active: bool) -> Slide {
    Slide {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        media_type: MediaType::Video,
        youtube_url: Some("https://youtube.com/watch?v=fixture".to_owned()),
        image_url: None,
        sort_order,
        active,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn test_order_item(product_name: &str, quantity: i32, price: f64) -> OrderItem {
    OrderItem {
        product_id: Uuid::new_v4().to_string(),
        product_name: product_name.to_owned(),
        quantity,
        price,
        variant: None,
    }
}

pub fn test_order(code: &str, minutes_ago: i64) -> Order {
    let at = Utc::now() - Duration::minutes(minutes_ago);
    Order {
        id: Uuid::new_v4(),
        order_code: code.to_owned(),
        customer_name: "Ayşe Demir".to_owned(),
        customer_email: "ayse@example.com".to_owned(),
        customer_phone: "+90 555 111 22 33".to_owned(),
        customer_address: "Kadıköy, İstanbul".to_owned(),
        receipt_file_url: None,
        items: vec![test_order_item("Bitkisel Çay", 2, 149.9)],
        total_amount: 299.8,
        status: "pending".to_owned(),
        created_at: at,
        updated_at: at,
    }
}
