use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, sea_query::OnConflict,
};
use uuid::Uuid;

use vitrin_store_schema::{
    admins, banners, orders, payment_settings, products, site_settings, slides, testimonials,
    videos,
};

use crate::domain::repository::{
    AdminRepository, BannerRepository, OrderRepository, PaymentSettingsStore, ProductRepository,
    SiteSettingsStore, SlideRepository, TestimonialRepository, VideoRepository,
};
use crate::domain::types::{
    Admin, AdminPatch, AdminRole, Banner, BannerPatch, CardPaymentProvider, MediaType, Order,
    OrderItem, PAYMENT_SETTINGS_ID, PaymentSettings, Product, ProductPatch, ProductVariant,
    SITE_SETTINGS_ID, SiteSettings, Slide, SlidePatch, Testimonial, TestimonialPatch, Video,
    VideoPatch,
};
use crate::error::StoreError;

// ── Admin repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAdminRepository {
    pub db: DatabaseConnection,
}

impl AdminRepository for DbAdminRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Admin>, StoreError> {
        let model = admins::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find admin by id")?;
        model.map(admin_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, StoreError> {
        let model = admins::Entity::find()
            .filter(admins::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find admin by email")?;
        model.map(admin_from_model).transpose()
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let n = admins::Entity::find()
            .count(&self.db)
            .await
            .context("count admins")?;
        Ok(n)
    }

    async fn list(&self) -> Result<Vec<Admin>, StoreError> {
        let models = admins::Entity::find()
            .order_by_asc(admins::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list admins")?;
        models.into_iter().map(admin_from_model).collect()
    }

    async fn create(&self, admin: &Admin) -> Result<(), StoreError> {
        admins::ActiveModel {
            id: Set(admin.id),
            email: Set(admin.email.clone()),
            password_hash: Set(admin.password_hash.clone()),
            role: Set(admin.role.as_str().to_owned()),
            created_at: Set(admin.created_at),
            updated_at: Set(admin.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create admin")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &AdminPatch) -> Result<(), StoreError> {
        let mut am = admins::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref email) = patch.email {
            am.email = Set(email.clone());
        }
        if let Some(ref hash) = patch.password_hash {
            am.password_hash = Set(hash.clone());
        }
        if let Some(role) = patch.role {
            am.role = Set(role.as_str().to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update admin")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = admins::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete admin")?;
        Ok(res.rows_affected > 0)
    }
}

fn admin_from_model(model: admins::Model) -> Result<Admin, StoreError> {
    let role = AdminRole::parse(&model.role).ok_or_else(|| {
        StoreError::Internal(anyhow::anyhow!("unknown role in admins row: {}", model.role))
    })?;
    Ok(Admin {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, StoreError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        Ok(model.map(product_from_model))
    }

    async fn list(&self, is_package: Option<bool>) -> Result<Vec<Product>, StoreError> {
        let mut query = products::Entity::find();
        if let Some(flag) = is_package {
            query = query.filter(products::Column::IsPackage.eq(flag));
        }
        let models = query.all(&self.db).await.context("list products")?;
        Ok(models.into_iter().map(product_from_model).collect())
    }

    async fn create(&self, product: &Product) -> Result<(), StoreError> {
        products::ActiveModel {
            id: Set(product.id),
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            image_url: Set(product.image_url.clone()),
            category: Set(product.category.clone()),
            stock: Set(product.stock),
            is_package: Set(product.is_package),
            has_variants: Set(product.has_variants),
            variants: Set(variants_to_schema(&product.variants)),
            created_at: Set(product.created_at),
            updated_at: Set(product.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create product")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<(), StoreError> {
        let mut am = products::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref name) = patch.name {
            am.name = Set(name.clone());
        }
        if let Some(ref description) = patch.description {
            am.description = Set(description.clone());
        }
        if let Some(price) = patch.price {
            am.price = Set(price);
        }
        if let Some(ref image_url) = patch.image_url {
            am.image_url = Set(image_url.clone());
        }
        if let Some(ref category) = patch.category {
            am.category = Set(category.clone());
        }
        if let Some(stock) = patch.stock {
            am.stock = Set(stock);
        }
        if let Some(is_package) = patch.is_package {
            am.is_package = Set(is_package);
        }
        if let Some(has_variants) = patch.has_variants {
            am.has_variants = Set(has_variants);
        }
        if let Some(ref variants) = patch.variants {
            am.variants = Set(variants_to_schema(variants));
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update product")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(res.rows_affected > 0)
    }
}

fn product_from_model(model: products::Model) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        image_url: model.image_url,
        category: model.category,
        stock: model.stock,
        is_package: model.is_package,
        has_variants: model.has_variants,
        variants: model
            .variants
            .0
            .into_iter()
            .map(|v| ProductVariant {
                name: v.name,
                stock: v.stock,
                image_url: v.image_url,
                is_available: v.is_available,
            })
            .collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn variants_to_schema(variants: &[ProductVariant]) -> products::ProductVariants {
    products::ProductVariants(
        variants
            .iter()
            .map(|v| products::ProductVariant {
                name: v.name.clone(),
                stock: v.stock,
                image_url: v.image_url.clone(),
                is_available: v.is_available,
            })
            .collect(),
    )
}

// ── Slide repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSlideRepository {
    pub db: DatabaseConnection,
}

impl SlideRepository for DbSlideRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Slide>, StoreError> {
        let model = slides::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find slide by id")?;
        model.map(slide_from_model).transpose()
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Slide>, StoreError> {
        let mut query = slides::Entity::find().order_by_asc(slides::Column::SortOrder);
        if only_active {
            query = query.filter(slides::Column::Active.eq(true));
        }
        let models = query.all(&self.db).await.context("list slides")?;
        models.into_iter().map(slide_from_model).collect()
    }

    async fn create(&self, slide: &Slide) -> Result<(), StoreError> {
        slides::ActiveModel {
            id: Set(slide.id),
            title: Set(slide.title.clone()),
            media_type: Set(slide.media_type.as_str().to_owned()),
            youtube_url: Set(slide.youtube_url.clone()),
            image_url: Set(slide.image_url.clone()),
            sort_order: Set(slide.sort_order),
            active: Set(slide.active),
            created_at: Set(slide.created_at),
            updated_at: Set(slide.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create slide")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &SlidePatch) -> Result<(), StoreError> {
        let mut am = slides::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref title) = patch.title {
            am.title = Set(title.clone());
        }
        if let Some(media_type) = patch.media_type {
            am.media_type = Set(media_type.as_str().to_owned());
        }
        if let Some(ref youtube_url) = patch.youtube_url {
            am.youtube_url = Set(Some(youtube_url.clone()));
        }
        if let Some(ref image_url) = patch.image_url {
            am.image_url = Set(Some(image_url.clone()));
        }
        if let Some(sort_order) = patch.sort_order {
            am.sort_order = Set(sort_order);
        }
        if let Some(active) = patch.active {
            am.active = Set(active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update slide")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = slides::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete slide")?;
        Ok(res.rows_affected > 0)
    }
}

fn slide_from_model(model: slides::Model) -> Result<Slide, StoreError> {
    Ok(Slide {
        id: model.id,
        title: model.title,
        media_type: parse_media_type(&model.media_type)?,
        youtube_url: model.youtube_url,
        image_url: model.image_url,
        sort_order: model.sort_order,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Video repository (legacy) ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbVideoRepository {
    pub db: DatabaseConnection,
}

impl VideoRepository for DbVideoRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, StoreError> {
        let model = videos::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find video by id")?;
        model.map(video_from_model).transpose()
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Video>, StoreError> {
        let mut query = videos::Entity::find().order_by_asc(videos::Column::SortOrder);
        if only_active {
            query = query.filter(videos::Column::Active.eq(true));
        }
        let models = query.all(&self.db).await.context("list videos")?;
        models.into_iter().map(video_from_model).collect()
    }

    async fn create(&self, video: &Video) -> Result<(), StoreError> {
        videos::ActiveModel {
            id: Set(video.id),
            title: Set(video.title.clone()),
            media_type: Set(video.media_type.as_str().to_owned()),
            youtube_url: Set(video.youtube_url.clone()),
            image_url: Set(video.image_url.clone()),
            sort_order: Set(video.sort_order),
            active: Set(video.active),
            created_at: Set(video.created_at),
            updated_at: Set(video.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create video")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &VideoPatch) -> Result<(), StoreError> {
        let mut am = videos::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref title) = patch.title {
            am.title = Set(title.clone());
        }
        if let Some(media_type) = patch.media_type {
            am.media_type = Set(media_type.as_str().to_owned());
        }
        if let Some(ref youtube_url) = patch.youtube_url {
            am.youtube_url = Set(Some(youtube_url.clone()));
        }
        if let Some(ref image_url) = patch.image_url {
            am.image_url = Set(Some(image_url.clone()));
        }
        if let Some(sort_order) = patch.sort_order {
            am.sort_order = Set(sort_order);
        }
        if let Some(active) = patch.active {
            am.active = Set(active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update video")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = videos::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete video")?;
        Ok(res.rows_affected > 0)
    }
}

fn video_from_model(model: videos::Model) -> Result<Video, StoreError> {
    Ok(Video {
        id: model.id,
        title: model.title,
        media_type: parse_media_type(&model.media_type)?,
        youtube_url: model.youtube_url,
        image_url: model.image_url,
        sort_order: model.sort_order,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn parse_media_type(raw: &str) -> Result<MediaType, StoreError> {
    MediaType::parse(raw)
        .ok_or_else(|| StoreError::Internal(anyhow::anyhow!("unknown media type in row: {raw}")))
}

// ── Banner repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBannerRepository {
    pub db: DatabaseConnection,
}

impl BannerRepository for DbBannerRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Banner>, StoreError> {
        let model = banners::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find banner by id")?;
        Ok(model.map(banner_from_model))
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Banner>, StoreError> {
        let mut query = banners::Entity::find();
        if only_active {
            query = query.filter(banners::Column::Active.eq(true));
        }
        let models = query.all(&self.db).await.context("list banners")?;
        Ok(models.into_iter().map(banner_from_model).collect())
    }

    async fn create(&self, banner: &Banner) -> Result<(), StoreError> {
        banners::ActiveModel {
            id: Set(banner.id),
            title: Set(banner.title.clone()),
            description: Set(banner.description.clone()),
            image_url: Set(banner.image_url.clone()),
            link_url: Set(banner.link_url.clone()),
            active: Set(banner.active),
            created_at: Set(banner.created_at),
            updated_at: Set(banner.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create banner")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &BannerPatch) -> Result<(), StoreError> {
        let mut am = banners::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref title) = patch.title {
            am.title = Set(title.clone());
        }
        if let Some(ref description) = patch.description {
            am.description = Set(description.clone());
        }
        if let Some(ref image_url) = patch.image_url {
            am.image_url = Set(image_url.clone());
        }
        if let Some(ref link_url) = patch.link_url {
            am.link_url = Set(Some(link_url.clone()));
        }
        if let Some(active) = patch.active {
            am.active = Set(active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update banner")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = banners::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete banner")?;
        Ok(res.rows_affected > 0)
    }
}

fn banner_from_model(model: banners::Model) -> Banner {
    Banner {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        link_url: model.link_url,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Testimonial repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTestimonialRepository {
    pub db: DatabaseConnection,
}

impl TestimonialRepository for DbTestimonialRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Testimonial>, StoreError> {
        let model = testimonials::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find testimonial by id")?;
        Ok(model.map(testimonial_from_model))
    }

    async fn list(&self, only_active: bool) -> Result<Vec<Testimonial>, StoreError> {
        let mut query = testimonials::Entity::find();
        if only_active {
            query = query.filter(testimonials::Column::Active.eq(true));
        }
        let models = query.all(&self.db).await.context("list testimonials")?;
        Ok(models.into_iter().map(testimonial_from_model).collect())
    }

    async fn create(&self, testimonial: &Testimonial) -> Result<(), StoreError> {
        testimonials::ActiveModel {
            id: Set(testimonial.id),
            customer_name: Set(testimonial.customer_name.clone()),
            customer_image: Set(testimonial.customer_image.clone()),
            rating: Set(testimonial.rating),
            comment: Set(testimonial.comment.clone()),
            active: Set(testimonial.active),
            created_at: Set(testimonial.created_at),
            updated_at: Set(testimonial.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create testimonial")?;
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &TestimonialPatch) -> Result<(), StoreError> {
        let mut am = testimonials::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(ref customer_name) = patch.customer_name {
            am.customer_name = Set(customer_name.clone());
        }
        if let Some(ref customer_image) = patch.customer_image {
            am.customer_image = Set(Some(customer_image.clone()));
        }
        if let Some(rating) = patch.rating {
            am.rating = Set(rating);
        }
        if let Some(ref comment) = patch.comment {
            am.comment = Set(comment.clone());
        }
        if let Some(active) = patch.active {
            am.active = Set(active);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update testimonial")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let res = testimonials::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete testimonial")?;
        Ok(res.rows_affected > 0)
    }
}

fn testimonial_from_model(model: testimonials::Model) -> Testimonial {
    Testimonial {
        id: model.id,
        customer_name: model.customer_name,
        customer_image: model.customer_image,
        rating: model.rating,
        comment: model.comment,
        active: model.active,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, StoreError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        Ok(model.map(order_from_model))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Order>, StoreError> {
        let model = orders::Entity::find()
            .filter(orders::Column::OrderCode.eq(code))
            .one(&self.db)
            .await
            .context("find order by code")?;
        Ok(model.map(order_from_model))
    }

    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let models = orders::Entity::find()
            .order_by_desc(orders::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list orders")?;
        Ok(models.into_iter().map(order_from_model).collect())
    }

    async fn create(&self, order: &Order) -> Result<(), StoreError> {
        orders::ActiveModel {
            id: Set(order.id),
            order_code: Set(order.order_code.clone()),
            customer_name: Set(order.customer_name.clone()),
            customer_email: Set(order.customer_email.clone()),
            customer_phone: Set(order.customer_phone.clone()),
            customer_address: Set(order.customer_address.clone()),
            receipt_file_url: Set(order.receipt_file_url.clone()),
            items: Set(items_to_schema(&order.items)),
            total_amount: Set(order.total_amount),
            status: Set(order.status.clone()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create order")?;
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: &str) -> Result<(), StoreError> {
        let am = orders::ActiveModel {
            id: Set(id),
            status: Set(status.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        am.update(&self.db).await.context("update order status")?;
        Ok(())
    }
}

fn order_from_model(model: orders::Model) -> Order {
    Order {
        id: model.id,
        order_code: model.order_code,
        customer_name: model.customer_name,
        customer_email: model.customer_email,
        customer_phone: model.customer_phone,
        customer_address: model.customer_address,
        receipt_file_url: model.receipt_file_url,
        items: model
            .items
            .0
            .into_iter()
            .map(|i| OrderItem {
                product_id: i.product_id,
                product_name: i.product_name,
                quantity: i.quantity,
                price: i.price,
                variant: i.variant,
            })
            .collect(),
        total_amount: model.total_amount,
        status: model.status,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn items_to_schema(items: &[OrderItem]) -> orders::OrderItems {
    orders::OrderItems(
        items
            .iter()
            .map(|i| orders::OrderItem {
                product_id: i.product_id.clone(),
                product_name: i.product_name.clone(),
                quantity: i.quantity,
                price: i.price,
                variant: i.variant.clone(),
            })
            .collect(),
    )
}

// ── Payment settings store ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPaymentSettingsStore {
    pub db: DatabaseConnection,
}

impl PaymentSettingsStore for DbPaymentSettingsStore {
    async fn ensure_default(&self, default: &PaymentSettings) -> Result<(), StoreError> {
        payment_settings::Entity::insert(payment_settings_active(default))
            .on_conflict(
                OnConflict::column(payment_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("ensure payment settings default")?;
        Ok(())
    }

    async fn get(&self) -> Result<Option<PaymentSettings>, StoreError> {
        let model = payment_settings::Entity::find_by_id(PAYMENT_SETTINGS_ID)
            .one(&self.db)
            .await
            .context("get payment settings")?;
        model.map(payment_settings_from_model).transpose()
    }

    async fn replace(&self, settings: &PaymentSettings) -> Result<(), StoreError> {
        payment_settings::Entity::insert(payment_settings_active(settings))
            .on_conflict(
                OnConflict::column(payment_settings::Column::Id)
                    .update_columns([
                        payment_settings::Column::AccountHolderName,
                        payment_settings::Column::Iban,
                        payment_settings::Column::BankName,
                        payment_settings::Column::CardPaymentEnabled,
                        payment_settings::Column::CardPaymentProvider,
                        payment_settings::Column::IyzicoApiKey,
                        payment_settings::Column::IyzicoSecretKey,
                        payment_settings::Column::IyzicoSandbox,
                        payment_settings::Column::PaytrMerchantId,
                        payment_settings::Column::PaytrMerchantKey,
                        payment_settings::Column::PaytrMerchantSalt,
                        payment_settings::Column::PaytrSandbox,
                        payment_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("replace payment settings")?;
        Ok(())
    }
}

fn payment_settings_active(settings: &PaymentSettings) -> payment_settings::ActiveModel {
    payment_settings::ActiveModel {
        id: Set(PAYMENT_SETTINGS_ID.to_owned()),
        account_holder_name: Set(settings.account_holder_name.clone()),
        iban: Set(settings.iban.clone()),
        bank_name: Set(settings.bank_name.clone()),
        card_payment_enabled: Set(settings.card_payment_enabled),
        card_payment_provider: Set(settings.card_payment_provider.as_str().to_owned()),
        iyzico_api_key: Set(settings.iyzico_api_key.clone()),
        iyzico_secret_key: Set(settings.iyzico_secret_key.clone()),
        iyzico_sandbox: Set(settings.iyzico_sandbox),
        paytr_merchant_id: Set(settings.paytr_merchant_id.clone()),
        paytr_merchant_key: Set(settings.paytr_merchant_key.clone()),
        paytr_merchant_salt: Set(settings.paytr_merchant_salt.clone()),
        paytr_sandbox: Set(settings.paytr_sandbox),
        updated_at: Set(settings.updated_at),
    }
}

fn payment_settings_from_model(
    model: payment_settings::Model,
) -> Result<PaymentSettings, StoreError> {
    let provider = CardPaymentProvider::parse(&model.card_payment_provider).ok_or_else(|| {
        StoreError::Internal(anyhow::anyhow!(
            "unknown payment provider in row: {}",
            model.card_payment_provider
        ))
    })?;
    Ok(PaymentSettings {
        account_holder_name: model.account_holder_name,
        iban: model.iban,
        bank_name: model.bank_name,
        card_payment_enabled: model.card_payment_enabled,
        card_payment_provider: provider,
        iyzico_api_key: model.iyzico_api_key,
        iyzico_secret_key: model.iyzico_secret_key,
        iyzico_sandbox: model.iyzico_sandbox,
        paytr_merchant_id: model.paytr_merchant_id,
        paytr_merchant_key: model.paytr_merchant_key,
        paytr_merchant_salt: model.paytr_merchant_salt,
        paytr_sandbox: model.paytr_sandbox,
        updated_at: model.updated_at,
    })
}

// ── Site settings store ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSiteSettingsStore {
    pub db: DatabaseConnection,
}

impl SiteSettingsStore for DbSiteSettingsStore {
    async fn ensure_default(&self, default: &SiteSettings) -> Result<(), StoreError> {
        site_settings::Entity::insert(site_settings_active(default))
            .on_conflict(
                OnConflict::column(site_settings::Column::Id)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("ensure site settings default")?;
        Ok(())
    }

    async fn get(&self) -> Result<Option<SiteSettings>, StoreError> {
        let model = site_settings::Entity::find_by_id(SITE_SETTINGS_ID)
            .one(&self.db)
            .await
            .context("get site settings")?;
        Ok(model.map(|m| SiteSettings {
            logo_url: m.logo_url,
            topbar_message: m.topbar_message,
            footer_about: m.footer_about,
            footer_phone: m.footer_phone,
            footer_email: m.footer_email,
            updated_at: m.updated_at,
        }))
    }

    async fn replace(&self, settings: &SiteSettings) -> Result<(), StoreError> {
        site_settings::Entity::insert(site_settings_active(settings))
            .on_conflict(
                OnConflict::column(site_settings::Column::Id)
                    .update_columns([
                        site_settings::Column::LogoUrl,
                        site_settings::Column::TopbarMessage,
                        site_settings::Column::FooterAbout,
                        site_settings::Column::FooterPhone,
                        site_settings::Column::FooterEmail,
                        site_settings::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("replace site settings")?;
        Ok(())
    }
}

fn site_settings_active(settings: &SiteSettings) -> site_settings::ActiveModel {
    site_settings::ActiveModel {
        id: Set(SITE_SETTINGS_ID.to_owned()),
        logo_url: Set(settings.logo_url.clone()),
        topbar_message: Set(settings.topbar_message.clone()),
        footer_about: Set(settings.footer_about.clone()),
        footer_phone: Set(settings.footer_phone.clone()),
        footer_email: Set(settings.footer_email.clone()),
        updated_at: Set(settings.updated_at),
    }
}
