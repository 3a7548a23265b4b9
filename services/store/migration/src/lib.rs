use sea_orm_migration::prelude::*;

mod m20260801_000001_create_admins;
mod m20260801_000002_create_products;
mod m20260801_000003_create_slides;
mod m20260801_000004_create_videos;
mod m20260801_000005_create_banners;
mod m20260801_000006_create_testimonials;
mod m20260801_000007_create_orders;
mod m20260801_000008_create_payment_settings;
mod m20260801_000009_create_site_settings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_admins::Migration),
            Box::new(m20260801_000002_create_products::Migration),
            Box::new(m20260801_000003_create_slides::Migration),
            Box::new(m20260801_000004_create_videos::Migration),
            Box::new(m20260801_000005_create_banners::Migration),
            Box::new(m20260801_000006_create_testimonials::Migration),
            Box::new(m20260801_000007_create_orders::Migration),
            Box::new(m20260801_000008_create_payment_settings::Migration),
            Box::new(m20260801_000009_create_site_settings::Migration),
        ]
    }
}
