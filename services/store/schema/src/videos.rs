use sea_orm::entity::prelude::*;

/// Legacy promo video row. Same shape as `slides`; kept as its own table so
/// pre-slides storefront builds keep working against `/api/videos`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "videos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub media_type: String,
    pub youtube_url: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
