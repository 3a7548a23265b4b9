use sea_orm::entity::prelude::*;

/// Site chrome singleton — exactly one row, fixed id "site_settings".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub logo_url: String,
    pub topbar_message: String,
    pub footer_about: String,
    pub footer_phone: String,
    pub footer_email: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
