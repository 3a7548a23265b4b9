use sea_orm::entity::prelude::*;

/// Payment configuration singleton — exactly one row, fixed id
/// "payment_settings". EFT transfer details plus card-gateway toggles.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payment_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub account_holder_name: String,
    pub iban: String,
    pub bank_name: Option<String>,
    pub card_payment_enabled: bool,
    pub card_payment_provider: String,
    pub iyzico_api_key: Option<String>,
    pub iyzico_secret_key: Option<String>,
    pub iyzico_sandbox: bool,
    pub paytr_merchant_id: Option<String>,
    pub paytr_merchant_key: Option<String>,
    pub paytr_merchant_salt: Option<String>,
    pub paytr_sandbox: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
