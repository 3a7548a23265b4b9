use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::AdminIdentity;
use crate::domain::types::{
    CardPaymentProvider, DEFAULT_FOOTER_ABOUT, DEFAULT_FOOTER_EMAIL, DEFAULT_FOOTER_PHONE,
    DEFAULT_TOPBAR_MESSAGE, PaymentSettings, SiteSettings,
};
use crate::error::StoreError;
use crate::state::AppState;
use crate::usecase::settings::{
    GetCardPaymentStatusUseCase, GetPaymentSettingsUseCase, GetSiteSettingsUseCase,
    UpdatePaymentSettingsInput, UpdatePaymentSettingsUseCase, UpdateSiteSettingsInput,
    UpdateSiteSettingsUseCase,
};

fn default_true() -> bool {
    true
}

// ── GET /api/payment-settings ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PaymentSettingsResponse {
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
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<PaymentSettings> for PaymentSettingsResponse {
    fn from(s: PaymentSettings) -> Self {
        Self {
            account_holder_name: s.account_holder_name,
            iban: s.iban,
            bank_name: s.bank_name,
            card_payment_enabled: s.card_payment_enabled,
            card_payment_provider: s.card_payment_provider.as_str().to_owned(),
            iyzico_api_key: s.iyzico_api_key,
            iyzico_secret_key: s.iyzico_secret_key,
            iyzico_sandbox: s.iyzico_sandbox,
            paytr_merchant_id: s.paytr_merchant_id,
            paytr_merchant_key: s.paytr_merchant_key,
            paytr_merchant_salt: s.paytr_merchant_salt,
            paytr_sandbox: s.paytr_sandbox,
            updated_at: s.updated_at,
        }
    }
}

pub async fn get_payment_settings(
    State(state): State<AppState>,
) -> Result<Json<PaymentSettingsResponse>, StoreError> {
    let usecase = GetPaymentSettingsUseCase {
        store: state.payment_settings_store(),
    };
    let settings = usecase.execute().await?;
    Ok(Json(settings.into()))
}

// ── PUT /api/payment-settings ────────────────────────────────────────────────

/// Full-replace payload: the admin form submits every field on save, so
/// omitted optional fields reset to their defaults instead of merging.
#[derive(Deserialize)]
pub struct UpdatePaymentSettingsRequest {
    pub account_holder_name: String,
    pub iban: String,
    pub bank_name: Option<String>,
    #[serde(default)]
    pub card_payment_enabled: bool,
    #[serde(default = "default_provider")]
    pub card_payment_provider: String,
    pub iyzico_api_key: Option<String>,
    pub iyzico_secret_key: Option<String>,
    #[serde(default = "default_true")]
    pub iyzico_sandbox: bool,
    pub paytr_merchant_id: Option<String>,
    pub paytr_merchant_key: Option<String>,
    pub paytr_merchant_salt: Option<String>,
    #[serde(default = "default_true")]
    pub paytr_sandbox: bool,
}

fn default_provider() -> String {
    "none".to_owned()
}

pub async fn update_payment_settings(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<UpdatePaymentSettingsRequest>,
) -> Result<Json<PaymentSettingsResponse>, StoreError> {
    let provider = CardPaymentProvider::parse(&body.card_payment_provider)
        .ok_or(StoreError::InvalidProvider)?;
    let usecase = UpdatePaymentSettingsUseCase {
        store: state.payment_settings_store(),
    };
    let settings = usecase
        .execute(UpdatePaymentSettingsInput {
            account_holder_name: body.account_holder_name,
            iban: body.iban,
            bank_name: body.bank_name,
            card_payment_enabled: body.card_payment_enabled,
            card_payment_provider: provider,
            iyzico_api_key: body.iyzico_api_key,
            iyzico_secret_key: body.iyzico_secret_key,
            iyzico_sandbox: body.iyzico_sandbox,
            paytr_merchant_id: body.paytr_merchant_id,
            paytr_merchant_key: body.paytr_merchant_key,
            paytr_merchant_salt: body.paytr_merchant_salt,
            paytr_sandbox: body.paytr_sandbox,
        })
        .await?;
    Ok(Json(settings.into()))
}

// ── GET /api/card-payment/status ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct CardPaymentStatusResponse {
    pub card_payment_enabled: bool,
    pub available_providers: Vec<&'static str>,
}

pub async fn card_payment_status(
    State(state): State<AppState>,
) -> Result<Json<CardPaymentStatusResponse>, StoreError> {
    let usecase = GetCardPaymentStatusUseCase {
        store: state.payment_settings_store(),
    };
    let status = usecase.execute().await?;
    Ok(Json(CardPaymentStatusResponse {
        card_payment_enabled: status.card_payment_enabled,
        available_providers: status.available_providers,
    }))
}

// ── GET /api/site-settings ───────────────────────────────────────────────────

#[derive(Serialize)]
pub struct SiteSettingsResponse {
    pub logo_url: String,
    pub topbar_message: String,
    pub footer_about: String,
    pub footer_phone: String,
    pub footer_email: String,
    #[serde(serialize_with = "vitrin_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<SiteSettings> for SiteSettingsResponse {
    fn from(s: SiteSettings) -> Self {
        Self {
            logo_url: s.logo_url,
            topbar_message: s.topbar_message,
            footer_about: s.footer_about,
            footer_phone: s.footer_phone,
            footer_email: s.footer_email,
            updated_at: s.updated_at,
        }
    }
}

pub async fn get_site_settings(
    State(state): State<AppState>,
) -> Result<Json<SiteSettingsResponse>, StoreError> {
    let usecase = GetSiteSettingsUseCase {
        store: state.site_settings_store(),
    };
    let settings = usecase.execute().await?;
    Ok(Json(settings.into()))
}

// ── PUT /api/site-settings ───────────────────────────────────────────────────

/// Full-replace payload; omitted fields fall back to the documented defaults,
/// not to the stored values.
#[derive(Deserialize)]
pub struct UpdateSiteSettingsRequest {
    pub logo_url: String,
    #[serde(default = "default_topbar_message")]
    pub topbar_message: String,
    #[serde(default = "default_footer_about")]
    pub footer_about: String,
    #[serde(default = "default_footer_phone")]
    pub footer_phone: String,
    #[serde(default = "default_footer_email")]
    pub footer_email: String,
}

fn default_topbar_message() -> String {
    DEFAULT_TOPBAR_MESSAGE.to_owned()
}

fn default_footer_about() -> String {
    DEFAULT_FOOTER_ABOUT.to_owned()
}

fn default_footer_phone() -> String {
    DEFAULT_FOOTER_PHONE.to_owned()
}

fn default_footer_email() -> String {
    DEFAULT_FOOTER_EMAIL.to_owned()
}

pub async fn update_site_settings(
    _identity: AdminIdentity,
    State(state): State<AppState>,
    Json(body): Json<UpdateSiteSettingsRequest>,
) -> Result<Json<SiteSettingsResponse>, StoreError> {
    let usecase = UpdateSiteSettingsUseCase {
        store: state.site_settings_store(),
    };
    let settings = usecase
        .execute(UpdateSiteSettingsInput {
            logo_url: body.logo_url,
            topbar_message: body.topbar_message,
            footer_about: body.footer_about,
            footer_phone: body.footer_phone,
            footer_email: body.footer_email,
        })
        .await?;
    Ok(Json(settings.into()))
}
