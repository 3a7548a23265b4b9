use chrono::Utc;

use crate::domain::repository::{PaymentSettingsStore, SiteSettingsStore};
use crate::domain::types::{CardPaymentProvider, PaymentSettings, SiteSettings};
use crate::error::StoreError;

// Both singletons share the same lifecycle: reads lazily seed the default
// document through the store's atomic insert-if-absent, and writes replace the
// whole document. There is deliberately no merge path — the admin forms submit
// every field on save, and merging would let a stale form silently resurrect
// old values.

// ── Payment settings ─────────────────────────────────────────────────────────

pub struct GetPaymentSettingsUseCase<S: PaymentSettingsStore> {
    pub store: S,
}

impl<S: PaymentSettingsStore> GetPaymentSettingsUseCase<S> {
    pub async fn execute(&self) -> Result<PaymentSettings, StoreError> {
        self.store
            .ensure_default(&PaymentSettings::default_document(Utc::now()))
            .await?;
        self.store
            .get()
            .await?
            .ok_or_else(|| StoreError::Internal(anyhow::anyhow!("payment settings missing after init")))
    }
}

pub struct UpdatePaymentSettingsInput {
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
}

pub struct UpdatePaymentSettingsUseCase<S: PaymentSettingsStore> {
    pub store: S,
}

impl<S: PaymentSettingsStore> UpdatePaymentSettingsUseCase<S> {
    pub async fn execute(
        &self,
        input: UpdatePaymentSettingsInput,
    ) -> Result<PaymentSettings, StoreError> {
        let settings = PaymentSettings {
            account_holder_name: input.account_holder_name,
            iban: input.iban,
            bank_name: input.bank_name,
            card_payment_enabled: input.card_payment_enabled,
            card_payment_provider: input.card_payment_provider,
            iyzico_api_key: input.iyzico_api_key,
            iyzico_secret_key: input.iyzico_secret_key,
            iyzico_sandbox: input.iyzico_sandbox,
            paytr_merchant_id: input.paytr_merchant_id,
            paytr_merchant_key: input.paytr_merchant_key,
            paytr_merchant_salt: input.paytr_merchant_salt,
            paytr_sandbox: input.paytr_sandbox,
            updated_at: Utc::now(),
        };
        self.store.replace(&settings).await?;
        self.store
            .get()
            .await?
            .ok_or_else(|| StoreError::Internal(anyhow::anyhow!("payment settings missing after replace")))
    }
}

// ── Card payment status ──────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CardPaymentStatus {
    pub card_payment_enabled: bool,
    pub available_providers: Vec<&'static str>,
}

pub struct GetCardPaymentStatusUseCase<S: PaymentSettingsStore> {
    pub store: S,
}

impl<S: PaymentSettingsStore> GetCardPaymentStatusUseCase<S> {
    pub async fn execute(&self) -> Result<CardPaymentStatus, StoreError> {
        self.store
            .ensure_default(&PaymentSettings::default_document(Utc::now()))
            .await?;
        let settings = self.store.get().await?.ok_or_else(|| {
            StoreError::Internal(anyhow::anyhow!("payment settings missing after init"))
        })?;
        Ok(CardPaymentStatus {
            card_payment_enabled: settings.card_payment_enabled,
            available_providers: settings
                .card_payment_provider
                .available(settings.card_payment_enabled),
        })
    }
}

// ── Site settings ────────────────────────────────────────────────────────────

pub struct GetSiteSettingsUseCase<S: SiteSettingsStore> {
    pub store: S,
}

impl<S: SiteSettingsStore> GetSiteSettingsUseCase<S> {
    pub async fn execute(&self) -> Result<SiteSettings, StoreError> {
        self.store
            .ensure_default(&SiteSettings::default_document(Utc::now()))
            .await?;
        self.store
            .get()
            .await?
            .ok_or_else(|| StoreError::Internal(anyhow::anyhow!("site settings missing after init")))
    }
}

pub struct UpdateSiteSettingsInput {
    pub logo_url: String,
    pub topbar_message: String,
    pub footer_about: String,
    pub footer_phone: String,
    pub footer_email: String,
}

pub struct UpdateSiteSettingsUseCase<S: SiteSettingsStore> {
    pub store: S,
}

impl<S: SiteSettingsStore> UpdateSiteSettingsUseCase<S> {
    pub async fn execute(&self, input: UpdateSiteSettingsInput) -> Result<SiteSettings, StoreError> {
        let settings = SiteSettings {
            logo_url: input.logo_url,
            topbar_message: input.topbar_message,
            footer_about: input.footer_about,
            footer_phone: input.footer_phone,
            footer_email: input.footer_email,
            updated_at: Utc::now(),
        };
        self.store.replace(&settings).await?;
        self.store
            .get()
            .await?
            .ok_or_else(|| StoreError::Internal(anyhow::anyhow!("site settings missing after replace")))
    }
}
