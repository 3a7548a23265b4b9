use vitrin_store::domain::types::{
    CardPaymentProvider, DEFAULT_ACCOUNT_HOLDER, DEFAULT_FOOTER_PHONE, DEFAULT_TOPBAR_MESSAGE,
};
use vitrin_store::handlers::settings::UpdateSiteSettingsRequest;
use vitrin_store::usecase::settings::{
    GetCardPaymentStatusUseCase, GetPaymentSettingsUseCase, GetSiteSettingsUseCase,
    UpdatePaymentSettingsInput, UpdatePaymentSettingsUseCase, UpdateSiteSettingsInput,
    UpdateSiteSettingsUseCase,
};

use crate::helpers::{MockPaymentSettingsStore, MockSiteSettingsStore};

fn iyzico_update(provider: CardPaymentProvider, enabled: bool) -> UpdatePaymentSettingsInput {
    UpdatePaymentSettingsInput {
        account_holder_name: "Vitrin Ticaret A.Ş.".to_owned(),
        iban: "TR12 0006 4000 0011 2345 6789 01".to_owned(),
        bank_name: Some("İş Bankası".to_owned()),
        card_payment_enabled: enabled,
        card_payment_provider: provider,
        iyzico_api_key: Some("sandbox-api-key".to_owned()),
        iyzico_secret_key: Some("sandbox-secret".to_owned()),
        iyzico_sandbox: true,
        paytr_merchant_id: None,
        paytr_merchant_key: None,
        paytr_merchant_salt: None,
        paytr_sandbox: true,
    }
}

// ── Payment settings lifecycle ───────────────────────────────────────────────

#[tokio::test]
async fn should_seed_default_payment_settings_on_first_read() {
    let store = MockPaymentSettingsStore::default();
    let settings = GetPaymentSettingsUseCase { store }.execute().await.unwrap();

    assert_eq!(settings.account_holder_name, DEFAULT_ACCOUNT_HOLDER);
    assert!(!settings.card_payment_enabled);
    assert_eq!(settings.card_payment_provider, CardPaymentProvider::None);
}

#[tokio::test]
async fn should_return_identical_document_on_repeated_reads() {
    let store = MockPaymentSettingsStore::default();
    let usecase = GetPaymentSettingsUseCase {
        store: store.clone(),
    };

    let first = usecase.execute().await.unwrap();
    let second = usecase.execute().await.unwrap();

    // The second read must not re-create the default — same document,
    // timestamp included.
    assert_eq!(first, second);
}

#[tokio::test]
async fn should_replace_payment_settings_fully() {
    let store = MockPaymentSettingsStore::default();
    GetPaymentSettingsUseCase {
        store: store.clone(),
    }
    .execute()
    .await
    .unwrap();

    let updated = UpdatePaymentSettingsUseCase {
        store: store.clone(),
    }
    .execute(iyzico_update(CardPaymentProvider::Iyzico, true))
    .await
    .unwrap();
    assert_eq!(updated.card_payment_provider, CardPaymentProvider::Iyzico);
    assert!(updated.card_payment_enabled);

    // Replace again with bank_name omitted: the old value must NOT survive.
    let mut wipe = iyzico_update(CardPaymentProvider::Iyzico, true);
    wipe.bank_name = None;
    let wiped = UpdatePaymentSettingsUseCase { store }
        .execute(wipe)
        .await
        .unwrap();
    assert_eq!(wiped.bank_name, None);
}

// ── Card payment status derivation ───────────────────────────────────────────

#[tokio::test]
async fn should_report_no_providers_while_card_payment_disabled() {
    let store = MockPaymentSettingsStore::default();
    UpdatePaymentSettingsUseCase {
        store: store.clone(),
    }
    .execute(iyzico_update(CardPaymentProvider::Both, false))
    .await
    .unwrap();

    let status = GetCardPaymentStatusUseCase { store }.execute().await.unwrap();
    assert!(!status.card_payment_enabled);
    assert!(status.available_providers.is_empty());
}

#[tokio::test]
async fn should_report_both_providers_when_enabled() {
    let store = MockPaymentSettingsStore::default();
    UpdatePaymentSettingsUseCase {
        store: store.clone(),
    }
    .execute(iyzico_update(CardPaymentProvider::Both, true))
    .await
    .unwrap();

    let status = GetCardPaymentStatusUseCase { store }.execute().await.unwrap();
    assert!(status.card_payment_enabled);
    assert_eq!(status.available_providers, ["iyzico", "paytr"]);
}

#[tokio::test]
async fn should_report_single_provider_selection() {
    let store = MockPaymentSettingsStore::default();
    UpdatePaymentSettingsUseCase {
        store: store.clone(),
    }
    .execute(iyzico_update(CardPaymentProvider::Paytr, true))
    .await
    .unwrap();

    let status = GetCardPaymentStatusUseCase { store }.execute().await.unwrap();
    assert_eq!(status.available_providers, ["paytr"]);
}

// ── Site settings lifecycle ──────────────────────────────────────────────────

#[tokio::test]
async fn should_seed_default_site_settings_on_first_read() {
    let store = MockSiteSettingsStore::default();
    let settings = GetSiteSettingsUseCase { store }.execute().await.unwrap();

    assert_eq!(settings.topbar_message, DEFAULT_TOPBAR_MESSAGE);
    assert_eq!(settings.footer_phone, DEFAULT_FOOTER_PHONE);
}

#[tokio::test]
async fn should_reset_omitted_site_fields_instead_of_merging() {
    let store = MockSiteSettingsStore::default();

    // Store a fully customized document first.
    UpdateSiteSettingsUseCase {
        store: store.clone(),
    }
    .execute(UpdateSiteSettingsInput {
        logo_url: "/uploads/yeni-logo.png".to_owned(),
        topbar_message: "Bugün kargo bedava".to_owned(),
        footer_about: "Hakkımızda".to_owned(),
        footer_phone: "+90 555 999 88 77".to_owned(),
        footer_email: "destek@vitrin.com.tr".to_owned(),
    })
    .await
    .unwrap();

    // A payload that omits footer_phone deserializes with the documented
    // default — replace semantics, deliberately not a merge.
    let body: UpdateSiteSettingsRequest = serde_json::from_str(
        r#"{
            "logo_url": "/uploads/yeni-logo.png",
            "topbar_message": "Bugün kargo bedava",
            "footer_about": "Hakkımızda",
            "footer_email": "destek@vitrin.com.tr"
        }"#,
    )
    .unwrap();
    assert_eq!(body.footer_phone, DEFAULT_FOOTER_PHONE);

    let replaced = UpdateSiteSettingsUseCase { store }
        .execute(UpdateSiteSettingsInput {
            logo_url: body.logo_url,
            topbar_message: body.topbar_message,
            footer_about: body.footer_about,
            footer_phone: body.footer_phone,
            footer_email: body.footer_email,
        })
        .await
        .unwrap();

    assert_eq!(replaced.footer_phone, DEFAULT_FOOTER_PHONE);
    assert_ne!(replaced.footer_phone, "+90 555 999 88 77");
}
