use uuid::Uuid;

use vitrin_store::domain::types::AdminRole;
use vitrin_store::error::StoreError;
use vitrin_store::handlers::admins::AdminResponse;
use vitrin_store::usecase::admin::{
    CreateAdminInput, CreateAdminUseCase, DeleteAdminUseCase, ListAdminsUseCase, UpdateAdminInput,
    UpdateAdminUseCase,
};
use vitrin_store::usecase::token::verify_password;

use crate::helpers::{MockAdminRepo, test_admin};

// ── CreateAdminUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_admin_with_requested_role() {
    let repo = MockAdminRepo::default();
    let usecase = CreateAdminUseCase { repo: repo.clone() };

    let admin = usecase
        .execute(CreateAdminInput {
            email: "personel@vitrin.com.tr".to_owned(),
            password: "parola123".to_owned(),
            role: AdminRole::Standard,
        })
        .await
        .unwrap();

    assert_eq!(admin.role, AdminRole::Standard);
    assert_eq!(admin.email, "personel@vitrin.com.tr");
    // Stored hash must verify against the submitted password, never equal it.
    assert_ne!(admin.password_hash, "parola123");
    assert!(verify_password("parola123", &admin.password_hash));
}

#[tokio::test]
async fn should_reject_duplicate_admin_email() {
    let repo = MockAdminRepo::default();
    repo.admins
        .lock()
        .unwrap()
        .push(test_admin("personel@vitrin.com.tr", AdminRole::Standard));

    let usecase = CreateAdminUseCase { repo };
    let result = usecase
        .execute(CreateAdminInput {
            email: "personel@vitrin.com.tr".to_owned(),
            password: "parola123".to_owned(),
            role: AdminRole::Standard,
        })
        .await;

    assert!(matches!(result, Err(StoreError::AdminExists)));
}

// ── UpdateAdminUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_merge_only_provided_fields_on_update() {
    let repo = MockAdminRepo::default();
    let existing = test_admin("personel@vitrin.com.tr", AdminRole::Standard);
    let id = existing.id;
    let original_hash = existing.password_hash.clone();
    repo.admins.lock().unwrap().push(existing);

    let usecase = UpdateAdminUseCase { repo };
    let updated = usecase
        .execute(
            id,
            UpdateAdminInput {
                email: Some("yeni@vitrin.com.tr".to_owned()),
                password: None,
                role: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.email, "yeni@vitrin.com.tr");
    assert_eq!(updated.role, AdminRole::Standard);
    assert_eq!(updated.password_hash, original_hash);
}

#[tokio::test]
async fn should_rehash_password_on_update() {
    let repo = MockAdminRepo::default();
    let existing = test_admin("personel@vitrin.com.tr", AdminRole::Standard);
    let id = existing.id;
    repo.admins.lock().unwrap().push(existing);

    let usecase = UpdateAdminUseCase { repo };
    let updated = usecase
        .execute(
            id,
            UpdateAdminInput {
                email: None,
                password: Some("yeni-parola".to_owned()),
                role: None,
            },
        )
        .await
        .unwrap();

    assert!(verify_password("yeni-parola", &updated.password_hash));
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_admin() {
    let usecase = UpdateAdminUseCase {
        repo: MockAdminRepo::default(),
    };
    let result = usecase
        .execute(
            Uuid::new_v4(),
            UpdateAdminInput {
                email: Some("yeni@vitrin.com.tr".to_owned()),
                password: None,
                role: None,
            },
        )
        .await;
    assert!(matches!(result, Err(StoreError::AdminNotFound)));
}

// ── DeleteAdminUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_existing_admin() {
    let repo = MockAdminRepo::default();
    let existing = test_admin("personel@vitrin.com.tr", AdminRole::Standard);
    let id = existing.id;
    repo.admins.lock().unwrap().push(existing);

    let usecase = DeleteAdminUseCase { repo: repo.clone() };
    usecase.execute(id).await.unwrap();
    assert!(repo.admins.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_admin() {
    let usecase = DeleteAdminUseCase {
        repo: MockAdminRepo::default(),
    };
    let result = usecase.execute(Uuid::new_v4()).await;
    assert!(matches!(result, Err(StoreError::AdminNotFound)));
}

// ── Listing and serialization ────────────────────────────────────────────────

#[tokio::test]
async fn should_list_every_admin() {
    let repo = MockAdminRepo::default();
    repo.admins
        .lock()
        .unwrap()
        .push(test_admin("kurucu@vitrin.com.tr", AdminRole::SuperAdmin));
    repo.admins
        .lock()
        .unwrap()
        .push(test_admin("personel@vitrin.com.tr", AdminRole::Standard));

    let usecase = ListAdminsUseCase { repo };
    let admins = usecase.execute().await.unwrap();
    assert_eq!(admins.len(), 2);
}

#[test]
fn should_never_serialize_password_hash() {
    let admin = test_admin("kurucu@vitrin.com.tr", AdminRole::SuperAdmin);
    let response = AdminResponse::from(admin);
    let json = serde_json::to_value(&response).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "Yönetici");
}
