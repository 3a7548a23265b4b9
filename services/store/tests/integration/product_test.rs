use uuid::Uuid;

use vitrin_store::domain::types::ProductPatch;
use vitrin_store::error::StoreError;
use vitrin_store::usecase::product::{
    CreateProductInput, CreateProductUseCase, DeleteProductUseCase, GetProductUseCase,
    ListProductsUseCase, UpdateProductUseCase,
};

use crate::helpers::{MockProductRepo, test_variant};

fn shake_input() -> CreateProductInput {
    CreateProductInput {
        name: "Protein Shake".to_owned(),
        description: "Vanilyalı protein karışımı".to_owned(),
        price: 549.9,
        image_url: "/uploads/shake.png".to_owned(),
        category: "shake".to_owned(),
        stock: 100,
        is_package: false,
        has_variants: true,
        variants: vec![
            test_variant("Vanilya", 50, true),
            test_variant("Çikolata", 0, false),
        ],
    }
}

// ── Round trip ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_created_product() {
    let repo = MockProductRepo::default();
    let created = CreateProductUseCase { repo: repo.clone() }
        .execute(shake_input())
        .await
        .unwrap();

    let fetched = GetProductUseCase { repo }
        .execute(created.id)
        .await
        .unwrap();

    assert_eq!(fetched.name, "Protein Shake");
    assert_eq!(fetched.description, "Vanilyalı protein karışımı");
    assert_eq!(fetched.price, 549.9);
    assert_eq!(fetched.stock, 100);
    assert!(fetched.has_variants);
    assert_eq!(fetched.variants, created.variants);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn should_keep_variant_availability_independent_of_stock() {
    let repo = MockProductRepo::default();
    let created = CreateProductUseCase { repo }
        .execute(shake_input())
        .await
        .unwrap();

    // Availability is whatever the admin set, not derived from stock.
    let vanilla = &created.variants[0];
    let chocolate = &created.variants[1];
    assert!(vanilla.is_available && vanilla.stock > 0);
    assert!(!chocolate.is_available && chocolate.stock == 0);
}

// ── Partial update ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_merge_only_patched_fields() {
    let repo = MockProductRepo::default();
    let created = CreateProductUseCase { repo: repo.clone() }
        .execute(shake_input())
        .await
        .unwrap();

    let updated = UpdateProductUseCase { repo }
        .execute(
            created.id,
            ProductPatch {
                price: Some(499.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, 499.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.variants, created.variants);
}

#[tokio::test]
async fn should_echo_current_state_on_empty_patch() {
    let repo = MockProductRepo::default();
    let created = CreateProductUseCase { repo: repo.clone() }
        .execute(shake_input())
        .await
        .unwrap();

    let updated = UpdateProductUseCase { repo }
        .execute(created.id, ProductPatch::default())
        .await
        .unwrap();

    // No write happened: even updated_at is untouched.
    assert_eq!(updated.updated_at, created.updated_at);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, created.price);
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_product() {
    let result = UpdateProductUseCase {
        repo: MockProductRepo::default(),
    }
    .execute(
        Uuid::new_v4(),
        ProductPatch {
            price: Some(1.0),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(StoreError::ProductNotFound)));
}

// ── Listing ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_filter_packages_on_list() {
    let repo = MockProductRepo::default();
    let single = CreateProductUseCase { repo: repo.clone() }
        .execute(shake_input())
        .await
        .unwrap();
    let package = CreateProductUseCase { repo: repo.clone() }
        .execute(CreateProductInput {
            name: "Başlangıç Paketi".to_owned(),
            is_package: true,
            has_variants: false,
            variants: vec![],
            ..shake_input()
        })
        .await
        .unwrap();

    let usecase = ListProductsUseCase { repo };

    let all = usecase.execute(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let packages = usecase.execute(Some(true)).await.unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].id, package.id);

    let singles = usecase.execute(Some(false)).await.unwrap();
    assert_eq!(singles.len(), 1);
    assert_eq!(singles[0].id, single.id);
}

// ── Lookup / delete failures ─────────────────────────────────────────────────

#[tokio::test]
async fn should_return_not_found_for_missing_product() {
    let result = GetProductUseCase {
        repo: MockProductRepo::default(),
    }
    .execute(Uuid::new_v4())
    .await;
    assert!(matches!(result, Err(StoreError::ProductNotFound)));
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_product() {
    let result = DeleteProductUseCase {
        repo: MockProductRepo::default(),
    }
    .execute(Uuid::new_v4())
    .await;
    assert!(matches!(result, Err(StoreError::ProductNotFound)));
}

#[tokio::test]
async fn should_delete_existing_product() {
    let repo = MockProductRepo::default();
    let created = CreateProductUseCase { repo: repo.clone() }
        .execute(shake_input())
        .await
        .unwrap();

    DeleteProductUseCase { repo: repo.clone() }
        .execute(created.id)
        .await
        .unwrap();
    assert!(repo.products.lock().unwrap().is_empty());
}
