use uuid::Uuid;

use vitrin_store::domain::types::{MediaType, SlidePatch, TestimonialPatch};
use vitrin_store::error::StoreError;
use vitrin_store::usecase::banner::{CreateBannerInput, CreateBannerUseCase, ListBannersUseCase};
use vitrin_store::usecase::slide::{
    CreateSlideInput, CreateSlideUseCase, DeleteSlideUseCase, ListSlidesUseCase,
    UpdateSlideUseCase,
};
use vitrin_store::usecase::testimonial::{
    CreateTestimonialInput, CreateTestimonialUseCase, DeleteTestimonialUseCase,
    UpdateTestimonialUseCase,
};
use vitrin_store::usecase::video::{CreateVideoInput, CreateVideoUseCase, ListVideosUseCase};

use crate::helpers::{
    MockBannerRepo, MockSlideRepo, MockTestimonialRepo, MockVideoRepo, test_slide,
};

// ── Slides ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_only_active_slides_sorted_by_order() {
    let repo = MockSlideRepo::default();
    {
        let mut slides = repo.slides.lock().unwrap();
        slides.push(test_slide("üçüncü", 3, true));
        slides.push(test_slide("birinci", 1, true));
        slides.push(test_slide("gizli", 2, false));
    }

    let usecase = ListSlidesUseCase { repo };
    let visible = usecase.execute(true).await.unwrap();

    let titles: Vec<&str> = visible.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["birinci", "üçüncü"]);
}

#[tokio::test]
async fn should_include_inactive_slides_in_admin_listing() {
    let repo = MockSlideRepo::default();
    {
        let mut slides = repo.slides.lock().unwrap();
        slides.push(test_slide("görünür", 1, true));
        slides.push(test_slide("gizli", 2, false));
    }

    let usecase = ListSlidesUseCase { repo };
    let everything = usecase.execute(false).await.unwrap();
    assert_eq!(everything.len(), 2);
}

#[tokio::test]
async fn should_create_image_slide_without_youtube_url() {
    let repo = MockSlideRepo::default();
    let slide = CreateSlideUseCase { repo }
        .execute(CreateSlideInput {
            title: "Kampanya görseli".to_owned(),
            media_type: MediaType::Image,
            youtube_url: None,
            image_url: Some("/uploads/kampanya.png".to_owned()),
            sort_order: 0,
            active: true,
        })
        .await
        .unwrap();

    assert_eq!(slide.media_type, MediaType::Image);
    assert!(slide.youtube_url.is_none());
}

#[tokio::test]
async fn should_merge_slide_visibility_update() {
    let repo = MockSlideRepo::default();
    let existing = test_slide("kampanya", 1, true);
    let id = existing.id;
    repo.slides.lock().unwrap().push(existing.clone());

    let updated = UpdateSlideUseCase { repo }
        .execute(
            id,
            SlidePatch {
                active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.title, existing.title);
    assert_eq!(updated.sort_order, existing.sort_order);
}

#[tokio::test]
async fn should_return_not_found_for_missing_slide() {
    let update = UpdateSlideUseCase {
        repo: MockSlideRepo::default(),
    }
    .execute(
        Uuid::new_v4(),
        SlidePatch {
            active: Some(false),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(update, Err(StoreError::SlideNotFound)));

    let delete = DeleteSlideUseCase {
        repo: MockSlideRepo::default(),
    }
    .execute(Uuid::new_v4())
    .await;
    assert!(matches!(delete, Err(StoreError::SlideNotFound)));
}

// ── Videos (legacy) ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_round_trip_legacy_video() {
    let repo = MockVideoRepo::default();
    let video = CreateVideoUseCase { repo: repo.clone() }
        .execute(CreateVideoInput {
            title: "Tanıtım".to_owned(),
            media_type: MediaType::Video,
            youtube_url: Some("https://youtube.com/watch?v=tanitim".to_owned()),
            image_url: None,
            sort_order: 0,
            active: true,
        })
        .await
        .unwrap();

    let listed = ListVideosUseCase { repo }.execute(true).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, video.id);
    assert_eq!(
        listed[0].youtube_url.as_deref(),
        Some("https://youtube.com/watch?v=tanitim")
    );
}

// ── Banners ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_hide_inactive_banners_from_public_listing() {
    let repo = MockBannerRepo::default();
    CreateBannerUseCase { repo: repo.clone() }
        .execute(CreateBannerInput {
            title: "Yaz kampanyası".to_owned(),
            description: "Tüm paketlerde indirim".to_owned(),
            image_url: "/uploads/yaz.png".to_owned(),
            link_url: None,
            active: true,
        })
        .await
        .unwrap();
    CreateBannerUseCase { repo: repo.clone() }
        .execute(CreateBannerInput {
            title: "Eski kampanya".to_owned(),
            description: "Bitti".to_owned(),
            image_url: "/uploads/eski.png".to_owned(),
            link_url: None,
            active: false,
        })
        .await
        .unwrap();

    let usecase = ListBannersUseCase { repo };
    let public = usecase.execute(true).await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].title, "Yaz kampanyası");

    let admin = usecase.execute(false).await.unwrap();
    assert_eq!(admin.len(), 2);
}

// ── Testimonials ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_merge_testimonial_update() {
    let repo = MockTestimonialRepo::default();
    let created = CreateTestimonialUseCase { repo: repo.clone() }
        .execute(CreateTestimonialInput {
            customer_name: "Mehmet K.".to_owned(),
            customer_image: None,
            rating: 5,
            comment: "Hedefime ulaştım, teşekkürler!".to_owned(),
            active: true,
        })
        .await
        .unwrap();

    let updated = UpdateTestimonialUseCase { repo }
        .execute(
            created.id,
            TestimonialPatch {
                rating: Some(4),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.rating, 4);
    assert_eq!(updated.comment, created.comment);
    assert_eq!(updated.customer_name, created.customer_name);
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_testimonial() {
    let result = DeleteTestimonialUseCase {
        repo: MockTestimonialRepo::default(),
    }
    .execute(Uuid::new_v4())
    .await;
    assert!(matches!(result, Err(StoreError::TestimonialNotFound)));
}
