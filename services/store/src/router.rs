use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
};
use tower_http::{cors::{Any, CorsLayer}, services::ServeDir, trace::TraceLayer};

use vitrin_core::health::{healthz, readyz};
use vitrin_core::middleware::request_id_layer;

use crate::handlers::{
    admins::{create_admin, delete_admin, list_admins, update_admin},
    auth::{get_me, login_admin, register_admin},
    banners::{create_banner, delete_banner, list_all_banners, list_banners, update_banner},
    orders::{create_order, get_order, list_orders, update_order},
    products::{create_product, delete_product, get_product, list_products, update_product},
    settings::{
        card_payment_status, get_payment_settings, get_site_settings, update_payment_settings,
        update_site_settings,
    },
    slides::{create_slide, delete_slide, list_all_slides, list_slides, update_slide},
    testimonials::{
        create_testimonial, delete_testimonial, list_all_testimonials, list_testimonials,
        update_testimonial,
    },
    upload::upload_file,
    videos::{create_video, delete_video, list_all_videos, list_videos, update_video},
};
use crate::state::AppState;

// Above the 5 MiB upload cap so oversize files reach the domain check (which
// answers 400) instead of axum's default 2 MiB body limit (which answers 413).
const UPLOAD_BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    let api = Router::new()
        // Auth
        .route("/auth/register", post(register_admin))
        .route("/auth/login", post(login_admin))
        .route("/auth/me", get(get_me))
        // Products
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Slides
        .route("/slides", get(list_slides).post(create_slide))
        .route("/slides/all", get(list_all_slides))
        .route("/slides/{id}", put(update_slide).delete(delete_slide))
        // Videos (legacy alias of slides)
        .route("/videos", get(list_videos).post(create_video))
        .route("/videos/all", get(list_all_videos))
        .route("/videos/{id}", put(update_video).delete(delete_video))
        // Banners
        .route("/banners", get(list_banners).post(create_banner))
        .route("/banners/all", get(list_all_banners))
        .route(
            "/banners/{id}",
            put(update_banner).delete(delete_banner),
        )
        // Testimonials
        .route("/testimonials", get(list_testimonials).post(create_testimonial))
        .route("/testimonials/all", get(list_all_testimonials))
        .route(
            "/testimonials/{id}",
            put(update_testimonial).delete(delete_testimonial),
        )
        // Orders
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", get(get_order).put(update_order))
        // Settings singletons
        .route(
            "/payment-settings",
            get(get_payment_settings).put(update_payment_settings),
        )
        .route("/card-payment/status", get(card_payment_status))
        .route(
            "/site-settings",
            get(get_site_settings).put(update_site_settings),
        )
        // Admin accounts (Yönetici only, enforced in handlers)
        .route("/admins", get(list_admins).post(create_admin))
        .route("/admins/{id}", put(update_admin).delete(delete_admin))
        // Upload
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        );

    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .nest("/api", api)
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(list)
    }
}
