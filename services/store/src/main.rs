use sea_orm::Database;
use tracing::info;

use vitrin_core::tracing::init_tracing;
use vitrin_store::config::StoreConfig;
use vitrin_store::router::build_router;
use vitrin_store::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = StoreConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    std::fs::create_dir_all(&config.upload_dir).expect("failed to create upload directory");

    let state = AppState {
        db,
        jwt_secret: config.jwt_secret.clone(),
        upload_dir: config.upload_dir.clone(),
        public_base_url: config.public_base_url.clone(),
    };

    let router = build_router(state, &config.cors_origins);
    let addr = format!("0.0.0.0:{}", config.store_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("store service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
