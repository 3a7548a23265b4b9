/// Store service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL` (required).
    pub database_url: String,
    /// HMAC secret for session tokens. Env var: `JWT_SECRET` (required).
    pub jwt_secret: String,
    /// TCP port for the HTTP server (default 8001). Env var: `STORE_PORT`.
    pub store_port: u16,
    /// Directory uploaded files are written to (default "./uploads").
    /// Env var: `UPLOAD_DIR`.
    pub upload_dir: String,
    /// Base URL prefixed onto uploaded-file paths (default
    /// "http://localhost:8001"). Env var: `PUBLIC_BASE_URL`.
    pub public_base_url: String,
    /// Comma-separated CORS origin allow-list; "*" allows any origin
    /// (default). Env var: `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            store_port: std::env::var("STORE_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8001),
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_owned()),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8001".to_owned()),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".to_owned())
                .split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
