use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::types::AdminRole;

/// Store service error variants.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0} yetkisi gerekli")]
    Forbidden(AdminRole),
    #[error("admin already exists")]
    AdminExists,
    #[error("admin not found")]
    AdminNotFound,
    #[error("product not found")]
    ProductNotFound,
    #[error("slide not found")]
    SlideNotFound,
    #[error("video not found")]
    VideoNotFound,
    #[error("banner not found")]
    BannerNotFound,
    #[error("testimonial not found")]
    TestimonialNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("invalid role")]
    InvalidRole,
    #[error("invalid media type")]
    InvalidMediaType,
    #[error("invalid payment provider")]
    InvalidProvider,
    #[error("missing file field")]
    MissingFile,
    #[error("Sadece JPG, PNG ve PDF dosyaları yüklenebilir")]
    UnsupportedFileType,
    #[error("Dosya boyutu 5MB'dan küçük olmalıdır")]
    FileTooLarge,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl StoreError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::AdminExists => "ADMIN_EXISTS",
            Self::AdminNotFound => "ADMIN_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::SlideNotFound => "SLIDE_NOT_FOUND",
            Self::VideoNotFound => "VIDEO_NOT_FOUND",
            Self::BannerNotFound => "BANNER_NOT_FOUND",
            Self::TestimonialNotFound => "TESTIMONIAL_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::InvalidRole => "INVALID_ROLE",
            Self::InvalidMediaType => "INVALID_MEDIA_TYPE",
            Self::InvalidProvider => "INVALID_PROVIDER",
            Self::MissingFile => "MISSING_FILE",
            Self::UnsupportedFileType => "UNSUPPORTED_FILE_TYPE",
            Self::FileTooLarge => "FILE_TOO_LARGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials
            | Self::InvalidToken
            | Self::TokenExpired
            | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::AdminNotFound
            | Self::ProductNotFound
            | Self::SlideNotFound
            | Self::VideoNotFound
            | Self::BannerNotFound
            | Self::TestimonialNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,
            // AdminExists stays 400: the storefront admin panel predates this
            // service and treats any 4xx other than 400 on register as fatal.
            Self::AdminExists
            | Self::InvalidRole
            | Self::InvalidMediaType
            | Self::InvalidProvider
            | Self::MissingFile
            | Self::UnsupportedFileType
            | Self::FileTooLarge => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests; 4xx are expected client errors. The anyhow chain is
        // logged here and never serialized into the response body.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "detail": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
