use serde::Serialize;

pub mod admins;
pub mod auth;
pub mod banners;
pub mod orders;
pub mod products;
pub mod settings;
pub mod slides;
pub mod testimonials;
pub mod upload;
pub mod videos;

/// Body of successful delete responses. The admin panel reads `message`
/// verbatim, so deletes return 200 with a body rather than 204.
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
