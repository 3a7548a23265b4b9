//! sea-orm entities for the store database.
//!
//! Embedded collections (product variants, order item snapshots) live in JSONB
//! columns typed via `FromJsonQueryResult` newtypes rather than join tables —
//! they are denormalized copies, never relations.

pub mod admins;
pub mod banners;
pub mod orders;
pub mod payment_settings;
pub mod products;
pub mod site_settings;
pub mod slides;
pub mod testimonials;
pub mod videos;
