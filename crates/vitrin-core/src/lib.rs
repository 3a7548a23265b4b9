//! Shared plumbing for Vitrin services: tracing setup, health endpoints,
//! response serialization helpers, and common middleware layers.
//!
//! Nothing in this crate knows about the store's domain — keep it that way.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
