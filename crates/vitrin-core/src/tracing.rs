use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the JSON stdout subscriber, filtered via `RUST_LOG`.
///
/// Call once at startup. Calling again is a no-op rather than a panic, so
/// test binaries that initialize eagerly stay quiet.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
