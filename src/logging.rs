use tracing_subscriber::EnvFilter;

/// Installs the global subscriber, honoring `RUST_LOG`. Calling it again
/// (tests, embedders with their own subscriber) is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
