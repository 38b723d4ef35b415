//! Tracing setup shared by the binaries.
//!
//! ```text
//! RUST_LOG=debug cargo run --bin api_server   # includes raw model replies
//! RUST_LOG=product_discovery=info,tower_http=debug cargo run --bin api_server
//! ```

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (falls back to `default_filter`).
/// Calling it twice is harmless.
pub fn init_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .try_init();
}
