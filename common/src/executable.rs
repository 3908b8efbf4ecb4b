use tracing_subscriber::EnvFilter;

/// Initialize tracing for an executable. `RUST_LOG` wins over the configured
/// level when set.
pub fn init_tracing(log_level: &str) {
    let fallback = if log_level.trim().is_empty() {
        "info"
    } else {
        log_level
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
