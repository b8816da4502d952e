use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging to stdout.
///
/// `RUST_LOG` takes precedence; otherwise `default_level` applies.
///
/// ```
/// board::init_logging("info");
/// ```
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).init();
}
