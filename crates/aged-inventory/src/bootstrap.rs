use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset or unusable.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a level name to a `tracing` directive.
///
/// Accepts the upper-case names operators tend to type (`DEBUG`, `WARNING`,
/// ...) as well as ordinary `EnvFilter` directives, which pass through
/// lower-cased.
pub fn normalise_level(log_level: &str) -> String {
    match log_level.trim().to_uppercase().as_str() {
        "" => DEFAULT_LOG_LEVEL.to_string(),
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" | "WARN" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.trim().to_lowercase(),
    }
}

/// Build the filter from the value of `RUST_LOG`, if any.
pub fn build_filter(env_value: Option<&str>) -> EnvFilter {
    let directive = env_value
        .map(normalise_level)
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialise the global `tracing` subscriber.
///
/// Everything goes to stderr; stdout carries only the run summary.
pub fn setup_logging() -> anyhow::Result<()> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(env_value.as_deref());

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
