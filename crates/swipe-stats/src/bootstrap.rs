use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"warn"` if the level string is not recognised. Output goes
/// to stderr so that stdout carries only the report.
pub fn setup_logging(log_level: &str) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(filter_directive(log_level)).unwrap_or_else(|_| EnvFilter::new("warn"));

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

/// Map a CLI level name onto a `tracing` filter directive.
fn filter_directive(log_level: &str) -> String {
    let upper = log_level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" | "CRITICAL" => "error".to_string(),
        _ => log_level.to_lowercase(),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
