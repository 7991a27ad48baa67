use crate::config::ObservabilityConfig;
use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Parse a config log level (case-insensitive).
pub fn parse_level(level: &str) -> Result<Level> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" | "warning" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!(
            "observability.log_level {other:?} is not one of error, warn, info, debug, trace"
        ),
    }
}

/// Install the global fmt subscriber. Call once, from `main`.
pub fn init_tracing(config: &ObservabilityConfig) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&config.log_level)?)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
