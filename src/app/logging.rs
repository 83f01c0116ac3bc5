//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::domain::AppError;

/// Install the global subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`. Calling twice is harmless.
pub fn init() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| AppError::InvalidConfig(format!("Invalid log filter: {}", e)))?;

    // Another subscriber (e.g. from a test harness) may already be installed.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
    Ok(())
}
