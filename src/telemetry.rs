//! Tracing setup for the demonstration binary.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber was already installed.
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// Initializes the tracing/logging infrastructure for the application.
///
/// # Environment Variables
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Show info, warn, and error messages (the default)
/// - `RUST_LOG=debug` - Also show field updates
/// - `RUST_LOG=person_record=trace` - Everything from this crate
///
/// Events are written to stderr so stdout only carries the demo output.
///
/// # Example
///
/// ```ignore
/// setup_tracing()?;
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() -> Result<(), TelemetryError> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}
