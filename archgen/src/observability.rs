//! Logging setup
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with the command's own output. The level comes from the `-v` flag
//! only; no environment variables are read.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Number of `-v` flags given
    pub verbosity: u8,
}

impl LoggingConfig {
    /// Create a config for the given verbosity
    #[must_use]
    pub const fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }

    /// Filter directive for this verbosity
    #[must_use]
    pub const fn directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "warn,archgen=debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
///
/// # Example
///
/// ```rust,no_run
/// use archgen::observability::{self, LoggingConfig};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&LoggingConfig::new(1))?;
/// tracing::debug!("logging ready");
/// # Ok(())
/// # }
/// ```
pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(config.directive()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .try_init()?;

    Ok(())
}
