//! Observability (logging and tracing)
//!
//! The engine itself only emits `tracing` events. Binaries decide where they
//! go by installing a subscriber with [`init`].

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format of the installed subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output (debug builds)
    #[cfg_attr(debug_assertions, default)]
    Pretty,
    /// Compact single-line output
    Compact,
    /// JSON lines (release builds)
    #[cfg_attr(not(debug_assertions), default)]
    Json,
}

/// Observability configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,

    /// Filter applied even when `RUST_LOG` is set
    pub forced_filter: Option<String>,

    /// Output format
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        let default_filter = if cfg!(debug_assertions) {
            "debug,hx_props=trace"
        } else {
            "info"
        };
        Self {
            default_filter: default_filter.to_string(),
            forced_filter: None,
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Override the fallback filter directive
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Use `filter` regardless of `RUST_LOG`
    #[must_use]
    pub fn with_forced_filter(mut self, filter: impl Into<String>) -> Self {
        self.forced_filter = Some(filter.into());
        self
    }

    /// Override the output format
    #[must_use]
    pub const fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    fn env_filter(&self) -> EnvFilter {
        if let Some(filter) = &self.forced_filter {
            return EnvFilter::new(filter);
        }
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_filter))
    }
}

/// Initialize logging with defaults for the current build profile
///
/// Pretty output with `debug,hx_props=trace` in debug builds, JSON output at
/// `info` in release builds. `RUST_LOG` overrides the filter.
///
/// # Example
///
/// ```rust,no_run
/// use hx_props::observability;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// observability::init()?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    init_with(&ObservabilityConfig::default())
}

/// Initialize logging with explicit settings
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_with(
    config: &ObservabilityConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let registry = tracing_subscriber::registry().with(config.env_filter());
    let writer = std::io::stderr;

    match config.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(writer))
            .try_init(),
        LogFormat::Compact => registry
            .with(tracing_subscriber::fmt::layer().compact().with_writer(writer))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .try_init(),
    }
}
