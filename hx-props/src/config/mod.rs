//! Configuration management for hx-props
//!
//! Serialization defaults can be set once per application instead of at every
//! call site. Configuration is loaded from multiple sources with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `HX_PROPS_` prefix, `__` for nesting)
//! 2. `./hx-props.toml`, or the file passed to [`HxPropsConfig::load_from`]
//! 3. Hardcoded defaults (fallback)
//!
//! Environment variable format: `HX_PROPS_SECTION__FIELD_NAME`
//! - Example: `HX_PROPS_SERIALIZATION__STRINGIFY=true`
//!
//! # Example Configuration
//!
//! ```toml
//! # hx-props.toml
//! [serialization]
//! stringify = true
//! escape = true
//! ```
//!
//! Unknown keys are ignored.

use std::io;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::assemble::SerializationConfig;
use crate::error::Result;

/// Default configuration file name, looked up in the working directory
pub const CONFIG_FILE: &str = "hx-props.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "HX_PROPS_";

/// Complete hx-props configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HxPropsConfig {
    /// Attribute serialization defaults
    #[serde(default)]
    pub serialization: SerializationConfig,
}

impl HxPropsConfig {
    fn defaults() -> Result<Figment> {
        Ok(Figment::new().merge(Toml::string(&toml::to_string(&Self::default())?)))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__").lowercase(true))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from `./hx-props.toml` (if present) and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self> {
        let mut figment = Self::defaults()?;

        let local_config = PathBuf::from(CONFIG_FILE);
        if local_config.exists() {
            tracing::debug!(path = %local_config.display(), "loading configuration file");
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::extract(figment)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("configuration file not found: {}", path.display()),
            )
            .into());
        }

        tracing::debug!(path = %path.display(), "loading configuration file");
        Self::extract(Self::defaults()?.merge(Toml::file(path)))
    }
}
