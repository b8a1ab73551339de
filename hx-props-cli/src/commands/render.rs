//! Render command: props bag to attributes

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use hx_props::assemble::{build_attributes_with, Attributes};
use hx_props::config::HxPropsConfig;

use crate::input::read_props;

/// Render a props bag as htmx attributes
#[derive(Debug, Clone, Default)]
pub struct RenderCommand {
    /// Props file, `None` or `-` for stdin
    pub input: Option<PathBuf>,
    /// Configuration file overriding `./hx-props.toml`
    pub config: Option<PathBuf>,
    /// Force string output
    pub stringify: bool,
    /// Disable value escaping
    pub no_escape: bool,
    /// Print JSON regardless of output shape
    pub json: bool,
}

impl RenderCommand {
    /// Load configuration and apply command line overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<HxPropsConfig> {
        let mut config = match &self.config {
            Some(path) => HxPropsConfig::load_from(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => HxPropsConfig::load().context("failed to load configuration")?,
        };

        if self.stringify {
            config.serialization.stringify = true;
        }
        if self.no_escape {
            config.serialization.escape = false;
        }
        Ok(config)
    }

    /// Run the command and return the text to print
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or props cannot be loaded.
    pub fn execute(&self, stdin: impl Read) -> Result<String> {
        let config = self.load_config()?;
        let props = read_props(self.input.as_deref(), stdin)?;

        tracing::debug!(
            stringify = config.serialization.stringify,
            escape = config.serialization.escape,
            keys = props.len(),
            "rendering attributes"
        );

        let attributes = build_attributes_with(&props, &config.serialization);
        let output = match (&attributes, self.json) {
            (Attributes::Text(text), false) => text.clone(),
            _ => serde_json::to_string_pretty(&attributes)?,
        };
        Ok(output)
    }
}
