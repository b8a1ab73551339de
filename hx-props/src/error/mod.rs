//! Error types and error handling
//!
//! Building attributes never fails. Errors only come from the edges of the
//! crate: loading configuration and reading props from JSON.

use thiserror::Error;

/// Crate error type
#[derive(Debug, Error)]
pub enum HxPropsError {
    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// Default configuration could not be serialized
    #[error("Configuration defaults error: {0}")]
    Defaults(#[from] toml::ser::Error),

    /// Props input had the wrong shape
    #[error("Invalid props: {0}")]
    InvalidProps(String),

    /// Props input was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Props input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for HxPropsError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

/// Result alias using [`HxPropsError`]
pub type Result<T> = std::result::Result<T, HxPropsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_props_message() {
        let err = HxPropsError::InvalidProps("expected a JSON object".into());
        assert_eq!(err.to_string(), "Invalid props: expected a JSON object");
    }

    #[test]
    fn test_json_error_conversion() {
        let err: HxPropsError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
