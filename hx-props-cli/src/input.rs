//! Reading props bags from files or stdin

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use hx_props::props::PropsBag;

/// Whether `path` means "read standard input"
#[must_use]
pub fn is_stdin(path: Option<&Path>) -> bool {
    path.is_none_or(|path| path == Path::new("-"))
}

/// Read a JSON props bag from `path`, or from `stdin` when no file is given
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a JSON object.
pub fn read_props(path: Option<&Path>, mut stdin: impl Read) -> Result<PropsBag> {
    let (source, text) = match path {
        Some(path) if !is_stdin(Some(path)) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            (path.display().to_string(), text)
        }
        _ => {
            let mut text = String::new();
            stdin
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            ("<stdin>".to_string(), text)
        }
    };

    tracing::debug!(source = %source, bytes = text.len(), "parsing props");
    PropsBag::from_json_str(&text).with_context(|| format!("invalid props in {source}"))
}
