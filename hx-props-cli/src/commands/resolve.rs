//! Resolve command: props bag to method and path

use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use hx_props::routing::resolve;

use crate::input::read_props;

/// Print the method and route a props bag resolves to
#[derive(Debug, Clone, Default)]
pub struct ResolveCommand {
    /// Props file, `None` or `-` for stdin
    pub input: Option<PathBuf>,
    /// Print the intent as JSON
    pub json: bool,
}

impl ResolveCommand {
    /// Run the command and return the text to print
    ///
    /// # Errors
    ///
    /// Returns an error if the props cannot be read.
    pub fn execute(&self, stdin: impl Read) -> Result<String> {
        let props = read_props(self.input.as_deref(), stdin)?;
        let intent = resolve(&props);

        if self.json {
            Ok(serde_json::to_string_pretty(&intent)?)
        } else {
            Ok(intent.to_string())
        }
    }
}
