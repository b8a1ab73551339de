//! Inline event handler serialization
//!
//! A [`Handler`] holds the source text of a JavaScript function expression.
//! [`serialize`] wraps it in an immediately-invoked arrow function so it can
//! be dropped into an `on*` attribute and run by the browser when the event
//! fires:
//!
//! ```rust
//! use hx_props::handler::{serialize, Handler};
//!
//! let handler = Handler::new("(e) => console.log(e.type)");
//! assert_eq!(
//!     serialize(&handler),
//!     "(() => { return ((e) => console.log(e.type))(event) })()"
//! );
//! ```

use serde::{Deserialize, Serialize};

/// Argument passed to a handler when none are configured
pub const DEFAULT_ARG: &str = "event";

/// Source of a client-side event handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handler {
    /// Function expression source, e.g. `(e) => e.preventDefault()`
    #[serde(rename = "handler")]
    pub source: String,

    /// Argument expressions passed to the function at event time
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

fn default_args() -> Vec<String> {
    vec![DEFAULT_ARG.to_string()]
}

impl Handler {
    /// Create a handler invoked with the DOM `event`
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            args: default_args(),
        }
    }

    /// Replace the argument list
    ///
    /// ```rust
    /// use hx_props::handler::{serialize, Handler};
    ///
    /// let handler = Handler::new("(el, e) => el.remove()").with_args(["this", "event"]);
    /// assert!(serialize(&handler).ends_with("(this, event) })()"));
    /// ```
    #[must_use]
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Handler taking no arguments
    #[must_use]
    pub fn without_args(mut self) -> Self {
        self.args.clear();
        self
    }
}

impl From<&str> for Handler {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Handler {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

/// Whether `key` names a DOM event handler (`onClick`, `onsubmit`, ...)
///
/// The bare key `on` is not an event name.
#[must_use]
pub fn is_event_key(key: &str) -> bool {
    key.len() > 2
        && key
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("on"))
}

/// Attribute name for an event key (`onClick` becomes `onclick`)
#[must_use]
pub fn event_attribute_name(key: &str) -> String {
    key.to_lowercase()
}

/// Wrap a handler in an immediately-invoked function expression
#[must_use]
pub fn serialize(handler: &Handler) -> String {
    format!(
        "(() => {{ return ({})({}) }})()",
        handler.source.trim(),
        handler.args.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_default_arg() {
        let handler = Handler::new("() => alert(1)");
        assert_eq!(
            serialize(&handler),
            "(() => { return (() => alert(1))(event) })()"
        );
    }

    #[test]
    fn test_serialize_trims_source() {
        let handler = Handler::new("\n  (e) => e.preventDefault()  \n");
        assert_eq!(
            serialize(&handler),
            "(() => { return ((e) => e.preventDefault())(event) })()"
        );
    }

    #[test]
    fn test_serialize_without_args() {
        let handler = Handler::new("function () { return 1 }").without_args();
        assert_eq!(
            serialize(&handler),
            "(() => { return (function () { return 1 })() })()"
        );
    }

    #[test]
    fn test_serialize_is_stable() {
        let handler = Handler::new("(e) => fetch(\"/x\")");
        assert_eq!(serialize(&handler), serialize(&handler.clone()));
    }

    #[test]
    fn test_is_event_key() {
        assert!(is_event_key("onClick"));
        assert!(is_event_key("onclick"));
        assert!(is_event_key("OnSubmit"));
        assert!(is_event_key("ON_LOAD"));
        assert!(!is_event_key("on"));
        assert!(!is_event_key("route"));
        assert!(!is_event_key("button"));
        assert!(!is_event_key("ön"));
    }

    #[test]
    fn test_event_attribute_name() {
        assert_eq!(event_attribute_name("onClick"), "onclick");
        assert_eq!(event_attribute_name("onOtherEvent"), "onotherevent");
    }

    #[test]
    fn test_handler_deserialize_default_args() {
        let handler: Handler =
            serde_json::from_str(r#"{"handler": "(e) => e"}"#).unwrap();
        assert_eq!(handler, Handler::new("(e) => e"));
    }
}
