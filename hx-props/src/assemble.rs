//! Attribute assembly
//!
//! [`build_attributes`] is the main entry point of the crate. It resolves the
//! routing attribute, serializes event handlers, escapes values, and returns
//! either an [`AttributeMap`] or a rendered `String`. Which one is decided by
//! the type of the [`Config`]: the output type is known at compile time.
//!
//! ```rust
//! use hx_props::assemble::{build_attributes, Config};
//! use hx_props::attrs::AttributeMap;
//! use hx_props::props::PropsBag;
//!
//! let props = PropsBag::new().route("/api");
//!
//! let map: AttributeMap = build_attributes(&props, &Config::new());
//! assert_eq!(map.get("hx-get"), Some("/api"));
//!
//! let html: String = build_attributes(&props, &Config::new().stringify());
//! assert_eq!(html, r#"hx-get="/api""#);
//! ```
//!
//! When the shape is only known at run time (configuration files, the CLI),
//! use [`build_attributes_with`] and match on [`Attributes`].

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::attrs::AttributeMap;
use crate::escape::escape_if;
use crate::handler::{event_attribute_name, is_event_key, serialize};
use crate::props::{PropValue, PropsBag};
use crate::routing::{is_routing_key, resolve};

mod sealed {
    pub trait Sealed {}
}

/// Output shape selected by a [`Config`]
pub trait OutputShape: sealed::Sealed {
    /// Result type of [`build_attributes`]
    type Output;

    /// Convert the assembled map into the output type
    fn finish(attrs: AttributeMap) -> Self::Output;
}

/// Structured output: an [`AttributeMap`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Structured;

/// Rendered output: a `name="value"` string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stringified;

impl sealed::Sealed for Structured {}
impl sealed::Sealed for Stringified {}

impl OutputShape for Structured {
    type Output = AttributeMap;

    fn finish(attrs: AttributeMap) -> Self::Output {
        attrs
    }
}

impl OutputShape for Stringified {
    type Output = String;

    fn finish(attrs: AttributeMap) -> Self::Output {
        attrs.to_string()
    }
}

/// Assembly options with a compile-time output shape
///
/// Starts out [`Structured`] with escaping enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config<S: OutputShape = Structured> {
    escape: bool,
    shape: PhantomData<S>,
}

impl Default for Config<Structured> {
    fn default() -> Self {
        Self::new()
    }
}

impl Config<Structured> {
    /// Structured output with escaping enabled
    #[must_use]
    pub const fn new() -> Self {
        Self {
            escape: true,
            shape: PhantomData,
        }
    }
}

impl<S: OutputShape> Config<S> {
    /// Render the attributes into a single string
    #[must_use]
    pub fn stringify(self) -> Config<Stringified> {
        Config {
            escape: self.escape,
            shape: PhantomData,
        }
    }

    /// Return the attributes as an [`AttributeMap`]
    #[must_use]
    pub fn structured(self) -> Config<Structured> {
        Config {
            escape: self.escape,
            shape: PhantomData,
        }
    }

    /// Enable or disable value escaping
    ///
    /// With escaping disabled, values are emitted verbatim and the caller is
    /// responsible for the markup they end up in.
    #[must_use]
    pub const fn escape(mut self, enabled: bool) -> Self {
        self.escape = enabled;
        self
    }

    /// Whether values are escaped
    #[must_use]
    pub const fn escapes(&self) -> bool {
        self.escape
    }
}

/// Assembly options known only at run time
///
/// Deserializes from configuration; unknown keys are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializationConfig {
    /// Render a string instead of a map
    pub stringify: bool,

    /// Escape attribute values
    pub escape: bool,
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self {
            stringify: false,
            escape: true,
        }
    }
}

/// Output of [`build_attributes_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Attributes {
    /// Structured attributes
    Map(AttributeMap),
    /// Rendered attribute string
    Text(String),
}

impl Attributes {
    /// The map, if output was structured
    #[must_use]
    pub const fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Text(_) => None,
        }
    }

    /// The string, if output was stringified
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Map(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(map) => fmt::Display::fmt(map, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

fn assemble(props: &PropsBag, escape: bool) -> AttributeMap {
    let mut attrs = AttributeMap::new();

    if let Some((name, route)) = resolve(props).attribute() {
        attrs.insert(name, escape_if(route, escape));
    }

    for (key, value) in props {
        if is_routing_key(key) {
            continue;
        }
        if !is_event_key(key) {
            tracing::trace!(key, "skipping prop without attribute mapping");
            continue;
        }
        match value {
            PropValue::Handler(handler) => {
                let script = serialize(handler);
                attrs.insert(event_attribute_name(key), escape_if(&script, escape));
            }
            PropValue::Text(_) | PropValue::Other(_) => {
                tracing::trace!(key, "skipping event key without handler");
            }
        }
    }

    attrs
}

/// Build htmx attributes for `props`
///
/// Emits at most one routing attribute (`hx-<method>`) followed by one
/// attribute per event handler, in the order the handlers appear in `props`.
/// Other props are not emitted. Never fails: unusable input is left out.
#[must_use]
pub fn build_attributes<S: OutputShape>(props: &PropsBag, config: &Config<S>) -> S::Output {
    S::finish(assemble(props, config.escape))
}

/// Build attributes as a map with default options
#[must_use]
pub fn build_attribute_map(props: &PropsBag) -> AttributeMap {
    build_attributes(props, &Config::new())
}

/// Build attributes as an escaped `name="value"` string
///
/// ```rust
/// use hx_props::assemble::build_attribute_string;
/// use hx_props::props::PropsBag;
///
/// let html = build_attribute_string(&PropsBag::new().delete("/todos/1"));
/// assert_eq!(format!("<button {html}>x</button>"), r#"<button hx-delete="/todos/1">x</button>"#);
/// ```
#[must_use]
pub fn build_attribute_string(props: &PropsBag) -> String {
    build_attributes(props, &Config::new().stringify())
}

/// Build attributes with options chosen at run time
#[must_use]
pub fn build_attributes_with(props: &PropsBag, config: &SerializationConfig) -> Attributes {
    let attrs = assemble(props, config.escape);
    if config.stringify {
        Attributes::Text(attrs.to_string())
    } else {
        Attributes::Map(attrs)
    }
}
