//! Attribute maps and the low-level attribute applier

use std::fmt::{self, Write};

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::handler;
use crate::props::{PropValue, PropsBag};

/// Ordered mapping from attribute name to value
///
/// Renders as space-separated `name="value"` pairs in insertion order.
/// Values are rendered as stored: escaping happens before insertion.
///
/// ```rust
/// use hx_props::attrs::AttributeMap;
///
/// let mut attrs = AttributeMap::new();
/// attrs.insert("hx-get", "/api");
/// attrs.insert("hx-target", "#list");
/// assert_eq!(attrs.to_string(), r##"hx-get="/api" hx-target="#list""##);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attrs: Vec<(String, String)>,
}

impl AttributeMap {
    /// Create an empty map
    #[must_use]
    pub const fn new() -> Self {
        Self { attrs: Vec::new() }
    }

    /// Set an attribute, replacing an existing value in place
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Value of an attribute
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find_map(|(existing, value)| (existing == name).then_some(value.as_str()))
    }

    /// Whether an attribute is set
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(|(name, _)| name.as_str())
    }

    /// Number of attributes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Whether no attribute is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl fmt::Display for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.attrs.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            write!(f, r#"{name}="{value}""#)?;
        }
        Ok(())
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attrs.len()))?;
        for (name, value) in &self.attrs {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Something attributes can be written to, such as an element
pub trait AttributeSink {
    /// Set `name` to `value`, overwriting any previous value
    fn set_attribute(&mut self, name: &str, value: &str);
}

impl AttributeSink for AttributeMap {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.insert(name, value);
    }
}

/// Write every prop to `sink` as a raw attribute
///
/// Unlike [`crate::assemble::build_attributes`], nothing is filtered: text is
/// written as-is, handlers are serialized, other values become compact JSON,
/// and `null` is skipped. Names are lowercased and values are not escaped.
///
/// ```rust
/// use hx_props::attrs::{apply_attributes, AttributeMap};
/// use hx_props::props::PropsBag;
///
/// let mut element = AttributeMap::new();
/// apply_attributes(&mut element, &PropsBag::new().post("/x").insert("class", "btn"));
/// assert_eq!(element.to_string(), r#"post="/x" class="btn""#);
/// ```
pub fn apply_attributes<T: AttributeSink + ?Sized>(sink: &mut T, props: &PropsBag) {
    for (key, value) in props {
        let name = key.to_lowercase();
        match value {
            PropValue::Text(text) => sink.set_attribute(&name, text),
            PropValue::Handler(handler) => {
                sink.set_attribute(&name, &handler::serialize(handler));
            }
            PropValue::Other(Value::Null) => {}
            PropValue::Other(other) => sink.set_attribute(&name, &other.to_string()),
        }
    }
}
