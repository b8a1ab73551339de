//! Props bags
//!
//! A [`PropsBag`] is the declarative input of the attribute engine: an
//! ordered list of keys bound to text, event handlers, or arbitrary JSON
//! values. The builder methods name the keys the engine understands, so
//! routing intent and event handlers read as distinct declarations:
//!
//! ```rust
//! use hx_props::props::PropsBag;
//! use hx_props::handler::Handler;
//!
//! let props = PropsBag::new()
//!     .post("/todos")
//!     .on("Click", Handler::new("(e) => e.preventDefault()"))
//!     .insert("class", "btn");
//!
//! assert_eq!(props.len(), 3);
//! assert_eq!(props.keys().collect::<Vec<_>>(), ["post", "onClick", "class"]);
//! ```

use serde_json::{Map, Value};

use crate::error::{HxPropsError, Result};
use crate::handler::Handler;
use crate::routing::Method;

/// Value bound to a props key
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    /// Plain text (routes, class names, ...)
    Text(String),
    /// Client-side event handler
    Handler(Handler),
    /// Any other value
    Other(Value),
}

impl PropValue {
    /// Text content, if this is a text value
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Handler, if this is a handler value
    #[must_use]
    pub const fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(handler) => Some(handler),
            _ => None,
        }
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) if is_handler_object(&map) => {
                serde_json::from_value(Value::Object(map.clone()))
                    .map_or(Self::Other(Value::Object(map)), Self::Handler)
            }
            other => Self::Other(other),
        }
    }
}

/// `{"handler": "..."}` with an optional `args` array and nothing else
fn is_handler_object(map: &Map<String, Value>) -> bool {
    map.get("handler").is_some_and(Value::is_string)
        && map.keys().all(|key| key == "handler" || key == "args")
}

impl From<&str> for PropValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PropValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Handler> for PropValue {
    fn from(handler: Handler) -> Self {
        Self::Handler(handler)
    }
}

impl From<Value> for PropValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

/// Ordered collection of props
///
/// Keys keep their first insertion position. Re-inserting a key replaces the
/// value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropsBag {
    entries: Vec<(String, PropValue)>,
}

impl PropsBag {
    /// Create an empty bag
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set `key` to `value`
    #[must_use]
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Set `key` to `value` on a borrowed bag
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Bind a path to an HTTP method key (`get`, `post`, ...)
    #[must_use]
    pub fn method(self, method: Method, path: impl Into<String>) -> Self {
        self.insert(method.key(), path.into())
    }

    /// Set the `get` key
    #[must_use]
    pub fn get(self, path: impl Into<String>) -> Self {
        self.method(Method::Get, path)
    }

    /// Set the `post` key
    #[must_use]
    pub fn post(self, path: impl Into<String>) -> Self {
        self.method(Method::Post, path)
    }

    /// Set the `put` key
    #[must_use]
    pub fn put(self, path: impl Into<String>) -> Self {
        self.method(Method::Put, path)
    }

    /// Set the `patch` key
    #[must_use]
    pub fn patch(self, path: impl Into<String>) -> Self {
        self.method(Method::Patch, path)
    }

    /// Set the `delete` key
    #[must_use]
    pub fn delete(self, path: impl Into<String>) -> Self {
        self.method(Method::Delete, path)
    }

    /// Set the `route` key (implies GET)
    #[must_use]
    pub fn route(self, path: impl Into<String>) -> Self {
        self.insert("route", path.into())
    }

    /// Bind a handler to a DOM event
    ///
    /// `event` is appended to `on`, so `on("Click", ..)` sets `onClick`.
    #[must_use]
    pub fn on(self, event: &str, handler: impl Into<Handler>) -> Self {
        self.insert(format!("on{event}"), handler.into())
    }

    /// Look up a key
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&PropValue> {
        self.entries
            .iter()
            .find_map(|(existing, value)| (existing == key).then_some(value))
    }

    /// Whether `key` is present
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of entries
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a bag from a JSON object, keeping key order
    ///
    /// Strings become text, `{"handler": "...", "args": [...]}` objects become
    /// handlers, everything else is kept as a raw JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`HxPropsError::InvalidProps`] if `value` is not an object.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(HxPropsError::InvalidProps(format!(
                    "expected a JSON object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let entries = map
            .into_iter()
            .map(|(key, value)| (key, PropValue::from_json(value)))
            .collect();
        Ok(Self { entries })
    }

    /// Parse a bag from JSON text
    ///
    /// ```rust
    /// use hx_props::props::{PropValue, PropsBag};
    ///
    /// let props = PropsBag::from_json_str(
    ///     r#"{"delete": "/todos/1", "onClick": {"handler": "() => 1"}}"#,
    /// )?;
    /// assert!(matches!(props.value("onClick"), Some(PropValue::Handler(_))));
    /// # Ok::<(), hx_props::error::HxPropsError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `json` is not valid JSON or not an object.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_json_value(serde_json::from_str(json)?)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl<K, V> FromIterator<(K, V)> for PropsBag
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Self::new();
        for (key, value) in iter {
            bag.set(key, value);
        }
        bag
    }
}

impl<'a> IntoIterator for &'a PropsBag {
    type Item = (&'a str, &'a PropValue);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_keeps_order() {
        let props = PropsBag::new()
            .on("OtherEvent", "() => 1")
            .route("/a")
            .on("Click", "() => 2");
        assert_eq!(
            props.keys().collect::<Vec<_>>(),
            ["onOtherEvent", "route", "onClick"]
        );
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let props = PropsBag::new()
            .get("/first")
            .insert("class", "btn")
            .get("/second");
        assert_eq!(props.len(), 2);
        assert_eq!(props.keys().collect::<Vec<_>>(), ["get", "class"]);
        assert_eq!(props.value("get").and_then(PropValue::as_text), Some("/second"));
    }

    #[test]
    fn test_method_helpers_use_lowercase_keys() {
        let props = PropsBag::new()
            .get("/g")
            .post("/p")
            .put("/u")
            .patch("/a")
            .delete("/d");
        assert_eq!(
            props.keys().collect::<Vec<_>>(),
            ["get", "post", "put", "patch", "delete"]
        );
    }

    #[test]
    fn test_from_json_value_classifies_values() {
        let props = PropsBag::from_json_value(json!({
            "post": "/todos",
            "onClick": {"handler": "(e) => e", "args": ["this"]},
            "onLoad": "not a handler",
            "hx-vals": {"id": 1},
            "count": 3
        }))
        .unwrap();

        assert_eq!(
            props.keys().collect::<Vec<_>>(),
            ["post", "onClick", "onLoad", "hx-vals", "count"]
        );
        assert_eq!(
            props.value("onClick"),
            Some(&PropValue::Handler(Handler::new("(e) => e").with_args(["this"])))
        );
        assert_eq!(
            props.value("onLoad"),
            Some(&PropValue::Text("not a handler".into()))
        );
        assert_eq!(props.value("hx-vals"), Some(&PropValue::Other(json!({"id": 1}))));
        assert_eq!(props.value("count"), Some(&PropValue::Other(json!(3))));
    }

    #[test]
    fn test_from_json_value_handler_with_extra_keys_is_other() {
        let props =
            PropsBag::from_json_value(json!({"onClick": {"handler": "x", "extra": true}})).unwrap();
        assert!(matches!(props.value("onClick"), Some(PropValue::Other(_))));
    }

    #[test]
    fn test_from_json_value_rejects_non_object() {
        let err = PropsBag::from_json_value(json!(["get", "/x"])).unwrap_err();
        assert!(matches!(err, HxPropsError::InvalidProps(_)));
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn test_from_json_str_invalid_json() {
        let err = PropsBag::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, HxPropsError::Json(_)));
    }

    #[test]
    fn test_collect_from_pairs() {
        let props: PropsBag = [("route", "/x"), ("class", "y")].into_iter().collect();
        assert_eq!(props.len(), 2);
        assert!(props.contains_key("route"));
        assert!(!props.contains_key("get"));
    }
}
