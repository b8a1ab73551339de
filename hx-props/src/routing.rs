//! Method and route resolution
//!
//! Resolves the single HTTP method and path a props bag targets. Routing
//! keys are checked in [`ROUTING_KEYS`] order and the first one present
//! wins, even when its value turns out to be unusable.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::props::{PropValue, PropsBag};

/// HTTP methods htmx can issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// GET request (default)
    #[default]
    Get,
    /// POST request
    Post,
    /// PUT request
    Put,
    /// PATCH request
    Patch,
    /// DELETE request
    Delete,
}

impl Method {
    /// Every method, in routing precedence order
    pub const ALL: [Self; 5] = [Self::Get, Self::Post, Self::Put, Self::Patch, Self::Delete];

    /// Uppercase method name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Props key selecting this method
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// htmx attribute issuing this method (`hx-get`, `hx-post`, ...)
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Get => "hx-get",
            Self::Post => "hx-post",
            Self::Put => "hx-put",
            Self::Patch => "hx-patch",
            Self::Delete => "hx-delete",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing keys in precedence order, with the method each one implies
pub const ROUTING_KEYS: [(&str, Method); 6] = [
    ("get", Method::Get),
    ("post", Method::Post),
    ("put", Method::Put),
    ("patch", Method::Patch),
    ("delete", Method::Delete),
    ("route", Method::Get),
];

/// Whether `key` is one of the routing keys
#[must_use]
pub fn is_routing_key(key: &str) -> bool {
    ROUTING_KEYS.iter().any(|(routing_key, _)| *routing_key == key)
}

/// Effective method and path of a props bag
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutingIntent {
    /// Method the request is issued with
    pub method: Method,
    /// Target path, absent when no usable route was given
    pub route: Option<String>,
}

impl RoutingIntent {
    /// Attribute name and value to emit, if there is a route
    #[must_use]
    pub fn attribute(&self) -> Option<(&'static str, &str)> {
        self.route
            .as_deref()
            .map(|route| (self.method.attribute(), route))
    }
}

impl fmt::Display for RoutingIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.route {
            Some(route) => write!(f, "{} {route}", self.method),
            None => write!(f, "{} (no route)", self.method),
        }
    }
}

/// Resolve the routing intent of `props`
///
/// ```rust
/// use hx_props::props::PropsBag;
/// use hx_props::routing::{resolve, Method};
///
/// let intent = resolve(&PropsBag::new().post("/b").get("/a"));
/// assert_eq!(intent.method, Method::Get);
/// assert_eq!(intent.route.as_deref(), Some("/a"));
///
/// let intent = resolve(&PropsBag::new().route("   "));
/// assert_eq!(intent.route, None);
/// ```
#[must_use]
pub fn resolve(props: &PropsBag) -> RoutingIntent {
    let Some((key, method, value)) = ROUTING_KEYS
        .iter()
        .find_map(|&(key, method)| props.value(key).map(|value| (key, method, value)))
    else {
        tracing::trace!("no routing key present, defaulting to GET without route");
        return RoutingIntent::default();
    };

    let route = match value {
        PropValue::Text(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        PropValue::Handler(_) | PropValue::Other(_) => None,
    };

    if route.is_none() {
        tracing::trace!(key, "routing key has no usable route");
    }

    RoutingIntent { method, route }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Handler;
    use serde_json::json;

    fn intent(method: Method, route: &str) -> RoutingIntent {
        RoutingIntent {
            method,
            route: Some(route.to_string()),
        }
    }

    #[test]
    fn test_resolve_empty_bag() {
        assert_eq!(resolve(&PropsBag::new()), RoutingIntent::default());
        assert_eq!(RoutingIntent::default().method, Method::Get);
    }

    #[test]
    fn test_resolve_ignores_unrelated_keys() {
        let props = PropsBag::new()
            .insert("class", "btn")
            .on("Click", "() => 1")
            .insert("GET", "/uppercase-key");
        assert_eq!(resolve(&props), RoutingIntent::default());
    }

    #[test]
    fn test_resolve_each_method() {
        for method in Method::ALL {
            let props = PropsBag::new().method(method, "/x");
            assert_eq!(resolve(&props), intent(method, "/x"));
        }
    }

    #[test]
    fn test_resolve_route_implies_get() {
        assert_eq!(
            resolve(&PropsBag::new().route("/api")),
            intent(Method::Get, "/api")
        );
    }

    #[test]
    fn test_resolve_precedence_chain() {
        let mut props = PropsBag::new()
            .route("/route")
            .delete("/delete")
            .patch("/patch")
            .put("/put")
            .post("/post")
            .get("/get");

        let expected = [
            ("get", intent(Method::Get, "/get")),
            ("post", intent(Method::Post, "/post")),
            ("put", intent(Method::Put, "/put")),
            ("patch", intent(Method::Patch, "/patch")),
            ("delete", intent(Method::Delete, "/delete")),
            ("route", intent(Method::Get, "/route")),
        ];

        for (key, want) in expected {
            assert_eq!(resolve(&props), want, "winner should be {key}");
            props = props
                .iter()
                .filter(|(existing, _)| *existing != key)
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect();
        }
        assert_eq!(resolve(&props), RoutingIntent::default());
    }

    #[test]
    fn test_resolve_trims_route() {
        assert_eq!(
            resolve(&PropsBag::new().post("  /todos \n")),
            intent(Method::Post, "/todos")
        );
    }

    #[test]
    fn test_resolve_blank_route_is_absent() {
        assert_eq!(
            resolve(&PropsBag::new().route("   ")),
            RoutingIntent::default()
        );
        let blank_post = resolve(&PropsBag::new().post(""));
        assert_eq!(blank_post.method, Method::Post);
        assert_eq!(blank_post.route, None);
    }

    #[test]
    fn test_resolve_blank_winner_does_not_fall_through() {
        let props = PropsBag::new().get(" ").post("/post");
        assert_eq!(
            resolve(&props),
            RoutingIntent {
                method: Method::Get,
                route: None
            }
        );
    }

    #[test]
    fn test_resolve_non_text_route_is_absent() {
        let props = PropsBag::new().insert("put", json!(42));
        assert_eq!(
            resolve(&props),
            RoutingIntent {
                method: Method::Put,
                route: None
            }
        );

        let props = PropsBag::new().insert("delete", Handler::new("() => 1"));
        assert_eq!(resolve(&props).route, None);
    }

    #[test]
    fn test_routing_intent_attribute() {
        assert_eq!(
            intent(Method::Patch, "/p").attribute(),
            Some(("hx-patch", "/p"))
        );
        assert_eq!(RoutingIntent::default().attribute(), None);
    }

    #[test]
    fn test_routing_intent_display() {
        assert_eq!(intent(Method::Delete, "/x/1").to_string(), "DELETE /x/1");
        assert_eq!(RoutingIntent::default().to_string(), "GET (no route)");
    }

    #[test]
    fn test_is_routing_key() {
        for (key, _) in ROUTING_KEYS {
            assert!(is_routing_key(key));
        }
        assert!(!is_routing_key("onClick"));
        assert!(!is_routing_key("Get"));
    }
}
