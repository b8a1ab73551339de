//! axum integration
//!
//! Registers server handlers from the same props bag that produces the
//! client-side attributes, so the `hx-*` attribute and the route it targets
//! cannot drift apart.
//!
//! ```rust
//! use axum::Router;
//! use hx_props::adapters::axum::HxEndpoint;
//! use hx_props::props::PropsBag;
//!
//! let add_todo = HxEndpoint::new(PropsBag::new().post("/todos"));
//!
//! let app: Router = add_todo.register(Router::new(), || async { "<li>new</li>" });
//! let button = format!("<button {}>Add</button>", add_todo.attributes());
//! assert_eq!(button, r#"<button hx-post="/todos">Add</button>"#);
//! ```

use axum::handler::Handler;
use axum::routing::{on, MethodFilter};
use axum::Router;

use crate::assemble::{
    build_attributes, build_attributes_with, Attributes, Config, OutputShape, SerializationConfig,
};
use crate::attrs::AttributeMap;
use crate::config::HxPropsConfig;
use crate::props::PropsBag;
use crate::routing::{resolve, Method, RoutingIntent};

/// axum method filter for a resolved method
#[must_use]
pub const fn method_filter(method: Method) -> MethodFilter {
    match method {
        Method::Get => MethodFilter::GET,
        Method::Post => MethodFilter::POST,
        Method::Put => MethodFilter::PUT,
        Method::Patch => MethodFilter::PATCH,
        Method::Delete => MethodFilter::DELETE,
    }
}

/// Why axum would reject `path`, if it would
///
/// Paths must start with `/`. Captures use `{name}` or `{*rest}`; the
/// `:name` and `*rest` segment forms and unbalanced or empty braces are
/// rejected. `{{` and `}}` are literal braces.
#[must_use]
pub fn unroutable_reason(path: &str) -> Option<&'static str> {
    if !path.starts_with('/') {
        return Some("route must start with '/'");
    }
    for segment in path.split('/') {
        if segment.starts_with(':') || segment.starts_with('*') {
            return Some("segments must not start with ':' or '*', use '{capture}'");
        }
        if !valid_captures(segment) {
            return Some("unbalanced or empty '{}' capture");
        }
    }
    None
}

fn valid_captures(segment: &str) -> bool {
    let mut capture: Option<usize> = None;
    let mut chars = segment.chars().peekable();
    while let Some(ch) = chars.next() {
        match (ch, capture) {
            ('{' | '}', None) if chars.peek() == Some(&ch) => {
                chars.next();
            }
            ('{', None) => capture = Some(0),
            ('}', Some(len)) if len > 0 => capture = None,
            ('{' | '}', _) => return false,
            (_, Some(len)) => capture = Some(len + 1),
            (_, None) => {}
        }
    }
    capture.is_none()
}

/// Register `handler` on the method and path `props` resolve to
///
/// A bag without a usable route, or with a path axum cannot route (see
/// [`unroutable_reason`]), leaves the router unchanged.
///
/// # Panics
///
/// Panics if `router` already has a handler for the same method and path.
pub fn route<H, T, S>(router: Router<S>, props: &PropsBag, handler: H) -> Router<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    route_intent(router, &resolve(props), handler)
}

/// Register `handler` for an already resolved intent
///
/// # Panics
///
/// Panics if `router` already has a handler for the same method and path.
pub fn route_intent<H, T, S>(router: Router<S>, intent: &RoutingIntent, handler: H) -> Router<S>
where
    H: Handler<T, S>,
    T: 'static,
    S: Clone + Send + Sync + 'static,
{
    let Some(path) = intent.route.as_deref() else {
        tracing::debug!(method = %intent.method, "no route to register");
        return router;
    };

    if let Some(reason) = unroutable_reason(path) {
        tracing::warn!(method = %intent.method, path, reason, "not registering route");
        return router;
    }

    tracing::debug!(method = %intent.method, path, "registering route");
    router.route(path, on(method_filter(intent.method), handler))
}

/// A props bag and serialization options used for both markup and routing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HxEndpoint {
    props: PropsBag,
    config: SerializationConfig,
}

impl HxEndpoint {
    /// Wrap a props bag with default serialization options
    #[must_use]
    pub fn new(props: PropsBag) -> Self {
        Self {
            props,
            config: SerializationConfig::default(),
        }
    }

    /// Use `config` when rendering attributes
    #[must_use]
    pub const fn with_config(mut self, config: SerializationConfig) -> Self {
        self.config = config;
        self
    }

    /// Use the serialization section of a loaded configuration
    #[must_use]
    pub const fn configured(self, config: &HxPropsConfig) -> Self {
        self.with_config(config.serialization)
    }

    /// The wrapped props
    #[must_use]
    pub const fn props(&self) -> &PropsBag {
        &self.props
    }

    /// Serialization options of this endpoint
    #[must_use]
    pub const fn config(&self) -> &SerializationConfig {
        &self.config
    }

    /// Resolved method and path
    #[must_use]
    pub fn intent(&self) -> RoutingIntent {
        resolve(&self.props)
    }

    /// Attribute string for the element triggering the request
    ///
    /// Always rendered as a string; escaping follows the endpoint's options.
    #[must_use]
    pub fn attributes(&self) -> String {
        build_attributes(&self.props, &self.shape().stringify())
    }

    /// Attributes as a map, escaped according to the endpoint's options
    #[must_use]
    pub fn attribute_map(&self) -> AttributeMap {
        build_attributes(&self.props, &self.shape())
    }

    /// Attributes in the shape and escaping the endpoint's options select
    #[must_use]
    pub fn rendered(&self) -> Attributes {
        build_attributes_with(&self.props, &self.config)
    }

    /// Attributes with explicit options, ignoring the endpoint's own
    #[must_use]
    pub fn attributes_with<O: OutputShape>(&self, config: &Config<O>) -> O::Output {
        build_attributes(&self.props, config)
    }

    const fn shape(&self) -> Config {
        Config::new().escape(self.config.escape)
    }

    /// Register `handler` on this endpoint's method and path
    ///
    /// # Panics
    ///
    /// Panics if `router` already has a handler for the same method and path.
    pub fn register<H, T, S>(&self, router: Router<S>, handler: H) -> Router<S>
    where
        H: Handler<T, S>,
        T: 'static,
        S: Clone + Send + Sync + 'static,
    {
        route(router, &self.props, handler)
    }
}

impl From<PropsBag> for HxEndpoint {
    fn from(props: PropsBag) -> Self {
        Self::new(props)
    }
}
