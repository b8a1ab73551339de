//! hx-props: declarative props to htmx attributes
//!
//! Describe an interaction once, as a props bag mixing routing intent and
//! DOM event handlers, and get back the HTML attributes an htmx page needs:
//!
//! ```rust
//! use hx_props::prelude::*;
//!
//! let props = PropsBag::new()
//!     .post("/todos")
//!     .on("Click", Handler::new("(e) => e.target.blur()"));
//!
//! let html = build_attribute_string(&props);
//! assert!(html.starts_with(r#"hx-post="/todos" onclick=""#));
//! ```
//!
//! # Pipeline
//!
//! 1. [`routing::resolve`] picks the single effective method and path
//! 2. [`handler::serialize`] wraps each event handler in an inline script
//! 3. [`escape::escape`] makes values safe for double-quoted attributes
//! 4. [`assemble::build_attributes`] puts it together as a map or a string
//!
//! # Features
//!
//! - `axum` - route registration from props bags (default)

pub mod adapters;
pub mod assemble;
pub mod attrs;
pub mod config;
pub mod error;
pub mod escape;
pub mod handler;
pub mod observability;
pub mod props;
pub mod routing;

pub mod prelude {
    //! Convenience re-exports for common types and functions
    //!
    //! ```rust
    //! use hx_props::prelude::*;
    //! ```

    pub use crate::assemble::{
        build_attribute_map, build_attribute_string, build_attributes, build_attributes_with,
        Attributes, Config, SerializationConfig, Stringified, Structured,
    };
    pub use crate::attrs::{apply_attributes, AttributeMap, AttributeSink};
    pub use crate::config::HxPropsConfig;
    pub use crate::error::{HxPropsError, Result};
    pub use crate::handler::Handler;
    pub use crate::props::{PropValue, PropsBag};
    pub use crate::routing::{resolve, Method, RoutingIntent};

    #[cfg(feature = "axum")]
    pub use crate::adapters::axum::HxEndpoint;
}
