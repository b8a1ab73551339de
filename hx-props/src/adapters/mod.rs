//! Web framework adapters
//!
//! Adapters consume the routing intent of a props bag to register server
//! handlers. They never change how attributes are built.

#[cfg(feature = "axum")]
pub mod axum;
