//! CLI command implementations

pub mod render;
pub mod resolve;

pub use render::RenderCommand;
pub use resolve::ResolveCommand;
