//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `render`: Render provider/backend files for a component
//! - `resolve`: Print resolved variables for a component
//! - `merge`: Print the deep-merged configuration tree
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod merge;
pub mod render;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use merge::MergeCommand;
pub use render::RenderCommand;
pub use resolve::ResolveCommand;
