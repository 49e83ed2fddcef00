#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tfstack
//!
//! A library for resolving layered infrastructure configuration into the
//! variables used to render Terraform provider and backend files.
//!
//! ## Core Types
//!
//! - [`ConfigMerger`] and [`MergedConfigLoader`]: Deep merging of YAML trees
//!   discovered under one or more roots
//! - [`ComponentResolver`] and [`ResolvedVariables`]: Manifest, account and
//!   module precedence for one component
//! - [`TemplateRenderer`]: Strict Jinja rendering of the resolved variables
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tfstack::config::{ConfigMerger, ConfigTree};
//!
//! let base: ConfigTree = serde_yaml::from_str("tags: [base]\nregion: us-east-1").unwrap();
//! let overlay: ConfigTree = serde_yaml::from_str("tags: [prod]\nregion: eu-west-1").unwrap();
//!
//! let merged = ConfigMerger::merge(&base, &overlay);
//! assert_eq!(merged["region"].as_str(), Some("eu-west-1"));
//! assert_eq!(merged["tags"].as_sequence().unwrap().len(), 2);
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod render;

// Re-export key types at crate root for convenience
pub use component::{
    detect_component, detect_current_component, resolve_component, BackendVars,
    ComponentResolver, ProviderVars, ResolvedVariables,
};
pub use config::{
    load_merged, ConfigInputs, ConfigMerger, ConfigTree, MergedConfig, MergedConfigLoader,
};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use render::{render_component, TemplateRenderer};
