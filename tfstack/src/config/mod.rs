//! Layered YAML configuration.
//!
//! This module provides the pieces that turn a set of YAML roots into one
//! configuration tree:
//! - YAML file loading ([`YamlLoader`])
//! - Deep merging of trees ([`ConfigMerger`])
//! - Recursive discovery of YAML files with ignore rules ([`SourceDiscovery`])
//! - Default roots from `CONFIG_PATHS` / `CONFIG_PATH` ([`EnvironmentConfig`])
//! - The merged loader that ties them together ([`MergedConfigLoader`])
//!
//! # Merge Precedence
//!
//! Roots are processed in the order given, and files within a directory root
//! in discovery order. Each file is merged on top of everything loaded before
//! it, so later scalars and sequence tails win while earlier mapping structure
//! survives unless overlaid.
//!
//! # Examples
//!
//! ```no_run
//! use tfstack::config::load_merged;
//! use std::path::PathBuf;
//!
//! let merged = load_merged(
//!     vec![PathBuf::from("config/common"), PathBuf::from("config/prod")],
//!     Vec::<String>::new(),
//! )
//! .unwrap();
//!
//! println!("{:?}", merged.get("region"));
//! ```

pub mod discovery;
pub mod environment;
pub mod loader;
pub mod merged;
pub mod merger;

#[cfg(test)]
mod proptests;

/// A generic configuration value: mapping, sequence, or scalar.
///
/// Mappings keep the insertion order of their keys.
pub type ConfigTree = serde_yaml::Value;

// Re-export key types at module root
pub use discovery::{IgnoreSet, SourceDiscovery, DEFAULT_IGNORE_FILES, YAML_EXTENSIONS};
pub use environment::{EnvironmentConfig, CONFIG_PATHS_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_ROOT};
pub use loader::YamlLoader;
pub use merged::{load_merged, ConfigInputs, MergedConfig, MergedConfigLoader, PROVENANCE_KEY};
pub use merger::ConfigMerger;
