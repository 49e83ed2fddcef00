//! Loading and merging YAML from many input roots.
//!
//! Each root (a file or a directory) is expanded through
//! [`SourceDiscovery`], every discovered file is loaded with [`YamlLoader`],
//! and the results are folded with [`ConfigMerger`] in order: roots in the
//! order given, files within a root in discovery order.

use crate::config::discovery::{IgnoreSet, SourceDiscovery};
use crate::config::environment::EnvironmentConfig;
use crate::config::loader::YamlLoader;
use crate::config::merger::ConfigMerger;
use crate::config::ConfigTree;
use crate::error::{Error, Result};
use crate::path::expand_tilde;
use serde_yaml::Mapping;
use std::path::{Path, PathBuf};

/// Reserved key under which the loaded roots are recorded in the merged tree.
pub const PROVENANCE_KEY: &str = "__config_paths__";

/// The input roots handed to [`MergedConfigLoader::load`].
///
/// # Examples
///
/// ```
/// use tfstack::config::ConfigInputs;
/// use std::path::PathBuf;
///
/// let from_list: ConfigInputs = vec![PathBuf::from("base"), PathBuf::from("prod")].into();
/// let from_string: ConfigInputs = "base:prod".into();
/// let from_env = ConfigInputs::Default;
/// # let _ = (from_list, from_string, from_env);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigInputs {
    /// Roots from `CONFIG_PATHS` / `CONFIG_PATH`, else `config`.
    #[default]
    Default,
    /// A path-list string split on the platform separator.
    PathList(String),
    /// Explicit roots, used verbatim.
    Paths(Vec<PathBuf>),
}

impl ConfigInputs {
    /// Resolve to the list of tilde-expanded roots.
    ///
    /// The environment is consulted here, on every call, for
    /// [`ConfigInputs::Default`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if a root cannot be tilde-expanded.
    pub fn normalize(&self) -> Result<Vec<PathBuf>> {
        let raw = match self {
            Self::Default => EnvironmentConfig::default_inputs(),
            Self::PathList(list) => EnvironmentConfig::split_path_list(list),
            Self::Paths(paths) => paths.clone(),
        };

        raw.iter().map(|path| expand_tilde(path)).collect()
    }
}

impl From<&str> for ConfigInputs {
    fn from(list: &str) -> Self {
        Self::PathList(list.to_string())
    }
}

impl From<String> for ConfigInputs {
    fn from(list: String) -> Self {
        Self::PathList(list)
    }
}

impl From<&Path> for ConfigInputs {
    fn from(path: &Path) -> Self {
        Self::Paths(vec![path.to_path_buf()])
    }
}

impl From<PathBuf> for ConfigInputs {
    fn from(path: PathBuf) -> Self {
        Self::Paths(vec![path])
    }
}

impl From<Vec<PathBuf>> for ConfigInputs {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Paths(paths)
    }
}

impl From<Vec<String>> for ConfigInputs {
    fn from(paths: Vec<String>) -> Self {
        Self::Paths(paths.into_iter().map(PathBuf::from).collect())
    }
}

/// A merged configuration tree together with the roots it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    tree: ConfigTree,
    provenance: Vec<String>,
}

impl MergedConfig {
    /// The merged tree, including the [`PROVENANCE_KEY`] entry.
    #[must_use]
    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// The loaded roots, in input order.
    #[must_use]
    pub fn provenance(&self) -> &[String] {
        &self.provenance
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigTree> {
        self.tree.get(key)
    }
}

/// Loads and deep-merges YAML content from multiple roots.
///
/// # Examples
///
/// ```no_run
/// use tfstack::config::{ConfigInputs, MergedConfigLoader};
/// use std::path::PathBuf;
///
/// let merged = MergedConfigLoader::load(
///     vec![PathBuf::from("config/base"), PathBuf::from("config/prod")],
///     ["local.yaml"],
/// )
/// .unwrap();
/// println!("loaded from {:?}", merged.provenance());
/// ```
pub struct MergedConfigLoader;

impl MergedConfigLoader {
    /// Load every YAML file under `inputs` and merge them in order.
    ///
    /// `extra_ignore` adds file names to the built-in ignore set.
    ///
    /// # Errors
    ///
    /// - `Error::Validation` if `inputs` normalizes to an empty list, or a
    ///   file's top-level content is not a mapping
    /// - `Error::NotFound` if any root does not exist; nothing is merged
    /// - Loader and discovery errors are passed through unchanged
    pub fn load<I, S>(inputs: impl Into<ConfigInputs>, extra_ignore: I) -> Result<MergedConfig>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ignore = IgnoreSet::with_names(extra_ignore);
        let roots = inputs.into().normalize()?;

        if roots.is_empty() {
            return Err(Error::Validation {
                field: "inputs".into(),
                message: "No configuration inputs provided".into(),
            });
        }

        if let Some(missing) = roots.iter().find(|root| !root.exists()) {
            return Err(Error::NotFound {
                path: missing.clone(),
            });
        }

        let mut merged = ConfigTree::Mapping(Mapping::new());
        let mut provenance = Vec::with_capacity(roots.len());

        for root in &roots {
            provenance.push(root.to_string_lossy().into_owned());

            for file in SourceDiscovery::discover(root, &ignore)? {
                let content = YamlLoader::load_file(&file)?;
                if !content.is_mapping() {
                    return Err(Error::Validation {
                        field: file.display().to_string(),
                        message: "top-level YAML content must be a mapping".into(),
                    });
                }
                merged = ConfigMerger::merge(&merged, &content);
            }
        }

        log::info!(
            "Merged configuration from {} root(s): {}",
            provenance.len(),
            provenance.join(", ")
        );

        if let ConfigTree::Mapping(map) = &mut merged {
            map.insert(
                ConfigTree::from(PROVENANCE_KEY),
                ConfigTree::Sequence(
                    provenance
                        .iter()
                        .map(|p| ConfigTree::from(p.as_str()))
                        .collect(),
                ),
            );
        }

        Ok(MergedConfig {
            tree: merged,
            provenance,
        })
    }
}

/// Convenience wrapper around [`MergedConfigLoader::load`].
///
/// # Errors
///
/// See [`MergedConfigLoader::load`].
pub fn load_merged<I, S>(inputs: impl Into<ConfigInputs>, extra_ignore: I) -> Result<MergedConfig>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MergedConfigLoader::load(inputs, extra_ignore)
}
