//! YAML file loading.
//!
//! Every configuration file the tool reads goes through [`YamlLoader`], so
//! missing files, malformed content and empty documents are handled the same
//! way everywhere.

use crate::config::ConfigTree;
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Mapping;
use std::fs;
use std::io;
use std::path::Path;

/// Loads YAML files into [`ConfigTree`] values.
///
/// # Examples
///
/// ```no_run
/// use tfstack::config::YamlLoader;
/// use std::path::Path;
///
/// let tree = YamlLoader::load_file(Path::new("config/base.yaml")).unwrap();
/// assert!(tree.is_mapping());
/// ```
pub struct YamlLoader;

impl YamlLoader {
    /// Load and parse a YAML file.
    ///
    /// An empty file, or a file whose document is empty or false-like
    /// (`null`, `false`, `0`, `""`, `[]`, `{}`), loads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the file does not exist, `Error::Io` if it
    /// cannot be read, and `Error::Yaml` if the content is not valid YAML.
    pub fn load_file(path: &Path) -> Result<ConfigTree> {
        let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::NotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        log::debug!("Loaded {}", path.display());
        Self::parse(path, &contents)
    }

    /// Parse YAML text that was read from `path`.
    ///
    /// `path` is only used to label errors.
    ///
    /// # Errors
    ///
    /// Returns `Error::Yaml` if the content is not valid YAML.
    pub fn parse(path: &Path, contents: &str) -> Result<ConfigTree> {
        if contents.trim().is_empty() {
            return Ok(ConfigTree::Mapping(Mapping::new()));
        }

        let value: ConfigTree = serde_yaml::from_str(contents).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })?;

        if is_empty_document(&value) {
            return Ok(ConfigTree::Mapping(Mapping::new()));
        }
        Ok(value)
    }

    /// Load a YAML file and deserialize it into a schema type.
    ///
    /// # Errors
    ///
    /// Same as [`YamlLoader::load_file`], plus `Error::Yaml` when the content
    /// does not match the shape of `T`.
    pub fn load_typed<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let tree = Self::load_file(path)?;
        serde_yaml::from_value(tree).map_err(|source| Error::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Documents that carry no configuration.
fn is_empty_document(value: &ConfigTree) -> bool {
    match value {
        ConfigTree::Null | ConfigTree::Bool(false) => true,
        ConfigTree::Number(n) => n.as_f64() == Some(0.0),
        ConfigTree::String(s) => s.is_empty(),
        ConfigTree::Sequence(seq) => seq.is_empty(),
        ConfigTree::Mapping(map) => map.is_empty(),
        _ => false,
    }
}
