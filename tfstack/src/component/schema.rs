//! Schema of the provider/backend manifest and account files.
//!
//! The manifest (`provider_backend.yaml`) holds a `defaults` block and a
//! `modules` mapping keyed by component name. Account files
//! (`accounts/<name>.yaml`) hold per-account region and backend settings.
//! Unknown keys are ignored in all of them.

use crate::config::ConfigTree;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_yaml::Mapping;

/// The central provider/backend manifest.
///
/// # Examples
///
/// ```
/// use tfstack::component::Manifest;
///
/// let manifest: Manifest = serde_yaml::from_str(r#"
/// defaults:
///   terraform_required_version: "1.5"
/// modules:
///   web:
///     account: prod
/// "#).unwrap();
///
/// let (name, module) = manifest.find_module("web").unwrap();
/// assert_eq!(name, "web");
/// assert_eq!(module.account.as_deref(), Some("prod"));
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Manifest {
    /// Fallback values shared by every module.
    #[serde(default, deserialize_with = "null_as_default")]
    pub defaults: Defaults,

    /// Module configurations keyed by component name, in file order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Mapping,
}

/// Manifest-wide fallback values.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Defaults {
    /// Terraform `required_version` constraint.
    #[serde(default, deserialize_with = "scalar_string")]
    pub terraform_required_version: Option<String>,

    /// AWS provider version constraint.
    #[serde(default, deserialize_with = "scalar_string")]
    pub aws_provider_version: Option<String>,

    /// Provider session name.
    #[serde(default, deserialize_with = "scalar_string")]
    pub session_name: Option<String>,
}

/// Per-component module configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ModuleConfig {
    /// Account the component deploys into (required at resolution time).
    #[serde(default, deserialize_with = "scalar_string")]
    pub account: Option<String>,

    /// Alternative name the component can be looked up by.
    #[serde(default, deserialize_with = "scalar_string")]
    pub component_dir: Option<String>,

    /// Terraform `required_version` constraint.
    #[serde(default, deserialize_with = "scalar_string")]
    pub terraform_required_version: Option<String>,

    /// AWS provider version constraint.
    #[serde(default, deserialize_with = "scalar_string")]
    pub aws_provider_version: Option<String>,

    /// Provider session name.
    #[serde(default, deserialize_with = "scalar_string")]
    pub session_name: Option<String>,

    /// Provider region.
    #[serde(default, deserialize_with = "scalar_string")]
    pub region: Option<String>,

    /// Backend settings overriding the account's.
    #[serde(default, deserialize_with = "null_as_default")]
    pub backend: Mapping,
}

/// Per-account configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AccountConfig {
    /// Default region for components in this account.
    #[serde(default, deserialize_with = "scalar_string")]
    pub region: Option<String>,

    /// Backend settings shared by components in this account.
    #[serde(default, deserialize_with = "null_as_default")]
    pub backend: Mapping,
}

impl Manifest {
    /// Find the module for `component`.
    ///
    /// An exact `modules` key wins. Otherwise the first module, in manifest
    /// order, whose `component_dir` equals `component` is used. Returns the
    /// module's key together with its configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` if no module matches, and
    /// `Error::Serialization` if the matched module is malformed.
    pub fn find_module(&self, component: &str) -> Result<(String, ModuleConfig)> {
        if let Some(value) = self.modules.get(component) {
            return Ok((component.to_string(), Self::parse_module(value)?));
        }

        for (key, value) in &self.modules {
            let alias = value.get("component_dir").and_then(scalar_to_string);
            if alias.as_deref() == Some(component) {
                let name = scalar_to_string(key).unwrap_or_else(|| component.to_string());
                log::debug!("Component '{component}' matched module '{name}' by component_dir");
                return Ok((name, Self::parse_module(value)?));
            }
        }

        log::debug!("Known modules: {}", self.module_names().join(", "));
        Err(Error::Validation {
            field: "component".into(),
            message: format!("Component '{component}' not found in provider_backend.yaml"),
        })
    }

    /// Names of all modules, in manifest order.
    #[must_use]
    fn module_names(&self) -> Vec<String> {
        self.modules.keys().filter_map(scalar_to_string).collect()
    }

    fn parse_module(value: &ConfigTree) -> Result<ModuleConfig> {
        if value.is_null() {
            return Ok(ModuleConfig::default());
        }
        Ok(serde_yaml::from_value(value.clone())?)
    }
}

/// String form of a YAML scalar; `None` for null, empty strings and
/// collections.
pub(crate) fn scalar_to_string(value: &ConfigTree) -> Option<String> {
    let text = match value {
        ConfigTree::String(s) => s.clone(),
        ConfigTree::Number(n) => n.to_string(),
        ConfigTree::Bool(b) => b.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Accept a string, number or boolean and keep its string form.
///
/// Null and empty strings deserialize to `None`; collections are rejected.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value = ConfigTree::deserialize(deserializer)?;
    match value {
        ConfigTree::Null => Ok(None),
        ConfigTree::String(_) | ConfigTree::Number(_) | ConfigTree::Bool(_) => {
            Ok(scalar_to_string(&value))
        }
        _ => Err(D::Error::custom("expected a string, number or boolean")),
    }
}

/// Deserialize `T`, treating an explicit null like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
