//! Resolved provider and backend variables.

use crate::config::ConfigTree;
use serde::Serialize;
use serde_yaml::Mapping;

/// Variables for the provider template.
///
/// Serializes with the key names the templates use: `TF_VERSION`,
/// `AWS_provider_version`, `session_name` and `region`. Optional fields
/// serialize as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderVars {
    /// Terraform `required_version` constraint.
    #[serde(rename = "TF_VERSION")]
    pub tf_version: String,

    /// AWS provider version constraint.
    #[serde(rename = "AWS_provider_version")]
    pub aws_provider_version: String,

    /// Provider session name, if configured anywhere.
    pub session_name: Option<String>,

    /// Provider region, from the module or the account.
    pub region: Option<String>,
}

/// Free-form backend variables (`bucket`, `key`, `region`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BackendVars(Mapping);

impl BackendVars {
    /// Wrap an already-resolved backend mapping.
    #[must_use]
    pub fn new(mapping: Mapping) -> Self {
        Self(mapping)
    }

    /// Look up a backend setting.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ConfigTree> {
        self.0.get(key)
    }

    /// The state bucket, when it is a string.
    #[must_use]
    pub fn bucket(&self) -> Option<&str> {
        self.get("bucket").and_then(ConfigTree::as_str)
    }

    /// The backend region, when it is a string.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.get("region").and_then(ConfigTree::as_str)
    }

    /// The state object key, when it is a string.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.get("key").and_then(ConfigTree::as_str)
    }

    /// Borrow the underlying mapping.
    #[must_use]
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }
}

/// The outcome of resolving one component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedVariables {
    /// The component id that was requested.
    pub component: String,
    /// The manifest module it resolved to.
    pub module: String,
    /// The account the module deploys into.
    pub account: String,
    /// Provider template variables.
    pub provider: ProviderVars,
    /// Backend template variables.
    pub backend: BackendVars,
}
