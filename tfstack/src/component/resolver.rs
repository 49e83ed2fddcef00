//! Component resolution.
//!
//! Resolves a component id to its provider and backend variables from the
//! manifest (`provider_backend.yaml`) and the account file
//! (`accounts/<account>.yaml`) of a config directory.
//!
//! # Precedence
//!
//! Provider variables, per field:
//! - `TF_VERSION`, `AWS_provider_version`, `session_name`: module, then manifest defaults
//! - `region`: module, then account
//!
//! Backend variables: the account's `backend` mapping with the module's
//! `backend` keys laid over it (one level, no recursion). `region` and `key`
//! are filled in afterwards only when neither mapping sets them.

use crate::component::schema::{AccountConfig, Manifest, ModuleConfig};
use crate::component::variables::{BackendVars, ProviderVars, ResolvedVariables};
use crate::config::{ConfigTree, YamlLoader};
use crate::error::{Error, Result};
use crate::path::{expand_tilde, first_segment_under};
use serde_yaml::Mapping;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest file name inside the config directory.
pub const MANIFEST_FILE: &str = "provider_backend.yaml";

/// Account file directory inside the config directory.
pub const ACCOUNTS_DIR: &str = "accounts";

/// Resolves components against one config directory.
///
/// Nothing is cached; every call to [`ComponentResolver::resolve`] reads
/// the manifest and the account file again.
///
/// # Examples
///
/// ```no_run
/// use tfstack::component::ComponentResolver;
///
/// let resolver = ComponentResolver::new("config").unwrap();
/// let resolved = resolver.resolve("web").unwrap();
/// println!("{}", resolved.provider.tf_version);
/// ```
#[derive(Debug, Clone)]
pub struct ComponentResolver {
    config_dir: PathBuf,
}

impl ComponentResolver {
    /// Create a resolver for `config_dir` (tilde-expanded).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidPath` if tilde expansion fails.
    pub fn new(config_dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            config_dir: expand_tilde(config_dir.as_ref())?,
        })
    }

    /// The config directory in use.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir.join(MANIFEST_FILE)
    }

    /// Path of the file for `account`.
    #[must_use]
    pub fn account_path(&self, account: &str) -> PathBuf {
        self.config_dir
            .join(ACCOUNTS_DIR)
            .join(format!("{account}.yaml"))
    }

    /// Load the manifest.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the manifest is missing and
    /// `Error::Yaml` if it is malformed.
    pub fn load_manifest(&self) -> Result<Manifest> {
        YamlLoader::load_typed(&self.manifest_path())
    }

    /// Load the configuration of `account`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the account file is missing and
    /// `Error::Yaml` if it is malformed.
    pub fn load_account(&self, account: &str) -> Result<AccountConfig> {
        YamlLoader::load_typed(&self.account_path(account))
    }

    /// Resolve provider and backend variables for `component`.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the manifest or the account file is missing
    /// - `Error::Validation` if the component is unknown, its module has no
    ///   account, or a required field is missing after resolution. Required
    ///   fields are checked in this order: `TF_VERSION`,
    ///   `AWS_provider_version`, backend `bucket`, backend `region`.
    pub fn resolve(&self, component: &str) -> Result<ResolvedVariables> {
        let manifest = self.load_manifest()?;
        let (module_name, module) = manifest.find_module(component)?;

        let account_name = module.account.clone().ok_or_else(|| Error::Validation {
            field: "account".into(),
            message: format!("Account is required for component '{module_name}'"),
        })?;

        let account = self.load_account(&account_name)?;
        log::debug!(
            "Resolving component '{component}' (module '{module_name}', account '{account_name}')"
        );

        let tf_version = module
            .terraform_required_version
            .clone()
            .or_else(|| manifest.defaults.terraform_required_version.clone());
        let aws_provider_version = module
            .aws_provider_version
            .clone()
            .or_else(|| manifest.defaults.aws_provider_version.clone());
        let session_name = module
            .session_name
            .clone()
            .or_else(|| manifest.defaults.session_name.clone());
        let region = module.region.clone().or_else(|| account.region.clone());

        let backend = Self::build_backend(
            &account,
            &module,
            region.as_deref(),
            &account_name,
            component,
        );

        let tf_version = tf_version.ok_or_else(|| Error::Validation {
            field: "TF_VERSION".into(),
            message: format!(
                "Terraform required_version is required for component '{module_name}'"
            ),
        })?;
        let aws_provider_version = aws_provider_version.ok_or_else(|| Error::Validation {
            field: "AWS_provider_version".into(),
            message: format!("AWS provider version is required for component '{module_name}'"),
        })?;
        if is_blank(backend.get("bucket")) {
            return Err(Error::Validation {
                field: "backend.bucket".into(),
                message: format!("Backend bucket is required for component '{module_name}'"),
            });
        }
        if is_blank(backend.get("region")) {
            return Err(Error::Validation {
                field: "backend.region".into(),
                message: format!("Backend region is required for component '{module_name}'"),
            });
        }

        log::info!("Resolved component '{component}' in account '{account_name}'");

        Ok(ResolvedVariables {
            component: component.to_string(),
            module: module_name,
            account: account_name,
            provider: ProviderVars {
                tf_version,
                aws_provider_version,
                session_name,
                region,
            },
            backend,
        })
    }

    /// Account backend overlaid by module backend, then defaults filled in.
    fn build_backend(
        account: &AccountConfig,
        module: &ModuleConfig,
        region: Option<&str>,
        account_name: &str,
        component: &str,
    ) -> BackendVars {
        let mut backend = Mapping::new();
        for (key, value) in account.backend.iter().chain(module.backend.iter()) {
            backend.insert(key.clone(), value.clone());
        }

        if !backend.contains_key("region") {
            backend.insert(
                ConfigTree::from("region"),
                region.map_or(ConfigTree::Null, ConfigTree::from),
            );
        }
        if !backend.contains_key("key") {
            backend.insert(
                ConfigTree::from("key"),
                ConfigTree::from(format!("{account_name}/{component}/terraform.tfstate")),
            );
        }

        BackendVars::new(backend)
    }
}

/// Resolve `component` against `config_dir`.
///
/// Convenience wrapper around [`ComponentResolver::resolve`].
///
/// # Errors
///
/// See [`ComponentResolver::resolve`].
pub fn resolve_component(
    component: &str,
    config_dir: impl AsRef<Path>,
) -> Result<ResolvedVariables> {
    ComponentResolver::new(config_dir)?.resolve(component)
}

/// Derive the component name from `cwd`.
///
/// The component is the first directory of `cwd` below `component_root`.
/// Both paths are canonicalized before comparing.
///
/// # Errors
///
/// Returns `Error::Validation` if `component_root` does not exist or
/// `cwd` is not inside it.
///
/// # Examples
///
/// ```no_run
/// use tfstack::component::detect_component;
/// use std::path::Path;
///
/// let name = detect_component(Path::new("components"), Path::new("components/web/env")).unwrap();
/// assert_eq!(name, "web");
/// ```
pub fn detect_component(component_root: &Path, cwd: &Path) -> Result<String> {
    let root = fs::canonicalize(component_root).map_err(|_| Error::Validation {
        field: "component".into(),
        message: format!(
            "Component could not be detected automatically: component root {} does not exist",
            component_root.display()
        ),
    })?;
    let current = fs::canonicalize(cwd).unwrap_or_else(|_| cwd.to_path_buf());

    first_segment_under(&root, &current).ok_or_else(|| Error::Validation {
        field: "component".into(),
        message: format!(
            "Component could not be detected automatically from {}; pass it explicitly",
            cwd.display()
        ),
    })
}

/// Derive the component name from the process working directory.
///
/// # Errors
///
/// See [`detect_component`]; also returns `Error::Io` if the working
/// directory cannot be read.
pub fn detect_current_component(component_root: &Path) -> Result<String> {
    let cwd = env::current_dir()?;
    detect_component(component_root, &cwd)
}

/// Null, `false`, zero, empty strings and empty collections count as missing.
fn is_blank(value: Option<&ConfigTree>) -> bool {
    match value {
        None | Some(ConfigTree::Null | ConfigTree::Bool(false)) => true,
        Some(ConfigTree::Number(n)) => n.as_f64() == Some(0.0),
        Some(ConfigTree::String(s)) => s.is_empty(),
        Some(ConfigTree::Sequence(seq)) => seq.is_empty(),
        Some(ConfigTree::Mapping(map)) => map.is_empty(),
        Some(_) => false,
    }
}
