//! Environment variable handling for default input roots.
//!
//! When no explicit inputs are given, the merged loader reads its roots from
//! `CONFIG_PATHS`, then `CONFIG_PATH`, then falls back to `config`. The
//! variables are read on every call; nothing is cached.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Primary environment variable listing default input roots.
pub const CONFIG_PATHS_ENV: &str = "CONFIG_PATHS";

/// Fallback environment variable consulted when `CONFIG_PATHS` is unset.
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

/// Root used when neither environment variable is set.
pub const DEFAULT_CONFIG_ROOT: &str = "config";

/// Reads default input roots from the environment.
///
/// # Examples
///
/// ```no_run
/// use tfstack::config::EnvironmentConfig;
///
/// std::env::set_var("CONFIG_PATHS", "base:overrides");
/// let roots = EnvironmentConfig::default_inputs();
/// assert_eq!(roots.len(), 2);
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Default input roots for the current process environment.
    ///
    /// An empty variable counts as unset. The value is split on the platform
    /// path-list separator (`:` on Unix, `;` on Windows).
    #[must_use]
    pub fn default_inputs() -> Vec<PathBuf> {
        let from_env = Self::non_empty_var(CONFIG_PATHS_ENV)
            .map(|value| (CONFIG_PATHS_ENV, value))
            .or_else(|| Self::non_empty_var(CONFIG_PATH_ENV).map(|value| (CONFIG_PATH_ENV, value)));

        match from_env {
            Some((name, value)) => {
                log::debug!("Using input roots from {name}");
                Self::split_path_list(&value)
            }
            None => vec![PathBuf::from(DEFAULT_CONFIG_ROOT)],
        }
    }

    /// Split a separator-delimited path list, dropping empty entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfstack::config::EnvironmentConfig;
    /// use std::path::PathBuf;
    ///
    /// let list = if cfg!(windows) { "a;;b" } else { "a::b" };
    /// assert_eq!(
    ///     EnvironmentConfig::split_path_list(list),
    ///     vec![PathBuf::from("a"), PathBuf::from("b")]
    /// );
    /// ```
    #[must_use]
    pub fn split_path_list(value: impl AsRef<OsStr>) -> Vec<PathBuf> {
        env::split_paths(value.as_ref())
            .filter(|path| !path.as_os_str().is_empty())
            .collect()
    }

    fn non_empty_var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.is_empty())
    }
}
