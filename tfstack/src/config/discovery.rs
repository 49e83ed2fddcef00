//! YAML source discovery.
//!
//! Turns an input root (a single file or a directory tree) into the ordered
//! list of YAML files to load. Directories are searched recursively once per
//! extension, each pass sorted, and files reachable through more than one
//! pass are only returned once.

use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// File names that are never loaded unless a caller reads them explicitly.
pub const DEFAULT_IGNORE_FILES: &[&str] = &["secrets.yaml", "vpn-keys.yaml"];

/// Recognized YAML extensions, in search order.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Set of file names excluded from discovery.
///
/// Always contains [`DEFAULT_IGNORE_FILES`].
///
/// # Examples
///
/// ```
/// use tfstack::config::IgnoreSet;
///
/// let ignore = IgnoreSet::with_names(["local.yaml"]);
/// assert!(ignore.contains("vpn-keys.yaml"));
/// assert!(ignore.contains("secrets.yaml"));
/// assert!(ignore.contains("local.yaml"));
/// assert!(!ignore.contains("base.yaml"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    /// Create an ignore set holding only the built-in names.
    #[must_use]
    pub fn new() -> Self {
        Self {
            names: DEFAULT_IGNORE_FILES.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create an ignore set from the built-in names plus `extra`.
    #[must_use]
    pub fn with_names<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        set.names.extend(extra.into_iter().map(Into::into));
        set
    }

    /// Whether `name` is ignored.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether the file name of `path` is ignored.
    #[must_use]
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.contains(name))
    }

    /// Iterate over the ignored names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Enumerates YAML files below an input root.
pub struct SourceDiscovery;

impl SourceDiscovery {
    /// Discover the YAML files to load for `root`.
    ///
    /// - A file root is returned as-is when it has a YAML extension and is not
    ///   ignored, otherwise nothing is returned.
    /// - A directory root is searched recursively for `*.yaml`, then `*.yml`.
    ///   Each pass is sorted lexicographically and results are deduplicated
    ///   by canonical path.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if `root` does not exist, and `Error::Io`
    /// if a directory cannot be read during the walk.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tfstack::config::{IgnoreSet, SourceDiscovery};
    /// use std::path::Path;
    ///
    /// let files = SourceDiscovery::discover(Path::new("config"), &IgnoreSet::new()).unwrap();
    /// for file in files {
    ///     println!("{}", file.display());
    /// }
    /// ```
    pub fn discover(root: &Path, ignore: &IgnoreSet) -> Result<Vec<PathBuf>> {
        if !root.exists() {
            return Err(Error::NotFound {
                path: root.to_path_buf(),
            });
        }

        if root.is_file() {
            if Self::has_yaml_extension(root) && !ignore.is_ignored(root) {
                return Ok(vec![root.to_path_buf()]);
            }
            log::debug!("Skipping non-YAML or ignored file {}", root.display());
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for extension in YAML_EXTENSIONS {
            for path in Self::glob_sorted(root, extension)? {
                if ignore.is_ignored(&path) {
                    log::debug!("Ignoring {}", path.display());
                    continue;
                }

                let identity = fs::canonicalize(&path)?;
                if seen.insert(identity) {
                    files.push(path);
                }
            }
        }

        Ok(files)
    }

    /// Whether `path` ends in one of [`YAML_EXTENSIONS`].
    #[must_use]
    pub fn has_yaml_extension(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
    }

    /// All regular files under `root` matching `**/*.<extension>`, sorted.
    fn glob_sorted(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
        let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
        let pattern = Path::new(&escaped_root)
            .join("**")
            .join(format!("*.{extension}"));
        let pattern = pattern.to_string_lossy();

        let entries = glob::glob(&pattern).map_err(|e| Error::Validation {
            field: "pattern".into(),
            message: format!("Invalid glob pattern '{pattern}': {e}"),
        })?;

        let mut matches = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::Io(e.into_error()))?;
            if path.is_file() {
                matches.push(path);
            }
        }

        matches.sort();
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "key: value\n").unwrap();
        path
    }

    fn names(files: &[PathBuf], root: &Path) -> Vec<String> {
        files
            .iter()
            .map(|p| {
                p.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace(std::path::MAIN_SEPARATOR, "/")
            })
            .collect()
    }

    #[test]
    fn test_discover_missing_root() {
        let result = SourceDiscovery::discover(Path::new("/nonexistent/root"), &IgnoreSet::new());
        assert!(matches!(result, Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_discover_directory_skips_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.yaml");
        touch(root, "b.yml");
        touch(root, "vpn-keys.yaml");
        touch(root, "sub/c.yaml");
        touch(root, "notes.txt");

        let files = SourceDiscovery::discover(root, &IgnoreSet::new()).unwrap();
        assert_eq!(names(&files, root), vec!["a.yaml", "sub/c.yaml", "b.yml"]);
    }

    #[test]
    fn test_discover_skips_secrets_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.yaml");
        touch(root, "b.yml");
        touch(root, "secrets.yaml");
        touch(root, "sub/c.yaml");

        let files = SourceDiscovery::discover(root, &IgnoreSet::new()).unwrap();
        assert_eq!(names(&files, root), vec!["a.yaml", "sub/c.yaml", "b.yml"]);
    }

    #[test]
    fn test_discover_yaml_pass_before_yml_pass() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "a.yml");
        touch(root, "z.yaml");

        let files = SourceDiscovery::discover(root, &IgnoreSet::new()).unwrap();
        assert_eq!(names(&files, root), vec!["z.yaml", "a.yml"]);
    }

    #[test]
    fn test_discover_caller_ignore_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "base.yaml");
        touch(root, "local.yaml");
        touch(root, "nested/local.yaml");

        let ignore = IgnoreSet::with_names(["local.yaml"]);
        let files = SourceDiscovery::discover(root, &ignore).unwrap();
        assert_eq!(names(&files, root), vec!["base.yaml"]);
    }

    #[test]
    fn test_discover_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = touch(temp_dir.path(), "only.yml");

        let files = SourceDiscovery::discover(&file, &IgnoreSet::new()).unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_discover_single_file_wrong_extension() {
        let temp_dir = TempDir::new().unwrap();
        let file = touch(temp_dir.path(), "config.json");

        let files = SourceDiscovery::discover(&file, &IgnoreSet::new()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_single_ignored_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = touch(temp_dir.path(), "vpn-keys.yaml");

        let files = SourceDiscovery::discover(&file, &IgnoreSet::new()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_skips_directories_named_like_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("odd.yaml")).unwrap();
        touch(root, "odd.yaml/inner.yaml");

        let files = SourceDiscovery::discover(root, &IgnoreSet::new()).unwrap();
        assert_eq!(names(&files, root), vec!["odd.yaml/inner.yaml"]);
    }

    #[test]
    fn test_has_yaml_extension() {
        assert!(SourceDiscovery::has_yaml_extension(Path::new("a.yaml")));
        assert!(SourceDiscovery::has_yaml_extension(Path::new("dir/a.yml")));
        assert!(!SourceDiscovery::has_yaml_extension(Path::new("a.YAML.txt")));
        assert!(!SourceDiscovery::has_yaml_extension(Path::new("yaml")));
    }

    #[test]
    fn test_ignore_set_iter_sorted() {
        let ignore = IgnoreSet::with_names(["b.yaml".to_string(), "a.yaml".to_string()]);
        let names: Vec<&str> = ignore.iter().collect();
        assert_eq!(names, vec!["a.yaml", "b.yaml", "vpn-keys.yaml"]);
    }
}
