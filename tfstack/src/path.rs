//! Path helpers shared by the loaders and the component resolver.
//!
//! Input roots given on the command line or through `CONFIG_PATHS` may start
//! with `~`, and component detection needs the first directory of one path
//! relative to another.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use tfstack::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/config")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("config"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("config/base")).unwrap();
/// assert_eq!(expanded, Path::new("config/base"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Returns the first normal component of `path` relative to `base`.
///
/// Both paths are compared as given; callers canonicalize first when
/// symlinks matter. Returns `None` when `path` is not strictly below `base`.
///
/// # Examples
///
/// ```
/// use tfstack::path::first_segment_under;
/// use std::path::Path;
///
/// let base = Path::new("/repo/components");
/// assert_eq!(
///     first_segment_under(base, Path::new("/repo/components/web/modules")),
///     Some("web".to_string())
/// );
/// assert_eq!(first_segment_under(base, Path::new("/repo/components")), None);
/// assert_eq!(first_segment_under(base, Path::new("/elsewhere")), None);
/// ```
#[must_use]
pub fn first_segment_under(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    match relative.components().next()? {
        Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
        _ => None,
    }
}
