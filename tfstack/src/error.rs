//! Error types for the tfstack library.
//!
//! This module provides the error hierarchy for configuration loading,
//! component resolution and template rendering, using `thiserror` for
//! ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a tfstack error.
///
/// # Examples
///
/// ```
/// use tfstack::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("1.5".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tfstack library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required file or input root does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// Data is present but semantically incomplete or inconsistent.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field or component that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A YAML file could not be parsed or did not match the expected schema.
    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A value could not be converted to or from YAML.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A template could not be rendered.
    #[error("failed to render template '{template}': {message}")]
    Render {
        /// The template name.
        template: String,
        /// A description of the rendering failure.
        message: String,
    },
}

impl Error {
    /// Shorthand for building a validation error.
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfstack::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound { path: PathBuf::from("/nonexistent") };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tfstack::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "account".to_string(),
    ///     message: "is required".to_string(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
