//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: component name
//! resolution, output formatting and path display.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Output format for commands that print data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Format `value` in the requested output format.
pub fn format_value<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        OutputFormat::Json => {
            let mut text = serde_json::to_string_pretty(value)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Determine which component to operate on.
///
/// An explicit name wins. Otherwise the component is detected from the
/// working directory, which requires `component_dir`.
pub fn resolve_component_name(
    component: Option<String>,
    component_dir: Option<&Path>,
) -> Result<String, CliError> {
    if let Some(name) = component {
        if name.is_empty() {
            return Err(CliError::InvalidArguments(
                "--component must not be empty".to_string(),
            ));
        }
        return Ok(name);
    }

    let root = component_dir.ok_or_else(|| {
        CliError::InvalidArguments(
            "--component-dir is required when --component is omitted".to_string(),
        )
    })?;

    Ok(tfstack::detect_current_component(root)?)
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}
