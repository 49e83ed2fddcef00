//! Command to print the deep-merged configuration tree.

use crate::error::CliError;
use crate::utils::{format_value, shorten_path, GlobalOptions, OutputFormat};
use clap::Args;
use std::path::{Path, PathBuf};
use tfstack::config::{ConfigInputs, CONFIG_PATHS_ENV, CONFIG_PATH_ENV};
use tfstack::load_merged;

/// Print the deep-merged configuration tree.
#[derive(Args)]
pub struct MergeCommand {
    /// Files or directories to merge, in order (defaults to $CONFIG_PATHS,
    /// then $CONFIG_PATH, then ./config)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Additional file name to skip (repeatable)
    #[arg(long, value_name = "NAME")]
    pub ignore: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl MergeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let inputs = if self.paths.is_empty() {
            if global.verbose {
                eprintln!(
                    "No paths given; using {CONFIG_PATHS_ENV}, {CONFIG_PATH_ENV} or ./config"
                );
            }
            ConfigInputs::Default
        } else {
            ConfigInputs::Paths(self.paths)
        };

        let merged = load_merged(inputs, self.ignore)?;

        if global.verbose {
            for root in merged.provenance() {
                eprintln!("Loaded {}", shorten_path(Path::new(root)));
            }
        }

        print!("{}", format_value(merged.tree(), self.format)?);
        Ok(())
    }
}
