//! Command to print the resolved variables for one component.

use crate::error::CliError;
use crate::utils::{format_value, resolve_component_name, GlobalOptions, OutputFormat};
use clap::Args;
use std::path::PathBuf;
use tfstack::path::expand_tilde;
use tfstack::resolve_component;

/// Print the resolved provider and backend variables for a component.
#[derive(Args)]
pub struct ResolveCommand {
    /// Config directory holding provider_backend.yaml and accounts/
    #[arg(long, value_name = "DIR", env = "TFSTACK_CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Root directory containing component folders (for auto-detection)
    #[arg(long, value_name = "DIR", env = "TFSTACK_COMPONENT_DIR")]
    pub component_dir: Option<PathBuf>,

    /// Component name (detected from the working directory if omitted)
    #[arg(long, value_name = "NAME")]
    pub component: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let component_dir = self
            .component_dir
            .as_deref()
            .map(expand_tilde)
            .transpose()?;
        let component = resolve_component_name(self.component, component_dir.as_deref())?;

        let resolved = resolve_component(&component, &self.config_dir)?;

        if global.verbose {
            eprintln!(
                "Component '{}' resolved to module '{}' in account '{}'",
                resolved.component, resolved.module, resolved.account
            );
        }

        print!("{}", format_value(&resolved, self.format)?);
        Ok(())
    }
}
