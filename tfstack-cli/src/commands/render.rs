//! Command to render provider/backend files for one component.

use crate::error::CliError;
use crate::utils::{resolve_component_name, shorten_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tfstack::path::expand_tilde;
use tfstack::{render_component, resolve_component, TemplateRenderer};

/// Render provider/backend files for a component.
#[derive(Args)]
pub struct RenderCommand {
    /// Config directory holding provider_backend.yaml and accounts/
    #[arg(long, value_name = "DIR", env = "TFSTACK_CONFIG_DIR")]
    pub config_dir: PathBuf,

    /// Directory containing provider/backend templates
    #[arg(long, value_name = "DIR", env = "TFSTACK_TEMPLATE_DIR")]
    pub template_dir: PathBuf,

    /// Root directory containing component folders
    #[arg(long, value_name = "DIR", env = "TFSTACK_COMPONENT_DIR")]
    pub component_dir: PathBuf,

    /// Component name (detected from the working directory if omitted)
    #[arg(long, value_name = "NAME")]
    pub component: Option<String>,
}

impl RenderCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let component_dir = expand_tilde(&self.component_dir)?;
        let component = resolve_component_name(self.component, Some(component_dir.as_path()))?;

        let resolved = resolve_component(&component, &self.config_dir)?;

        let renderer = TemplateRenderer::new(expand_tilde(&self.template_dir)?);
        let target_dir = component_dir.join(&component);
        let written = render_component(&resolved, &renderer, &target_dir)?;

        if global.verbose {
            for file in &written {
                eprintln!("Wrote {}", shorten_path(file));
            }
        }

        if !global.quiet {
            println!("Rendered provider/backend for component '{component}'");
        }

        Ok(())
    }
}
