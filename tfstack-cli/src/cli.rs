//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, MergeCommand, RenderCommand, ResolveCommand};
use clap::{Parser, Subcommand};

/// Command-line tool for rendering Terraform provider and backend files.
#[derive(Parser)]
#[command(name = "tfstack")]
#[command(
    version,
    about = "Render Terraform provider/backend files from layered configuration",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Render provider/backend files for a component
    Render(RenderCommand),

    /// Print the resolved provider and backend variables for a component
    Resolve(ResolveCommand),

    /// Print the deep-merged configuration tree
    Merge(MergeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
