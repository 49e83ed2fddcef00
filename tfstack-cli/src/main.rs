//! Main entry point for the tfstack CLI.
//!
//! It provides commands for working with layered infrastructure config:
//! - `render`: Render provider/backend files for a component
//! - `resolve`: Print the resolved variables for a component
//! - `merge`: Print the deep-merged configuration tree
//! - `completions`: Generate shell completion scripts

use clap::Parser;
use tfstack_cli::cli::{Cli, Command};
use tfstack_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = tfstack::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Command::Render(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Merge(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
