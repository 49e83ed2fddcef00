//! Build script for tfstack-cli.
//!
//! Generates the `tfstack.1` man page into OUT_DIR using clap_mangen.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared here by hand.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

fn dir_arg(name: &'static str, help: &'static str, env_var: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("DIR")
        .env(env_var)
}

fn component_arg() -> Arg {
    Arg::new("component")
        .long("component")
        .help("Component name (detected from the working directory if omitted)")
        .value_name("NAME")
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .help("Output format")
        .value_parser(["yaml", "json"])
        .default_value("yaml")
}

/// Keep this synchronized with src/cli.rs and src/commands/.
fn build_cli() -> Command {
    Command::new("tfstack")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Terraform provider/backend files from layered configuration")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .subcommands([
            Command::new("render")
                .about("Render provider/backend files for a component")
                .arg(dir_arg(
                    "config-dir",
                    "Config directory holding provider_backend.yaml and accounts/",
                    "TFSTACK_CONFIG_DIR",
                ))
                .arg(dir_arg(
                    "template-dir",
                    "Directory containing provider/backend templates",
                    "TFSTACK_TEMPLATE_DIR",
                ))
                .arg(dir_arg(
                    "component-dir",
                    "Root directory containing component folders",
                    "TFSTACK_COMPONENT_DIR",
                ))
                .arg(component_arg()),
            Command::new("resolve")
                .about("Print the resolved provider and backend variables for a component")
                .arg(dir_arg(
                    "config-dir",
                    "Config directory holding provider_backend.yaml and accounts/",
                    "TFSTACK_CONFIG_DIR",
                ))
                .arg(dir_arg(
                    "component-dir",
                    "Root directory containing component folders (for auto-detection)",
                    "TFSTACK_COMPONENT_DIR",
                ))
                .arg(component_arg())
                .arg(format_arg()),
            Command::new("merge")
                .about("Print the deep-merged configuration tree")
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .help("Files or directories to merge, in order")
                        .num_args(0..),
                )
                .arg(
                    Arg::new("ignore")
                        .long("ignore")
                        .value_name("NAME")
                        .help("Additional file name to skip (repeatable)")
                        .action(ArgAction::Append),
                )
                .arg(format_arg()),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(Arg::new("shell").required(true)),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("tfstack.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
