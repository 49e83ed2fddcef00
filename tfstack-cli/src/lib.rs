//! Library exports for tfstack-cli.
//!
//! This module exports the CLI structure so the binary and the integration
//! tests share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
