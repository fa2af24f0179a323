//! prose-stepper CLI library
//!
//! This library provides the command-line interface for walking prose
//! fragment by fragment with `prose-stepper-core`.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use config::CliConfig;
pub use error::{CliError, CliResult};
