//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the easel binary.

mod commands;
mod credentials;
mod generate;
mod media;

pub use commands::{Cli, Commands};
pub use credentials::{check_key, report_failure};
pub use generate::{GenerateOptions, run_generate};
pub use media::{run_edit, run_image, run_video};
