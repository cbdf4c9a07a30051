//! Command modules for the collc driver.
//!
//! Each subcommand is implemented in its own file.

pub mod check;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};

use std::path::Path;

/// Returns `None` when `path` means standard input (absent or `-`).
pub(crate) fn input_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| *p != Path::new("-"))
}
