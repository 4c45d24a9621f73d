//! Command-line interface module.

mod args;
pub mod check;
pub mod init;
pub mod validate;

pub use args::{Cli, Commands, ValidateArgs};
