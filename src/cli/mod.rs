//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use session::Session;
