//! CLI module for repopack.

mod commands;
pub mod init;

pub use commands::Commands;
