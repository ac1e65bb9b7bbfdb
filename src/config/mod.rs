//! Configuration file model for repopack.

mod output_path;
mod repopack;

pub use output_path::{InvalidOutputFilePath, OutputFilePath};
pub use repopack::{CONFIG_FILE_NAME, OutputStyle, RepopackConfig};
