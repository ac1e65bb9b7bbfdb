//! CLI subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a repopack.config.json interactively.
    Init {
        /// Directory to write the config file into.
        #[arg(default_value = ".")]
        directory: PathBuf,
    },
}
