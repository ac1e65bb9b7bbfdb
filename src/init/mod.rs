//! The init action: bootstrap a `repopack.config.json` in a directory.
//!
//! The runner only reaches the outside world through the [`FileSystem`],
//! [`Prompter`] and [`Logger`] it is built with.

pub mod fs;
pub mod prompt;

use std::path::{Path, PathBuf};

use crate::config::{CONFIG_FILE_NAME, OutputFilePath, OutputStyle, RepopackConfig};
use crate::error::{Error, Result};
use crate::logger::Logger;

pub use fs::{FileSystem, TokioFileSystem};
pub use prompt::{PromptError, Prompter, TerminalPrompter};

const CREATE_FAILED: &str = "Failed to create repopack.config.json:";

/// Answers collected by the grouped prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAnswers {
    pub output_file_path: OutputFilePath,
    pub output_style: OutputStyle,
}

impl InitAnswers {
    /// Overlay the answers on the default configuration.
    fn into_config(self) -> RepopackConfig {
        let mut config = RepopackConfig::default();
        config.output.file_path = self.output_file_path;
        config.output.style = self.output_style;
        config
    }
}

impl From<&RepopackConfig> for InitAnswers {
    fn from(config: &RepopackConfig) -> Self {
        Self {
            output_file_path: config.output.file_path.clone(),
            output_style: config.output.style,
        }
    }
}

/// How a run of the init action ended.
#[derive(Debug)]
pub enum InitOutcome {
    /// A new config file was written.
    Created { path: PathBuf },
    /// A config file was already present; nothing was written.
    SkippedExisting { path: PathBuf },
    /// The prompt was aborted or failed; nothing was written.
    Cancelled { cause: Error },
    /// Serializing or writing the file failed.
    WriteFailed { path: PathBuf, cause: Error },
}

pub struct InitActionRunner<'a> {
    fs: &'a dyn FileSystem,
    prompter: &'a dyn Prompter,
    logger: &'a dyn Logger,
}

impl<'a> InitActionRunner<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        prompter: &'a dyn Prompter,
        logger: &'a dyn Logger,
    ) -> Self {
        Self {
            fs,
            prompter,
            logger,
        }
    }

    /// Make sure `target_dir` has a config file, asking the user for its
    /// contents when it does not.
    ///
    /// Never fails: every error is logged and reported in the outcome.
    pub async fn run(&self, target_dir: &Path) -> InitOutcome {
        let config_path = RepopackConfig::config_path(target_dir);

        // Any access error counts as "absent", not only NotFound.
        match self.fs.access(&config_path).await {
            Ok(()) => {
                self.logger.warn(&format!(
                    "A {CONFIG_FILE_NAME} file already exists at {}",
                    config_path.display()
                ));
                return InitOutcome::SkippedExisting { path: config_path };
            }
            Err(e) => self
                .logger
                .debug(&format!("No config at {}: {e}", config_path.display())),
        }

        let defaults = InitAnswers::from(&RepopackConfig::default());
        let answers = match self.prompter.group(&defaults).await {
            Ok(answers) => answers,
            Err(e) => {
                let cause = Error::from(e);
                self.logger.error(CREATE_FAILED, &cause);
                return InitOutcome::Cancelled { cause };
            }
        };

        match self.write_config(&config_path, answers).await {
            Ok(()) => InitOutcome::Created { path: config_path },
            Err(cause) => {
                self.logger.error(CREATE_FAILED, &cause);
                InitOutcome::WriteFailed {
                    path: config_path,
                    cause,
                }
            }
        }
    }

    async fn write_config(&self, path: &Path, answers: InitAnswers) -> Result<()> {
        let contents = answers.into_config().to_json_pretty()?;
        self.fs.write_file(path, &contents).await?;
        Ok(())
    }
}
