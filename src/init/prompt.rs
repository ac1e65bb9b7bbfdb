//! Interactive questions asked by the init action.

use std::io::IsTerminal;

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use super::InitAnswers;
use crate::config::{InvalidOutputFilePath, OutputFilePath, OutputStyle};

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("configuration cancelled by user")]
    Cancelled,

    #[error("interactive mode requires a terminal")]
    NotInteractive,

    #[error(transparent)]
    Terminal(#[from] dialoguer::Error),

    #[error("prompt interrupted: {0}")]
    Interrupted(String),
}

impl PromptError {
    /// Whether the user chose to abort, as opposed to the prompt breaking.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Asks the grouped init questions in one session.
#[async_trait]
pub trait Prompter: Send + Sync {
    /// Ask for the output file path and style, pre-filled with `defaults`.
    async fn group(&self, defaults: &InitAnswers) -> Result<InitAnswers, PromptError>;
}

/// [`Prompter`] that talks to the user's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

#[async_trait]
impl Prompter for TerminalPrompter {
    async fn group(&self, defaults: &InitAnswers) -> Result<InitAnswers, PromptError> {
        if !std::io::stdin().is_terminal() {
            return Err(PromptError::NotInteractive);
        }

        let defaults = defaults.clone();
        tokio::task::spawn_blocking(move || ask(&defaults))
            .await
            .map_err(|e| PromptError::Interrupted(e.to_string()))?
    }
}

fn ask(defaults: &InitAnswers) -> Result<InitAnswers, PromptError> {
    let theme = ColorfulTheme::default();

    eprintln!("{}", "Welcome to Repopack Configuration!".bold());

    let file_path: String = Input::with_theme(&theme)
        .with_prompt("Output file path")
        .default(defaults.output_file_path.as_str().to_string())
        .validate_with(|input: &String| -> Result<(), InvalidOutputFilePath> {
            OutputFilePath::new(input).map(|_| ())
        })
        .interact_text()?;
    let output_file_path =
        OutputFilePath::new(&file_path).map_err(|e| PromptError::Interrupted(e.to_string()))?;

    let items: Vec<String> = OutputStyle::ALL
        .iter()
        .map(|style| format!("{:<6} {}", style.label(), style.hint().dimmed()))
        .collect();
    let default_index = OutputStyle::ALL
        .iter()
        .position(|style| *style == defaults.output_style)
        .unwrap_or(0);

    let Some(index) = Select::with_theme(&theme)
        .with_prompt("Output style (Esc to cancel)")
        .items(&items)
        .default(default_index)
        .interact_opt()?
    else {
        return Err(PromptError::Cancelled);
    };

    Ok(InitAnswers {
        output_file_path,
        output_style: OutputStyle::ALL[index],
    })
}
