//! The `repopack.config.json` file model.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use super::OutputFilePath;

/// Name of the configuration file written into a project directory.
pub const CONFIG_FILE_NAME: &str = "repopack.config.json";

/// Rendering style of the packed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputStyle {
    /// Simple text format.
    #[default]
    Plain,
    /// Structured XML format.
    Xml,
}

impl OutputStyle {
    pub const ALL: &'static [OutputStyle] = &[OutputStyle::Plain, OutputStyle::Xml];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Xml => "xml",
        }
    }

    /// Human-readable name shown in the style picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Plain => "Plain",
            Self::Xml => "XML",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::Plain => "Simple text format",
            Self::Xml => "Structured XML format",
        }
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputStyle {
    type Err = UnknownOutputStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "xml" => Ok(Self::Xml),
            _ => Err(UnknownOutputStyle(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output style: {0}\nValid options: plain, xml")]
pub struct UnknownOutputStyle(pub String);

/// The `output` section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub file_path: OutputFilePath,
    pub style: OutputStyle,
    pub remove_comments: bool,
    pub remove_empty_lines: bool,
    /// Number of largest files listed in the summary.
    pub top_files_length: u32,
    pub show_line_numbers: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file_path: OutputFilePath::default(),
            style: OutputStyle::default(),
            remove_comments: false,
            remove_empty_lines: false,
            top_files_length: 5,
            show_line_numbers: false,
        }
    }
}

/// The `ignore` section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IgnoreConfig {
    /// Honor the project's `.gitignore` files.
    pub use_gitignore: bool,
    /// Apply the built-in ignore patterns (lock files, build output, ...).
    pub use_default_patterns: bool,
    pub custom_patterns: Vec<String>,
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            use_gitignore: true,
            use_default_patterns: true,
            custom_patterns: Vec::new(),
        }
    }
}

/// Repopack's configuration file.
///
/// Field order here is the key order of the written JSON document.
#[derive(Debug, Clone, Serialize, Default)]
pub struct RepopackConfig {
    pub output: OutputConfig,
    /// Glob patterns of files to include. Empty means everything.
    pub include: Vec<String>,
    pub ignore: IgnoreConfig,
}

impl RepopackConfig {
    /// Resolve the configuration file path for a project directory.
    ///
    /// Relative directories are resolved against the current working
    /// directory. The filesystem is not consulted.
    pub fn config_path(dir: &Path) -> PathBuf {
        let joined = dir.join(CONFIG_FILE_NAME);
        std::path::absolute(&joined).unwrap_or(joined)
    }

    /// Serialize as 2-space indented JSON.
    pub fn to_json_pretty(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
