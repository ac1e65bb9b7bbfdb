//! Output file path validation and type.

use std::fmt;

use serde::Serialize;

/// A validated output file path.
///
/// The path is stored as entered (relative or absolute). The only rule is
/// that it must contain something other than whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OutputFilePath(String);

impl OutputFilePath {
    pub const DEFAULT: &'static str = "repopack-output.txt";

    /// Create a new output file path, validating the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or whitespace only.
    pub fn new(path: &str) -> Result<Self, InvalidOutputFilePath> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(InvalidOutputFilePath::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for OutputFilePath {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

/// Errors that can occur when validating an output file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOutputFilePath {
    /// Path is empty or whitespace only.
    Empty,
}

impl fmt::Display for InvalidOutputFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Output file path is required"),
        }
    }
}

impl std::error::Error for InvalidOutputFilePath {}
