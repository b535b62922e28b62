//! Error types for tsinit-projects

use thiserror::Error;

/// Result type alias using tsinit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
///
/// None of these are recovered inside the pipeline: the first error aborts
/// the run and leaves the workspace as it was at that moment.
#[derive(Error, Debug)]
pub enum Error {
    /// Project directory already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// The external command could not be spawned
    #[error("Process execution failed: {0}")]
    ProcessExecution(String),

    /// The external command ran but exited non-zero
    #[error("Command '{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// Command not found on PATH
    #[error("Required command not found: {command}")]
    CommandNotFound { command: String },

    /// Manifest content is not a JSON object
    #[error("Invalid manifest at {path}: {message}")]
    InvalidManifest { path: String, message: String },

    /// Interactive prompt failed
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a process execution error
    pub fn process_execution(message: impl Into<String>) -> Self {
        Self::ProcessExecution(message.into())
    }

    /// Create a command failed error
    pub fn command_failed(
        command: impl Into<String>,
        status: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            command: command.into(),
            status: status.into(),
            stderr: stderr.into(),
        }
    }

    /// Create a command not found error
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create an invalid manifest error
    pub fn invalid_manifest(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidManifest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a prompt error
    pub fn prompt(message: impl Into<String>) -> Self {
        Self::Prompt(message.into())
    }
}
