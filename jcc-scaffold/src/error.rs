use std::path::PathBuf;

use crate::pipeline::Stage;

/// Error type for every fatal scaffolding failure.
///
/// Non-fatal problems (metadata stripping, environment file) never surface
/// here; they are logged and recorded on the [`Outcome`](crate::Outcome).
#[derive(Debug)]
pub enum ScaffoldError {
    /// The project name is empty or contains disallowed characters.
    Validation(String),
    /// Something already exists at the resolved target path.
    Conflict(PathBuf),
    /// An external tool was missing, failed to start, or exited non-zero.
    ExternalTool {
        stage: Stage,
        command: String,
        reason: String,
    },
    /// The interactive prompt was interrupted or could not read input.
    Prompt(String),
    /// Any other I/O failure escaping the pipeline.
    Io(std::io::Error),
}

impl std::fmt::Display for ScaffoldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaffoldError::Validation(msg) => write!(f, "Invalid project name: {msg}"),
            ScaffoldError::Conflict(path) => {
                write!(f, "Directory '{}' already exists", path.display())
            }
            ScaffoldError::ExternalTool {
                stage,
                command,
                reason,
            } => write!(f, "Step '{stage}' failed running `{command}`: {reason}"),
            ScaffoldError::Prompt(msg) => write!(f, "Prompt aborted: {msg}"),
            ScaffoldError::Io(e) => write!(f, "Unexpected I/O error: {e}"),
        }
    }
}

impl std::error::Error for ScaffoldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaffoldError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ScaffoldError {
    fn from(e: std::io::Error) -> Self {
        ScaffoldError::Io(e)
    }
}

impl From<dialoguer::Error> for ScaffoldError {
    fn from(e: dialoguer::Error) -> Self {
        ScaffoldError::Prompt(e.to_string())
    }
}
