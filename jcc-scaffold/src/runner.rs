use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::ScaffoldError;
use crate::pipeline::Stage;

/// An external tool invocation: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new<I, S>(program: &str, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ToolCommand {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
        }
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Executes external tools on behalf of the pipeline.
///
/// Every call blocks until the tool exits. Implementations report a
/// non-zero exit or a spawn failure as [`ScaffoldError::ExternalTool`].
pub trait CommandRunner {
    /// Fail early when `program` cannot be found.
    fn ensure_available(&self, stage: Stage, program: &str) -> Result<(), ScaffoldError>;

    fn run(&self, stage: Stage, command: &ToolCommand) -> Result<(), ScaffoldError>;
}

/// Runs tools as child processes with inherited stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn ensure_available(&self, stage: Stage, program: &str) -> Result<(), ScaffoldError> {
        match which::which(program) {
            Ok(path) => {
                tracing::debug!(program, path = %path.display(), "tool found");
                Ok(())
            }
            Err(e) => Err(ScaffoldError::ExternalTool {
                stage,
                command: program.to_string(),
                reason: format!("not found on PATH ({e})"),
            }),
        }
    }

    fn run(&self, stage: Stage, command: &ToolCommand) -> Result<(), ScaffoldError> {
        tracing::debug!(%stage, command = %command, cwd = ?command.cwd, "spawning");

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args);
        if let Some(dir) = &command.cwd {
            cmd.current_dir(dir);
        }

        let status = cmd.status().map_err(|e| ScaffoldError::ExternalTool {
            stage,
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        if !status.success() {
            let reason = match status.code() {
                Some(code) => format!("exited with status {code}"),
                None => "terminated by signal".to_string(),
            };
            return Err(ScaffoldError::ExternalTool {
                stage,
                command: command.to_string(),
                reason,
            });
        }

        Ok(())
    }
}
