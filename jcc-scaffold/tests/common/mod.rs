#![allow(dead_code)]

use jcc_scaffold::prompt::Prompter;
use jcc_scaffold::runner::{CommandRunner, ToolCommand};
use jcc_scaffold::{ScaffoldError, Stage};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Prompter with canned answers that records what it was asked.
pub struct ScriptedPrompter {
    pub name: Option<String>,
    pub frontend: String,
    pub name_asked: usize,
    pub labels_seen: Vec<String>,
}

impl ScriptedPrompter {
    pub fn choosing(answer: &str) -> Self {
        ScriptedPrompter {
            name: None,
            frontend: answer.to_string(),
            name_asked: 0,
            labels_seen: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        self.name_asked += 1;
        Ok(self.name.clone().unwrap_or_else(|| default.to_string()))
    }

    fn frontend(&mut self, labels: &[&str]) -> Result<String, ScaffoldError> {
        self.labels_seen = labels.iter().map(|l| l.to_string()).collect();
        Ok(self.frontend.clone())
    }
}

/// Stand-in for git and the package manager.
///
/// A `clone` call materializes a small template tree at its last argument;
/// the install step can be told to fail.
#[derive(Default)]
pub struct FakeRunner {
    pub calls: RefCell<Vec<ToolCommand>>,
    pub fail_clone: bool,
    pub fail_install: bool,
    pub missing_tool: Option<String>,
    pub env_example: Option<String>,
    /// Occupy the live `.env` path with a directory so the copy fails.
    pub env_as_dir: bool,
}

impl FakeRunner {
    pub fn with_env_example(content: &str) -> Self {
        FakeRunner {
            env_example: Some(content.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<ToolCommand> {
        self.calls.borrow().clone()
    }

    fn fail(stage: Stage, command: &ToolCommand) -> ScaffoldError {
        ScaffoldError::ExternalTool {
            stage,
            command: command.to_string(),
            reason: "exited with status 1".into(),
        }
    }
}

impl CommandRunner for FakeRunner {
    fn ensure_available(&self, stage: Stage, program: &str) -> Result<(), ScaffoldError> {
        match &self.missing_tool {
            Some(missing) if missing == program => Err(ScaffoldError::ExternalTool {
                stage,
                command: program.to_string(),
                reason: "not found on PATH".into(),
            }),
            _ => Ok(()),
        }
    }

    fn run(&self, stage: Stage, command: &ToolCommand) -> Result<(), ScaffoldError> {
        self.calls.borrow_mut().push(command.clone());

        if command.args.first().map(String::as_str) == Some("clone") {
            if self.fail_clone {
                return Err(Self::fail(stage, command));
            }
            let target = PathBuf::from(command.args.last().unwrap());
            fs::create_dir_all(target.join(".git/objects")).unwrap();
            fs::write(target.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
            fs::write(target.join("package.json"), "{\"name\":\"starter\"}\n").unwrap();
            if let Some(env) = &self.env_example {
                fs::write(target.join(".env.example"), env).unwrap();
            }
            if self.env_as_dir {
                fs::create_dir_all(target.join(".env")).unwrap();
            }
            return Ok(());
        }

        if self.fail_install {
            if let Some(dir) = &command.cwd {
                fs::create_dir_all(dir.join("node_modules/half-installed")).unwrap();
            }
            return Err(Self::fail(stage, command));
        }
        Ok(())
    }
}
