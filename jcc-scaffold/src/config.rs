use std::path::{Path, PathBuf};

use crate::catalog::TemplateSource;
use crate::runner::ToolCommand;

/// Resolved settings for one scaffolding run.
///
/// Built from the CLI flags (which fall back to `SCAFFOLD_GIT` and
/// `SCAFFOLD_PACKAGE_MANAGER`); everything else is fixed per template layout.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    pub git: String,
    pub package_manager: String,
    /// Example environment file shipped with the template, relative to the project.
    pub env_example: PathBuf,
    /// Live environment file the example is copied to.
    pub env_file: PathBuf,
    /// Version-control metadata directory removed after cloning.
    pub vcs_dir: PathBuf,
    /// Suggestion offered by the name prompt.
    pub default_name: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        ScaffoldConfig {
            git: "git".into(),
            package_manager: "npm".into(),
            env_example: PathBuf::from(".env.example"),
            env_file: PathBuf::from(".env"),
            vcs_dir: PathBuf::from(".git"),
            default_name: "my-app".into(),
        }
    }
}

impl ScaffoldConfig {
    pub fn with_tools(git: impl Into<String>, package_manager: impl Into<String>) -> Self {
        ScaffoldConfig {
            git: git.into(),
            package_manager: package_manager.into(),
            ..Default::default()
        }
    }

    /// `git clone --depth 1 [--branch B] -- <url> <target>`.
    ///
    /// `target` is absolute, so a name starting with `-` can never be read
    /// as an option.
    pub fn clone_command(&self, source: &TemplateSource, target: &Path) -> ToolCommand {
        let mut args: Vec<String> = vec!["clone".into(), "--depth".into(), "1".into()];
        if let Some(branch) = source.branch {
            args.push("--branch".into());
            args.push(branch.into());
        }
        args.push("--".into());
        args.push(source.url.into());
        args.push(target.display().to_string());
        ToolCommand::new(&self.git, args)
    }

    /// `<package manager> install`, run inside the project.
    pub fn install_command(&self, project_dir: &Path) -> ToolCommand {
        ToolCommand::new(&self.package_manager, ["install"]).current_dir(project_dir)
    }

    /// Command the user runs to start the generated project.
    pub fn start_hint(&self) -> String {
        format!("{} run dev", self.package_manager)
    }
}
