use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::catalog::TemplateCatalog;
use crate::config::ScaffoldConfig;
use crate::envfile::{self, EnvStatus};
use crate::error::ScaffoldError;
use crate::fsutil::{self, RollbackGuard};
use crate::name;
use crate::prompt::Prompter;
use crate::runner::CommandRunner;

/// Pipeline stages, in execution order.
///
/// Failures before [`Stage::Cloned`] leave no trace on disk. From `Cloned`
/// onwards a fatal failure rolls the project directory back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    NamePrompt,
    FrontendPrompt,
    PathResolved,
    Cloned,
    DepsInstalled,
    VcsStripped,
    EnvMaterialized,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::NamePrompt => "name prompt",
            Stage::FrontendPrompt => "frontend prompt",
            Stage::PathResolved => "resolve path",
            Stage::Cloned => "clone template",
            Stage::DepsInstalled => "install dependencies",
            Stage::VcsStripped => "strip version control",
            Stage::EnvMaterialized => "environment file",
            Stage::Done => "done",
        };
        f.write_str(s)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub project_name: String,
    pub path: PathBuf,
    pub frontend: String,
    pub vcs_stripped: bool,
    pub env: EnvStatus,
    /// Non-fatal problems, in the order they happened.
    pub warnings: Vec<String>,
}

impl Outcome {
    /// `true` when a non-fatal step was skipped or failed.
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Drives one scaffolding run from name to ready project.
pub struct Scaffolder<R> {
    config: ScaffoldConfig,
    catalog: TemplateCatalog,
    runner: R,
    cwd: PathBuf,
}

impl<R: CommandRunner> Scaffolder<R> {
    pub fn new(config: ScaffoldConfig, runner: R, cwd: impl Into<PathBuf>) -> Self {
        Scaffolder {
            config,
            catalog: TemplateCatalog::builtin(),
            runner,
            cwd: cwd.into(),
        }
    }

    /// Same as [`Scaffolder::new`] with the process working directory.
    pub fn in_current_dir(config: ScaffoldConfig, runner: R) -> Result<Self, ScaffoldError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(config, runner, cwd))
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve `<cwd>/<name>`, refusing anything that already exists there.
    ///
    /// Uses `symlink_metadata` so a dangling symlink also counts as taken.
    pub fn resolve_target(&self, sanitized_name: &str) -> Result<PathBuf, ScaffoldError> {
        let target = self.cwd.join(sanitized_name);
        if target.symlink_metadata().is_ok() {
            return Err(ScaffoldError::Conflict(target));
        }
        Ok(target)
    }

    /// Run the full pipeline.
    ///
    /// `name_arg` is the first positional argument, if any. The frontend is
    /// always asked through `prompter`.
    pub fn run(
        &self,
        name_arg: Option<&str>,
        prompter: &mut dyn Prompter,
    ) -> Result<Outcome, ScaffoldError> {
        tracing::debug!(stage = %Stage::NamePrompt, "entering");
        let project_name = name::resolve_name(name_arg, prompter, &self.config.default_name)?;

        tracing::debug!(stage = %Stage::FrontendPrompt, "entering");
        let labels = self.catalog.labels();
        let answer = prompter.frontend(&labels)?;
        let frontend = self.catalog.frontend_for(Some(answer.as_str()));
        let source = self.catalog.source(frontend);

        let target = self.resolve_target(&project_name)?;
        tracing::debug!(stage = %Stage::PathResolved, path = %target.display(), "entering");

        self.runner
            .ensure_available(Stage::PathResolved, &self.config.git)?;
        self.runner
            .ensure_available(Stage::PathResolved, &self.config.package_manager)?;

        println!(
            "{} Cloning {} template into {}",
            "->".blue(),
            frontend.label().cyan(),
            project_name.green()
        );
        let clone = self.config.clone_command(source, &target);
        self.runner.run(Stage::Cloned, &clone)?;
        let guard = RollbackGuard::new(&target);
        tracing::debug!(stage = %Stage::Cloned, "done");

        println!("{} Installing dependencies for {}", "->".blue(), project_name.green());
        let install = self.config.install_command(&target);
        if let Err(e) = self.runner.run(Stage::DepsInstalled, &install) {
            eprintln!("{} Removing {}", "!".yellow(), target.display());
            guard.rollback();
            return Err(e);
        }
        tracing::debug!(stage = %Stage::DepsInstalled, "done");

        let mut warnings = Vec::new();

        let vcs_stripped = strip_vcs(&target, &self.config.vcs_dir, &mut warnings);
        tracing::debug!(stage = %Stage::VcsStripped, stripped = vcs_stripped, "done");

        let env = envfile::materialize(&target, &self.config.env_example, &self.config.env_file);
        match &env {
            EnvStatus::Created { .. } => {}
            EnvStatus::MissingExample => warnings.push(format!(
                "{} not found, project has no {}",
                self.config.env_example.display(),
                self.config.env_file.display()
            )),
            EnvStatus::CopyFailed(reason) => warnings.push(format!(
                "could not create {}: {reason}",
                self.config.env_file.display()
            )),
        }
        tracing::debug!(stage = %Stage::EnvMaterialized, "done");

        let path = guard.commit();
        tracing::debug!(stage = %Stage::Done, path = %path.display(), "project ready");

        Ok(Outcome {
            project_name,
            path,
            frontend: frontend.label().to_string(),
            vcs_stripped,
            env,
            warnings,
        })
    }
}

/// Remove the version-control directory if the template carried one.
///
/// Returns `true` when a directory was removed. Failure is non-fatal and
/// recorded in `warnings`.
fn strip_vcs(project: &Path, vcs_dir: &Path, warnings: &mut Vec<String>) -> bool {
    strip_vcs_with(project, vcs_dir, warnings, fsutil::remove_tree)
}

fn strip_vcs_with<F>(project: &Path, vcs_dir: &Path, warnings: &mut Vec<String>, remove: F) -> bool
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    let vcs = project.join(vcs_dir);
    if !vcs.is_dir() {
        return false;
    }
    match remove(&vcs) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(path = %vcs.display(), error = %e, "version-control removal failed");
            warnings.push(format!("could not remove {}: {e}", vcs.display()));
            false
        }
    }
}

/// Write the success banner and the commands to start the project.
///
/// The directory hint is always `./<name>` so a name starting with `-`
/// is never read as a `cd` option.
pub fn report<W: Write>(out: &mut W, outcome: &Outcome, config: &ScaffoldConfig) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} Project '{}' created successfully!",
        "✓".green(),
        outcome.project_name.green()
    )?;
    if let EnvStatus::Created { secrets } = &outcome.env {
        for key in secrets {
            writeln!(out, "  {} generated {}", "✓".green(), key.cyan())?;
        }
    }
    for warning in &outcome.warnings {
        writeln!(out, "  {} {}", "!".yellow(), warning.yellow())?;
    }
    writeln!(out)?;
    writeln!(out, "  cd ./{}", outcome.project_name)?;
    writeln!(out, "  {}", config.start_hint())?;
    writeln!(out)?;
    Ok(())
}
