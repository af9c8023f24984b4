//! # jcc-scaffold
//!
//! Starter-kit generator for jcc-express-mvc applications.
//!
//! The `scaffold` binary turns a project name and a frontend choice into a
//! ready-to-run project directory:
//!
//! | Stage | What happens |
//! |-------|--------------|
//! | name | validate and sanitize the project name (argument or prompt) |
//! | frontend | pick a template from the built-in catalog |
//! | path | resolve `<cwd>/<name>`, refuse to touch an existing entry |
//! | clone | shallow-clone the template into the new directory |
//! | install | run the package manager's install inside it |
//! | vcs | drop the template's `.git` metadata (non-fatal) |
//! | env | copy `.env.example` to `.env` (non-fatal) |
//!
//! Any fatal failure after the clone removes the partially created
//! directory again, see [`fsutil::RollbackGuard`].
//!
//! ## Architecture
//!
//! - [`name`]: project name validation and sanitization
//! - [`catalog`]: frontend choices and their template sources
//! - [`prompt`]: interactive prompts behind the [`prompt::Prompter`] trait
//! - [`runner`]: external tool invocation behind [`runner::CommandRunner`]
//! - [`fsutil`]: directory removal and the rollback guard
//! - [`envfile`]: environment file materialization
//! - [`pipeline`]: the [`pipeline::Scaffolder`] that wires everything together

pub mod catalog;
pub mod config;
pub mod envfile;
pub mod error;
pub mod fsutil;
pub mod logging;
pub mod name;
pub mod pipeline;
pub mod prompt;
pub mod runner;

pub use config::ScaffoldConfig;
pub use error::ScaffoldError;
pub use pipeline::{Outcome, Scaffolder, Stage};
