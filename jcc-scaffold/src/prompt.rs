use dialoguer::{Input, Select};

use crate::error::ScaffoldError;
use crate::name::validate_name;

/// Source of interactive answers.
///
/// The real implementation talks to the terminal; tests script the answers.
pub trait Prompter {
    /// Ask for a project name, suggesting `default`.
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError>;

    /// Ask the user to pick one of `labels`; returns the chosen label.
    fn frontend(&mut self, labels: &[&str]) -> Result<String, ScaffoldError>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn project_name(&mut self, default: &str) -> Result<String, ScaffoldError> {
        let name: String = Input::new()
            .with_prompt("Project name")
            .default(default.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                validate_name(input).map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(name)
    }

    fn frontend(&mut self, labels: &[&str]) -> Result<String, ScaffoldError> {
        let idx = Select::new()
            .with_prompt("Frontend")
            .items(labels)
            .default(0)
            .interact()?;
        labels
            .get(idx)
            .map(|label| label.to_string())
            .ok_or_else(|| ScaffoldError::Prompt(format!("no frontend at index {idx}")))
    }
}
