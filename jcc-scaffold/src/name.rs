use crate::error::ScaffoldError;
use crate::prompt::Prompter;

/// Returns `true` for the characters a project name may contain.
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Check a raw project name against the `[A-Za-z0-9_-]+` rule.
///
/// The error message lists every offending character once, in the order
/// they first appear, so the user can fix the name in one go.
pub fn validate_name(name: &str) -> Result<(), ScaffoldError> {
    if name.trim().is_empty() {
        return Err(ScaffoldError::Validation(
            "project name cannot be empty".into(),
        ));
    }

    let mut invalid: Vec<char> = Vec::new();
    for c in name.chars() {
        if !is_allowed_char(c) && !invalid.contains(&c) {
            invalid.push(c);
        }
    }

    if invalid.is_empty() {
        return Ok(());
    }

    let listed = invalid
        .iter()
        .map(|c| format!("{c:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    Err(ScaffoldError::Validation(format!(
        "'{name}' contains invalid characters ({listed}); only letters, digits, '-' and '_' are allowed"
    )))
}

/// Strip every disallowed character.
///
/// Applied after validation, right before the name is joined into a path
/// or passed to an external tool.
pub fn sanitize_name(name: &str) -> String {
    name.chars().filter(|c| is_allowed_char(*c)).collect()
}

/// Resolve the project name from the first positional argument or a prompt.
///
/// An explicit argument is validated once and rejected outright when
/// invalid. Without an argument the prompter asks, suggesting `default`,
/// and keeps asking until [`validate_name`] accepts the answer.
pub fn resolve_name(
    arg: Option<&str>,
    prompter: &mut dyn Prompter,
    default: &str,
) -> Result<String, ScaffoldError> {
    let raw = match arg {
        Some(name) => {
            validate_name(name)?;
            name.to_string()
        }
        None => {
            let answer = prompter.project_name(default)?;
            validate_name(&answer)?;
            answer
        }
    };

    let sanitized = sanitize_name(&raw);
    if sanitized.is_empty() {
        return Err(ScaffoldError::Validation(format!(
            "'{raw}' has no usable characters"
        )));
    }
    if sanitized != raw {
        tracing::warn!(raw = %raw, sanitized = %sanitized, "project name was sanitized");
    }
    Ok(sanitized)
}
