use std::fs;
use std::io;
use std::path::Path;

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Keys that receive a generated value when left empty in the example file.
pub const SECRET_KEYS: &[&str] = &["SESSION_SECRET", "APP_KEY"];

const SECRET_LEN: usize = 48;

/// What happened to the environment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvStatus {
    /// The example was copied; `secrets` lists keys that got a generated value.
    Created { secrets: Vec<String> },
    /// The template ships no example file.
    MissingExample,
    /// The copy itself failed.
    CopyFailed(String),
}

/// Copy `<dir>/<example>` to `<dir>/<live>`.
///
/// Never fails: a missing example or a failed copy is reported through
/// [`EnvStatus`] for the caller to surface.
pub fn materialize(dir: &Path, example: &Path, live: &Path) -> EnvStatus {
    let example_path = dir.join(example);
    let live_path = dir.join(live);

    if !example_path.is_file() {
        tracing::debug!(
            example = %example_path.display(),
            "no environment example in template, skipping environment file"
        );
        return EnvStatus::MissingExample;
    }

    if let Err(e) = fs::copy(&example_path, &live_path) {
        tracing::debug!(
            from = %example_path.display(),
            to = %live_path.display(),
            error = %e,
            "could not create environment file"
        );
        return EnvStatus::CopyFailed(e.to_string());
    }

    let secrets = match fill_empty_secrets(&live_path) {
        Ok(keys) => keys,
        Err(e) => {
            tracing::warn!(path = %live_path.display(), error = %e, "could not generate secrets");
            Vec::new()
        }
    };

    EnvStatus::Created { secrets }
}

/// Give every empty [`SECRET_KEYS`] entry in `path` a random value.
///
/// Returns the keys that were filled. The file is only rewritten when at
/// least one key changed.
pub fn fill_empty_secrets(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let (rewritten, filled) = fill_secrets_in(&content, || generate_secret(SECRET_LEN));
    if !filled.is_empty() {
        fs::write(path, rewritten)?;
    }
    Ok(filled)
}

fn fill_secrets_in(content: &str, mut secret: impl FnMut() -> String) -> (String, Vec<String>) {
    let mut filled = Vec::new();
    let mut out = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        let body = line.trim_end_matches(['\r', '\n']);
        let ending = &line[body.len()..];
        match body.split_once('=') {
            Some((key, value))
                if SECRET_KEYS.contains(&key.trim())
                    && matches!(value.trim(), "" | "\"\"" | "''") =>
            {
                let key = key.trim();
                out.push_str(&format!("{key}={}", secret()));
                out.push_str(ending);
                filled.push(key.to_string());
            }
            _ => out.push_str(line),
        }
    }

    (out, filled)
}

/// Random alphanumeric string of `len` characters.
pub fn generate_secret(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
