use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Recursively remove `path`.
///
/// If the first attempt fails, every entry is made writable and the removal
/// is retried once. Git pack files are read-only, which makes a plain
/// `remove_dir_all` fail on Windows.
pub fn remove_tree(path: &Path) -> io::Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(first) => {
            tracing::debug!(path = %path.display(), error = %first, "retrying removal after clearing read-only flags");
            clear_readonly(path);
            fs::remove_dir_all(path)
        }
    }
}

#[allow(clippy::permissions_set_readonly_false)]
fn clear_readonly(root: &Path) {
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let mut perms = metadata.permissions();
        if perms.readonly() {
            perms.set_readonly(false);
            let _ = fs::set_permissions(entry.path(), perms);
        }
    }
}

/// Owns a freshly created project directory until the pipeline commits it.
///
/// Dropping an uncommitted guard removes the directory (best-effort). A
/// failed removal is logged and never panics, so the original error is the
/// one the user sees.
#[derive(Debug)]
pub struct RollbackGuard {
    path: PathBuf,
    armed: bool,
}

impl RollbackGuard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RollbackGuard {
            path: path.into(),
            armed: true,
        }
    }

    /// Keep the directory; the guard becomes inert.
    pub fn commit(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }

    /// Remove the directory now instead of waiting for drop.
    pub fn rollback(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        if !self.armed {
            return;
        }
        self.armed = false;
        tracing::info!(path = %self.path.display(), "rolling back partially created project");
        if let Err(e) = remove_tree(&self.path) {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "rollback failed, remove the directory manually"
            );
        }
    }
}

impl Drop for RollbackGuard {
    fn drop(&mut self) {
        self.remove();
    }
}
