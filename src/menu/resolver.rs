use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AppError, AppResult};

/// Menu programs probed on `PATH`, in order of preference.
pub const CANDIDATES: [&str; 2] = ["rofi", "dmenu"];

pub trait PathLookup {
    fn which(&self, program: &str) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPathLookup;

impl PathLookup for SystemPathLookup {
    fn which(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Picks the menu command to run.
///
/// A non-empty explicit command is returned untouched, even if it does not
/// exist. Otherwise the first of [`CANDIDATES`] found on `PATH` wins; later
/// candidates are not probed.
///
/// The result is a shell word for [`choose`](super::choose), not a raw path:
/// a found path with characters outside the shell-safe set comes back quoted.
/// [`AppError::ResolverNotFound`] is the only error.
pub fn resolve(explicit: Option<&str>, lookup: &impl PathLookup) -> AppResult<String> {
    if let Some(command) = explicit.filter(|command| !command.is_empty()) {
        return Ok(command.to_string());
    }

    for candidate in CANDIDATES {
        if let Some(path) = lookup.which(candidate) {
            debug!(candidate, path = %path.display(), "found menu program");
            return Ok(quote_path(&path));
        }
    }

    Err(AppError::ResolverNotFound)
}

// Quoting only fails on NUL, which an OS path never contains.
fn quote_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    shlex::try_quote(&raw)
        .map(|quoted| quoted.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}
