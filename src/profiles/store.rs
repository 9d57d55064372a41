use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::AppResult;

/// Profile base directories living under one root.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of existing profiles, sorted.
    pub fn list(&self) -> AppResult<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => debug!(name = ?raw, "skipping non utf-8 profile directory"),
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.basedir(name).is_dir()
    }

    pub fn basedir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Creates the profile directory and links the shared config into it.
    pub fn prepare(&self, name: &str, browser_config: &Path) -> AppResult<PathBuf> {
        let basedir = self.basedir(name);
        if !basedir.is_dir() {
            info!(profile = name, path = %basedir.display(), "creating profile");
            fs::create_dir_all(&basedir)?;
        }

        let config_link = basedir.join("config");
        if fs::symlink_metadata(&config_link).is_err() {
            link_config(browser_config, &config_link)?;
        }

        Ok(basedir)
    }
}

#[cfg(unix)]
fn link_config(target: &Path, link: &Path) -> AppResult<()> {
    debug!(target = %target.display(), link = %link.display(), "linking shared config");
    std::os::unix::fs::symlink(target, link)?;
    Ok(())
}

#[cfg(not(unix))]
fn link_config(target: &Path, _link: &Path) -> AppResult<()> {
    debug!(target = %target.display(), "config links are unix only");
    Ok(())
}
