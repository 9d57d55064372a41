use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "qutebrowser";

/// XDG locations resolved once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    data_home: PathBuf,
    config_home: PathBuf,
    profiles_root: PathBuf,
}

impl AppPaths {
    pub fn discover() -> AppResult<Self> {
        Self::from_lookup(|key| env::var_os(key), dirs::home_dir())
    }

    /// `$XDG_DATA_HOME` and `$XDG_CONFIG_HOME`, falling back to
    /// `~/.local/share` and `~/.config`. Empty values count as unset.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<OsString>,
        home: Option<PathBuf>,
    ) -> AppResult<Self> {
        let xdg_dir = |key: &str, fallback: &str| -> AppResult<PathBuf> {
            if let Some(value) = lookup(key).filter(|value| !value.is_empty()) {
                return Ok(PathBuf::from(value));
            }

            home.as_ref()
                .map(|home| home.join(fallback))
                .ok_or_else(|| {
                    AppError::Config(format!(
                        "{key} is unset and the home directory cannot be resolved"
                    ))
                })
        };

        let data_home = xdg_dir("XDG_DATA_HOME", ".local/share")?;
        let config_home = xdg_dir("XDG_CONFIG_HOME", ".config")?;
        let profiles_root = data_home.join(APP_DIR);

        Ok(Self {
            data_home,
            config_home,
            profiles_root,
        })
    }

    pub fn with_profiles_root(mut self, profiles_root: PathBuf) -> Self {
        self.profiles_root = profiles_root;
        self
    }

    pub fn data_home(&self) -> &Path {
        &self.data_home
    }

    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    pub fn profiles_root(&self) -> &Path {
        &self.profiles_root
    }

    /// The user's main qutebrowser config, shared by every profile.
    pub fn browser_config_dir(&self) -> PathBuf {
        self.config_home.join(APP_DIR)
    }
}
