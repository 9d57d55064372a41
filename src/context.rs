use std::path::PathBuf;

use crate::config::AppPaths;
use crate::error::AppResult;
use crate::menu::{SystemPathLookup, SystemRunner};
use crate::output::Output;
use crate::profiles::ProfileStore;

#[derive(Debug)]
pub struct AppContext {
    pub dmenu: Option<String>,
    pub qutebrowser: String,
    pub paths: AppPaths,
    pub store: ProfileStore,
    pub lookup: SystemPathLookup,
    pub runner: SystemRunner,
    pub output: Output,
}

impl AppContext {
    pub fn bootstrap(
        dmenu: Option<String>,
        qutebrowser: String,
        profiles_root: Option<PathBuf>,
        json: bool,
    ) -> AppResult<Self> {
        let mut paths = AppPaths::discover()?;
        if let Some(root) = profiles_root {
            paths = paths.with_profiles_root(root);
        }
        let store = ProfileStore::new(paths.profiles_root());
        let output = Output::new(json);

        Ok(Self {
            dmenu,
            qutebrowser,
            paths,
            store,
            lookup: SystemPathLookup,
            runner: SystemRunner,
            output,
        })
    }
}
