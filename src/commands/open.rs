use tracing::{info, warn};

use crate::browser;
use crate::cli::{ChooseArgs, LoadArgs, NewArgs};
use crate::config::normalize_profile_name;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::menu::{self, CommandRunner, PathLookup};

/// Exit code used when the menu was dismissed.
const NOTHING_SELECTED: i32 = 1;

pub fn choose(ctx: &AppContext, args: ChooseArgs) -> AppResult<i32> {
    match pick_profile(ctx.dmenu.as_deref(), false, &ctx.lookup, &ctx.runner)? {
        Some(name) => launch_profile(ctx, &name, &args.browser_args),
        None => Ok(NOTHING_SELECTED),
    }
}

pub fn new(ctx: &AppContext, args: NewArgs) -> AppResult<i32> {
    let name = match args.name {
        Some(name) => normalize_profile_name(&name)?,
        None => match pick_profile(ctx.dmenu.as_deref(), true, &ctx.lookup, &ctx.runner)? {
            Some(name) => name,
            None => return Ok(NOTHING_SELECTED),
        },
    };

    if ctx.store.exists(&name) {
        info!(profile = %name, "profile already exists, loading it");
    }
    launch_profile(ctx, &name, &args.browser_args)
}

pub fn load(ctx: &AppContext, args: LoadArgs) -> AppResult<i32> {
    let name = normalize_profile_name(&args.name)?;
    if !ctx.store.exists(&name) {
        return Err(AppError::InvalidInput(format!(
            "profile {name:?} does not exist. create it with `qutebrowser-profile new {name}`"
        )));
    }

    launch_profile(ctx, &name, &args.browser_args)
}

/// Resolves the menu, prompts, and normalizes the answer.
/// `None` means the user dismissed the menu.
fn pick_profile(
    explicit_menu: Option<&str>,
    allow_new: bool,
    lookup: &impl PathLookup,
    runner: &impl CommandRunner,
) -> AppResult<Option<String>> {
    let selector = menu::resolve(explicit_menu, lookup)?;

    match menu::choose(&selector, allow_new, runner) {
        Ok(raw) => normalize_profile_name(&raw).map(Some),
        Err(AppError::NoProfileSelected) => {
            warn!("no profile selected, nothing to launch");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn launch_profile(ctx: &AppContext, name: &str, browser_args: &[String]) -> AppResult<i32> {
    let basedir = ctx.store.prepare(name, &ctx.paths.browser_config_dir())?;
    let argv = browser::launch_args(&ctx.qutebrowser, &basedir, name, browser_args)?;
    browser::launch(&argv)
}
