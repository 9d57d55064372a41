use tracing::debug;

use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub fn run(cli: Cli) -> AppResult<i32> {
    let Cli {
        dmenu,
        qutebrowser,
        profiles_root,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(dmenu, qutebrowser, profiles_root, json)?;
    debug!(root = %ctx.store.root().display(), "profiles root");

    match command {
        Command::Choose(args) => commands::open::choose(&ctx, args),
        Command::New(args) => commands::open::new(&ctx, args),
        Command::Load(args) => commands::open::load(&ctx, args),
        Command::List => commands::list::run(&ctx).map(|()| 0),
    }
}
