pub mod app;
pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod menu;
pub mod output;
pub mod profiles;

use cli::Cli;
use error::AppResult;

/// Runs the parsed command line and returns the process exit code.
pub fn run(cli: Cli) -> AppResult<i32> {
    app::run(cli)
}
