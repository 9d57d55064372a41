use tracing::{debug, info};

use crate::error::{AppError, AppResult};

use super::process::CommandRunner;

/// Prompt and namespace handed to every menu invocation.
pub const DEFAULT_ARGS: [&str; 2] = ["-p", "qutebrowser"];

/// Restricts the menu to its existing entries.
pub const NO_CUSTOM_FLAG: &str = "-no-custom";

/// Builds the menu argv from a shell-style command line.
pub fn invocation_args(selector_command: &str, allow_new: bool) -> AppResult<Vec<String>> {
    let mut argv = shlex::split(selector_command).ok_or_else(|| {
        AppError::InvalidInput(format!("unbalanced quoting in menu command: {selector_command}"))
    })?;

    if argv.is_empty() {
        return Err(AppError::InvalidInput("menu command is empty".to_string()));
    }

    argv.extend(DEFAULT_ARGS.iter().map(|arg| arg.to_string()));
    if !allow_new {
        argv.push(NO_CUSTOM_FLAG.to_string());
    }

    Ok(argv)
}

/// Asks the user for a profile name through the menu program.
///
/// Blocks until the menu exits. The selection is returned exactly as the menu
/// printed it, trailing newline included.
pub fn choose(
    selector_command: &str,
    allow_new: bool,
    runner: &impl CommandRunner,
) -> AppResult<String> {
    let argv = invocation_args(selector_command, allow_new)?;
    debug!(?argv, "running menu");

    let output = runner.run(&argv)?;
    if output.code != 0 {
        return Err(AppError::SelectorInvocationFailed {
            code: output.code,
            stderr: output.stderr,
        });
    }

    if output.stdout.is_empty() {
        info!("menu closed without a selection");
        return Err(AppError::NoProfileSelected);
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
