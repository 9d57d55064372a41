//! Starting qutebrowser against a profile directory.

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{AppError, AppResult};
use crate::menu::process::exit_code;

/// Builds the full browser argv for `profile`.
pub fn launch_args(
    browser_command: &str,
    basedir: &Path,
    profile: &str,
    extra: &[String],
) -> AppResult<Vec<String>> {
    let mut argv = shlex::split(browser_command)
        .filter(|argv| !argv.is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("invalid browser command: {browser_command:?}"))
        })?;

    argv.push("--basedir".to_string());
    argv.push(basedir.to_string_lossy().into_owned());
    argv.push("--set".to_string());
    argv.push("window.title_format".to_string());
    argv.push(format!(
        "{{perc}}{{current_title}}{{title_sep}}qutebrowser [{profile}]"
    ));
    argv.extend(extra.iter().cloned());

    Ok(argv)
}

/// Runs the browser in the foreground and returns its exit code.
pub fn launch(argv: &[String]) -> AppResult<i32> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| AppError::InvalidInput("empty browser command".to_string()))?;

    info!(?argv, "starting browser");
    let status = Command::new(program).args(args).status()?;
    Ok(exit_code(status))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn appends_basedir_title_and_extra_args() {
        let basedir = PathBuf::from("/home/me/.local/share/qutebrowser/work");
        let argv = launch_args(
            "qutebrowser",
            &basedir,
            "work",
            &["https://example.com".to_string()],
        )
        .unwrap();

        assert_eq!(
            argv,
            [
                "qutebrowser",
                "--basedir",
                "/home/me/.local/share/qutebrowser/work",
                "--set",
                "window.title_format",
                "{perc}{current_title}{title_sep}qutebrowser [work]",
                "https://example.com",
            ]
        );
    }

    #[test]
    fn splits_browser_command() {
        let argv = launch_args("python3 -m qutebrowser", Path::new("/p"), "x", &[]).unwrap();
        assert_eq!(argv[..4], ["python3", "-m", "qutebrowser", "--basedir"]);
    }

    #[test]
    fn rejects_empty_browser_command() {
        assert!(launch_args("", Path::new("/p"), "x", &[]).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn launch_returns_browser_exit_code() {
        let argv = ["sh", "-c", "exit 4"].map(String::from);
        assert_eq!(launch(&argv).unwrap(), 4);
    }

    #[test]
    fn launch_rejects_empty_argv() {
        assert!(matches!(launch(&[]), Err(AppError::InvalidInput(_))));
    }
}
