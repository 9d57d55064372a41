use std::process::{Command, ExitStatus, Stdio};

use crate::error::{AppError, AppResult};

/// Exit code and captured streams of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

pub trait CommandRunner {
    /// Runs `argv[0]` with the remaining arguments and waits for it to exit.
    fn run(&self, argv: &[String]) -> AppResult<CommandOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> AppResult<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| AppError::InvalidInput("empty command".to_string()))?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()?;

        Ok(CommandOutput {
            code: exit_code(output.status),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    -1
}
