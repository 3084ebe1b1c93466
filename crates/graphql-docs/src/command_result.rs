use crate::output_utils;
use std::process::ExitCode;

/// The captured output of a command, written out by [`CommandResult::emit`]
/// once the command finishes.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// Prints the captured stdout then stderr, and returns the exit code the
    /// process should finish with.
    pub fn emit(self) -> ExitCode {
        if let Some(stdout) = self.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = self.stderr {
            eprintln!("{stderr}");
        }
        self.exit_code
    }

    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}

/// Reports the error, and every context layered onto it, as a failure.
impl From<anyhow::Error> for CommandResult {
    fn from(err: anyhow::Error) -> Self {
        Self::stderr(format_args!("{} {err:#}", output_utils::RED_X))
    }
}
