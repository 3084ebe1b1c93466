mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        command.run(cli).await.emit()
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{err:#}");
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());

            match env_val.as_deref() {
                Ok(value) => parse_log_level(value).unwrap_or_else(|| {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{value}`"
                    ));
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

/// Accepts the level names `tracing` uses, in upper or lower case, plus
/// `verbose` as an alias for `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value {
        "DEBUG" | "debug" | "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        "ERROR" | "error" => Some(tracing::Level::ERROR),
        "INFO" | "info" => Some(tracing::Level::INFO),
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "WARN" | "warn" => Some(tracing::Level::WARN),
        _ => None,
    }
}
