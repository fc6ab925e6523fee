mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            print!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        cli.run_default().await
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // stdout is reserved for generated SDL.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `-v` wins over `LOG_LEVEL`. An unrecognized `LOG_LEVEL` falls back to
/// [`DEFAULT_LOG_LEVEL`] and yields a warning to log once logging is set up.
fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_val.map(str::trim) {
        None => (DEFAULT_LOG_LEVEL, None),
        Some("DEBUG" | "debug" | "VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{other}`")),
        ),
    }
}

#[cfg(test)]
mod tests;
