mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return cli.run_default();
    };
    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

fn setup_logger(cli: &Cli) {
    let mut warnings: Vec<String> = vec![];
    let log_level = cli.log_level_override().unwrap_or_else(|| {
        let env_val = std::env::var(LOG_LEVEL_ENV_VAR).map(|s| s.trim().to_lowercase());
        match env_val.as_deref() {
            Ok("error") => tracing::Level::ERROR,
            Ok("warn") => tracing::Level::WARN,
            Ok("info") => tracing::Level::INFO,
            Ok("debug" | "verbose") => tracing::Level::DEBUG,
            Ok("trace") => tracing::Level::TRACE,
            Ok(other) => {
                warnings.push(format!(
                    "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: `{other}`",
                ));
                DEFAULT_LOG_LEVEL
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    });

    // Logs go to stderr so that `exec` output stays valid JSON.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    tracing::trace!("Logging level set to `{log_level}`.");

    for warning in warnings.drain(..) {
        tracing::warn!("{warning}");
    }
}
