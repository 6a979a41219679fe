use clap::CommandFactory;
use crate::commands;
use std::process::ExitCode;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version, about = "Validate and execute GraphQL query documents.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        conflicts_with="verbose",
        help="Only log errors.",
        long,
        short='q',
    )]
    pub quiet: bool,

    #[arg(
        help="Enable verbose output, including field execution events.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn log_level_override(&self) -> Option<tracing::Level> {
        match (self.quiet, self.verbose) {
            (true, _) => Some(tracing::Level::ERROR),
            (_, true) => Some(tracing::Level::DEBUG),
            _ => None,
        }
    }

    pub(crate) fn run_default(self) -> ExitCode {
        match Self::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        }
    }
}
