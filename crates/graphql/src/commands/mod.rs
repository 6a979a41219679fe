mod exec;
mod schema_loading;
mod validate;

use crate::Cli;
use crate::CommandResult;
use exec::ExecCmd;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Executes a query document against a schema and prints the response.
    Exec(Box<ExecCmd>),

    /// Validates a schema and, optionally, query documents against it.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Exec(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
