use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_loading;
use libgraphql_runtime::ExecutionOptions;
use libgraphql_runtime::GraphQueryExecutor;
use libgraphql_runtime::QueryRequest;
use libgraphql_runtime::logging::TracingEventLogger;
use libgraphql_runtime::security::UserPrincipal;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Debug, clap::Args)]
pub(crate) struct ExecCmd {
    #[arg(
        help="A JSON file holding the value the operation's top-level \
             fields resolve against.",
        long,
    )]
    data: Option<PathBuf>,

    #[arg(
        help="The name of the operation to execute, when the document \
             contains several.",
        long,
    )]
    operation: Option<String>,

    #[arg(
        help="A JSON file of execution options (e.g. \
             `{\"expose_metrics\": true}`).",
        long,
    )]
    options: Option<PathBuf>,

    #[arg(
        help="The query document to execute.",
        long,
    )]
    query: PathBuf,

    #[arg(
        help="One or more schema (SDL) files, loaded in the order given.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="A JSON file describing the user the request is executed on \
             behalf of.",
        long,
    )]
    user: Option<PathBuf>,

    #[arg(
        help="A JSON file holding the operation's variable values.",
        long,
    )]
    variables: Option<PathBuf>,
}
impl ExecCmd {
    fn build_request(&self) -> anyhow::Result<QueryRequest> {
        let query = std::fs::read_to_string(&self.query)?;
        let mut request = QueryRequest::new(query);
        if let Some(operation) = &self.operation {
            request = request.with_operation_name(operation);
        }
        if let Some(path) = &self.data {
            request = request.with_root_value(read_json(path)?);
        }
        if let Some(path) = &self.variables {
            request = request.with_variables(read_json(path)?);
        }
        if let Some(path) = &self.user {
            let user: UserPrincipal = serde_json::from_value(read_json(path)?)?;
            request = request.with_user(user);
        }
        Ok(request)
    }

    fn build_options(&self) -> anyhow::Result<ExecutionOptions> {
        match &self.options {
            Some(path) => Ok(serde_json::from_value(read_json(path)?)?),
            None => Ok(ExecutionOptions::default()),
        }
    }
}

#[inherent::inherent]
impl RunnableCommand for ExecCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match schema_loading::load_schema_files(&self.schema)
            .and_then(|builder| builder.build()) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        };

        let (request, options) = match self.build_request().and_then(|request| {
            Ok((request, self.build_options()?))
        }) {
            Ok(prepared) => prepared,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to prepare the request: {e:#}",
                output_utils::RED_X,
            )),
        };

        log::debug!("Executing {:#?}...", self.query);
        let executor = GraphQueryExecutor::new(Arc::new(schema))
            .with_logger(TracingEventLogger)
            .with_options(options);
        let response = executor.execute(request).await;

        let rendered = match serde_json::to_string_pretty(&response) {
            Ok(rendered) => rendered,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Unable to serialize the response: {e}",
                output_utils::RED_X,
            )),
        };
        let exit_code = if response.is_successful() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
        CommandResult::stdout(format_args!("{rendered}")).with_exit_code(exit_code)
    }
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str::<Value>(content.as_str())?)
}
