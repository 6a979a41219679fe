use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::schema_loading;
use libgraphql_runtime::document::QueryDocumentBuilder;
use libgraphql_runtime::messages::GraphMessage;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for query \
             documents within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Reject query documents whose fields nest deeper than this.",
        long,
    )]
    max_depth: Option<usize>,

    #[arg(
        help="One or more schema (SDL) files, loaded in the order given.",
        long,
        required=true,
        value_delimiter = ',',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Paths to query documents or directories containing query \
             documents which need to be validated against the schema.",
        name="FILE_OR_DIR_PATHS",
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let schema = match schema_loading::load_schema_files(&self.schema)
            .and_then(|builder| builder.build()) {
            Ok(schema) => schema,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Errors validating schema: {e}",
                output_utils::RED_X,
            )),
        };

        let mut errors: Vec<Box<dyn Error>> = vec![];

        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_non_graphql_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            // A file named explicitly is validated whatever its extension.
            if path.is_file() {
                file_paths.push(path.to_owned());
                continue;
            }
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        let matches_ext = path
                            .extension()
                            .is_some_and(|ext| graphql_file_exts.contains(ext.to_string_lossy().as_ref()));
                        if matches_ext {
                            log::trace!("Found query document at {path:#?}.");
                            file_paths.push(path.to_owned());
                        } else {
                            num_non_graphql_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                    },
                }
            }
        }

        log::debug!(
            "Found {} query documents to be validated.",
            file_paths.len(),
        );

        let mut invalid_documents: Vec<(PathBuf, Vec<GraphMessage>)> = vec![];
        let mut num_operations = 0;
        for file_path in &file_paths {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    errors.push(Box::new(e));
                    continue;
                },
            };
            let document = QueryDocumentBuilder::new(&schema)
                .with_file_path(file_path)
                .with_max_depth(self.max_depth)
                .build_from_str(content.as_str());
            num_operations += document.operations().len();
            if !document.messages().is_empty() {
                invalid_documents.push((file_path.to_owned(), document.messages().to_vec()));
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors reading query documents: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        if !invalid_documents.is_empty() {
            let report = invalid_documents
                .iter()
                .map(|(file_path, messages)| {
                    let lines: Vec<String> = messages
                        .iter()
                        .map(|msg| format!("    * {msg}"))
                        .collect();
                    format!("  {}:\n{}", file_path.display(), lines.join("\n"))
                })
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::stderr(format_args!(
                "{} {} of {} query documents are invalid:\n{report}",
                output_utils::RED_X,
                invalid_documents.len(),
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL validated successfully:\n",
                "  * Validated {} type definitions.\n",
                "  * Validated {} directive definitions.\n",
                "  * Analyzed {} query documents.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            schema.types().len(),
            schema.directives().len(),
            file_paths.len(),
            num_non_graphql_files,
            num_operations,
        ))
    }
}
