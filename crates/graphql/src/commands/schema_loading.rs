use libgraphql_runtime::schema::SchemaBuildError;
use libgraphql_runtime::schema::SchemaBuilder;
use std::path::PathBuf;

/// Loads every schema file into one builder, in the order given.
pub(super) fn load_schema_files(paths: &[PathBuf]) -> Result<SchemaBuilder, SchemaBuildError> {
    let mut builder = SchemaBuilder::new();
    for path in paths {
        log::debug!("Loading schema file {path:#?}...");
        builder = builder.load_file(path)?;
    }
    Ok(builder)
}
