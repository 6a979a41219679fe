#[allow(clippy::module_inception)]
mod schema;
mod schema_build_error;
mod schema_builder;

pub use schema::Schema;
pub use schema::TYPENAME_FIELD_NAME;
pub use schema_build_error::SchemaBuildError;
pub use schema_builder::SchemaBuilder;

#[cfg(test)]
mod tests;
