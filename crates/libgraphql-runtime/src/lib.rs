//! Query document construction, execution planning, and field resolution
//! for GraphQL servers.
//!
//! A [Schema](schema::Schema) is built from SDL with a
//! [SchemaBuilder](schema::SchemaBuilder), attaching resolvers to its fields.
//! Requests are then run by a [GraphQueryExecutor](execution::GraphQueryExecutor),
//! which builds and validates a [QueryDocument](document::QueryDocument),
//! plans the selected operation and executes its fields through a
//! [FieldExecutionPipeline](middleware::FieldExecutionPipeline).

pub mod ast;
pub mod directives;
pub mod document;
pub mod execution;
pub mod loc;
pub mod logging;
pub mod messages;
pub mod middleware;
pub mod resolvers;
pub mod schema;
pub mod security;
pub mod types;
pub mod variables;

#[cfg(test)]
mod test_utils;

pub use execution::ExecutionOptions;
pub use execution::GraphQueryExecutor;
pub use execution::QueryRequest;
pub use execution::QueryResponse;
pub use schema::Schema;
pub use schema::SchemaBuilder;
