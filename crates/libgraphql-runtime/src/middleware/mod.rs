//! The stages a field passes through while it executes.
//!
//! Every field execution context runs through a [FieldExecutionPipeline], an
//! ordered chain of [FieldExecutionMiddleware] components. Each component
//! decides whether (and when) to hand the context on to the rest of the
//! chain.

mod authorize_field_middleware;
mod field_execution_middleware;
mod field_execution_pipeline;
mod invoke_directive_resolvers_middleware;
mod invoke_field_resolver_middleware;
mod process_child_fields_middleware;

pub use authorize_field_middleware::AuthorizeFieldMiddleware;
pub use field_execution_middleware::FieldExecutionMiddleware;
pub use field_execution_middleware::Next;
pub use field_execution_pipeline::FieldExecutionPipeline;
pub use invoke_directive_resolvers_middleware::InvokeDirectiveResolversMiddleware;
pub use invoke_field_resolver_middleware::InvokeFieldResolverMiddleware;
pub use process_child_fields_middleware::ProcessChildFieldsMiddleware;
pub(crate) use invoke_field_resolver_middleware::assign_results;
pub(crate) use process_child_fields_middleware::execute_child_fields;

#[cfg(test)]
mod tests;
