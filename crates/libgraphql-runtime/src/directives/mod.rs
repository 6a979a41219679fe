mod directive_resolution_context;
mod directive_resolver;
mod graph_directive_execution_context;
mod include_directive;
mod skip_directive;

pub use directive_resolution_context::DirectiveResolutionContext;
pub use directive_resolver::DirectiveResolver;
pub use graph_directive_execution_context::GraphDirectiveExecutionContext;
pub use include_directive::IncludeDirective;
pub use skip_directive::SkipDirective;
