use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::middleware::AuthorizeFieldMiddleware;
use crate::middleware::FieldExecutionMiddleware;
use crate::middleware::InvokeDirectiveResolversMiddleware;
use crate::middleware::InvokeFieldResolverMiddleware;
use crate::middleware::Next;
use crate::middleware::ProcessChildFieldsMiddleware;
use crate::types::DirectiveInvocationPhase;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// The ordered components every field execution runs through.
///
/// The default pipeline authorizes the field, runs its before-resolution
/// directives, invokes its resolver, runs its after-resolution directives
/// and then executes its child fields.
#[derive(Debug)]
pub struct FieldExecutionPipeline {
    components: Vec<Arc<dyn FieldExecutionMiddleware>>,
}
impl FieldExecutionPipeline {
    /// A pipeline with no components.
    pub fn empty() -> Self {
        Self { components: vec![] }
    }

    pub fn with_component(mut self, component: impl FieldExecutionMiddleware + 'static) -> Self {
        self.components.push(Arc::new(component));
        self
    }

    pub fn components(&self) -> &[Arc<dyn FieldExecutionMiddleware>] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub async fn execute(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), GraphExecutionError> {
        Next::new(&self.components).run(context, cancel).await
    }
}
impl Default for FieldExecutionPipeline {
    fn default() -> Self {
        Self::empty()
            .with_component(AuthorizeFieldMiddleware)
            .with_component(InvokeDirectiveResolversMiddleware::new(
                DirectiveInvocationPhase::BEFORE_FIELD_RESOLUTION,
            ))
            .with_component(InvokeFieldResolverMiddleware)
            .with_component(InvokeDirectiveResolversMiddleware::new(
                DirectiveInvocationPhase::AFTER_FIELD_RESOLUTION,
            ))
            .with_component(ProcessChildFieldsMiddleware)
    }
}
