use crate::directives::GraphDirectiveExecutionContext;
use crate::document::DocumentPart;
use crate::execution::GraphExecutionError;
use crate::execution::GraphFieldExecutionContext;
use crate::middleware::FieldExecutionMiddleware;
use crate::middleware::Next;
use crate::types::DirectiveInvocationPhase;
use tokio_util::sync::CancellationToken;

/// Runs the directives of a field that act in one phase of its execution.
///
/// A directive that cancels its invocation cancels the field.
#[derive(Clone, Copy, Debug)]
pub struct InvokeDirectiveResolversMiddleware {
    phase: DirectiveInvocationPhase,
}
impl InvokeDirectiveResolversMiddleware {
    pub fn new(phase: DirectiveInvocationPhase) -> Self {
        Self { phase }
    }

    pub fn phase(&self) -> DirectiveInvocationPhase {
        self.phase
    }
}

#[async_trait::async_trait]
impl FieldExecutionMiddleware for InvokeDirectiveResolversMiddleware {
    async fn invoke(
        &self,
        context: &mut GraphFieldExecutionContext<'_>,
        next: Next<'_>,
        cancel: &CancellationToken,
    ) -> Result<(), GraphExecutionError> {
        let query = context.query();
        let document = query.document();
        let invocation = context.request().invocation().clone();
        for directive_id in invocation.directives() {
            let node = document.part(*directive_id);
            let DocumentPart::Directive(directive_part) = node.part() else { continue };
            let Some(directive) = directive_part.directive() else { continue };
            if !directive.phases().contains(self.phase) {
                continue;
            }

            let messages = context.messages().clone();
            let invoked = GraphDirectiveExecutionContext::new(
                directive_part.location(),
                directive.clone(),
                node.origin().with_path(context.request().origin().path.clone()),
                invocation.field_part(),
                self.phase,
            )
            .populate_arguments(query, directive_part.arguments(), &messages)
            .invoke(query, context.request().items(), &messages, cancel)
            .await;
            if !invoked {
                context.cancel();
                return Ok(());
            }
        }
        next.run(context, cancel).await
    }
}
