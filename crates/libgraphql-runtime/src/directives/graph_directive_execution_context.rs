use crate::directives::DirectiveResolutionContext;
use crate::document::DocumentPartId;
use crate::document::InputArgumentCollection;
use crate::execution::GraphDataItem;
use crate::execution::InvocationArgumentCollection;
use crate::execution::QueryExecutionContext;
use crate::loc::SourceOrigin;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::types::Directive;
use crate::types::DirectiveInvocationPhase;
use crate::types::DirectiveLocation;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Everything needed to invoke one directive at one location.
///
/// A context is created empty, has its arguments populated, and is consumed
/// by [invoke](GraphDirectiveExecutionContext::invoke).
#[derive(Debug)]
pub struct GraphDirectiveExecutionContext {
    arguments: InvocationArgumentCollection,
    directive: Arc<Directive>,
    location: DirectiveLocation,
    origin: SourceOrigin,
    phase: DirectiveInvocationPhase,
    target: DocumentPartId,
}
impl GraphDirectiveExecutionContext {
    pub fn new(
        location: DirectiveLocation,
        directive: Arc<Directive>,
        origin: SourceOrigin,
        target: DocumentPartId,
        phase: DirectiveInvocationPhase,
    ) -> Self {
        Self {
            arguments: InvocationArgumentCollection::new(),
            directive,
            location,
            origin,
            phase,
            target,
        }
    }

    pub fn arguments(&self) -> &InvocationArgumentCollection {
        &self.arguments
    }

    pub fn directive(&self) -> &Arc<Directive> {
        &self.directive
    }

    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn origin(&self) -> &SourceOrigin {
        &self.origin
    }

    pub fn phase(&self) -> DirectiveInvocationPhase {
        self.phase
    }

    pub fn target(&self) -> DocumentPartId {
        self.target
    }

    /// Prepares the arguments supplied to the directive in the document.
    /// Problems are reported to `messages`; arguments that could not be
    /// prepared are left out.
    pub fn populate_arguments(
        mut self,
        query: &QueryExecutionContext,
        supplied: &InputArgumentCollection,
        messages: &GraphMessageCollection,
    ) -> Self {
        match InvocationArgumentCollection::prepare(
            query.schema(),
            query.document(),
            self.directive.arguments(),
            supplied,
        ) {
            Ok(arguments) => self.arguments = arguments,
            Err(err) => messages.critical(
                codes::INVALID_ARGUMENT,
                format!("Invalid arguments for `@{}`: {err}", self.directive.name()),
                self.origin.clone(),
            ),
        }
        self
    }

    /// Runs the directive's resolver. Returns `false` when the resolver
    /// cancelled the invocation.
    pub async fn invoke(
        self,
        query: &QueryExecutionContext,
        items: &[Arc<GraphDataItem>],
        messages: &GraphMessageCollection,
        cancel: &CancellationToken,
    ) -> bool {
        let arguments = match self.arguments.merge(query.schema(), query.document(), query.variables()) {
            Ok(arguments) => arguments,
            Err(err) => {
                messages.critical(
                    codes::INVALID_ARGUMENT,
                    format!("Invalid arguments for `@{}`: {err}", self.directive.name()),
                    self.origin.clone(),
                );
                return true;
            },
        };

        tracing::trace!(
            directive = self.directive.name(),
            origin = %self.origin,
            "Invoking directive",
        );
        let mut context = DirectiveResolutionContext {
            arguments,
            cancelled: false,
            directive: &self.directive,
            document: query.document(),
            items,
            location: self.location,
            messages: messages.clone(),
            origin: &self.origin,
            phase: self.phase,
            target: self.target,
        };
        self.directive.resolver().resolve(&mut context, cancel).await;
        !context.is_cancelled()
    }
}
