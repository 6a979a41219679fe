use crate::directives::GraphDirectiveExecutionContext;
use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::DocumentPartNode;
use crate::execution::QueryExecutionContext;
use crate::types::DirectiveInvocationPhase;
use tokio_util::sync::CancellationToken;

/// Runs the directives that act on the query document itself (such as
/// `@skip` and `@include`) before any field executes.
pub struct DocumentDirectiveProcessor<'q> {
    query: &'q QueryExecutionContext,
}
impl<'q> DocumentDirectiveProcessor<'q> {
    pub fn new(query: &'q QueryExecutionContext) -> Self {
        Self { query }
    }

    /// Invokes, in document order, every document-phase directive applied
    /// within `operation` or within a named fragment. Returns `false` if a
    /// directive cancelled execution.
    pub async fn process(&self, operation: DocumentPartId, cancel: &CancellationToken) -> bool {
        let document = self.query.document();
        let messages = self.query.messages();
        for node in document.parts() {
            let DocumentPart::Directive(directive_part) = node.part() else { continue };
            let Some(directive) = directive_part.directive() else { continue };
            if !directive.phases().contains(DirectiveInvocationPhase::QUERY_DOCUMENT) {
                continue;
            }
            let Some(target) = node.parent() else { continue };
            if !self.applies_to(node, operation) {
                continue;
            }

            let invoked = GraphDirectiveExecutionContext::new(
                directive_part.location(),
                directive.clone(),
                node.origin(),
                target,
                DirectiveInvocationPhase::QUERY_DOCUMENT,
            )
            .populate_arguments(self.query, directive_part.arguments(), messages)
            .invoke(self.query, &[], messages, cancel)
            .await;
            if !invoked || cancel.is_cancelled() {
                return false;
            }
        }
        true
    }

    fn applies_to(&self, node: &DocumentPartNode, operation: DocumentPartId) -> bool {
        let definition = self
            .query
            .document()
            .ancestors(node.id())
            .find(|ancestor| {
                matches!(ancestor.part(), DocumentPart::Operation(_) | DocumentPart::NamedFragment(_))
            });
        match definition {
            Some(definition) => match definition.part() {
                DocumentPart::Operation(_) => definition.id() == operation,
                _ => true,
            },
            None => false,
        }
    }
}
