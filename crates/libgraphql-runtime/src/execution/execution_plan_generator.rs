use crate::document::ANONYMOUS_OPERATION_KEY;
use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::execution::FieldInvocationContext;
use crate::execution::InvocationArgumentCollection;
use crate::execution::QueryExecutionPlan;
use crate::loc::SourceOrigin;
use crate::messages::GraphMessage;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use crate::schema::Schema;
use crate::types::DirectiveInvocationPhase;
use std::sync::Arc;

/// Turns one operation of a validated [QueryDocument] into a
/// [QueryExecutionPlan].
///
/// Only parts that are currently included contribute to the plan, so
/// document-phase directives must have run first.
pub struct ExecutionPlanGenerator<'a> {
    document: &'a QueryDocument,
    schema: &'a Schema,
}
impl<'a> ExecutionPlanGenerator<'a> {
    pub fn new(schema: &'a Schema, document: &'a QueryDocument) -> Self {
        Self { document, schema }
    }

    /// Picks the operation to execute. Without a name, the document must
    /// contain exactly one operation.
    pub fn select_operation(&self, operation_name: Option<&str>) -> Result<DocumentPartId, GraphMessage> {
        let operations = self.document.operations();
        let not_found = |message: String| {
            GraphMessage::critical(codes::OPERATION_NOT_FOUND, message, SourceOrigin::default())
        };
        match operation_name {
            Some(name) if name != ANONYMOUS_OPERATION_KEY => operations
                .get(name)
                .copied()
                .ok_or_else(|| not_found(format!("No operation named `{name}` was found"))),
            _ => {
                let mut ids = operations.values();
                match (ids.next(), ids.next()) {
                    (Some(id), None) => Ok(*id),
                    (None, _) => Err(not_found("The document does not contain an operation".to_string())),
                    (Some(_), Some(_)) => Err(not_found(format!(
                        "The document contains {} operations; the operation to execute must be named",
                        operations.len(),
                    ))),
                }
            },
        }
    }

    pub fn create_plan(&self, operation: DocumentPartId) -> QueryExecutionPlan {
        let messages = GraphMessageCollection::new();
        let op_node = self.document.part(operation);
        let (kind, name, root_type_name, selection_set) = match op_node.part() {
            DocumentPart::Operation(op) => (
                op.kind(),
                op.name().map(|n| n.to_string()),
                op.root_type_name().unwrap_or_default().to_string(),
                op.selection_set(),
            ),
            _ => {
                messages.critical(
                    codes::OPERATION_NOT_FOUND,
                    "The selected document part is not an operation",
                    op_node.origin(),
                );
                return QueryExecutionPlan {
                    fields: vec![],
                    messages,
                    operation,
                    operation_kind: OperationKind::Query,
                    operation_name: None,
                    root_type_name: String::new(),
                };
            },
        };

        let fields = match selection_set {
            Some(ss_id) => self.build_invocations(ss_id, &messages),
            None => vec![],
        };
        tracing::debug!(
            operation = name.as_deref().unwrap_or("<anonymous>"),
            root_fields = fields.len(),
            "Generated query execution plan",
        );
        QueryExecutionPlan {
            fields,
            messages,
            operation,
            operation_kind: kind,
            operation_name: name,
            root_type_name,
        }
    }

    fn build_invocations(
        &self,
        selection_set: DocumentPartId,
        messages: &GraphMessageCollection,
    ) -> Vec<Arc<FieldInvocationContext>> {
        let DocumentPart::FieldSelectionSet(ss) = self.document.part(selection_set).part() else {
            return vec![];
        };

        let mut invocations = vec![];
        for executable in ss.executable().included(self.document) {
            let node = self.document.part(executable.field());
            let DocumentPart::Field(field_part) = node.part() else { continue };
            let Some(field) = field_part.field() else { continue };

            let arguments = match InvocationArgumentCollection::prepare(
                self.schema,
                self.document,
                field.arguments(),
                field_part.arguments(),
            ) {
                Ok(arguments) => arguments,
                Err(err) => {
                    messages.critical(
                        codes::INVALID_ARGUMENT,
                        format!("Invalid arguments for `{}`: {err}", field.route()),
                        node.origin(),
                    );
                    continue;
                },
            };

            let field_phases = DirectiveInvocationPhase::BEFORE_FIELD_RESOLUTION
                | DirectiveInvocationPhase::AFTER_FIELD_RESOLUTION;
            let directives = field_part
                .directives()
                .iter()
                .copied()
                .filter(|id| match self.document.part(*id).part() {
                    DocumentPart::Directive(d) => d
                        .directive()
                        .is_some_and(|directive| directive.phases().intersects(field_phases)),
                    _ => false,
                })
                .collect();

            let children = match field_part.selection_set() {
                Some(child_ss) => self.build_invocations(child_ss, messages),
                None => vec![],
            };

            invocations.push(Arc::new(FieldInvocationContext {
                arguments,
                children,
                directives,
                field: field.clone(),
                field_part: executable.field(),
                origin: node.origin(),
                response_key: field_part.response_key().to_string(),
                type_condition: executable.type_condition().map(|t| t.to_string()),
            }));
        }
        invocations
    }
}
