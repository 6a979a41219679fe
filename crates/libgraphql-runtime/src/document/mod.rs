mod document_part;
mod executable_field_selection_set;
mod input_argument_collection;
mod named_fragment_collection;
mod object_field_order;
mod query_document;
mod query_document_builder;
mod supplied_value;
mod validation;

pub use document_part::DirectivePart;
pub use document_part::DocumentPart;
pub use document_part::DocumentPartType;
pub use document_part::FieldPart;
pub use document_part::FieldSelectionSetPart;
pub use document_part::FragmentSpreadPart;
pub use document_part::InlineFragmentPart;
pub use document_part::InputArgumentPart;
pub use document_part::NamedFragmentPart;
pub use document_part::OperationKind;
pub use document_part::OperationPart;
pub use document_part::VariablePart;
pub use executable_field_selection_set::ExecutableField;
pub use executable_field_selection_set::ExecutableFieldSelectionSet;
pub use input_argument_collection::InputArgumentCollection;
pub use named_fragment_collection::NamedFragmentCollection;
pub use query_document::ANONYMOUS_OPERATION_KEY;
pub use query_document::DocumentPartId;
pub use query_document::DocumentPartNode;
pub use query_document::MAX_EXPANDED_FIELDS;
pub use query_document::QueryDocument;
pub use query_document_builder::QueryDocumentBuilder;
pub use supplied_value::ComplexSuppliedValue;
pub use supplied_value::ComplexValueRef;
pub use supplied_value::ListSuppliedValue;
pub use supplied_value::ScalarLiteral;
pub use supplied_value::SuppliedValue;
pub use supplied_value::SuppliedValueRef;
pub use validation::DocumentValidator;

#[cfg(test)]
mod tests;
