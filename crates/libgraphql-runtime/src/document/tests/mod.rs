mod query_document_builder_tests;
mod supplied_value_tests;

use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::QueryDocument;
use crate::document::SuppliedValueRef;

/// The first field part (in document order) with the given response key.
pub(super) fn find_field(document: &QueryDocument, response_key: &str) -> DocumentPartId {
    document
        .parts()
        .find(|node| matches!(
            node.part(),
            DocumentPart::Field(field) if field.response_key() == response_key,
        ))
        .map(|node| node.id())
        .unwrap_or_else(|| panic!("no field `{response_key}` in the document"))
}

/// The value supplied for argument `name` of the field part `field_id`.
pub(super) fn argument_value<'d>(
    document: &'d QueryDocument,
    field_id: DocumentPartId,
    name: &str,
) -> SuppliedValueRef<'d> {
    let DocumentPart::Field(field) = document.part(field_id).part() else {
        panic!("not a field part");
    };
    let arg_id = field.arguments().get(name).unwrap();
    let DocumentPart::InputArgument(argument) = document.part(arg_id).part() else {
        panic!("not an argument part");
    };
    document.supplied_value(argument.value().unwrap()).unwrap()
}
