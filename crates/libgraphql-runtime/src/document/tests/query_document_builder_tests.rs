use crate::ast;
use crate::document::ANONYMOUS_OPERATION_KEY;
use crate::document::DocumentPart;
use crate::document::ExecutableFieldSelectionSet;
use crate::document::MAX_EXPANDED_FIELDS;
use crate::document::OperationKind;
use crate::document::QueryDocument;
use crate::document::QueryDocumentBuilder;
use crate::document::SuppliedValueRef;
use crate::document::tests::argument_value;
use crate::document::tests::find_field;
use crate::messages::codes;
use crate::schema::SchemaBuilder;
use crate::test_utils;

#[test]
fn syntax_errors_produce_a_single_message() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{ items { id }");

    assert!(document.is_empty());
    assert_eq!(test_utils::message_codes(&document), vec![codes::SYNTAX_ERROR]);
}

#[test]
fn operations_are_keyed_by_name() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "
        query First { version }
        mutation Second { rename(id: \"1\", name: \"x\") { id } }
    ");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let names: Vec<&str> = document.operations().keys().map(|key| key.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);

    let second = document.operations()["Second"];
    match document.part(second).part() {
        DocumentPart::Operation(op) => {
            assert_eq!(op.kind(), OperationKind::Mutation);
            assert_eq!(op.root_type_name(), Some("Mutation"));
        },
        part => panic!("Unexpected part: {part:?}"),
    }
}

#[test]
fn anonymous_operations_use_the_anonymous_key() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{ version }");

    assert!(document.operations().contains_key(ANONYMOUS_OPERATION_KEY));
    assert_eq!(document.operations().len(), 1);
}

#[test]
fn unsupported_operation_kinds_are_reported() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "subscription { version }");

    assert_eq!(test_utils::message_codes(&document), vec![codes::INVALID_DOCUMENT]);
}

#[test]
fn parts_carry_paths_and_locations() {
    let schema = test_utils::test_schema();
    let document = QueryDocumentBuilder::new(&schema)
        .with_file_path("queries/items.graphql")
        .build_from_str("query Items {\n  items {\n    label: name\n  }\n}");

    let node = document.part(find_field(&document, "label"));
    assert_eq!(node.path().to_string(), "document.query Items.items.label");
    assert_eq!(node.location().line, 3);
    assert_eq!(
        node.location().file.as_deref().and_then(|path| path.to_str()),
        Some("queries/items.graphql"),
    );

    match node.part() {
        DocumentPart::Field(field) => {
            assert_eq!(field.name(), "name");
            assert_eq!(field.alias(), Some("label"));
            assert_eq!(field.parent_type_name(), Some("Item"));
            assert_eq!(field.field().map(|f| f.route().to_string()).as_deref(), Some("[type]/Item/name"));
        },
        part => panic!("Unexpected part: {part:?}"),
    }
}

#[test]
fn fragments_are_flattened_into_executable_fields() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "
        {
            items {
                id
                ...ItemFields
                ... on Item { name }
            }
        }
        fragment ItemFields on Item { id name }
    ");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let items = match document.part(find_field(&document, "items")).part() {
        DocumentPart::Field(field) => field.selection_set().unwrap(),
        part => panic!("Unexpected part: {part:?}"),
    };
    let executable = match document.part(items).part() {
        DocumentPart::FieldSelectionSet(ss) => ss.executable(),
        part => panic!("Unexpected part: {part:?}"),
    };

    assert_eq!(executable.len(), 4);
    let keys: Vec<&str> = executable.response_keys().collect();
    assert_eq!(keys, vec!["id", "name"]);

    let ids: Vec<_> = executable.filter_by_alias("id").collect();
    assert_eq!(ids.len(), 2);
    assert!(ids[0].fragments().is_empty());
    assert_eq!(ids[1].fragments().len(), 1);
    assert_eq!(ids[1].type_condition(), Some("Item"));
    assert_eq!(executable.filter_by_alias("missing").count(), 0);

    // Excluding the spread excludes every field reached through it.
    let spread = ids[1].fragments()[0];
    assert!(document.set_included(spread, false));
    assert_eq!(executable.included(&document).count(), 2);
}

#[test]
fn field_depth_follows_fragment_spreads() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "
        { items { ...Owned } }
        fragment Owned on Item { owner { email } }
    ");
    assert_eq!(document.max_field_depth(), 3);
}

#[test]
fn max_depth_is_enforced_when_configured() {
    let schema = test_utils::test_schema();
    let query = "{ items { owner { email } } }";

    let unlimited = QueryDocumentBuilder::new(&schema).build_from_str(query);
    assert!(unlimited.messages().is_empty());

    let limited = QueryDocumentBuilder::new(&schema)
        .with_max_depth(Some(2))
        .build_from_str(query);
    assert_eq!(test_utils::message_codes(&limited), vec![codes::MAX_QUERY_DEPTH_EXCEEDED]);
}

#[test]
fn variables_are_indexed_by_their_operation() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "
        query Greet($name: String = \"you\", $id: ID!) {
            greeting(name: $name)
            item(id: $id) { id }
        }
    ");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let op_id = document.operations()["Greet"];
    let DocumentPart::Operation(op) = document.part(op_id).part() else {
        panic!("not an operation");
    };
    let names: Vec<&str> = op.variables().keys().map(|key| key.as_str()).collect();
    assert_eq!(names, vec!["name", "id"]);

    let DocumentPart::Variable(name_var) = document.part(op.variables()["name"]).part() else {
        panic!("not a variable");
    };
    assert_eq!(name_var.type_expression().to_string(), "String");
    assert!(name_var.default_value().is_some());
}

/// `{ ...F0 }` where each fragment spreads the next one twice and the last
/// one selects `version`.
fn fragment_fan_out(levels: usize) -> String {
    let mut query = String::from("{ ...F0 }\n");
    for level in 0..levels {
        let next = level + 1;
        query.push_str(&format!("fragment F{level} on Query {{ ...F{next} ...F{next} }}\n"));
    }
    query.push_str(&format!("fragment F{levels} on Query {{ version }}\n"));
    query
}

fn operation_executable<'d>(document: &'d QueryDocument) -> &'d ExecutableFieldSelectionSet {
    let op_id = document.operations()[ANONYMOUS_OPERATION_KEY];
    let ss_id = match document.part(op_id).part() {
        DocumentPart::Operation(op) => op.selection_set().unwrap(),
        part => panic!("Unexpected part: {part:?}"),
    };
    match document.part(ss_id).part() {
        DocumentPart::FieldSelectionSet(ss) => ss.executable(),
        part => panic!("Unexpected part: {part:?}"),
    }
}

#[test]
fn repeated_spreads_expand_every_occurrence() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, &fragment_fan_out(10));
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let executable = operation_executable(&document);
    assert_eq!(executable.len(), 1024);
    assert_eq!(executable.response_keys().collect::<Vec<_>>(), vec!["version"]);
    // Every copy records the full chain of spreads it was reached through.
    assert!(executable.fields().iter().all(|field| field.fragments().len() == 11));
    assert_eq!(document.max_field_depth(), 1);
}

#[test]
fn fragment_expansion_is_capped() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, &fragment_fan_out(22));

    assert_eq!(
        test_utils::message_codes(&document),
        vec![codes::FIELD_EXPANSION_LIMIT_EXCEEDED],
    );
    assert_eq!(operation_executable(&document).len(), MAX_EXPANDED_FIELDS);
    assert_eq!(document.max_field_depth(), 1);
}

const ORDERED_INPUT_SCHEMA: &str = "
    type Query {
        find(where: Where, wheres: [Where]): String
    }

    input Where {
        zeta: Int
        alpha: Int
        inner: Where
    }
";

fn field_names(value: SuppliedValueRef<'_>) -> Vec<&str> {
    value.as_complex().unwrap().fields().map(|(name, _)| name).collect()
}

#[test]
fn object_literal_fields_keep_source_order() {
    let schema = SchemaBuilder::from_str(None, ORDERED_INPUT_SCHEMA).unwrap().build().unwrap();
    let document = test_utils::build_document(&schema, "{
        find(
            where: {zeta: 1, inner: {zeta: 2, alpha: 3}, alpha: 4},
            wheres: [{alpha: 5, zeta: 6}, {zeta: 7, inner: {alpha: 8, zeta: 9}}],
        )
    }");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let find = find_field(&document, "find");
    let where_value = argument_value(&document, find, "where");
    assert_eq!(field_names(where_value), vec!["zeta", "inner", "alpha"]);
    let inner = where_value.as_complex().unwrap().try_get_field("inner").unwrap();
    assert_eq!(field_names(inner), vec!["zeta", "alpha"]);

    let wheres: Vec<_> = argument_value(&document, find, "wheres").list_items().unwrap().collect();
    assert_eq!(field_names(wheres[0]), vec!["alpha", "zeta"]);
    assert_eq!(field_names(wheres[1]), vec!["zeta", "inner"]);
    let nested = wheres[1].as_complex().unwrap().try_get_field("inner").unwrap();
    assert_eq!(field_names(nested), vec!["alpha", "zeta"]);
}

#[test]
fn prebuilt_syntax_trees_order_object_fields_by_name() {
    let schema = test_utils::test_schema();
    let ast_doc = ast::query::parse("{ search(filter: {name: \"x\", colors: [RED]}) { __typename } }").unwrap();
    let document = QueryDocumentBuilder::new(&schema).build(&ast_doc);

    let filter = argument_value(&document, find_field(&document, "search"), "filter");
    assert_eq!(field_names(filter), vec!["colors", "name"]);
}
