use crate::document::ScalarLiteral;
use crate::document::SuppliedValue;
use crate::document::tests::argument_value;
use crate::document::tests::find_field;
use crate::test_utils;

#[test]
fn complex_values_compare_one_directionally() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{
        wide: search(filter: {name: \"x\", limit: 1}) { __typename }
        narrow: search(filter: {name: \"x\"}) { __typename }
    }");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    let wide = argument_value(&document, find_field(&document, "wide"), "filter");
    let narrow = argument_value(&document, find_field(&document, "narrow"), "filter");

    // Every field of `narrow` is matched in `wide`, but not the reverse.
    assert!(narrow.is_equal_to(&wide));
    assert!(!wide.is_equal_to(&narrow));
    assert!(wide.is_equal_to(&wide));
}

#[test]
fn complex_values_with_different_field_values_differ() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{
        a: search(filter: {name: \"x\"}) { __typename }
        b: search(filter: {name: \"y\"}) { __typename }
    }");

    let a = argument_value(&document, find_field(&document, "a"), "filter");
    let b = argument_value(&document, find_field(&document, "b"), "filter");
    assert!(!a.is_equal_to(&b));
    assert!(!b.is_equal_to(&a));
}

#[test]
fn complex_field_lookup() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(
        &schema,
        "{ search(filter: {name: \"x\", colors: [RED, GREEN]}) { __typename } }",
    );
    let filter = argument_value(&document, find_field(&document, "search"), "filter");
    let complex = filter.as_complex().unwrap();

    assert_eq!(complex.len(), 2);
    assert!(complex.contains_field("colors"));
    assert!(complex.try_get_field("limit").is_none());
    assert!(complex.try_get_argument("limit").is_none());
    assert_eq!(
        complex.try_get_argument("name").and_then(|arg| arg.argument()).map(|arg| arg.name()),
        Some("name"),
    );

    let names: Vec<&str> = complex.fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["name", "colors"]);

    let colors: Vec<String> = complex
        .try_get_field("colors")
        .unwrap()
        .list_items()
        .unwrap()
        .map(|item| match item.value() {
            SuppliedValue::Enum(name) => name.clone(),
            value => panic!("Unexpected value: {value:?}"),
        })
        .collect();
    assert_eq!(colors, vec!["RED", "GREEN"]);

    match complex.try_get_field("name").unwrap().value() {
        SuppliedValue::Scalar(ScalarLiteral::String(name)) => assert_eq!(name, "x"),
        value => panic!("Unexpected value: {value:?}"),
    }
}

#[test]
fn lists_compare_item_by_item() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{
        a: search(filter: {colors: [RED, GREEN]}) { __typename }
        b: search(filter: {colors: [RED, GREEN]}) { __typename }
        c: search(filter: {colors: [GREEN, RED]}) { __typename }
        d: search(filter: {colors: [RED]}) { __typename }
    }");
    let colors = |key: &str| {
        argument_value(&document, find_field(&document, key), "filter")
            .as_complex()
            .unwrap()
            .try_get_field("colors")
            .unwrap()
    };

    assert!(colors("a").is_equal_to(&colors("b")));
    assert!(!colors("a").is_equal_to(&colors("c")));
    assert!(!colors("a").is_equal_to(&colors("d")));
    assert!(colors("a").list_items().is_some());
    assert!(colors("a").as_complex().is_none());
}

#[test]
fn variables_are_found_in_nested_values() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "query ($name: String) {
        a: search(filter: {name: $name}) { __typename }
        b: search(filter: {name: \"literal\"}) { __typename }
    }");
    assert!(document.messages().is_empty(), "{:?}", document.messages().to_vec());

    assert!(argument_value(&document, find_field(&document, "a"), "filter").contains_variables());
    assert!(!argument_value(&document, find_field(&document, "b"), "filter").contains_variables());
}

#[test]
fn null_literals() {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(&schema, "{ greeting(name: null) }");
    let name = argument_value(&document, find_field(&document, "greeting"), "name");

    assert!(name.is_null());
    assert!(!name.contains_variables());
}
