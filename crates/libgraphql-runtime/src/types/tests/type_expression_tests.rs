use crate::ast;
use crate::types::TypeExpression;
use crate::types::TypeWrapper;

fn parse_variable_type(type_src: &str) -> TypeExpression {
    let doc = ast::query::parse(format!("query ($v: {type_src}) {{ a }}").as_str()).unwrap();
    match &doc.definitions[0] {
        ast::query::Definition::Operation(ast::query::OperationDefinition::Query(query)) => {
            TypeExpression::from_ast(&query.variable_definitions[0].var_type)
        },
        def => panic!("Unexpected definition: {def:?}"),
    }
}

#[test]
fn wrappers_are_recorded_outermost_first() {
    let expr = parse_variable_type("[Item!]!");
    assert_eq!(expr.type_name(), "Item");
    assert_eq!(
        expr.wrappers(),
        &[TypeWrapper::NonNull, TypeWrapper::List, TypeWrapper::NonNull],
    );
    assert!(expr.is_non_null());
    assert!(expr.is_list());
}

#[test]
fn displays_as_written() {
    for type_src in ["Int", "Int!", "[Int]", "[Int!]", "[[String]!]!"] {
        assert_eq!(parse_variable_type(type_src).to_string(), type_src);
    }
}

#[test]
fn builders_match_parsed_expressions() {
    let built = TypeExpression::named("Item").non_null().list().non_null();
    assert_eq!(built, parse_variable_type("[Item!]!"));

    // Applying non-null twice does not double-wrap.
    assert_eq!(TypeExpression::named("Int").non_null().non_null().to_string(), "Int!");
}

#[test]
fn list_item_type_strips_the_list() {
    let expr = parse_variable_type("[[Int!]]!");
    let item_type = expr.list_item_type().unwrap();
    assert_eq!(item_type.to_string(), "[Int!]");
    assert_eq!(item_type.list_item_type().unwrap().to_string(), "Int!");
    assert_eq!(parse_variable_type("Int!").list_item_type(), None);
}

#[test]
fn nullable_removes_only_the_outer_wrapper() {
    let expr = parse_variable_type("[Int!]!");
    assert_eq!(expr.nullable().to_string(), "[Int!]");
    assert_eq!(expr.nullable().nullable().to_string(), "[Int!]");
    assert!(!expr.nullable().is_non_null());
}
