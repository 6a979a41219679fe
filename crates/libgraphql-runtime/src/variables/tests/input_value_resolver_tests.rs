use crate::document::DocumentPart;
use crate::test_utils;
use crate::types::TypeExpression;
use crate::variables::InputCoercionError;
use crate::variables::InputValueResolver;
use crate::variables::InputVariable;
use crate::variables::ResolvableValue;
use crate::variables::ResolvedVariableCollection;
use serde_json::Value;
use serde_json::json;

type Result<T> = std::result::Result<T, InputCoercionError>;

fn coerce_json(value: Value, expected: TypeExpression) -> Result<Value> {
    let schema = test_utils::test_schema();
    InputValueResolver::new(&schema).coerce(ResolvableValue::Json(&value), &expected)
}

#[test]
fn builtin_scalars() -> Result<()> {
    assert_eq!(coerce_json(json!(true), TypeExpression::named("Boolean"))?, json!(true));
    assert_eq!(coerce_json(json!(1.5), TypeExpression::named("Float"))?, json!(1.5));
    assert_eq!(coerce_json(json!(3), TypeExpression::named("Float"))?, json!(3));
    assert_eq!(coerce_json(json!("abc"), TypeExpression::named("ID"))?, json!("abc"));
    assert_eq!(coerce_json(json!(42), TypeExpression::named("ID"))?, json!("42"));
    assert_eq!(coerce_json(json!("hi"), TypeExpression::named("String"))?, json!("hi"));
    Ok(())
}

#[test]
fn int_must_fit_in_32_bits() {
    assert_eq!(coerce_json(json!(i32::MAX), TypeExpression::named("Int")), Ok(json!(i32::MAX)));
    assert_eq!(
        coerce_json(json!(i64::from(i32::MAX) + 1), TypeExpression::named("Int")),
        Err(InputCoercionError::InvalidValue {
            expected: "Int".to_string(),
            received: "2147483648".to_string(),
        }),
    );
    assert!(coerce_json(json!(1.5), TypeExpression::named("Int")).is_err());
}

#[test]
fn mismatched_scalars_are_rejected() {
    assert!(coerce_json(json!(5), TypeExpression::named("String")).is_err());
    assert!(coerce_json(json!("true"), TypeExpression::named("Boolean")).is_err());
    assert!(coerce_json(json!({"a": 1}), TypeExpression::named("String")).is_err());
}

#[test]
fn null_handling() {
    assert_eq!(coerce_json(Value::Null, TypeExpression::named("Int")), Ok(Value::Null));
    assert_eq!(
        coerce_json(Value::Null, TypeExpression::named("Int").non_null()),
        Err(InputCoercionError::NullValueNotAllowed {
            expected: "Int!".to_string(),
        }),
    );
}

#[test]
fn single_values_are_wrapped_in_lists() -> Result<()> {
    let colors = TypeExpression::named("Color").non_null().list();
    assert_eq!(coerce_json(json!("RED"), colors.clone())?, json!(["RED"]));
    assert_eq!(coerce_json(json!(["RED", "BLUE"]), colors.clone())?, json!(["RED", "BLUE"]));
    assert_eq!(
        coerce_json(json!(["RED", null]), colors),
        Err(InputCoercionError::NullValueNotAllowed {
            expected: "Color!".to_string(),
        }),
    );
    Ok(())
}

#[test]
fn enums() {
    assert_eq!(coerce_json(json!("GREEN"), TypeExpression::named("Color")), Ok(json!("GREEN")));
    assert_eq!(
        coerce_json(json!("PURPLE"), TypeExpression::named("Color")),
        Err(InputCoercionError::InvalidEnumValue {
            enum_name: "Color".to_string(),
            value: "PURPLE".to_string(),
        }),
    );
    assert!(coerce_json(json!(1), TypeExpression::named("Color")).is_err());
}

#[test]
fn input_objects_apply_defaults() -> Result<()> {
    let filter = TypeExpression::named("ItemFilter");
    assert_eq!(coerce_json(json!({"name": "a"}), filter.clone())?, json!({"name": "a", "limit": 10}));
    assert_eq!(
        coerce_json(json!({"limit": 2, "colors": "RED"}), filter.clone())?,
        json!({"limit": 2, "colors": ["RED"]}),
    );
    assert_eq!(
        coerce_json(json!({"size": 2}), filter.clone()),
        Err(InputCoercionError::UnknownInputField {
            type_name: "ItemFilter".to_string(),
            field_name: "size".to_string(),
        }),
    );
    assert!(coerce_json(json!("a"), filter).is_err());
    Ok(())
}

#[test]
fn output_types_are_not_input_types() {
    assert_eq!(
        coerce_json(json!({}), TypeExpression::named("Item")),
        Err(InputCoercionError::NotAnInputType {
            type_name: "Item".to_string(),
        }),
    );
}

#[test]
fn supplied_values_read_variables() -> Result<()> {
    let schema = test_utils::test_schema();
    let document = test_utils::build_document(
        &schema,
        "query ($name: String) { search(filter: {name: $name, limit: 3}) { __typename } }",
    );
    let value_id = document
        .parts()
        .find_map(|node| match node.part() {
            DocumentPart::InputArgument(arg) if arg.name() == "filter" => arg.value(),
            _ => None,
        })
        .unwrap();
    let value = document.supplied_value(value_id).unwrap();

    let mut variables = ResolvedVariableCollection::new();
    variables.insert(InputVariable::from_json("name", &json!("bolt")));
    let coerced = InputValueResolver::new(&schema)
        .with_variables(&variables)
        .coerce(ResolvableValue::Supplied(value), &TypeExpression::named("ItemFilter"))?;
    assert_eq!(coerced, json!({"name": "bolt", "limit": 3}));

    // An unbound variable is treated as absent and takes no value.
    let unbound = ResolvedVariableCollection::new();
    let coerced = InputValueResolver::new(&schema)
        .with_variables(&unbound)
        .coerce(ResolvableValue::Supplied(value), &TypeExpression::named("ItemFilter"))?;
    assert_eq!(coerced, json!({"limit": 3}));
    Ok(())
}
