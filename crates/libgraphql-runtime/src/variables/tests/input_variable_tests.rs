use crate::variables::InputFieldSetVariable;
use crate::variables::InputVariable;
use serde_json::json;

fn field_set(variable: &InputVariable) -> &InputFieldSetVariable {
    match variable {
        InputVariable::FieldSet(field_set) => field_set,
        variable => panic!("Unexpected variable: {variable:?}"),
    }
}

#[test]
fn field_set_lookup_by_name() {
    let filter = InputVariable::from_json("filter", &json!({
        "name": "x",
        "colors": ["RED"],
        "owner": { "id": "o1" },
    }));
    let filter = field_set(&filter);

    assert_eq!(filter.name(), "filter");
    assert_eq!(filter.len(), 3);
    assert!(filter.try_get_field("limit").is_none());
    assert!(filter.try_get_field("Name").is_none());

    match filter.try_get_field("name") {
        Some(InputVariable::Single(name)) => assert_eq!(name.value(), &json!("x")),
        variable => panic!("Unexpected variable: {variable:?}"),
    }
    match filter.try_get_field("colors") {
        Some(InputVariable::List(colors)) => assert_eq!(colors.items().len(), 1),
        variable => panic!("Unexpected variable: {variable:?}"),
    }

    let owner = field_set(filter.try_get_field("owner").unwrap());
    assert!(owner.try_get_field("id").is_some());
    assert!(owner.try_get_field("email").is_none());
}

#[test]
fn field_sets_keep_json_field_order() {
    let filter = InputVariable::from_json("filter", &json!({ "zeta": 1, "alpha": 2 }));
    let names: Vec<&str> = field_set(&filter).fields().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["zeta", "alpha"]);
    assert_eq!(filter.to_json(), json!({ "zeta": 1, "alpha": 2 }));
}

#[test]
fn added_variables_replace_their_namesake() {
    let mut filter = InputFieldSetVariable::new("filter");
    assert!(filter.is_empty());
    filter.add_variable(InputVariable::from_json("name", &json!("x")));
    filter.add_variable(InputVariable::from_json("name", &json!("y")));

    assert_eq!(filter.len(), 1);
    assert_eq!(filter.try_get_field("name").map(|v| v.to_json()), Some(json!("y")));
}
