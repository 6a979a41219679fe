use crate::resolvers::FunctionResolver;
use crate::types::FieldArgument;
use crate::types::FieldResolutionMode;
use crate::types::GraphField;
use crate::types::ScalarTypeRegistry;
use crate::types::SchemaRoute;
use crate::types::TypeExpression;
use serde_json::json;
use std::sync::Arc;

#[test]
fn new_fields_resolve_per_source_item() {
    let scalars = ScalarTypeRegistry::new();
    let field = GraphField::new("Item", "name", TypeExpression::named("String"), &scalars);

    assert_eq!(field.mode(), FieldResolutionMode::PerSourceItem);
    assert!(field.is_leaf());
    assert_eq!(field.route(), &SchemaRoute::for_field("Item", "name"));
    assert_eq!(field.route().to_string(), "[type]/Item/name");
    assert_eq!(field.parent_type_name(), "Item");
}

#[test]
fn leafness_follows_the_resolved_type() {
    let scalars = ScalarTypeRegistry::new();
    let mut field = GraphField::new("Query", "item", TypeExpression::named("Item"), &scalars);
    assert!(!field.is_leaf());

    // A resolver that declares it produces a scalar makes the field a leaf.
    let resolver = FunctionResolver::new(|_| async { Ok(json!("raw")) }).with_object_type("String");
    field.update_resolver(Arc::new(resolver), FieldResolutionMode::Batch, &scalars);
    assert!(field.is_leaf());
    assert_eq!(field.mode(), FieldResolutionMode::Batch);
}

#[test]
fn enums_are_leaves_once_registered() {
    let mut scalars = ScalarTypeRegistry::new();
    scalars.register_enum("Color");
    let field = GraphField::new("Item", "color", TypeExpression::named("Color"), &scalars);
    assert!(field.is_leaf());
}

#[test]
fn arguments_keep_declaration_order() {
    let scalars = ScalarTypeRegistry::new();
    let field = GraphField::new("Query", "items", TypeExpression::named("Item").list(), &scalars)
        .with_argument(FieldArgument::new("first", TypeExpression::named("Int").non_null()))
        .with_argument(
            FieldArgument::new("after", TypeExpression::named("String"))
                .with_default_value(json!("")),
        );

    let names: Vec<&str> = field.arguments().keys().map(|name| name.as_str()).collect();
    assert_eq!(names, vec!["first", "after"]);
    assert!(field.argument("first").unwrap().is_required());
    assert!(!field.argument("after").unwrap().is_required());
}
