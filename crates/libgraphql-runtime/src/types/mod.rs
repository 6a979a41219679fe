mod directive;
mod directive_location;
mod enum_type;
mod field_argument;
mod field_resolution_mode;
mod graph_field;
mod graph_type;
mod input_object_type;
mod object_type;
mod scalar_type;
mod scalar_type_registry;
mod schema_route;
mod type_expression;
mod union_type;

pub use directive::Directive;
pub use directive_location::DirectiveInvocationPhase;
pub use directive_location::DirectiveLocation;
pub use enum_type::EnumType;
pub use field_argument::FieldArgument;
pub use field_resolution_mode::FieldResolutionMode;
pub use graph_field::GraphField;
pub use graph_type::GraphType;
pub use graph_type::GraphTypeKind;
pub use input_object_type::InputObjectType;
pub use object_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::ScalarType;
pub use scalar_type_registry::ScalarKind;
pub use scalar_type_registry::ScalarTypeRegistry;
pub use schema_route::SchemaRoute;
pub use type_expression::TypeExpression;
pub use type_expression::TypeWrapper;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
