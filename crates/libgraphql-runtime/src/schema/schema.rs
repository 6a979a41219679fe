use crate::document::OperationKind;
use crate::types::Directive;
use crate::types::GraphField;
use crate::types::GraphType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::ScalarTypeRegistry;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

pub const TYPENAME_FIELD_NAME: &str = "__typename";

/// A finalized set of types, fields (with their resolvers), and directives.
///
/// Built with a [SchemaBuilder](crate::schema::SchemaBuilder).
#[derive(Debug)]
pub struct Schema {
    pub(super) directives: IndexMap<String, Arc<Directive>>,
    pub(super) mutation_type: Option<String>,
    pub(super) query_type: String,
    pub(super) scalars: ScalarTypeRegistry,
    pub(super) subscription_type: Option<String>,
    pub(super) typename_field: Arc<GraphField>,
    pub(super) types: IndexMap<String, GraphType>,
}
impl Schema {
    pub fn directive(&self, name: &str) -> Option<&Arc<Directive>> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> &IndexMap<String, Arc<Directive>> {
        &self.directives
    }

    pub fn input_object(&self, type_name: &str) -> Option<&InputObjectType> {
        match self.types.get(type_name) {
            Some(GraphType::InputObject(t)) => Some(t),
            _ => None,
        }
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn object_type(&self, type_name: &str) -> Option<&ObjectType> {
        self.types.get(type_name)?.as_object()
    }

    /// The object types a value of `type_name` may be at runtime: the type
    /// itself for objects, every implementor for interfaces, and every member
    /// for unions.
    pub fn possible_types(&self, type_name: &str) -> Vec<&str> {
        match self.types.get(type_name) {
            Some(GraphType::Object(obj)) => vec![obj.name()],
            Some(GraphType::Union(union_type)) => {
                union_type.members().iter().map(|m| m.as_str()).collect()
            },
            Some(GraphType::Interface(iface)) => self.types
                .values()
                .filter_map(|t| t.as_object())
                .filter(|obj| obj.implements(iface.name()))
                .map(|obj| obj.name())
                .collect(),
            _ => vec![],
        }
    }

    pub fn query_type_name(&self) -> &str {
        self.query_type.as_str()
    }

    /// Determines the concrete object type of a value produced for a field
    /// whose declared type is `type_name`.
    ///
    /// Abstract types resolve through a `__typename` property on the value,
    /// or to their only possible type when there is exactly one.
    pub fn resolve_concrete_type(&self, type_name: &str, value: &Value) -> Option<String> {
        match self.types.get(type_name)? {
            GraphType::Object(obj) => Some(obj.name().to_string()),
            GraphType::Interface(_) | GraphType::Union(_) => {
                let possible = self.possible_types(type_name);
                let declared = value
                    .get(TYPENAME_FIELD_NAME)
                    .and_then(|v| v.as_str());
                match declared {
                    Some(declared) if possible.contains(&declared) => Some(declared.to_string()),
                    Some(_) => None,
                    None if possible.len() == 1 => Some(possible[0].to_string()),
                    None => None,
                }
            },
            _ => None,
        }
    }

    pub fn root_type_name(&self, kind: OperationKind) -> Option<&str> {
        match kind {
            OperationKind::Mutation => self.mutation_type.as_deref(),
            OperationKind::Query => Some(self.query_type.as_str()),
            OperationKind::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn scalars(&self) -> &ScalarTypeRegistry {
        &self.scalars
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    pub fn type_by_name(&self, type_name: &str) -> Option<&GraphType> {
        self.types.get(type_name)
    }

    /// `true` when a value of the object type `concrete_type` may be selected
    /// through a fragment on `condition`.
    pub fn type_satisfies(&self, concrete_type: &str, condition: &str) -> bool {
        if concrete_type == condition {
            return true;
        }
        match self.types.get(condition) {
            Some(GraphType::Union(union_type)) => union_type.has_member(concrete_type),
            Some(GraphType::Interface(_)) => self
                .object_type(concrete_type)
                .is_some_and(|obj| obj.implements(condition)),
            _ => false,
        }
    }

    /// The `__typename` meta field, selectable on every composite type.
    pub fn typename_field(&self) -> &Arc<GraphField> {
        &self.typename_field
    }

    pub fn types(&self) -> &IndexMap<String, GraphType> {
        &self.types
    }
}
