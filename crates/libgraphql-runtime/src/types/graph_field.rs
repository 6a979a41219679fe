use crate::loc::SourceLocation;
use crate::resolvers::FieldResolver;
use crate::resolvers::PropertyResolver;
use crate::security::FieldSecurityGroup;
use crate::types::FieldArgument;
use crate::types::FieldResolutionMode;
use crate::types::ScalarTypeRegistry;
use crate::types::SchemaRoute;
use crate::types::TypeExpression;
use indexmap::IndexMap;
use std::sync::Arc;

/// A field declared on an object or interface type, along with the resolver
/// that produces its values.
#[derive(Clone, Debug)]
pub struct GraphField {
    pub(crate) arguments: IndexMap<String, FieldArgument>,
    pub(crate) batch_key: Option<String>,
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) is_leaf: bool,
    pub(crate) mode: FieldResolutionMode,
    pub(crate) name: String,
    pub(crate) parent_type_name: String,
    pub(crate) resolver: Arc<dyn FieldResolver>,
    pub(crate) route: SchemaRoute,
    pub(crate) security_groups: Vec<FieldSecurityGroup>,
    pub(crate) type_expression: TypeExpression,
}
impl GraphField {
    /// Creates a field that resolves by reading the property of the same
    /// name from its source item.
    pub fn new(
        parent_type_name: &str,
        name: impl Into<String>,
        type_expression: TypeExpression,
        scalars: &ScalarTypeRegistry,
    ) -> Self {
        let name = name.into();
        let resolver: Arc<dyn FieldResolver> =
            Arc::new(PropertyResolver::new(name.as_str()));
        let mut field = Self {
            arguments: IndexMap::new(),
            batch_key: None,
            def_location: SourceLocation::default(),
            description: None,
            is_leaf: false,
            mode: FieldResolutionMode::PerSourceItem,
            route: SchemaRoute::for_field(parent_type_name, name.as_str()),
            name,
            parent_type_name: parent_type_name.to_string(),
            resolver: resolver.clone(),
            security_groups: vec![],
            type_expression,
        };
        field.update_resolver(resolver, FieldResolutionMode::PerSourceItem, scalars);
        field
    }

    pub fn with_argument(mut self, argument: FieldArgument) -> Self {
        self.arguments.insert(argument.name().to_string(), argument);
        self
    }

    /// Replaces this field's resolver together with the mode it must be
    /// invoked in. The two are only ever changed as a pair.
    pub fn update_resolver(
        &mut self,
        resolver: Arc<dyn FieldResolver>,
        mode: FieldResolutionMode,
        scalars: &ScalarTypeRegistry,
    ) {
        let produced_type = resolver
            .object_type()
            .map(|name| name.to_string())
            .unwrap_or_else(|| self.type_expression.type_name().to_string());
        self.resolver = resolver;
        self.mode = mode;
        self.is_leaf = scalars.is_leaf(produced_type.as_str());
    }

    pub(crate) fn set_batch_key(&mut self, batch_key: Option<&str>) {
        self.batch_key = batch_key.map(|key| key.to_string());
    }

    pub(crate) fn add_security_group(&mut self, group: FieldSecurityGroup) {
        self.security_groups.push(group);
    }

    pub fn argument(&self, name: &str) -> Option<&FieldArgument> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, FieldArgument> {
        &self.arguments
    }

    /// The source item property used to correlate batch results with source
    /// items. `None` defers to
    /// [ExecutionOptions::default_batch_key](crate::ExecutionOptions::default_batch_key).
    pub fn batch_key(&self) -> Option<&str> {
        self.batch_key.as_deref()
    }

    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// `true` when the values this field produces are scalars or enums.
    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    pub fn mode(&self) -> FieldResolutionMode {
        self.mode
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type_name.as_str()
    }

    pub fn resolver(&self) -> &Arc<dyn FieldResolver> {
        &self.resolver
    }

    pub fn route(&self) -> &SchemaRoute {
        &self.route
    }

    pub fn security_groups(&self) -> &[FieldSecurityGroup] {
        &self.security_groups
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }
}
