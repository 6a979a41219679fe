use crate::directives::DirectiveResolver;
use crate::types::DirectiveInvocationPhase;
use crate::types::DirectiveLocation;
use crate::types::FieldArgument;
use crate::types::SchemaRoute;
use indexmap::IndexMap;
use std::any::Any;
use std::any::TypeId;
use std::sync::Arc;

/// A directive registered with a schema.
///
/// Each directive is bound to one concrete resolver type at construction
/// (its "object type"). Swapping in a resolver of a different type is
/// permitted but will fail [validate_object](Directive::validate_object)
/// and is rejected when the directive is registered with a
/// [SchemaBuilder](crate::schema::SchemaBuilder).
#[derive(Clone, Debug)]
pub struct Directive {
    pub(crate) arguments: IndexMap<String, FieldArgument>,
    pub(crate) is_repeatable: bool,
    pub(crate) locations: DirectiveLocation,
    pub(crate) name: String,
    pub(crate) object_type: TypeId,
    pub(crate) object_type_name: &'static str,
    pub(crate) phases: DirectiveInvocationPhase,
    pub(crate) resolver: Arc<dyn DirectiveResolver>,
    pub(crate) route: SchemaRoute,
}
impl Directive {
    pub fn new<R: DirectiveResolver + 'static>(
        name: impl Into<String>,
        locations: DirectiveLocation,
        phases: DirectiveInvocationPhase,
        resolver: R,
    ) -> Self {
        let name = name.into();
        Self {
            arguments: IndexMap::new(),
            is_repeatable: false,
            locations,
            object_type: TypeId::of::<R>(),
            object_type_name: std::any::type_name::<R>(),
            phases,
            resolver: Arc::new(resolver),
            route: SchemaRoute::for_directive(name.as_str()),
            name,
        }
    }

    pub fn with_argument(mut self, argument: FieldArgument) -> Self {
        self.arguments.insert(argument.name().to_string(), argument);
        self
    }

    pub fn with_repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn DirectiveResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// `true` when `item` is absent or is an instance of exactly this
    /// directive's object type.
    pub fn validate_object(&self, item: Option<&dyn Any>) -> bool {
        match item {
            None => true,
            Some(item) => item.type_id() == self.object_type,
        }
    }

    pub fn argument(&self, name: &str) -> Option<&FieldArgument> {
        self.arguments.get(name)
    }

    pub fn arguments(&self) -> &IndexMap<String, FieldArgument> {
        &self.arguments
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    pub fn locations(&self) -> DirectiveLocation {
        self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn object_type_name(&self) -> &'static str {
        self.object_type_name
    }

    pub fn phases(&self) -> DirectiveInvocationPhase {
        self.phases
    }

    pub fn resolver(&self) -> &Arc<dyn DirectiveResolver> {
        &self.resolver
    }

    pub fn route(&self) -> &SchemaRoute {
        &self.route
    }
}
