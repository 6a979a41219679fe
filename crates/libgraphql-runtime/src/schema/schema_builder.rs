use crate::ast;
use crate::directives::IncludeDirective;
use crate::directives::SkipDirective;
use crate::loc::SourceLocation;
use crate::resolvers::FieldResolver;
use crate::resolvers::TypeNameResolver;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::TYPENAME_FIELD_NAME;
use crate::security::FieldSecurityGroup;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::FieldArgument;
use crate::types::FieldResolutionMode;
use crate::types::GraphField;
use crate::types::GraphType;
use crate::types::InputObjectType;
use crate::types::ObjectType;
use crate::types::ScalarKind;
use crate::types::ScalarType;
use crate::types::ScalarTypeRegistry;
use crate::types::TypeExpression;
use crate::types::UnionType;
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Directives defined by the GraphQL specification. SDL definitions of these
/// are accepted and ignored.
const BUILTIN_DIRECTIVE_NAMES: [&str; 4] = ["deprecated", "include", "skip", "specifiedBy"];

/// The parent type name used for the route of the `__typename` meta field.
const META_TYPE_NAME: &str = "__Meta";

#[derive(Debug)]
struct DeclaredDirective {
    arguments: IndexMap<String, FieldArgument>,
    location: SourceLocation,
}

/// Utility for building a [Schema].
///
/// Types are loaded from SDL; resolvers, directives, and security policies
/// are then attached by name before calling [build](SchemaBuilder::build).
#[derive(Debug)]
pub struct SchemaBuilder {
    declared_directives: IndexMap<String, DeclaredDirective>,
    directives: IndexMap<String, Arc<Directive>>,
    mutation_type: Option<String>,
    query_type: Option<String>,
    scalars: ScalarTypeRegistry,
    str_load_counter: u16,
    subscription_type: Option<String>,
    types: IndexMap<String, GraphType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        let scalars = ScalarTypeRegistry::new();
        let mut types = IndexMap::new();
        for name in ScalarTypeRegistry::builtin_scalar_names() {
            types.insert(name.to_string(), GraphType::Scalar(ScalarType {
                def_location: SourceLocation::default(),
                description: None,
                kind: scalars.scalar_kind(name).unwrap_or(ScalarKind::Custom),
                name: name.to_string(),
            }));
        }

        let mut directives = IndexMap::new();
        for directive in [SkipDirective::directive(), IncludeDirective::directive()] {
            directives.insert(directive.name().to_string(), Arc::new(directive));
        }

        Self {
            declared_directives: IndexMap::new(),
            directives,
            mutation_type: None,
            query_type: None,
            scalars,
            str_load_counter: 0,
            subscription_type: None,
            types,
        }
    }

    pub fn from_str(file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        Self::new().load_str(file_path, content)
    }

    pub fn from_file(file_path: impl AsRef<Path>) -> Result<Self> {
        Self::new().load_file(file_path)
    }

    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        let content = std::fs::read_to_string(file_path).map_err(|err| {
            SchemaBuildError::SchemaFileReadError {
                path: file_path.to_path_buf(),
                err: err.to_string(),
            }
        })?;
        self.load_str(Some(file_path.to_path_buf()), content.as_str())
    }

    pub fn load_str(mut self, file_path: Option<PathBuf>, content: &str) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc = ast::schema::parse(content).map_err(|err| {
            SchemaBuildError::ParseError {
                file: file_path.clone(),
                err: err.to_string(),
            }
        })?;

        for def in &ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    /// Registers a directive implementation.
    ///
    /// Fails with [SchemaBuildError::DirectiveTypeMismatch] when the
    /// directive's resolver is not an instance of the type the directive was
    /// created with.
    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        if !directive.validate_object(Some(directive.resolver().as_any())) {
            return Err(SchemaBuildError::DirectiveTypeMismatch {
                directive_name: directive.name().to_string(),
                expected_type: directive.object_type_name(),
            });
        }
        if self.directives.contains_key(directive.name()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive.name().to_string(),
            });
        }
        self.directives.insert(directive.name().to_string(), Arc::new(directive));
        Ok(self)
    }

    /// Replaces the resolver of `type_name.field_name` with one invoked once
    /// per source item.
    pub fn resolve_field(
        mut self,
        type_name: &str,
        field_name: &str,
        resolver: impl FieldResolver + 'static,
    ) -> Result<Self> {
        let resolver: Arc<dyn FieldResolver> = Arc::new(resolver);
        self.update_field(type_name, field_name, |field, scalars| {
            field.update_resolver(resolver, FieldResolutionMode::PerSourceItem, scalars);
            field.set_batch_key(None);
        })?;
        Ok(self)
    }

    /// Replaces the resolver of `type_name.field_name` with one invoked once
    /// for all source items at the same level of a response.
    ///
    /// `batch_key` names the source item property the resolver's result is
    /// keyed by.
    pub fn resolve_batch_field(
        mut self,
        type_name: &str,
        field_name: &str,
        resolver: impl FieldResolver + 'static,
        batch_key: Option<&str>,
    ) -> Result<Self> {
        let resolver: Arc<dyn FieldResolver> = Arc::new(resolver);
        self.update_field(type_name, field_name, |field, scalars| {
            field.update_resolver(resolver, FieldResolutionMode::Batch, scalars);
            field.set_batch_key(batch_key);
        })?;
        Ok(self)
    }

    /// Requires every request for `type_name.field_name` to satisfy `group`.
    pub fn secure_field(
        mut self,
        type_name: &str,
        field_name: &str,
        group: FieldSecurityGroup,
    ) -> Result<Self> {
        self.update_field(type_name, field_name, |field, _| {
            field.add_security_group(group);
        })?;
        Ok(self)
    }

    fn update_field(
        &mut self,
        type_name: &str,
        field_name: &str,
        update: impl FnOnce(&mut GraphField, &ScalarTypeRegistry),
    ) -> Result<()> {
        let fields = match self.types.get_mut(type_name) {
            Some(GraphType::Object(t)) | Some(GraphType::Interface(t)) => &mut t.fields,
            _ => return Err(SchemaBuildError::UnknownObjectType {
                type_name: type_name.to_string(),
            }),
        };
        let field = fields.get_mut(field_name).ok_or_else(|| {
            SchemaBuildError::UnknownField {
                type_name: type_name.to_string(),
                field_name: field_name.to_string(),
            }
        })?;
        update(Arc::make_mut(field), &self.scalars);
        Ok(())
    }

    pub fn build(mut self) -> Result<Schema> {
        let query_type = match self.query_type.take() {
            Some(type_name) => type_name,
            None if self.types.contains_key("Query") => "Query".to_string(),
            None => return Err(SchemaBuildError::NoQueryOperationTypeDefined),
        };
        let mutation_type = self.mutation_type.take().or_else(|| {
            self.types.contains_key("Mutation").then(|| "Mutation".to_string())
        });
        let subscription_type = self.subscription_type.take().or_else(|| {
            self.types.contains_key("Subscription").then(|| "Subscription".to_string())
        });

        self.check_root_type("query", Some(&query_type))?;
        self.check_root_type("mutation", mutation_type.as_ref())?;
        self.check_root_type("subscription", subscription_type.as_ref())?;
        self.check_type_references()?;

        for (name, declared) in self.declared_directives.drain(..) {
            let Some(directive) = self.directives.get_mut(&name) else {
                return Err(SchemaBuildError::UnregisteredDirective {
                    directive_name: name,
                    location: declared.location,
                });
            };
            if directive.arguments.is_empty() && !declared.arguments.is_empty() {
                Arc::make_mut(directive).arguments = declared.arguments;
            }
        }

        // Leaf-ness depends on every scalar and enum being known, so it is
        // recomputed once all documents are loaded.
        for graph_type in self.types.values_mut() {
            if let GraphType::Object(t) | GraphType::Interface(t) = graph_type {
                for field in t.fields.values_mut() {
                    let field = Arc::make_mut(field);
                    let resolver = field.resolver.clone();
                    let mode = field.mode;
                    field.update_resolver(resolver, mode, &self.scalars);
                }
            }
        }

        let mut typename_field = GraphField::new(
            META_TYPE_NAME,
            TYPENAME_FIELD_NAME,
            TypeExpression::named("String").non_null(),
            &self.scalars,
        );
        typename_field.update_resolver(
            Arc::new(TypeNameResolver),
            FieldResolutionMode::PerSourceItem,
            &self.scalars,
        );

        Ok(Schema {
            directives: self.directives,
            mutation_type,
            query_type,
            scalars: self.scalars,
            subscription_type,
            typename_field: Arc::new(typename_field),
            types: self.types,
        })
    }

    fn check_root_type(&self, operation: &'static str, type_name: Option<&String>) -> Result<()> {
        let Some(type_name) = type_name else {
            return Ok(());
        };
        match self.types.get(type_name) {
            Some(GraphType::Object(_)) => Ok(()),
            Some(_) => Err(SchemaBuildError::RootOperationTypeNotAnObject {
                operation,
                type_name: type_name.to_string(),
            }),
            None => Err(SchemaBuildError::UndefinedTypeReference {
                referencing: format!("schema.{operation}"),
                type_name: type_name.to_string(),
            }),
        }
    }

    fn check_type_references(&self) -> Result<()> {
        let check = |referencing: &dyn Fn() -> String, type_name: &str| {
            if self.types.contains_key(type_name) {
                Ok(())
            } else {
                Err(SchemaBuildError::UndefinedTypeReference {
                    referencing: referencing(),
                    type_name: type_name.to_string(),
                })
            }
        };

        for graph_type in self.types.values() {
            match graph_type {
                GraphType::Object(t) | GraphType::Interface(t) => {
                    for interface_name in t.interfaces() {
                        check(&|| t.name().to_string(), interface_name)?;
                    }
                    for field in t.fields().values() {
                        check(
                            &|| field.route().to_string(),
                            field.type_expression().type_name(),
                        )?;
                        for argument in field.arguments().values() {
                            check(
                                &|| format!("{}({}:)", field.route(), argument.name()),
                                argument.type_expression().type_name(),
                            )?;
                        }
                    }
                },
                GraphType::Union(t) => {
                    for member in t.members() {
                        if !matches!(self.types.get(member), Some(GraphType::Object(_))) {
                            return Err(SchemaBuildError::InvalidUnionMember {
                                union_name: t.name().to_string(),
                                member_name: member.to_string(),
                            });
                        }
                    }
                },
                GraphType::InputObject(t) => {
                    for field in t.fields().values() {
                        check(
                            &|| format!("{}.{}", t.name(), field.name()),
                            field.type_expression().type_name(),
                        )?;
                    }
                },
                GraphType::Enum(_) | GraphType::Scalar(_) => (),
            }
        }
        Ok(())
    }

    fn visit_ast_def(&mut self, file_path: &Path, def: &ast::schema::Definition) -> Result<()> {
        match def {
            ast::schema::Definition::SchemaDefinition(schema_def) => {
                if let Some(query) = &schema_def.query {
                    self.query_type = Some(query.to_string());
                }
                if let Some(mutation) = &schema_def.mutation {
                    self.mutation_type = Some(mutation.to_string());
                }
                if let Some(subscription) = &schema_def.subscription {
                    self.subscription_type = Some(subscription.to_string());
                }
                Ok(())
            },
            ast::schema::Definition::TypeDefinition(type_def) => {
                self.visit_type_def(file_path, type_def)
            },
            ast::schema::Definition::TypeExtension(type_ext) => {
                let (type_name, pos) = type_extension_name(type_ext);
                Err(SchemaBuildError::TypeExtensionNotSupported {
                    type_name: type_name.to_string(),
                    location: SourceLocation::from_ast_pos(Some(file_path), pos),
                })
            },
            ast::schema::Definition::DirectiveDefinition(directive_def) => {
                let name = directive_def.name.as_str();
                if BUILTIN_DIRECTIVE_NAMES.contains(&name) {
                    return Ok(());
                }
                if self.declared_directives.contains_key(name) {
                    return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                        directive_name: name.to_string(),
                    });
                }
                let arguments = directive_def.arguments
                    .iter()
                    .map(|arg| (arg.name.to_string(), field_argument_from_ast(arg)))
                    .collect();
                self.declared_directives.insert(name.to_string(), DeclaredDirective {
                    arguments,
                    location: SourceLocation::from_ast_pos(Some(file_path), &directive_def.position),
                });
                Ok(())
            },
        }
    }

    fn visit_type_def(
        &mut self,
        file_path: &Path,
        type_def: &ast::schema::TypeDefinition,
    ) -> Result<()> {
        let graph_type = match type_def {
            ast::schema::TypeDefinition::Scalar(def) => {
                self.scalars.register_scalar(def.name.as_str());
                GraphType::Scalar(ScalarType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    kind: self.scalars.scalar_kind(def.name.as_str()).unwrap_or(ScalarKind::Custom),
                    name: def.name.to_string(),
                })
            },
            ast::schema::TypeDefinition::Enum(def) => {
                self.scalars.register_enum(def.name.as_str());
                GraphType::Enum(EnumType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    name: def.name.to_string(),
                    values: def.values.iter().map(|v| v.name.to_string()).collect(),
                })
            },
            ast::schema::TypeDefinition::Object(def) => {
                GraphType::Object(ObjectType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    fields: self.build_fields(file_path, def.name.as_str(), &def.fields)?,
                    interfaces: def.implements_interfaces.iter().map(|i| i.to_string()).collect(),
                    name: def.name.to_string(),
                })
            },
            ast::schema::TypeDefinition::Interface(def) => {
                GraphType::Interface(ObjectType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    fields: self.build_fields(file_path, def.name.as_str(), &def.fields)?,
                    interfaces: vec![],
                    name: def.name.to_string(),
                })
            },
            ast::schema::TypeDefinition::Union(def) => {
                GraphType::Union(UnionType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    members: def.types.iter().map(|t| t.to_string()).collect(),
                    name: def.name.to_string(),
                })
            },
            ast::schema::TypeDefinition::InputObject(def) => {
                GraphType::InputObject(InputObjectType {
                    def_location: SourceLocation::from_ast_pos(Some(file_path), &def.position),
                    description: def.description.clone(),
                    fields: def.fields
                        .iter()
                        .map(|f| (f.name.to_string(), field_argument_from_ast(f)))
                        .collect(),
                    name: def.name.to_string(),
                })
            },
        };

        if let Some(existing) = self.types.get(graph_type.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: graph_type.name().to_string(),
                def1: existing.def_location().clone(),
                def2: graph_type.def_location().clone(),
            });
        }
        self.types.insert(graph_type.name().to_string(), graph_type);
        Ok(())
    }

    fn build_fields(
        &self,
        file_path: &Path,
        type_name: &str,
        field_defs: &[ast::schema::Field],
    ) -> Result<IndexMap<String, Arc<GraphField>>> {
        let mut fields = IndexMap::new();
        for field_def in field_defs {
            let location = SourceLocation::from_ast_pos(Some(file_path), &field_def.position);
            if fields.contains_key(field_def.name.as_str()) {
                return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                    type_name: type_name.to_string(),
                    field_name: field_def.name.to_string(),
                    location,
                });
            }
            let mut field = GraphField::new(
                type_name,
                field_def.name.as_str(),
                TypeExpression::from_ast(&field_def.field_type),
                &self.scalars,
            );
            field.def_location = location;
            field.description = field_def.description.clone();
            for arg in &field_def.arguments {
                field = field.with_argument(field_argument_from_ast(arg));
            }
            fields.insert(field_def.name.to_string(), Arc::new(field));
        }
        Ok(fields)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn field_argument_from_ast(input_value: &ast::schema::InputValue) -> FieldArgument {
    let mut argument = FieldArgument::new(
        input_value.name.as_str(),
        TypeExpression::from_ast(&input_value.value_type),
    );
    argument.description = input_value.description.clone();
    argument.default_value = input_value.default_value.as_ref().map(const_value_to_json);
    argument
}

fn type_extension_name(type_ext: &ast::schema::TypeExtension) -> (&str, &ast::AstPos) {
    use graphql_parser::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(ext) => (ext.name.as_str(), &ext.position),
        TypeExtension::InputObject(ext) => (ext.name.as_str(), &ext.position),
        TypeExtension::Interface(ext) => (ext.name.as_str(), &ext.position),
        TypeExtension::Object(ext) => (ext.name.as_str(), &ext.position),
        TypeExtension::Scalar(ext) => (ext.name.as_str(), &ext.position),
        TypeExtension::Union(ext) => (ext.name.as_str(), &ext.position),
    }
}

/// Converts a constant (variable-free) AST value to JSON. Variable references
/// have no constant value and convert to `null`.
pub(crate) fn const_value_to_json(value: &ast::schema::Value) -> Value {
    use graphql_parser::schema::Value as AstValue;
    match value {
        AstValue::Boolean(b) => Value::Bool(*b),
        AstValue::Enum(name) => Value::String(name.to_string()),
        AstValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        AstValue::Int(n) => n.as_i64().map(Value::from).unwrap_or(Value::Null),
        AstValue::List(items) => Value::Array(items.iter().map(const_value_to_json).collect()),
        AstValue::Null | AstValue::Variable(_) => Value::Null,
        AstValue::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(name, value)| (name.to_string(), const_value_to_json(value)))
                .collect(),
        ),
        AstValue::String(s) => Value::String(s.to_string()),
    }
}
