use crate::ast;
use crate::document::ComplexSuppliedValue;
use crate::document::DirectivePart;
use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::DocumentValidator;
use crate::document::FieldPart;
use crate::document::FieldSelectionSetPart;
use crate::document::FragmentSpreadPart;
use crate::document::InlineFragmentPart;
use crate::document::InputArgumentPart;
use crate::document::ListSuppliedValue;
use crate::document::NamedFragmentPart;
use crate::document::OperationKind;
use crate::document::OperationPart;
use crate::document::QueryDocument;
use crate::document::ScalarLiteral;
use crate::document::SuppliedValue;
use crate::document::VariablePart;
use crate::document::object_field_order::ObjectFieldOrder;
use crate::document::object_field_order::outermost_object_orders;
use crate::loc::SourceLocation;
use crate::loc::SourceOrigin;
use crate::loc::SourcePath;
use crate::messages::codes;
use crate::schema::Schema;
use crate::schema::TYPENAME_FIELD_NAME;
use crate::types::DirectiveLocation;
use crate::types::FieldArgument;
use crate::types::GraphType;
use crate::types::TypeExpression;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

/// Builds a [QueryDocument] from a parsed query in a single pass over the
/// syntax tree, then finalizes and validates it against a [Schema].
///
/// Building never fails: problems with the query are recorded as messages on
/// the resulting document (see [QueryDocument::messages]).
#[derive(Debug)]
pub struct QueryDocumentBuilder<'schema> {
    file_path: Option<PathBuf>,
    max_depth: Option<usize>,
    schema: &'schema Schema,
}
impl<'schema> QueryDocumentBuilder<'schema> {
    pub fn new(schema: &'schema Schema) -> Self {
        Self {
            file_path: None,
            max_depth: None,
            schema,
        }
    }

    /// The file locations of the document's parts will refer to.
    pub fn with_file_path(mut self, file_path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    /// Reports documents whose field nesting exceeds `max_depth`.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses `query_src` and builds it. A syntax error yields an (otherwise
    /// empty) document carrying a single [codes::SYNTAX_ERROR] message.
    pub fn build_from_str(&self, query_src: &str) -> QueryDocument {
        match ast::query::parse(query_src) {
            Ok(ast_doc) => self.build_with_object_orders(&ast_doc, outermost_object_orders(query_src)),
            Err(err) => {
                let document = QueryDocument::new();
                let location = SourceLocation {
                    file: self.file_path.clone(),
                    ..SourceLocation::default()
                };
                document.messages().critical(
                    codes::SYNTAX_ERROR,
                    format!("Syntax error: {err}"),
                    SourceOrigin::new(location, SourcePath::new()),
                );
                document
            },
        }
    }

    /// Builds an already parsed document. The syntax tree does not record the
    /// order of object literal fields, so they follow name order.
    pub fn build(&self, ast_doc: &ast::query::Document) -> QueryDocument {
        self.build_with_object_orders(ast_doc, VecDeque::new())
    }

    fn build_with_object_orders(
        &self,
        ast_doc: &ast::query::Document,
        object_orders: VecDeque<ObjectFieldOrder>,
    ) -> QueryDocument {
        let mut pass = BuildPass {
            document: QueryDocument::new(),
            file_path: self.file_path.as_deref(),
            object_orders,
            schema: self.schema,
        };
        let root = pass.document.root();
        for def in &ast_doc.definitions {
            match def {
                ast::query::Definition::Operation(op) => pass.add_operation(root, op),
                ast::query::Definition::Fragment(frag) => pass.add_fragment(root, frag),
            }
        }

        let mut document = pass.document;
        document.finalize();
        DocumentValidator::new(self.schema, &document)
            .with_max_depth(self.max_depth)
            .validate();
        tracing::debug!(
            parts = document.len(),
            operations = document.operations().len(),
            messages = document.messages().len(),
            "Built query document",
        );
        document
    }
}

struct BuildPass<'a> {
    document: QueryDocument,
    file_path: Option<&'a Path>,
    /// Source orders of the outermost object literals not yet built.
    object_orders: VecDeque<ObjectFieldOrder>,
    schema: &'a Schema,
}
impl BuildPass<'_> {
    fn loc(&self, pos: &ast::AstPos) -> SourceLocation {
        SourceLocation::from_ast_pos(self.file_path, pos)
    }

    fn add_operation(&mut self, parent: DocumentPartId, op: &ast::query::OperationDefinition) {
        use ast::query::OperationDefinition as Op;
        let (kind, position, name, variables, directives, selection_set) = match op {
            Op::SelectionSet(ss) => (OperationKind::Query, &ss.span.0, None, &[][..], &[][..], ss),
            Op::Query(q) => (
                OperationKind::Query,
                &q.position,
                q.name.as_deref(),
                q.variable_definitions.as_slice(),
                q.directives.as_slice(),
                &q.selection_set,
            ),
            Op::Mutation(m) => (
                OperationKind::Mutation,
                &m.position,
                m.name.as_deref(),
                m.variable_definitions.as_slice(),
                m.directives.as_slice(),
                &m.selection_set,
            ),
            Op::Subscription(s) => (
                OperationKind::Subscription,
                &s.position,
                s.name.as_deref(),
                s.variable_definitions.as_slice(),
                s.directives.as_slice(),
                &s.selection_set,
            ),
        };

        let root_type_name = self.schema.root_type_name(kind);
        let op_id = self.document.add_child(
            parent,
            DocumentPart::Operation(OperationPart::new(kind, name, root_type_name)),
            self.loc(position),
        );
        if root_type_name.is_none() {
            self.document.messages().critical(
                codes::INVALID_DOCUMENT,
                format!("The schema does not support {} operations", kind.keyword()),
                self.document.part(op_id).origin(),
            );
        }

        for var_def in variables {
            self.add_variable(op_id, var_def);
        }
        self.add_directives(op_id, directives, kind.directive_location());
        self.add_selection_set(op_id, selection_set, root_type_name);
    }

    fn add_fragment(&mut self, parent: DocumentPartId, frag: &ast::query::FragmentDefinition) {
        let ast::query::TypeCondition::On(type_condition) = &frag.type_condition;
        let frag_id = self.document.add_child(
            parent,
            DocumentPart::NamedFragment(NamedFragmentPart {
                directives: vec![],
                name: frag.name.clone(),
                selection_set: None,
                type_condition: type_condition.clone(),
            }),
            self.loc(&frag.position),
        );
        self.add_directives(frag_id, &frag.directives, DirectiveLocation::FRAGMENT_DEFINITION);
        self.add_selection_set(frag_id, &frag.selection_set, Some(type_condition.as_str()));
    }

    fn add_variable(&mut self, op_id: DocumentPartId, var_def: &ast::query::VariableDefinition) {
        let type_expression = TypeExpression::from_ast(&var_def.var_type);
        let location = self.loc(&var_def.position);
        let var_id = self.document.add_child(
            op_id,
            DocumentPart::Variable(VariablePart {
                default_value: None,
                name: var_def.name.clone(),
                type_expression: type_expression.clone(),
            }),
            location.clone(),
        );
        if let Some(default_value) = &var_def.default_value {
            self.add_value(var_id, default_value, Some(&type_expression), &location, None);
        }
    }

    fn add_selection_set(
        &mut self,
        parent: DocumentPartId,
        selection_set: &ast::query::SelectionSet,
        type_name: Option<&str>,
    ) {
        if selection_set.items.is_empty() {
            return;
        }
        let ss_id = self.document.add_child(
            parent,
            DocumentPart::FieldSelectionSet(FieldSelectionSetPart::new(type_name)),
            self.loc(&selection_set.span.0),
        );
        for selection in &selection_set.items {
            self.add_selection(ss_id, selection, type_name);
        }
    }

    fn add_selection(
        &mut self,
        ss_id: DocumentPartId,
        selection: &ast::query::Selection,
        parent_type_name: Option<&str>,
    ) {
        use ast::query::Selection;
        match selection {
            Selection::Field(field) => {
                let parent_type = parent_type_name.and_then(|name| self.schema.type_by_name(name));
                let graph_field = match parent_type {
                    Some(parent_type) if field.name == TYPENAME_FIELD_NAME && parent_type.is_composite() => {
                        Some(self.schema.typename_field().clone())
                    },
                    Some(parent_type) => parent_type.field(field.name.as_str()).cloned(),
                    None => None,
                };
                let child_type_name = graph_field
                    .as_ref()
                    .map(|f| f.type_expression().type_name().to_string());
                let declared_args = graph_field
                    .as_ref()
                    .map(|f| f.arguments().clone())
                    .unwrap_or_default();

                let location = self.loc(&field.position);
                let field_id = self.document.add_child(
                    ss_id,
                    DocumentPart::Field(FieldPart::new(
                        field.name.as_str(),
                        field.alias.as_deref(),
                        graph_field,
                        parent_type_name,
                    )),
                    location.clone(),
                );
                for (arg_name, arg_value) in &field.arguments {
                    self.add_argument(field_id, arg_name, arg_value, declared_args.get(arg_name), &location, None);
                }
                self.add_directives(field_id, &field.directives, DirectiveLocation::FIELD);
                self.add_selection_set(field_id, &field.selection_set, child_type_name.as_deref());
            },

            Selection::FragmentSpread(spread) => {
                let spread_id = self.document.add_child(
                    ss_id,
                    DocumentPart::FragmentSpread(FragmentSpreadPart {
                        directives: vec![],
                        fragment_name: spread.fragment_name.clone(),
                    }),
                    self.loc(&spread.position),
                );
                self.add_directives(spread_id, &spread.directives, DirectiveLocation::FRAGMENT_SPREAD);
            },

            Selection::InlineFragment(inline) => {
                let type_condition = inline
                    .type_condition
                    .as_ref()
                    .map(|ast::query::TypeCondition::On(name)| name.clone());
                let inner_type_name = type_condition
                    .clone()
                    .or_else(|| parent_type_name.map(|name| name.to_string()));
                let inline_id = self.document.add_child(
                    ss_id,
                    DocumentPart::InlineFragment(InlineFragmentPart {
                        directives: vec![],
                        selection_set: None,
                        type_condition,
                    }),
                    self.loc(&inline.position),
                );
                self.add_directives(inline_id, &inline.directives, DirectiveLocation::INLINE_FRAGMENT);
                self.add_selection_set(inline_id, &inline.selection_set, inner_type_name.as_deref());
            },
        }
    }

    fn add_directives(
        &mut self,
        parent: DocumentPartId,
        directives: &[ast::query::Directive],
        location: DirectiveLocation,
    ) {
        for ast_directive in directives {
            let directive = self.schema.directive(ast_directive.name.as_str()).map(Arc::clone);
            let declared_args: IndexMap<String, FieldArgument> = directive
                .as_ref()
                .map(|d| d.arguments().clone())
                .unwrap_or_default();
            let dir_location = self.loc(&ast_directive.position);
            let dir_id = self.document.add_child(
                parent,
                DocumentPart::Directive(DirectivePart::new(
                    ast_directive.name.as_str(),
                    directive,
                    location,
                )),
                dir_location.clone(),
            );
            for (arg_name, arg_value) in &ast_directive.arguments {
                self.add_argument(dir_id, arg_name, arg_value, declared_args.get(arg_name), &dir_location, None);
            }
        }
    }

    /// Arguments carry no position of their own in the syntax tree; they are
    /// attributed to their owner's location.
    ///
    /// `object_orders` holds the orders of the object literals within
    /// `value`. `None` takes them from the document-wide queue.
    fn add_argument(
        &mut self,
        parent: DocumentPartId,
        name: &str,
        value: &ast::query::Value,
        declared: Option<&FieldArgument>,
        location: &SourceLocation,
        object_orders: Option<&mut VecDeque<ObjectFieldOrder>>,
    ) {
        let arg_id = self.document.add_child(
            parent,
            DocumentPart::InputArgument(InputArgumentPart::new(name, declared.cloned())),
            location.clone(),
        );
        self.add_value(arg_id, value, declared.map(|arg| arg.type_expression()), location, object_orders);
    }

    fn add_value(
        &mut self,
        parent: DocumentPartId,
        value: &ast::query::Value,
        expected: Option<&TypeExpression>,
        location: &SourceLocation,
        mut object_orders: Option<&mut VecDeque<ObjectFieldOrder>>,
    ) {
        use ast::query::Value as V;
        let supplied = match value {
            V::Boolean(b) => SuppliedValue::Scalar(ScalarLiteral::Boolean(*b)),
            V::Enum(name) => SuppliedValue::Enum(name.clone()),
            V::Float(f) => SuppliedValue::Scalar(ScalarLiteral::Float(*f)),
            V::Int(i) => match i.as_i64() {
                Some(i) => SuppliedValue::Scalar(ScalarLiteral::Int(i)),
                None => SuppliedValue::Null,
            },
            V::Null => SuppliedValue::Null,
            V::String(s) => SuppliedValue::Scalar(ScalarLiteral::String(s.clone())),
            V::Variable(name) => SuppliedValue::Variable(name.clone()),
            V::List(_) => SuppliedValue::List(ListSuppliedValue::default()),
            V::Object(_) => SuppliedValue::Complex(ComplexSuppliedValue::default()),
        };
        let value_id = self.document.add_child(
            parent,
            DocumentPart::SuppliedValue(supplied),
            location.clone(),
        );

        match value {
            V::List(items) => {
                // A non-list expected type still accepts a list literal; it
                // is reported during coercion.
                let item_type = expected.and_then(|t| t.list_item_type());
                for item in items {
                    self.add_value(
                        value_id,
                        item,
                        item_type.as_ref().or(expected),
                        location,
                        object_orders.as_deref_mut(),
                    );
                }
            },
            V::Object(fields) => {
                let input_type = expected
                    .and_then(|t| self.schema.type_by_name(t.type_name()))
                    .and_then(|t| match t {
                        GraphType::InputObject(input_type) => Some(input_type.clone()),
                        _ => None,
                    });
                let order = match object_orders {
                    Some(object_orders) => object_orders.pop_front(),
                    None => self.object_orders.pop_front(),
                };
                for (field_name, field_value, mut nested) in arrange_object_fields(fields, order) {
                    let declared = input_type.as_ref().and_then(|t| t.field(field_name));
                    self.add_argument(value_id, field_name, field_value, declared, location, Some(&mut nested));
                }
            },
            _ => (),
        }
    }
}

/// Pairs the fields of an object literal with their source order. Repeated
/// names are kept (each repeat carries the surviving value). Without an
/// order, or for names the order does not mention, fields follow the map's
/// name order.
fn arrange_object_fields<'v>(
    fields: &'v BTreeMap<String, ast::query::Value>,
    order: Option<ObjectFieldOrder>,
) -> Vec<(&'v str, &'v ast::query::Value, VecDeque<ObjectFieldOrder>)> {
    let mut arranged = vec![];
    let mut seen: HashSet<&str> = HashSet::new();
    for (name, nested) in order.map(ObjectFieldOrder::into_fields).unwrap_or_default() {
        if let Some((name, value)) = fields.get_key_value(name.as_str()) {
            seen.insert(name.as_str());
            arranged.push((name.as_str(), value, nested));
        }
    }
    for (name, value) in fields {
        if !seen.contains(name.as_str()) {
            arranged.push((name.as_str(), value, VecDeque::new()));
        }
    }
    arranged
}
