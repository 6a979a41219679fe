use crate::document::DocumentPartId;
use crate::document::ExecutableFieldSelectionSet;
use crate::document::InputArgumentCollection;
use crate::document::SuppliedValue;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::FieldArgument;
use crate::types::GraphField;
use crate::types::TypeExpression;
use indexmap::IndexMap;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    pub fn directive_location(&self) -> DirectiveLocation {
        match self {
            OperationKind::Mutation => DirectiveLocation::MUTATION,
            OperationKind::Query => DirectiveLocation::QUERY,
            OperationKind::Subscription => DirectiveLocation::SUBSCRIPTION,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            OperationKind::Mutation => "mutation",
            OperationKind::Query => "query",
            OperationKind::Subscription => "subscription",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DocumentPartType {
    Directive,
    Document,
    Field,
    FieldSelectionSet,
    FragmentSpread,
    InlineFragment,
    InputArgument,
    NamedFragment,
    Operation,
    SuppliedValue,
    Variable,
}
impl DocumentPartType {
    /// Resolvable parts are those that can be included in or excluded from a
    /// response.
    pub fn is_resolvable(&self) -> bool {
        matches!(
            self,
            DocumentPartType::Field
                | DocumentPartType::FragmentSpread
                | DocumentPartType::InlineFragment,
        )
    }
}

/// A single node's kind-specific payload within a
/// [QueryDocument](crate::document::QueryDocument).
#[derive(Debug)]
pub enum DocumentPart {
    Directive(DirectivePart),
    Document,
    Field(FieldPart),
    FieldSelectionSet(FieldSelectionSetPart),
    FragmentSpread(FragmentSpreadPart),
    InlineFragment(InlineFragmentPart),
    InputArgument(InputArgumentPart),
    NamedFragment(NamedFragmentPart),
    Operation(OperationPart),
    SuppliedValue(SuppliedValue),
    Variable(VariablePart),
}
impl DocumentPart {
    pub fn part_type(&self) -> DocumentPartType {
        match self {
            DocumentPart::Directive(_) => DocumentPartType::Directive,
            DocumentPart::Document => DocumentPartType::Document,
            DocumentPart::Field(_) => DocumentPartType::Field,
            DocumentPart::FieldSelectionSet(_) => DocumentPartType::FieldSelectionSet,
            DocumentPart::FragmentSpread(_) => DocumentPartType::FragmentSpread,
            DocumentPart::InlineFragment(_) => DocumentPartType::InlineFragment,
            DocumentPart::InputArgument(_) => DocumentPartType::InputArgument,
            DocumentPart::NamedFragment(_) => DocumentPartType::NamedFragment,
            DocumentPart::Operation(_) => DocumentPartType::Operation,
            DocumentPart::SuppliedValue(_) => DocumentPartType::SuppliedValue,
            DocumentPart::Variable(_) => DocumentPartType::Variable,
        }
    }

    /// The segment this part contributes to its descendants' paths, if any.
    pub(crate) fn path_segment(&self) -> Option<String> {
        match self {
            DocumentPart::Directive(d) => Some(format!("@{}", d.name)),
            DocumentPart::Document => Some("document".to_string()),
            DocumentPart::Field(f) => Some(f.response_key().to_string()),
            DocumentPart::FieldSelectionSet(_) => None,
            DocumentPart::FragmentSpread(s) => Some(format!("...{}", s.fragment_name)),
            DocumentPart::InlineFragment(i) => match &i.type_condition {
                Some(type_name) => Some(format!("... on {type_name}")),
                None => Some("...".to_string()),
            },
            DocumentPart::InputArgument(a) => Some(a.name.clone()),
            DocumentPart::NamedFragment(f) => Some(format!("fragment {}", f.name)),
            DocumentPart::Operation(o) => Some(match &o.name {
                Some(name) => format!("{} {name}", o.kind.keyword()),
                None => o.kind.keyword().to_string(),
            }),
            DocumentPart::SuppliedValue(_) => None,
            DocumentPart::Variable(v) => Some(format!("${}", v.name)),
        }
    }
}

/// A directive applied somewhere in the document.
#[derive(Debug)]
pub struct DirectivePart {
    pub(crate) arguments: InputArgumentCollection,
    pub(crate) directive: Option<Arc<Directive>>,
    pub(crate) location: DirectiveLocation,
    pub(crate) name: String,
}
impl DirectivePart {
    pub(crate) fn new(
        name: &str,
        directive: Option<Arc<Directive>>,
        location: DirectiveLocation,
    ) -> Self {
        Self {
            arguments: InputArgumentCollection::new(),
            directive,
            location,
            name: name.to_string(),
        }
    }

    pub fn arguments(&self) -> &InputArgumentCollection {
        &self.arguments
    }

    /// The schema's definition of this directive, when one exists.
    pub fn directive(&self) -> Option<&Arc<Directive>> {
        self.directive.as_ref()
    }

    pub fn location(&self) -> DirectiveLocation {
        self.location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Debug)]
pub struct FieldPart {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: InputArgumentCollection,
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) field: Option<Arc<GraphField>>,
    pub(crate) name: String,
    pub(crate) parent_type_name: Option<String>,
    pub(crate) selection_set: Option<DocumentPartId>,
}
impl FieldPart {
    pub(crate) fn new(
        name: &str,
        alias: Option<&str>,
        field: Option<Arc<GraphField>>,
        parent_type_name: Option<&str>,
    ) -> Self {
        Self {
            alias: alias.map(|a| a.to_string()),
            arguments: InputArgumentCollection::new(),
            directives: vec![],
            field,
            name: name.to_string(),
            parent_type_name: parent_type_name.map(|t| t.to_string()),
            selection_set: None,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &InputArgumentCollection {
        &self.arguments
    }

    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    /// The schema field this selection targets. `None` when the field could
    /// not be found on its parent type.
    pub fn field(&self) -> Option<&Arc<GraphField>> {
        self.field.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parent_type_name(&self) -> Option<&str> {
        self.parent_type_name.as_deref()
    }

    /// The key this field's value is recorded under in a response: the alias
    /// if one was given, the field name otherwise.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(self.name.as_str())
    }

    pub fn selection_set(&self) -> Option<DocumentPartId> {
        self.selection_set
    }
}

#[derive(Debug)]
pub struct FieldSelectionSetPart {
    pub(crate) executable: ExecutableFieldSelectionSet,
    pub(crate) type_name: Option<String>,
}
impl FieldSelectionSetPart {
    pub(crate) fn new(type_name: Option<&str>) -> Self {
        Self {
            executable: ExecutableFieldSelectionSet::default(),
            type_name: type_name.map(|t| t.to_string()),
        }
    }

    /// The fields this selection set executes with fragments expanded.
    /// Populated once the document has been fully built.
    pub fn executable(&self) -> &ExecutableFieldSelectionSet {
        &self.executable
    }

    /// The type fields of this selection set are selected from.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }
}

#[derive(Debug)]
pub struct FragmentSpreadPart {
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) fragment_name: String,
}
impl FragmentSpreadPart {
    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}

#[derive(Debug)]
pub struct InlineFragmentPart {
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) selection_set: Option<DocumentPartId>,
    pub(crate) type_condition: Option<String>,
}
impl InlineFragmentPart {
    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    pub fn selection_set(&self) -> Option<DocumentPartId> {
        self.selection_set
    }

    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }
}

/// A named argument (or input object field) with its supplied value.
#[derive(Debug)]
pub struct InputArgumentPart {
    pub(crate) argument: Option<FieldArgument>,
    pub(crate) name: String,
    pub(crate) value: Option<DocumentPartId>,
}
impl InputArgumentPart {
    pub(crate) fn new(name: &str, argument: Option<FieldArgument>) -> Self {
        Self {
            argument,
            name: name.to_string(),
            value: None,
        }
    }

    /// The schema's declaration of this argument, when one exists.
    pub fn argument(&self) -> Option<&FieldArgument> {
        self.argument.as_ref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> Option<DocumentPartId> {
        self.value
    }
}

#[derive(Debug)]
pub struct NamedFragmentPart {
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) name: String,
    pub(crate) selection_set: Option<DocumentPartId>,
    pub(crate) type_condition: String,
}
impl NamedFragmentPart {
    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> Option<DocumentPartId> {
        self.selection_set
    }

    pub fn type_condition(&self) -> &str {
        self.type_condition.as_str()
    }
}

#[derive(Debug)]
pub struct OperationPart {
    pub(crate) directives: Vec<DocumentPartId>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) root_type_name: Option<String>,
    pub(crate) selection_set: Option<DocumentPartId>,
    pub(crate) variables: IndexMap<String, DocumentPartId>,
}
impl OperationPart {
    pub(crate) fn new(
        kind: OperationKind,
        name: Option<&str>,
        root_type_name: Option<&str>,
    ) -> Self {
        Self {
            directives: vec![],
            kind,
            name: name.map(|n| n.to_string()),
            root_type_name: root_type_name.map(|t| t.to_string()),
            selection_set: None,
            variables: IndexMap::new(),
        }
    }

    pub fn directives(&self) -> &[DocumentPartId] {
        &self.directives
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The schema type this operation's root fields are selected from.
    /// `None` when the schema does not support this kind of operation.
    pub fn root_type_name(&self) -> Option<&str> {
        self.root_type_name.as_deref()
    }

    pub fn selection_set(&self) -> Option<DocumentPartId> {
        self.selection_set
    }

    pub fn variables(&self) -> &IndexMap<String, DocumentPartId> {
        &self.variables
    }
}

/// A variable declared by an operation.
#[derive(Debug)]
pub struct VariablePart {
    pub(crate) default_value: Option<DocumentPartId>,
    pub(crate) name: String,
    pub(crate) type_expression: TypeExpression,
}
impl VariablePart {
    pub fn default_value(&self) -> Option<DocumentPartId> {
        self.default_value
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expression(&self) -> &TypeExpression {
        &self.type_expression
    }
}
