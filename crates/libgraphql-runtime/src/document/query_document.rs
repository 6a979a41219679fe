use crate::document::ComplexValueRef;
use crate::document::DocumentPart;
use crate::document::DocumentPartType;
use crate::document::ExecutableField;
use crate::document::ExecutableFieldSelectionSet;
use crate::document::NamedFragmentCollection;
use crate::document::SuppliedValue;
use crate::document::SuppliedValueRef;
use crate::loc::SourceLocation;
use crate::loc::SourceOrigin;
use crate::loc::SourcePath;
use crate::messages::GraphMessageCollection;
use crate::messages::codes;
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

/// The key the anonymous operation (if any) is recorded under in
/// [QueryDocument::operations].
pub const ANONYMOUS_OPERATION_KEY: &str = "";

/// The most fields a single selection set may expand to once its fragments
/// are flattened.
pub const MAX_EXPANDED_FIELDS: usize = 10_000;

/// Identifies one node within a single [QueryDocument].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentPartId(pub(crate) usize);
impl DocumentPartId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct DocumentPartNode {
    children: Vec<DocumentPartId>,
    depth: usize,
    id: DocumentPartId,
    included: AtomicBool,
    location: SourceLocation,
    parent: Option<DocumentPartId>,
    part: DocumentPart,
    path: SourcePath,
}
impl DocumentPartNode {
    pub fn children(&self) -> &[DocumentPartId] {
        &self.children
    }

    /// Distance from the document root. Fixed when the node is attached.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn id(&self) -> DocumentPartId {
        self.id
    }

    /// Whether this part currently contributes to a response. Always `true`
    /// for parts that are not resolvable.
    pub fn is_included(&self) -> bool {
        self.included.load(Ordering::Acquire)
    }

    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    pub fn origin(&self) -> SourceOrigin {
        SourceOrigin::new(self.location.clone(), self.path.clone())
    }

    pub fn parent(&self) -> Option<DocumentPartId> {
        self.parent
    }

    pub fn part(&self) -> &DocumentPart {
        &self.part
    }

    pub fn part_type(&self) -> DocumentPartType {
        self.part.part_type()
    }

    pub fn path(&self) -> &SourcePath {
        &self.path
    }
}

/// What a newly attached part offers to the ancestors that index it.
enum ChildIndexKey {
    Argument(String),
    Directive,
    NamedFragment(String),
    Operation(Option<String>),
    SelectionSet,
    Value,
    Variable(String),
    Other,
}

/// The root of a document part tree built from a query document.
///
/// Parts are attached with [add_child](QueryDocument::add_child). Each time a
/// part is attached, every ancestor is given the chance to index it (along
/// with its depth relative to that ancestor). The document itself indexes
/// operations and named fragments this way.
#[derive(Debug)]
pub struct QueryDocument {
    max_field_depth: usize,
    messages: GraphMessageCollection,
    named_fragments: NamedFragmentCollection,
    operations: IndexMap<String, DocumentPartId>,
    parts: Vec<DocumentPartNode>,
}
impl QueryDocument {
    pub fn new() -> Self {
        let root = DocumentPartNode {
            children: vec![],
            depth: 0,
            id: DocumentPartId(0),
            included: AtomicBool::new(true),
            location: SourceLocation::default(),
            parent: None,
            part: DocumentPart::Document,
            path: SourcePath::new().with_field("document"),
        };
        Self {
            max_field_depth: 0,
            messages: GraphMessageCollection::new(),
            named_fragments: NamedFragmentCollection::default(),
            operations: IndexMap::new(),
            parts: vec![root],
        }
    }

    pub fn root(&self) -> DocumentPartId {
        DocumentPartId(0)
    }

    /// Attaches `part` as the last child of `parent` and notifies every
    /// ancestor of the new part.
    pub fn add_child(
        &mut self,
        parent: DocumentPartId,
        part: DocumentPart,
        location: SourceLocation,
    ) -> DocumentPartId {
        let id = DocumentPartId(self.parts.len());
        let parent_node = &self.parts[parent.0];
        let path = match &parent_node.part {
            DocumentPart::SuppliedValue(SuppliedValue::List(list)) => {
                parent_node.path.with_index(list.items.len())
            },
            _ => match part.path_segment() {
                Some(segment) => parent_node.path.with_field(segment),
                None => parent_node.path.clone(),
            },
        };
        let depth = parent_node.depth + 1;
        self.parts.push(DocumentPartNode {
            children: vec![],
            depth,
            id,
            included: AtomicBool::new(true),
            location,
            parent: Some(parent),
            part,
            path,
        });
        self.parts[parent.0].children.push(id);
        self.notify_ancestors(id);
        id
    }

    fn index_key(&self, id: DocumentPartId) -> ChildIndexKey {
        match &self.parts[id.0].part {
            DocumentPart::Directive(_) => ChildIndexKey::Directive,
            DocumentPart::FieldSelectionSet(_) => ChildIndexKey::SelectionSet,
            DocumentPart::InputArgument(arg) => ChildIndexKey::Argument(arg.name.clone()),
            DocumentPart::NamedFragment(frag) => ChildIndexKey::NamedFragment(frag.name.clone()),
            DocumentPart::Operation(op) => ChildIndexKey::Operation(op.name.clone()),
            DocumentPart::SuppliedValue(_) => ChildIndexKey::Value,
            DocumentPart::Variable(var) => ChildIndexKey::Variable(var.name.clone()),
            DocumentPart::Document
                | DocumentPart::Field(_)
                | DocumentPart::FragmentSpread(_)
                | DocumentPart::InlineFragment(_) => ChildIndexKey::Other,
        }
    }

    fn notify_ancestors(&mut self, child: DocumentPartId) {
        let key = self.index_key(child);
        let child_origin = self.parts[child.0].origin();
        let mut relative_depth = 1;
        let mut current = self.parts[child.0].parent;
        while let Some(ancestor) = current {
            self.on_child_part_added(ancestor, child, &key, &child_origin, relative_depth);
            current = self.parts[ancestor.0].parent;
            relative_depth += 1;
        }
    }

    fn on_child_part_added(
        &mut self,
        ancestor: DocumentPartId,
        child: DocumentPartId,
        key: &ChildIndexKey,
        child_origin: &SourceOrigin,
        relative_depth: usize,
    ) {
        let ancestor_node = &mut self.parts[ancestor.0];
        match (&mut ancestor_node.part, key) {
            // Named fragments are indexed no matter how deep they are attached.
            (DocumentPart::Document, ChildIndexKey::NamedFragment(name)) => {
                if self.named_fragments.add(name, child).is_err() {
                    self.messages.critical(
                        codes::RULE_5_5_1_1_FRAGMENT_NAME_UNIQUENESS,
                        format!("Multiple fragments are named `{name}`"),
                        child_origin.clone(),
                    );
                }
            },

            (DocumentPart::Document, ChildIndexKey::Operation(name)) if relative_depth == 1 => {
                let key = name.as_deref().unwrap_or(ANONYMOUS_OPERATION_KEY);
                if self.operations.contains_key(key) {
                    // Repeated anonymous operations are reported by the
                    // lone-anonymous-operation rule instead.
                    if let Some(name) = name {
                        self.messages.critical(
                            codes::RULE_5_2_1_1_OPERATION_NAME_UNIQUENESS,
                            format!("Multiple operations are named `{name}`"),
                            child_origin.clone(),
                        );
                    }
                } else {
                    self.operations.insert(key.to_string(), child);
                }
            },

            (DocumentPart::Operation(op), ChildIndexKey::Variable(name)) if relative_depth == 1 => {
                if op.variables.contains_key(name) {
                    self.messages.critical(
                        codes::RULE_5_8_1_VARIABLE_UNIQUENESS,
                        format!("Variable `${name}` is declared more than once"),
                        child_origin.clone(),
                    );
                } else {
                    op.variables.insert(name.clone(), child);
                }
            },
            (DocumentPart::Operation(op), ChildIndexKey::Directive) if relative_depth == 1 => {
                op.directives.push(child);
            },
            (DocumentPart::Operation(op), ChildIndexKey::SelectionSet) if relative_depth == 1 => {
                op.selection_set = Some(child);
            },

            (DocumentPart::Field(field), ChildIndexKey::Argument(name)) if relative_depth == 1 => {
                if !field.arguments.add(name, child) {
                    self.messages.critical(
                        codes::RULE_5_4_2_ARGUMENT_UNIQUENESS,
                        format!("Argument `{name}` is supplied more than once"),
                        child_origin.clone(),
                    );
                }
            },
            (DocumentPart::Field(field), ChildIndexKey::Directive) if relative_depth == 1 => {
                field.directives.push(child);
            },
            (DocumentPart::Field(field), ChildIndexKey::SelectionSet) if relative_depth == 1 => {
                field.selection_set = Some(child);
            },

            (DocumentPart::Directive(directive), ChildIndexKey::Argument(name)) if relative_depth == 1 => {
                if !directive.arguments.add(name, child) {
                    self.messages.critical(
                        codes::RULE_5_4_2_ARGUMENT_UNIQUENESS,
                        format!("Argument `{name}` is supplied more than once"),
                        child_origin.clone(),
                    );
                }
            },

            (DocumentPart::NamedFragment(frag), ChildIndexKey::Directive) if relative_depth == 1 => {
                frag.directives.push(child);
            },
            (DocumentPart::NamedFragment(frag), ChildIndexKey::SelectionSet) if relative_depth == 1 => {
                frag.selection_set = Some(child);
            },
            (DocumentPart::InlineFragment(frag), ChildIndexKey::Directive) if relative_depth == 1 => {
                frag.directives.push(child);
            },
            (DocumentPart::InlineFragment(frag), ChildIndexKey::SelectionSet) if relative_depth == 1 => {
                frag.selection_set = Some(child);
            },
            (DocumentPart::FragmentSpread(spread), ChildIndexKey::Directive) if relative_depth == 1 => {
                spread.directives.push(child);
            },

            (DocumentPart::InputArgument(arg), ChildIndexKey::Value) if relative_depth == 1 => {
                if arg.value.is_none() {
                    arg.value = Some(child);
                }
            },
            (DocumentPart::Variable(var), ChildIndexKey::Value) if relative_depth == 1 => {
                if var.default_value.is_none() {
                    var.default_value = Some(child);
                }
            },

            // Complex values index only their own fields, never the fields of
            // objects nested inside them.
            (
                DocumentPart::SuppliedValue(SuppliedValue::Complex(complex)),
                ChildIndexKey::Argument(name),
            ) if relative_depth == 1 => {
                if !complex.arguments.add(name, child) {
                    self.messages.critical(
                        codes::RULE_5_6_2_INPUT_OBJECT_FIELD_UNIQUENESS,
                        format!("Input field `{name}` is supplied more than once"),
                        child_origin.clone(),
                    );
                }
            },
            (
                DocumentPart::SuppliedValue(SuppliedValue::List(list)),
                ChildIndexKey::Value,
            ) if relative_depth == 1 => {
                list.items.push(child);
            },

            _ => (),
        }
    }

    /// Computes the executable field list of every selection set and records
    /// the deepest field nesting. Called once the tree is fully built.
    pub(crate) fn finalize(&mut self) {
        let mut computed = vec![];
        let mut expansion = FieldExpansion::new(self, MAX_EXPANDED_FIELDS);
        let mut limit_reported = false;
        for node in &self.parts {
            let DocumentPart::FieldSelectionSet(ss) = &node.part else { continue };
            let mut fields = vec![];
            expansion.truncated = false;
            expansion.expand(node.id, ss.type_name.as_deref(), &SmallVec::new(), &mut fields);
            if expansion.truncated && !limit_reported {
                limit_reported = true;
                self.messages.critical(
                    codes::FIELD_EXPANSION_LIMIT_EXCEEDED,
                    format!(
                        "A selection set expands to more than {MAX_EXPANDED_FIELDS} fields once its \
                         fragments are flattened",
                    ),
                    node.origin(),
                );
            }

            let mut executable = ExecutableFieldSelectionSet::default();
            for field in fields {
                if let DocumentPart::Field(field_part) = &self.parts[field.field.0].part {
                    executable.push(field_part.response_key(), field);
                }
            }
            computed.push((node.id, executable));
        }
        for (id, executable) in computed {
            if let DocumentPart::FieldSelectionSet(ss) = &mut self.parts[id.0].part {
                ss.executable = executable;
            }
        }

        let mut max_field_depth = 0;
        let mut fragment_depths = HashMap::new();
        for (_, op_id) in self.operations.iter() {
            let mut visiting = vec![];
            let depth = self.field_depth(*op_id, &mut visiting, &mut fragment_depths);
            max_field_depth = max_field_depth.max(depth);
        }
        self.max_field_depth = max_field_depth;
    }

    /// Deepest nesting of fields below `id`, following fragment spreads. Each
    /// named fragment's depth is computed once and kept in `fragment_depths`.
    fn field_depth(
        &self,
        id: DocumentPartId,
        visiting: &mut Vec<DocumentPartId>,
        fragment_depths: &mut HashMap<DocumentPartId, usize>,
    ) -> usize {
        let node = &self.parts[id.0];
        let own = usize::from(matches!(node.part, DocumentPart::Field(_)));
        let mut deepest = 0;
        if let DocumentPart::FragmentSpread(spread) = &node.part {
            if let Some(fragment_id) = self.named_fragments.get(spread.fragment_name.as_str()) {
                deepest = match fragment_depths.get(&fragment_id) {
                    Some(depth) => *depth,
                    None if visiting.contains(&fragment_id) => 0,
                    None => {
                        visiting.push(fragment_id);
                        let depth = self.field_depth(fragment_id, visiting, fragment_depths);
                        visiting.pop();
                        fragment_depths.insert(fragment_id, depth);
                        depth
                    },
                };
            }
        }
        for child in &node.children {
            deepest = deepest.max(self.field_depth(*child, visiting, fragment_depths));
        }
        own + deepest
    }

    pub fn get(&self, id: DocumentPartId) -> Option<&DocumentPartNode> {
        self.parts.get(id.0)
    }

    /// Panics if `id` was not produced by this document.
    pub fn part(&self, id: DocumentPartId) -> &DocumentPartNode {
        &self.parts[id.0]
    }

    pub fn parts(&self) -> impl Iterator<Item = &DocumentPartNode> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.len() <= 1
    }

    /// Ancestors of `id` from its parent up to (and including) the root.
    pub fn ancestors(&self, id: DocumentPartId) -> impl Iterator<Item = &DocumentPartNode> {
        std::iter::successors(
            self.get(id).and_then(|node| node.parent).and_then(|p| self.get(p)),
            move |node| node.parent.and_then(|p| self.get(p)),
        )
    }

    pub fn is_included(&self, id: DocumentPartId) -> bool {
        self.get(id).is_none_or(|node| node.is_included())
    }

    /// Toggles whether a resolvable part contributes to a response. Returns
    /// `false` (and changes nothing) for parts that are not resolvable.
    pub fn set_included(&self, id: DocumentPartId, included: bool) -> bool {
        match self.get(id) {
            Some(node) if node.part_type().is_resolvable() => {
                node.included.store(included, Ordering::Release);
                true
            },
            _ => false,
        }
    }

    pub fn supplied_value(&self, id: DocumentPartId) -> Option<SuppliedValueRef<'_>> {
        match self.get(id).map(|node| node.part()) {
            Some(DocumentPart::SuppliedValue(value)) => Some(SuppliedValueRef {
                document: self,
                id,
                value,
            }),
            _ => None,
        }
    }

    pub fn complex_value(&self, id: DocumentPartId) -> Option<ComplexValueRef<'_>> {
        self.supplied_value(id)?.as_complex()
    }

    /// The deepest nesting of field selections across every operation.
    pub fn max_field_depth(&self) -> usize {
        self.max_field_depth
    }

    pub fn messages(&self) -> &GraphMessageCollection {
        &self.messages
    }

    pub fn named_fragments(&self) -> &NamedFragmentCollection {
        &self.named_fragments
    }

    /// Operations keyed by name. The anonymous operation is keyed by
    /// [ANONYMOUS_OPERATION_KEY].
    pub fn operations(&self) -> &IndexMap<String, DocumentPartId> {
        &self.operations
    }
}
impl Default for QueryDocument {
    fn default() -> Self {
        Self::new()
    }
}

/// Expanded fields of a named fragment, relative to the fragment itself.
struct ExpandedFragment {
    fields: Vec<ExecutableField>,
    truncated: bool,
}

/// Flattens selection sets through their fragments. Each named fragment is
/// expanded once and reused by every spread of it.
struct FieldExpansion<'d> {
    document: &'d QueryDocument,
    fragments: HashMap<DocumentPartId, ExpandedFragment>,
    limit: usize,
    truncated: bool,
    visiting: Vec<DocumentPartId>,
}
impl<'d> FieldExpansion<'d> {
    fn new(document: &'d QueryDocument, limit: usize) -> Self {
        Self {
            document,
            fragments: HashMap::new(),
            limit,
            truncated: false,
            visiting: vec![],
        }
    }

    fn expand(
        &mut self,
        selection_set: DocumentPartId,
        type_condition: Option<&str>,
        prefix: &SmallVec<[DocumentPartId; 2]>,
        out: &mut Vec<ExecutableField>,
    ) {
        let document = self.document;
        for child in &document.parts[selection_set.0].children {
            if out.len() >= self.limit {
                self.truncated = true;
                return;
            }
            match &document.parts[child.0].part {
                DocumentPart::Field(_) => out.push(ExecutableField {
                    field: *child,
                    fragments: prefix.clone(),
                    type_condition: type_condition.map(|t| t.to_string()),
                }),

                DocumentPart::InlineFragment(inline) => {
                    let Some(inline_ss) = inline.selection_set else { continue };
                    let mut inner_prefix = prefix.clone();
                    inner_prefix.push(*child);
                    self.expand(
                        inline_ss,
                        inline.type_condition.as_deref().or(type_condition),
                        &inner_prefix,
                        out,
                    );
                },

                DocumentPart::FragmentSpread(spread) => {
                    let Some(fragment_id) = document.named_fragments.get(spread.fragment_name.as_str()) else {
                        continue;
                    };
                    // Cycles are reported during validation, expansion just
                    // stops at the first repeat.
                    if self.visiting.contains(&fragment_id) {
                        continue;
                    }
                    self.expand_fragment(fragment_id);
                    let Some(expanded) = self.fragments.get(&fragment_id) else { continue };
                    if expanded.truncated {
                        self.truncated = true;
                    }
                    for field in &expanded.fields {
                        if out.len() >= self.limit {
                            self.truncated = true;
                            break;
                        }
                        let mut fragments = prefix.clone();
                        fragments.push(*child);
                        fragments.extend(field.fragments.iter().copied());
                        out.push(ExecutableField {
                            field: field.field,
                            fragments,
                            type_condition: field.type_condition.clone(),
                        });
                    }
                },

                _ => (),
            }
        }
    }

    fn expand_fragment(&mut self, fragment_id: DocumentPartId) {
        if self.fragments.contains_key(&fragment_id) {
            return;
        }
        let document = self.document;
        let DocumentPart::NamedFragment(fragment) = &document.parts[fragment_id.0].part else { return };
        let mut fields = vec![];
        let outer_truncated = std::mem::replace(&mut self.truncated, false);
        if let Some(fragment_ss) = fragment.selection_set {
            self.visiting.push(fragment_id);
            self.expand(fragment_ss, Some(fragment.type_condition.as_str()), &SmallVec::new(), &mut fields);
            self.visiting.pop();
        }
        let truncated = std::mem::replace(&mut self.truncated, outer_truncated);
        self.fragments.insert(fragment_id, ExpandedFragment { fields, truncated });
    }
}
