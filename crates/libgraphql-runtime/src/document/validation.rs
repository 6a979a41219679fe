use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::DocumentPartNode;
use crate::document::InputArgumentCollection;
use crate::document::QueryDocument;
use crate::document::SuppliedValue;
use crate::messages::codes;
use crate::schema::Schema;
use crate::types::FieldArgument;
use crate::variables::InputValueResolver;
use crate::variables::ResolvableValue;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use std::collections::VecDeque;

/// Applies the GraphQL specification's validation rules to a fully built
/// [QueryDocument].
///
/// Every violation is recorded as a message on the document; validation
/// itself never fails.
pub struct DocumentValidator<'a> {
    document: &'a QueryDocument,
    max_depth: Option<usize>,
    schema: &'a Schema,
}
impl<'a> DocumentValidator<'a> {
    pub fn new(schema: &'a Schema, document: &'a QueryDocument) -> Self {
        Self {
            document,
            max_depth: None,
            schema,
        }
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn validate(&self) {
        self.check_lone_anonymous_operation();
        for node in self.document.parts() {
            match node.part() {
                DocumentPart::Directive(_) => self.check_directive(node),
                DocumentPart::Field(_) => self.check_field(node),
                DocumentPart::FragmentSpread(spread) => {
                    if !self.document.named_fragments().contains(spread.fragment_name()) {
                        self.critical(
                            codes::RULE_5_5_2_1_FRAGMENT_SPREAD_TARGET_DEFINED,
                            format!("Unknown fragment `{}`", spread.fragment_name()),
                            node,
                        );
                    }
                },
                DocumentPart::InlineFragment(inline) => {
                    if let Some(type_condition) = inline.type_condition() {
                        self.check_type_condition(type_condition, node);
                    }
                },
                DocumentPart::NamedFragment(fragment) => {
                    self.check_type_condition(fragment.type_condition(), node);
                },
                _ => (),
            }
            self.check_directive_uniqueness(node);
        }
        self.check_fragment_usage();
        self.check_variable_usage();
        self.check_max_depth();
    }

    fn critical(&self, code: &str, message: String, node: &DocumentPartNode) {
        self.document.messages().critical(code, message, node.origin());
    }

    fn check_lone_anonymous_operation(&self) {
        let root = self.document.part(self.document.root());
        let operations: Vec<&DocumentPartNode> = root
            .children()
            .iter()
            .map(|id| self.document.part(*id))
            .filter(|node| matches!(node.part(), DocumentPart::Operation(_)))
            .collect();
        if operations.len() < 2 {
            return;
        }
        for node in operations {
            if let DocumentPart::Operation(op) = node.part() {
                if op.name().is_none() {
                    self.critical(
                        codes::RULE_5_2_2_1_LONE_ANONYMOUS_OPERATION,
                        "An anonymous operation must be the only operation in its document".to_string(),
                        node,
                    );
                }
            }
        }
    }

    fn check_field(&self, node: &DocumentPartNode) {
        let DocumentPart::Field(field_part) = node.part() else { return };
        let Some(field) = field_part.field() else {
            // Fields of unknown parent types are reported elsewhere (an
            // unknown fragment type condition, or an unsupported operation).
            if let Some(parent_type_name) = field_part.parent_type_name() {
                if self.schema.type_by_name(parent_type_name).is_some() {
                    self.critical(
                        codes::RULE_5_3_1_FIELD_SELECTIONS,
                        format!("Cannot query field `{}` on type `{parent_type_name}`", field_part.name()),
                        node,
                    );
                }
            }
            return;
        };

        let type_name = field.type_expression().type_name();
        let is_leaf = self
            .schema
            .type_by_name(type_name)
            .is_some_and(|graph_type| graph_type.is_leaf());
        match (is_leaf, field_part.selection_set().is_some()) {
            (true, true) => self.critical(
                codes::RULE_5_3_3_LEAF_FIELD_SELECTIONS,
                format!(
                    "Field `{}` of type `{type_name}` must not have a selection of subfields",
                    field_part.name(),
                ),
                node,
            ),
            (false, false) => self.critical(
                codes::RULE_5_3_3_LEAF_FIELD_SELECTIONS,
                format!(
                    "Field `{}` of type `{type_name}` must have a selection of subfields",
                    field_part.name(),
                ),
                node,
            ),
            _ => (),
        }

        self.check_arguments(
            node,
            &format!("field `{}`", field.route()),
            field_part.arguments(),
            field.arguments(),
        );
    }

    fn check_directive(&self, node: &DocumentPartNode) {
        let DocumentPart::Directive(directive_part) = node.part() else { return };
        let Some(directive) = directive_part.directive() else {
            self.critical(
                codes::RULE_5_7_1_DIRECTIVES_ARE_DEFINED,
                format!("Unknown directive `@{}`", directive_part.name()),
                node,
            );
            return;
        };
        if !directive.locations().contains(directive_part.location()) {
            self.critical(
                codes::RULE_5_7_2_DIRECTIVES_IN_VALID_LOCATIONS,
                format!(
                    "Directive `@{}` may not be used at this location",
                    directive_part.name(),
                ),
                node,
            );
        }
        self.check_arguments(
            node,
            &format!("directive `@{}`", directive.name()),
            directive_part.arguments(),
            directive.arguments(),
        );
    }

    fn check_arguments(
        &self,
        node: &DocumentPartNode,
        owner: &str,
        supplied: &InputArgumentCollection,
        declared: &IndexMap<String, FieldArgument>,
    ) {
        let resolver = InputValueResolver::new(self.schema);
        for (name, arg_id) in supplied.iter() {
            let Some(declaration) = declared.get(name) else {
                self.critical(
                    codes::RULE_5_4_1_ARGUMENT_NAMES,
                    format!("Unknown argument `{name}` on {owner}"),
                    self.document.part(arg_id),
                );
                continue;
            };

            // Values that reference variables are checked once the
            // variables are known.
            let value = match self.document.part(arg_id).part() {
                DocumentPart::InputArgument(arg) => arg.value().and_then(|id| self.document.supplied_value(id)),
                _ => None,
            };
            let Some(value) = value else { continue };
            if value.contains_variables() {
                continue;
            }
            if let Err(err) = resolver.coerce(ResolvableValue::Supplied(value), declaration.type_expression()) {
                self.critical(
                    codes::RULE_5_6_1_VALUES_OF_CORRECT_TYPE,
                    format!("Invalid value for argument `{name}` on {owner}: {err}"),
                    self.document.part(arg_id),
                );
            }
        }

        for (name, declaration) in declared {
            if declaration.is_required() && !supplied.contains(name) {
                self.critical(
                    codes::RULE_5_4_2_1_REQUIRED_ARGUMENTS,
                    format!(
                        "Missing required argument `{name}` of type `{}` on {owner}",
                        declaration.type_expression(),
                    ),
                    node,
                );
            }
        }
    }

    fn check_directive_uniqueness(&self, node: &DocumentPartNode) {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for child_id in node.children() {
            let child = self.document.part(*child_id);
            let DocumentPart::Directive(directive_part) = child.part() else { continue };
            let repeatable = directive_part
                .directive()
                .is_some_and(|directive| directive.is_repeatable());
            if !seen.insert(directive_part.name()) && !repeatable {
                self.critical(
                    codes::RULE_5_7_3_DIRECTIVES_UNIQUE_PER_LOCATION,
                    format!(
                        "Directive `@{}` may only be used once at this location",
                        directive_part.name(),
                    ),
                    child,
                );
            }
        }
    }

    fn check_type_condition(&self, type_condition: &str, node: &DocumentPartNode) {
        match self.schema.type_by_name(type_condition) {
            None => self.critical(
                codes::RULE_5_5_1_2_FRAGMENT_SPREAD_TYPE_EXISTENCE,
                format!("Unknown type `{type_condition}` in fragment type condition"),
                node,
            ),
            Some(graph_type) if !graph_type.is_composite() => self.critical(
                codes::RULE_5_5_1_3_FRAGMENTS_ON_COMPOSITE_TYPES,
                format!("Fragments cannot be declared on the non-composite type `{type_condition}`"),
                node,
            ),
            Some(_) => (),
        }
    }

    /// The top-level definition (operation or fragment) `id` belongs to.
    fn definition_of(&self, id: DocumentPartId) -> Option<DocumentPartId> {
        let root = self.document.root();
        let mut current = self.document.get(id)?;
        loop {
            match current.parent() {
                Some(parent) if parent == root => return Some(current.id()),
                Some(parent) => current = self.document.get(parent)?,
                None => return None,
            }
        }
    }

    /// Fragment names spread (directly) by each top-level definition, plus
    /// the variables each one references.
    fn definition_usage(&self) -> HashMap<DocumentPartId, DefinitionUsage<'a>> {
        let mut usage: HashMap<DocumentPartId, DefinitionUsage<'a>> = HashMap::new();
        let document: &'a QueryDocument = self.document;
        for node in document.parts() {
            let entry = match node.part() {
                DocumentPart::FragmentSpread(_) | DocumentPart::SuppliedValue(SuppliedValue::Variable(_)) => {
                    match self.definition_of(node.id()) {
                        Some(def_id) => usage.entry(def_id).or_default(),
                        None => continue,
                    }
                },
                _ => continue,
            };
            match node.part() {
                DocumentPart::FragmentSpread(spread) => entry.spreads.push(spread.fragment_name()),
                DocumentPart::SuppliedValue(SuppliedValue::Variable(name)) => {
                    entry.variables.push((name.as_str(), node));
                },
                _ => (),
            }
        }
        usage
    }

    fn check_fragment_usage(&self) {
        let usage = self.definition_usage();
        let document: &'a QueryDocument = self.document;
        let fragments = document.named_fragments();
        let spreads_of = |fragment_name: &str| -> Vec<&'a str> {
            fragments
                .get(fragment_name)
                .and_then(|id| usage.get(&id))
                .map(|u| u.spreads.clone())
                .unwrap_or_default()
        };

        let used: IndexSet<&str> = usage.values().flat_map(|u| u.spreads.iter().copied()).collect();
        for (name, fragment_id) in fragments.iter() {
            if !used.contains(name) {
                self.critical(
                    codes::RULE_5_5_1_4_FRAGMENTS_MUST_BE_USED,
                    format!("Fragment `{name}` is never used"),
                    self.document.part(fragment_id),
                );
            }
        }

        // Fragments that spread each other form one group, reported once with
        // the shortest cycle through its first fragment.
        let reachable: HashMap<&str, IndexSet<&'a str>> = fragments
            .iter()
            .map(|(name, _)| (name, reachable_spreads(&spreads_of, name)))
            .collect();
        let reaches = |from: &str, to: &str| reachable.get(from).is_some_and(|r| r.contains(to));
        let mut reported: IndexSet<&str> = IndexSet::new();
        for (name, fragment_id) in fragments.iter() {
            if reported.contains(name) || !reaches(name, name) {
                continue;
            }
            let group: IndexSet<&str> = reachable[name]
                .iter()
                .copied()
                .filter(|other| reaches(*other, name))
                .collect();
            let cycle = shortest_cycle(&spreads_of, name, &group);
            reported.extend(group.iter().copied());
            self.critical(
                codes::RULE_5_5_2_2_FRAGMENT_SPREADS_MUST_NOT_FORM_CYCLES,
                format!(
                    "Fragment `{name}` spreads itself: {}",
                    cycle.iter().chain(std::iter::once(&name)).copied().collect::<Vec<_>>().join(" -> "),
                ),
                self.document.part(fragment_id),
            );
        }
    }

    fn check_variable_usage(&self) {
        let usage = self.definition_usage();
        let fragments = self.document.named_fragments();
        for (_, op_id) in self.document.operations() {
            let op_node = self.document.part(*op_id);
            let DocumentPart::Operation(op) = op_node.part() else { continue };

            // Definitions reachable from this operation through spreads.
            let mut reachable: IndexSet<DocumentPartId> = IndexSet::new();
            reachable.insert(*op_id);
            let mut idx = 0;
            while let Some(def_id) = reachable.get_index(idx).copied() {
                if let Some(def_usage) = usage.get(&def_id) {
                    for spread in &def_usage.spreads {
                        if let Some(fragment_id) = fragments.get(spread) {
                            reachable.insert(fragment_id);
                        }
                    }
                }
                idx += 1;
            }

            let mut used: IndexSet<&str> = IndexSet::new();
            for def_id in &reachable {
                let Some(def_usage) = usage.get(def_id) else { continue };
                for (name, usage_node) in &def_usage.variables {
                    used.insert(*name);
                    if !op.variables().contains_key(*name) {
                        self.critical(
                            codes::RULE_5_8_3_ALL_VARIABLE_USES_DEFINED,
                            format!("Variable `${name}` is not defined by the operation"),
                            usage_node,
                        );
                    }
                }
            }

            for (name, var_id) in op.variables() {
                if !used.contains(name.as_str()) {
                    self.critical(
                        codes::RULE_5_8_4_ALL_VARIABLES_USED,
                        format!("Variable `${name}` is never used"),
                        self.document.part(*var_id),
                    );
                }
            }
        }
    }

    fn check_max_depth(&self) {
        let Some(max_depth) = self.max_depth else { return };
        let depth = self.document.max_field_depth();
        if depth > max_depth {
            self.critical(
                codes::MAX_QUERY_DEPTH_EXCEEDED,
                format!("The query has a depth of {depth}, the maximum allowed is {max_depth}"),
                self.document.part(self.document.root()),
            );
        }
    }
}

#[derive(Default)]
struct DefinitionUsage<'a> {
    spreads: Vec<&'a str>,
    variables: Vec<(&'a str, &'a DocumentPartNode)>,
}

/// Every fragment reachable from `start` through one or more spreads.
fn reachable_spreads<'a>(
    spreads_of: &dyn Fn(&str) -> Vec<&'a str>,
    start: &str,
) -> IndexSet<&'a str> {
    let mut reached: IndexSet<&'a str> = IndexSet::new();
    let mut pending = spreads_of(start);
    while let Some(next) = pending.pop() {
        if reached.insert(next) {
            pending.extend(spreads_of(next));
        }
    }
    reached
}

/// Breadth-first search for the shortest spread path from `start` back to
/// itself, staying within `group`. The path starts at `start` and excludes
/// the closing repeat.
fn shortest_cycle<'a>(
    spreads_of: &dyn Fn(&str) -> Vec<&'a str>,
    start: &'a str,
    group: &IndexSet<&'a str>,
) -> Vec<&'a str> {
    let mut came_from: IndexMap<&'a str, &'a str> = IndexMap::new();
    let mut queue: VecDeque<&'a str> = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in spreads_of(current) {
            if next == start {
                let mut path = vec![current];
                while let Some(prev) = came_from.get(path[path.len() - 1]).copied() {
                    path.push(prev);
                }
                path.reverse();
                return path;
            }
            if group.contains(next) && !came_from.contains_key(next) {
                came_from.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    vec![start]
}
