use crate::document::DocumentPartId;
use indexmap::IndexMap;

/// Name-indexed arguments (or input object fields) owned by a field,
/// directive, or complex supplied value.
///
/// The first argument registered under a name wins. Lookup is by name;
/// iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputArgumentCollection {
    arguments: IndexMap<String, DocumentPartId>,
}
impl InputArgumentCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and leaves the collection unchanged) when an argument
    /// with the same name is already present.
    pub(crate) fn add(&mut self, name: &str, part_id: DocumentPartId) -> bool {
        if self.arguments.contains_key(name) {
            return false;
        }
        self.arguments.insert(name.to_string(), part_id);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<DocumentPartId> {
        self.arguments.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DocumentPartId)> {
        self.arguments.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }
}
