use crate::document::DocumentPartId;
use indexmap::IndexMap;

/// Every named fragment defined by a query document, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct NamedFragmentCollection {
    fragments: IndexMap<String, DocumentPartId>,
}
impl NamedFragmentCollection {
    /// Registers a fragment. If a fragment of the same name already exists,
    /// the existing registration is kept and its id is returned as the error.
    pub(crate) fn add(
        &mut self,
        name: &str,
        part_id: DocumentPartId,
    ) -> Result<(), DocumentPartId> {
        if let Some(existing) = self.fragments.get(name) {
            return Err(*existing);
        }
        self.fragments.insert(name.to_string(), part_id);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fragments.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<DocumentPartId> {
        self.fragments.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, DocumentPartId)> {
        self.fragments.iter().map(|(name, id)| (name.as_str(), *id))
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
