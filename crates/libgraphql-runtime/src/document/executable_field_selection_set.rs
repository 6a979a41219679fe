use crate::document::DocumentPartId;
use crate::document::QueryDocument;
use indexmap::IndexMap;
use smallvec::SmallVec;

/// A field selection reached from a selection set, either directly or through
/// any number of (named or inline) fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutableField {
    pub(crate) field: DocumentPartId,
    pub(crate) fragments: SmallVec<[DocumentPartId; 2]>,
    pub(crate) type_condition: Option<String>,
}
impl ExecutableField {
    /// The [FieldPart](crate::document::FieldPart) this entry refers to.
    pub fn field(&self) -> DocumentPartId {
        self.field
    }

    /// The fragment spreads and inline fragments traversed to reach this
    /// field, outermost first.
    pub fn fragments(&self) -> &[DocumentPartId] {
        &self.fragments
    }

    /// The innermost type condition that applies to this field, if the field
    /// was reached through a fragment.
    pub fn type_condition(&self) -> Option<&str> {
        self.type_condition.as_deref()
    }

    /// A field contributes to a response only when it and every fragment it
    /// was reached through are included.
    pub fn is_included(&self, document: &QueryDocument) -> bool {
        document.is_included(self.field)
            && self.fragments.iter().all(|id| document.is_included(*id))
    }
}

/// The flattened list of fields a selection set will execute, with fragments
/// expanded in document order.
#[derive(Clone, Debug, Default)]
pub struct ExecutableFieldSelectionSet {
    by_alias: IndexMap<String, SmallVec<[usize; 1]>>,
    fields: Vec<ExecutableField>,
}
impl ExecutableFieldSelectionSet {
    pub(crate) fn push(&mut self, response_key: &str, field: ExecutableField) {
        let idx = self.fields.len();
        self.fields.push(field);
        match self.by_alias.get_mut(response_key) {
            Some(indices) => indices.push(idx),
            None => {
                self.by_alias.insert(response_key.to_string(), SmallVec::from_elem(idx, 1));
            },
        }
    }

    pub fn fields(&self) -> &[ExecutableField] {
        &self.fields
    }

    /// Every field whose response key (alias, or name when unaliased) is
    /// exactly `alias`, in document order. Does not allocate.
    pub fn filter_by_alias<'a>(
        &'a self,
        alias: &str,
    ) -> impl Iterator<Item = &'a ExecutableField> + use<'a> {
        let indices: &'a [usize] = match self.by_alias.get(alias) {
            Some(indices) => indices.as_slice(),
            None => &[],
        };
        indices.iter().map(move |idx| &self.fields[*idx])
    }

    /// The distinct response keys of this selection set, in first-seen order.
    pub fn response_keys(&self) -> impl Iterator<Item = &str> {
        self.by_alias.keys().map(|key| key.as_str())
    }

    /// The fields that are currently included (see
    /// [ExecutableField::is_included]).
    pub fn included<'a>(
        &'a self,
        document: &'a QueryDocument,
    ) -> impl Iterator<Item = &'a ExecutableField> + 'a {
        self.fields.iter().filter(move |field| field.is_included(document))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}
