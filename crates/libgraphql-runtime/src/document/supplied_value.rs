use crate::document::DocumentPart;
use crate::document::DocumentPartId;
use crate::document::InputArgumentCollection;
use crate::document::InputArgumentPart;
use crate::document::QueryDocument;

#[derive(Clone, Debug, PartialEq)]
pub enum ScalarLiteral {
    Boolean(bool),
    Float(f64),
    Int(i64),
    String(String),
}

/// A literal or variable reference supplied as an input value in a query
/// document.
#[derive(Debug)]
pub enum SuppliedValue {
    Complex(ComplexSuppliedValue),
    Enum(String),
    List(ListSuppliedValue),
    Null,
    Scalar(ScalarLiteral),
    Variable(String),
}

/// An object literal: `{ name: "glazed", price: 2 }`.
///
/// Each field is a child [InputArgumentPart] whose own child is the field's
/// value. Only direct child arguments are indexed, so the fields of nested
/// objects never shadow this value's own fields.
#[derive(Debug, Default)]
pub struct ComplexSuppliedValue {
    pub(crate) arguments: InputArgumentCollection,
}
impl ComplexSuppliedValue {
    pub fn arguments(&self) -> &InputArgumentCollection {
        &self.arguments
    }
}

#[derive(Debug, Default)]
pub struct ListSuppliedValue {
    pub(crate) items: Vec<DocumentPartId>,
}
impl ListSuppliedValue {
    pub fn items(&self) -> &[DocumentPartId] {
        &self.items
    }
}

/// A borrowed view of a [SuppliedValue] that can navigate into the
/// document to reach nested values.
#[derive(Clone, Copy, Debug)]
pub struct SuppliedValueRef<'doc> {
    pub(crate) document: &'doc QueryDocument,
    pub(crate) id: DocumentPartId,
    pub(crate) value: &'doc SuppliedValue,
}
impl<'doc> SuppliedValueRef<'doc> {
    pub fn id(&self) -> DocumentPartId {
        self.id
    }

    pub fn value(&self) -> &'doc SuppliedValue {
        self.value
    }

    pub fn as_complex(&self) -> Option<ComplexValueRef<'doc>> {
        match self.value {
            SuppliedValue::Complex(complex) => Some(ComplexValueRef {
                document: self.document,
                id: self.id,
                value: complex,
            }),
            _ => None,
        }
    }

    /// The items of a list value, or `None` if this is not a list.
    pub fn list_items(&self) -> Option<impl Iterator<Item = SuppliedValueRef<'doc>> + use<'doc>> {
        let document = self.document;
        let value: &'doc SuppliedValue = self.value;
        match value {
            SuppliedValue::List(list) => Some(
                list.items.iter().filter_map(move |id| document.supplied_value(*id)),
            ),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self.value, SuppliedValue::Null)
    }

    /// `true` when this value, or any value nested within it, is a variable
    /// reference.
    pub fn contains_variables(&self) -> bool {
        match self.value {
            SuppliedValue::Variable(_) => true,
            SuppliedValue::List(_) => self
                .list_items()
                .is_some_and(|mut items| items.any(|item| item.contains_variables())),
            SuppliedValue::Complex(_) => self
                .as_complex()
                .is_some_and(|complex| complex.fields().any(|(_, v)| v.contains_variables())),
            _ => false,
        }
    }

    /// Structural equality against `other`.
    ///
    /// Complex values compare one-directionally: `self` equals `other` when
    /// every field of `self` has a same-named, equal field in `other`. Fields
    /// present only in `other` are not considered.
    pub fn is_equal_to(&self, other: &SuppliedValueRef<'_>) -> bool {
        match (self.value, other.value) {
            (SuppliedValue::Null, SuppliedValue::Null) => true,
            (SuppliedValue::Scalar(a), SuppliedValue::Scalar(b)) => a == b,
            (SuppliedValue::Enum(a), SuppliedValue::Enum(b)) => a == b,
            (SuppliedValue::Variable(a), SuppliedValue::Variable(b)) => a == b,
            (SuppliedValue::List(a), SuppliedValue::List(b)) => {
                if a.items.len() != b.items.len() {
                    return false;
                }
                a.items.iter().zip(b.items.iter()).all(|(a_id, b_id)| {
                    match (self.document.supplied_value(*a_id), other.document.supplied_value(*b_id)) {
                        (Some(a_value), Some(b_value)) => a_value.is_equal_to(&b_value),
                        _ => false,
                    }
                })
            },
            (SuppliedValue::Complex(_), SuppliedValue::Complex(_)) => {
                match (self.as_complex(), other.as_complex()) {
                    (Some(this), Some(that)) => this.is_equal_to(&that),
                    _ => false,
                }
            },
            _ => false,
        }
    }
}

/// A borrowed view of a [ComplexSuppliedValue].
#[derive(Clone, Copy, Debug)]
pub struct ComplexValueRef<'doc> {
    pub(crate) document: &'doc QueryDocument,
    pub(crate) id: DocumentPartId,
    pub(crate) value: &'doc ComplexSuppliedValue,
}
impl<'doc> ComplexValueRef<'doc> {
    pub fn id(&self) -> DocumentPartId {
        self.id
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.value.arguments.contains(name)
    }

    /// Looks up the argument part for the field named `name`. Returns `None`
    /// when no such field was supplied.
    pub fn try_get_argument(&self, name: &str) -> Option<&'doc InputArgumentPart> {
        let id = self.value.arguments.get(name)?;
        match self.document.get(id).map(|node| node.part()) {
            Some(DocumentPart::InputArgument(argument)) => Some(argument),
            _ => None,
        }
    }

    /// Looks up the value supplied for the field named `name`. Returns `None`
    /// when no such field was supplied.
    pub fn try_get_field(&self, name: &str) -> Option<SuppliedValueRef<'doc>> {
        let value_id = self.try_get_argument(name)?.value?;
        self.document.supplied_value(value_id)
    }

    /// The `(name, value)` pairs of this object, read from the document each
    /// time the iterator is created.
    pub fn fields(&self) -> impl Iterator<Item = (&'doc str, SuppliedValueRef<'doc>)> + use<'doc> {
        let document = self.document;
        let value: &'doc ComplexSuppliedValue = self.value;
        value.arguments.iter().filter_map(move |(name, arg_id)| {
            let value_id = match document.get(arg_id).map(|node| node.part()) {
                Some(DocumentPart::InputArgument(argument)) => argument.value?,
                _ => return None,
            };
            document.supplied_value(value_id).map(|value| (name, value))
        })
    }

    pub fn len(&self) -> usize {
        self.value.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.arguments.is_empty()
    }

    /// See [SuppliedValueRef::is_equal_to].
    pub fn is_equal_to(&self, other: &ComplexValueRef<'_>) -> bool {
        self.fields().all(|(name, value)| {
            other
                .try_get_field(name)
                .is_some_and(|other_value| value.is_equal_to(&other_value))
        })
    }
}
