use crate::loc::SourceLocation;
use crate::types::EnumType;
use crate::types::GraphField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}

#[derive(Clone, Debug)]
pub enum GraphType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphType {
    pub fn def_location(&self) -> &SourceLocation {
        match self {
            GraphType::Enum(t) => t.def_location(),
            GraphType::InputObject(t) => t.def_location(),
            GraphType::Interface(t) => t.def_location(),
            GraphType::Object(t) => t.def_location(),
            GraphType::Scalar(t) => t.def_location(),
            GraphType::Union(t) => t.def_location(),
        }
    }

    /// Looks up a field declared by an object or interface type.
    pub fn field(&self, name: &str) -> Option<&Arc<GraphField>> {
        match self {
            GraphType::Interface(t) | GraphType::Object(t) => t.field(name),
            _ => None,
        }
    }

    /// Object, interface, and union types may carry a selection set.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            GraphType::Interface(_) | GraphType::Object(_) | GraphType::Union(_),
        )
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, GraphType::Enum(_) | GraphType::Scalar(_))
    }

    pub fn kind(&self) -> GraphTypeKind {
        match self {
            GraphType::Enum(_) => GraphTypeKind::Enum,
            GraphType::InputObject(_) => GraphTypeKind::InputObject,
            GraphType::Interface(_) => GraphTypeKind::Interface,
            GraphType::Object(_) => GraphTypeKind::Object,
            GraphType::Scalar(_) => GraphTypeKind::Scalar,
            GraphType::Union(_) => GraphTypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            GraphType::Enum(t) => t.name(),
            GraphType::InputObject(t) => t.name(),
            GraphType::Interface(t) => t.name(),
            GraphType::Object(t) => t.name(),
            GraphType::Scalar(t) => t.name(),
            GraphType::Union(t) => t.name(),
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            GraphType::Object(t) => Some(t),
            _ => None,
        }
    }
}
