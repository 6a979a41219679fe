use crate::ast;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeWrapper {
    List,
    NonNull,
}

/// A (possibly wrapped) reference to a named type, e.g. `[Item!]!`.
///
/// Wrappers are stored outermost-first, so `[Item!]!` is recorded as
/// `[NonNull, List, NonNull]` around `Item`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeExpression {
    type_name: String,
    wrappers: Vec<TypeWrapper>,
}
impl TypeExpression {
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            wrappers: vec![],
        }
    }

    pub fn from_ast(ast_type: &ast::query::Type) -> Self {
        let mut wrappers = vec![];
        let mut current = ast_type;
        loop {
            match current {
                ast::query::Type::NamedType(name) => {
                    return Self {
                        type_name: name.to_string(),
                        wrappers,
                    };
                },
                ast::query::Type::ListType(inner) => {
                    wrappers.push(TypeWrapper::List);
                    current = inner.as_ref();
                },
                ast::query::Type::NonNullType(inner) => {
                    wrappers.push(TypeWrapper::NonNull);
                    current = inner.as_ref();
                },
            }
        }
    }

    pub fn non_null(mut self) -> Self {
        if !self.is_non_null() {
            self.wrappers.insert(0, TypeWrapper::NonNull);
        }
        self
    }

    pub fn list(mut self) -> Self {
        self.wrappers.insert(0, TypeWrapper::List);
        self
    }

    /// The innermost named type.
    pub fn type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn wrappers(&self) -> &[TypeWrapper] {
        &self.wrappers
    }

    pub fn is_non_null(&self) -> bool {
        self.wrappers.first() == Some(&TypeWrapper::NonNull)
    }

    pub fn is_list(&self) -> bool {
        let nullable = self.nullable_wrappers();
        nullable.first() == Some(&TypeWrapper::List)
    }

    /// The same type with its outermost non-null wrapper (if any) removed.
    pub fn nullable(&self) -> TypeExpression {
        Self {
            type_name: self.type_name.clone(),
            wrappers: self.nullable_wrappers().to_vec(),
        }
    }

    /// The element type of a list type, or `None` if this is not a list.
    pub fn list_item_type(&self) -> Option<TypeExpression> {
        let nullable = self.nullable_wrappers();
        match nullable.first() {
            Some(TypeWrapper::List) => Some(Self {
                type_name: self.type_name.clone(),
                wrappers: nullable[1..].to_vec(),
            }),
            _ => None,
        }
    }

    fn nullable_wrappers(&self) -> &[TypeWrapper] {
        match self.wrappers.first() {
            Some(TypeWrapper::NonNull) => &self.wrappers[1..],
            _ => &self.wrappers,
        }
    }
}
impl fmt::Display for TypeExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_from(
            f: &mut fmt::Formatter<'_>,
            type_name: &str,
            wrappers: &[TypeWrapper],
        ) -> fmt::Result {
            match wrappers.first() {
                None => write!(f, "{type_name}"),
                Some(TypeWrapper::NonNull) => {
                    fmt_from(f, type_name, &wrappers[1..])?;
                    write!(f, "!")
                },
                Some(TypeWrapper::List) => {
                    write!(f, "[")?;
                    fmt_from(f, type_name, &wrappers[1..])?;
                    write!(f, "]")
                },
            }
        }
        fmt_from(f, self.type_name.as_str(), &self.wrappers)
    }
}
