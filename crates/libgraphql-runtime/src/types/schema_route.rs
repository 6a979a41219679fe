use std::fmt;

/// The unique path of an item registered with a schema.
///
/// Fields are routed as `[type]/<TypeName>/<fieldName>` and directives as
/// `[directive]/<directiveName>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SchemaRoute {
    path: String,
}
impl SchemaRoute {
    pub fn for_field(type_name: &str, field_name: &str) -> Self {
        Self {
            path: format!("[type]/{type_name}/{field_name}"),
        }
    }

    pub fn for_directive(directive_name: &str) -> Self {
        Self {
            path: format!("[directive]/{directive_name}"),
        }
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    /// The final segment of the route (the field or directive name).
    pub fn name(&self) -> &str {
        match self.path.rfind('/') {
            Some(idx) => &self.path[idx + 1..],
            None => self.path.as_str(),
        }
    }

    /// The route with its final segment removed.
    pub fn parent(&self) -> Option<&str> {
        self.path.rfind('/').map(|idx| &self.path[..idx])
    }
}
impl fmt::Display for SchemaRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}
