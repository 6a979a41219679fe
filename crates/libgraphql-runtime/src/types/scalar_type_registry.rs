use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    Custom,
    Float,
    Id,
    Int,
    String,
}
impl ScalarKind {
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ScalarKind::Custom)
    }
}

/// Tracks which named types are leaf types (scalars and enums).
#[derive(Clone, Debug)]
pub struct ScalarTypeRegistry {
    enums: IndexMap<String, ()>,
    scalars: IndexMap<String, ScalarKind>,
}
impl ScalarTypeRegistry {
    pub fn new() -> Self {
        Self {
            enums: IndexMap::new(),
            scalars: IndexMap::from([
                ("Boolean".to_string(), ScalarKind::Boolean),
                ("Float".to_string(), ScalarKind::Float),
                ("ID".to_string(), ScalarKind::Id),
                ("Int".to_string(), ScalarKind::Int),
                ("String".to_string(), ScalarKind::String),
            ]),
        }
    }

    pub fn builtin_scalar_names() -> [&'static str; 5] {
        ["Boolean", "Float", "ID", "Int", "String"]
    }

    pub fn register_scalar(&mut self, name: impl Into<String>) {
        self.scalars.entry(name.into()).or_insert(ScalarKind::Custom);
    }

    pub fn register_enum(&mut self, name: impl Into<String>) {
        self.enums.insert(name.into(), ());
    }

    pub fn is_enum(&self, type_name: &str) -> bool {
        self.enums.contains_key(type_name)
    }

    /// `true` when `type_name` names a scalar or enum type.
    pub fn is_leaf(&self, type_name: &str) -> bool {
        self.scalars.contains_key(type_name) || self.is_enum(type_name)
    }

    pub fn scalar_kind(&self, type_name: &str) -> Option<ScalarKind> {
        self.scalars.get(type_name).copied()
    }
}
impl Default for ScalarTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
