use crate::loc::SourceLocation;
use crate::types::GraphField;
use indexmap::IndexMap;
use std::sync::Arc;

/// Shared representation of object and interface types: both declare a set
/// of fields and may implement interfaces.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, Arc<GraphField>>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&Arc<GraphField>> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, Arc<GraphField>> {
        &self.fields
    }

    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces.iter().any(|name| name == interface_name)
    }

    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

pub type InterfaceType = ObjectType;
