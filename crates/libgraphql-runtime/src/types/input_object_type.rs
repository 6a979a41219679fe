use crate::loc::SourceLocation;
use crate::types::FieldArgument;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) fields: IndexMap<String, FieldArgument>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn field(&self, name: &str) -> Option<&FieldArgument> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &IndexMap<String, FieldArgument> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
