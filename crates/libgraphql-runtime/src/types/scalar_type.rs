use crate::loc::SourceLocation;
use crate::types::ScalarKind;

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) def_location: SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) kind: ScalarKind,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
