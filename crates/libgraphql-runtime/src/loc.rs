use crate::ast;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeSeq;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

/// A line/column position within a source document (a schema file or a
/// query document).
///
/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// optionally carries a path to the file the position refers to. A `line` of
/// `0` indicates that the position is unknown (e.g. a builtin schema item).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub column: usize,
    pub file: Option<PathBuf>,
    pub line: usize,
}
impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            column,
            file: None,
            line,
        }
    }

    pub(crate) fn from_ast_pos(file: Option<&Path>, pos: &ast::AstPos) -> Self {
        Self {
            column: pos.column,
            file: file.map(|f| f.to_path_buf()),
            line: pos.line,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.line == 0
    }
}
impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:", file.display())?;
        }
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// A "breadcrumb" path to some item: either a part of a query document
/// (`document.query.items.name`) or a location in a response
/// (`items[0].name`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourcePath {
    segments: Vec<PathSegment>,
}
impl SourcePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn with_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    pub fn with_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }
}
impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if idx == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
impl Serialize for SourcePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.segments.len()))?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => seq.serialize_element(name)?,
                PathSegment::Index(index) => seq.serialize_element(index)?,
            }
        }
        seq.end()
    }
}

/// Where something came from: a source location paired with a path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceOrigin {
    pub location: SourceLocation,
    pub path: SourcePath,
}
impl SourceOrigin {
    pub fn new(location: SourceLocation, path: SourcePath) -> Self {
        Self { location, path }
    }

    pub fn with_path(&self, path: SourcePath) -> Self {
        Self {
            location: self.location.clone(),
            path,
        }
    }
}
impl fmt::Display for SourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.path.is_empty(), self.location.is_unknown()) {
            (true, true) => write!(f, "<unknown>"),
            (true, false) => write!(f, "{}", self.location),
            (false, true) => write!(f, "{}", self.path),
            (false, false) => write!(f, "{} ({})", self.path, self.location),
        }
    }
}
