use std::path::Path;
use std::path::PathBuf;

/// Very similar to graphql_parser's [Pos](graphql_parser::Pos), except it
/// includes a PathBuf to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePosition {
    pub col: usize,
    pub file: PathBuf,
    pub line: usize,
}
impl FilePosition {
    pub(crate) fn from_pos(file: &Path, pos: graphql_parser::Pos) -> Self {
        Self {
            col: pos.column,
            file: file.to_path_buf(),
            line: pos.line,
        }
    }
}
impl std::fmt::Display for FilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.col)
    }
}

/// Where a schema definition came from.
///
/// Only [`SchemaDefLocation::Schema`] definitions were parsed from SDL text
/// and therefore carry a syntax node that can be reprinted verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SchemaDefLocation {
    /// Built into every GraphQL schema (`String`, `@deprecated`, etc).
    GraphQLBuiltIn,

    /// Constructed in code and handed to the
    /// [`SchemaBuilder`](crate::SchemaBuilder) directly.
    Programmatic,

    Schema(FilePosition),
}
impl std::convert::From<FilePosition> for SchemaDefLocation {
    fn from(value: FilePosition) -> SchemaDefLocation {
        SchemaDefLocation::Schema(value)
    }
}
impl std::fmt::Display for SchemaDefLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GraphQLBuiltIn => write!(f, "<graphql built-in>"),
            Self::Programmatic => write!(f, "<programmatic>"),
            Self::Schema(file_pos) => write!(f, "{file_pos}"),
        }
    }
}
