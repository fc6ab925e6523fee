use crate::FederationError;
use schema_ast_core::types::GraphQLTypeKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaAstError {
    #[error(transparent)]
    Federation(#[from] FederationError),

    #[error("Plugin \"{}\" requires extension to be \".graphql\"!", crate::PLUGIN_NAME)]
    InvalidOutputExtension {
        output_file: PathBuf,
    },

    #[error(
        "Unable to print the {kind} `{name}` with its directives: it was not \
        loaded from SDL, so there is no syntax node to print"
    )]
    MissingSyntaxNode {
        kind: DefinitionKind,
        name: String,
    },
}

/// The kind of schema definition named by [`SchemaAstError::MissingSyntaxNode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefinitionKind {
    Directive,
    Type(GraphQLTypeKind),
}
impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directive => f.write_str("directive"),
            Self::Type(type_kind) => write!(f, "{type_kind}"),
        }
    }
}
