use schema_ast_core::Schema;
use schema_ast_core::ast;
use std::path::Path;
use std::path::PathBuf;

/// The interface a codegen host drives a plugin through.
///
/// Implementations are stateless: every call receives everything it needs
/// and nothing is shared between calls.
#[allow(async_fn_in_trait)]
pub trait CodegenPlugin {
    type Config;
    type Error: std::error::Error;

    /// Generates the content of one output file.
    async fn plugin(
        &self,
        schema: &Schema,
        documents: &[DocumentFile],
        config: &Self::Config,
    ) -> Result<String, Self::Error>;

    /// Checks, before anything is generated, whether this plugin can produce
    /// `output_file` alongside `all_plugins`.
    async fn validate(
        &self,
        schema: &Schema,
        documents: &[DocumentFile],
        config: &Self::Config,
        output_file: &Path,
        all_plugins: &[ConfiguredPlugin],
    ) -> Result<(), Self::Error>;
}

/// One plugin configured for an output file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ConfiguredPlugin {
    pub name: String,

    /// The plugin's config as written in the host's config file.
    #[serde(default)]
    pub config: Option<serde_json::Value>,
}
impl ConfiguredPlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: None,
        }
    }
}

/// An operation document handed to plugins by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentFile {
    pub document: Option<ast::query::Document>,
    pub location: Option<PathBuf>,
}
