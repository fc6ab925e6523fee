//! The `schema-ast` codegen plugin.
//!
//! Prints a [`Schema`] as GraphQL SDL, optionally stripping Apollo
//! federation constructs first and optionally keeping every directive
//! annotation by reprinting the syntax nodes the schema was loaded from.
//!
//! [`plugin`] and [`validate`] are the entry points a codegen host calls.
//! Both delegate to [`SchemaAstPlugin`], which can also be constructed with
//! a custom [`FederationStripper`].

mod config;
mod error;
mod federation;
mod plugin;
mod print_with_directives;
mod schema_ast_plugin;

pub use config::SchemaAstConfig;
pub use error::DefinitionKind;
pub use error::SchemaAstError;
pub use federation::FEDERATION_DIRECTIVE_NAMES;
pub use federation::FEDERATION_QUERY_FIELD_NAMES;
pub use federation::FEDERATION_TYPE_NAMES;
pub use federation::FederationError;
pub use federation::FederationStripper;
pub use federation::RemoveFederation;
pub use federation::StripFederationOptions;
pub use plugin::CodegenPlugin;
pub use plugin::ConfiguredPlugin;
pub use plugin::DocumentFile;
pub use print_with_directives::print_schema_with_directives;
pub use schema_ast_plugin::SchemaAstPlugin;
pub use schema_ast_core::Schema;

use std::path::Path;

/// The name this plugin is configured under in a codegen config.
pub const PLUGIN_NAME: &str = "schema-ast";

/// Prints `schema` as SDL according to `config`.
pub async fn plugin(
    schema: &Schema,
    documents: &[DocumentFile],
    config: &SchemaAstConfig,
) -> Result<String, SchemaAstError> {
    SchemaAstPlugin::new().plugin(schema, documents, config).await
}

/// Checks that this plugin is able to write to `output_file`.
pub async fn validate(
    schema: &Schema,
    documents: &[DocumentFile],
    config: &SchemaAstConfig,
    output_file: &Path,
    all_plugins: &[ConfiguredPlugin],
) -> Result<(), SchemaAstError> {
    SchemaAstPlugin::new()
        .validate(schema, documents, config, output_file, all_plugins)
        .await
}

#[cfg(test)]
mod tests;
