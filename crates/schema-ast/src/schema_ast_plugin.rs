use crate::CodegenPlugin;
use crate::ConfiguredPlugin;
use crate::DocumentFile;
use crate::FederationStripper;
use crate::RemoveFederation;
use crate::SchemaAstConfig;
use crate::SchemaAstError;
use crate::StripFederationOptions;
use crate::print_schema_with_directives;
use schema_ast_core::Schema;
use schema_ast_core::printer::PrintSchemaOptions;
use schema_ast_core::printer::print_schema;
use std::path::Path;

/// The `schema-ast` plugin.
///
/// Federation stripping is delegated to `F`, which defaults to
/// [`RemoveFederation`].
#[derive(Clone, Debug, Default)]
pub struct SchemaAstPlugin<F = RemoveFederation> {
    federation_stripper: F,
}
impl SchemaAstPlugin {
    pub fn new() -> Self {
        Self::with_federation_stripper(RemoveFederation)
    }
}
impl<F: FederationStripper> SchemaAstPlugin<F> {
    pub fn with_federation_stripper(federation_stripper: F) -> Self {
        Self {
            federation_stripper,
        }
    }
}

#[inherent::inherent]
impl<F: FederationStripper> CodegenPlugin for SchemaAstPlugin<F> {
    type Config = SchemaAstConfig;
    type Error = SchemaAstError;

    pub async fn plugin(
        &self,
        schema: &Schema,
        _documents: &[DocumentFile],
        config: &SchemaAstConfig,
    ) -> Result<String, SchemaAstError> {
        let stripped_schema;
        let schema =
            if config.federation {
                stripped_schema = self.federation_stripper.strip_federation(
                    schema,
                    StripFederationOptions {
                        with_directives: config.include_directives,
                    },
                )?;
                &stripped_schema
            } else {
                schema
            };

        if config.include_directives {
            log::debug!("Printing schema from its syntax nodes to keep directives.");
            return print_schema_with_directives(schema);
        }

        log::debug!(
            "Printing schema (comment_descriptions: {}).",
            config.comment_descriptions,
        );
        Ok(print_schema(schema, &PrintSchemaOptions {
            comment_descriptions: config.comment_descriptions,
        }))
    }

    pub async fn validate(
        &self,
        _schema: &Schema,
        _documents: &[DocumentFile],
        _config: &SchemaAstConfig,
        output_file: &Path,
        all_plugins: &[ConfiguredPlugin],
    ) -> Result<(), SchemaAstError> {
        let is_graphql_file =
            output_file.extension().is_some_and(|ext| ext == "graphql");
        if all_plugins.len() == 1 && !is_graphql_file {
            return Err(SchemaAstError::InvalidOutputExtension {
                output_file: output_file.to_path_buf(),
            });
        }
        Ok(())
    }
}
