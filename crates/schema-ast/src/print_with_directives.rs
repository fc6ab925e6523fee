use crate::DefinitionKind;
use crate::SchemaAstError;
use schema_ast_core::Schema;
use schema_ast_core::printer::print_ast_definition;

/// Prints every directive definition and then every type of `schema` from
/// the syntax nodes they were loaded from, so that all directive annotations
/// survive. Each printed node is separated from the next by a single
/// newline.
///
/// Built-in scalars and directives are left out. A type that was extended
/// prints its definition followed by each of its `extend` blocks.
///
/// Fails with [`SchemaAstError::MissingSyntaxNode`] when a definition was
/// constructed in code rather than loaded from SDL.
pub fn print_schema_with_directives(schema: &Schema) -> Result<String, SchemaAstError> {
    let mut printed_defs = vec![];

    for directive in schema.directives().iter().filter(|d| !d.is_builtin()) {
        let Some(source_def) = directive.source_definition() else {
            return Err(SchemaAstError::MissingSyntaxNode {
                kind: DefinitionKind::Directive,
                name: directive.name().to_string(),
            });
        };
        printed_defs.push(print_ast_definition(source_def));
    }

    for graphql_type in schema.types().values().filter(|t| !t.is_builtin()) {
        let Some(source_defs) = graphql_type.source_definitions() else {
            return Err(SchemaAstError::MissingSyntaxNode {
                kind: DefinitionKind::Type(graphql_type.kind()),
                name: graphql_type.name().to_string(),
            });
        };
        log::trace!(
            "Printing {} syntax node(s) for `{}`.",
            source_defs.len(),
            graphql_type.name(),
        );
        printed_defs.extend(source_defs.into_iter().map(print_ast_definition));
    }

    Ok(printed_defs.join("\n"))
}
