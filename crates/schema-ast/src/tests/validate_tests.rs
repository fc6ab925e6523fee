use crate::ConfiguredPlugin;
use crate::SchemaAstConfig;
use crate::SchemaAstError;
use crate::tests::build_schema;
use crate::validate;
use proptest::prelude::*;
use schema_ast_core::Schema;
use std::path::Path;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const EXPECTED_MESSAGE: &str = "Plugin \"schema-ast\" requires extension to be \".graphql\"!";

fn plugins(names: &[&str]) -> Vec<ConfiguredPlugin> {
    names.iter().map(|name| ConfiguredPlugin::new(*name)).collect()
}

async fn validate_output(
    schema: &Schema,
    output_file: &str,
    all_plugins: &[ConfiguredPlugin],
) -> std::result::Result<(), SchemaAstError> {
    validate(
        schema,
        &[],
        &SchemaAstConfig::default(),
        Path::new(output_file),
        all_plugins,
    ).await
}

#[tokio::test]
async fn single_plugin_with_graphql_extension_passes() -> Result<()> {
    let schema = build_schema("type Query { a: Int }")?;

    validate_output(&schema, "schema.graphql", &plugins(&["schema-ast"])).await?;
    validate_output(&schema, "out/nested.schema.graphql", &plugins(&["schema-ast"])).await?;

    Ok(())
}

#[tokio::test]
async fn single_plugin_with_other_extension_fails() -> Result<()> {
    let schema = build_schema("type Query { a: Int }")?;

    let result = validate_output(&schema, "schema.ts", &plugins(&["schema-ast"])).await;

    let Err(err) = result else {
        panic!("Expected a validation error");
    };
    assert_eq!(err.to_string(), EXPECTED_MESSAGE);
    assert_eq!(err, SchemaAstError::InvalidOutputExtension {
        output_file: "schema.ts".into(),
    });

    Ok(())
}

#[tokio::test]
async fn single_plugin_rejects_near_misses() -> Result<()> {
    let schema = build_schema("type Query { a: Int }")?;

    for output_file in ["schema", ".graphql", "schema.graphql.", "schema.GRAPHQL", "schema.graphqls"] {
        let result = validate_output(&schema, output_file, &plugins(&["schema-ast"])).await;
        assert!(result.is_err(), "`{output_file}` should be rejected");
    }

    Ok(())
}

#[tokio::test]
async fn multiple_plugins_accept_any_extension() -> Result<()> {
    let schema = build_schema("type Query { a: Int }")?;

    validate_output(&schema, "types.ts", &plugins(&["schema-ast", "typescript"])).await?;
    validate_output(&schema, "types.ts", &plugins(&[])).await?;

    Ok(())
}

proptest! {
    #[test]
    fn only_graphql_extension_passes_for_a_single_plugin(
        stem in "[a-z][a-z0-9_]{0,11}",
        extension in "[a-z]{1,8}",
        num_plugins in 0usize..4,
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let schema = build_schema("type Query { a: Int }").unwrap();
        let all_plugins: Vec<ConfiguredPlugin> =
            (0..num_plugins).map(|idx| ConfiguredPlugin::new(format!("plugin{idx}"))).collect();
        let output_file = format!("{stem}.{extension}");

        let result = runtime.block_on(validate_output(&schema, &output_file, &all_plugins));

        let should_pass = num_plugins != 1 || extension == "graphql";
        prop_assert_eq!(result.is_ok(), should_pass);
    }
}
