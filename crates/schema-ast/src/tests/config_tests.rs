use crate::SchemaAstConfig;

#[test]
fn missing_keys_default_to_false() -> serde_json::Result<()> {
    let config: SchemaAstConfig = serde_json::from_str("{}")?;

    assert_eq!(config, SchemaAstConfig::default());
    assert!(!config.comment_descriptions);
    assert!(!config.federation);
    assert!(!config.include_directives);

    Ok(())
}

#[test]
fn reads_camel_case_keys_and_ignores_unknown_ones() -> serde_json::Result<()> {
    let config: SchemaAstConfig = serde_json::from_str(r#"{
        "includeDirectives": true,
        "commentDescriptions": true,
        "federation": true,
        "namingConvention": "keep"
    }"#)?;

    assert_eq!(config, SchemaAstConfig {
        comment_descriptions: true,
        federation: true,
        include_directives: true,
    });

    Ok(())
}
