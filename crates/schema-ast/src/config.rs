/// Options for the `schema-ast` plugin.
///
/// Deserializes from the camelCase keys used in a codegen config file.
/// Missing keys default to `false` and unknown keys are ignored, so the same
/// config map can be shared with other plugins.
///
/// ```yaml
/// generates:
///   schema.graphql:
///     plugins:
///       - schema-ast
///     config:
///       includeDirectives: true
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaAstConfig {
    /// Print descriptions as `#` comments instead of `"""` block strings.
    ///
    /// Has no effect when `include_directives` is set.
    pub comment_descriptions: bool,

    /// Remove Apollo federation types, query fields, and (unless
    /// `include_directives` is also set) directives before printing.
    pub federation: bool,

    /// Print directive definitions and annotations exactly as they were
    /// written in the source SDL.
    pub include_directives: bool,
}
