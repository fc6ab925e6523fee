use crate::ast;
use crate::loc;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::InputValue;
use crate::types::directive_annotation::AnnotationFilter;
use crate::types::input_value;
use std::path::Path;
use std::sync::OnceLock;

/// Names of the directives every GraphQL schema provides.
pub const SPECIFIED_DIRECTIVE_NAMES: [&str; 4] = [
    "skip",
    "include",
    "deprecated",
    "specifiedBy",
];

/// Represents a defined directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) arguments: Vec<InputValue>,
    pub(crate) ast_node: Option<ast::schema::DirectiveDefinition>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<ast::schema::DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn new(
        name: impl Into<String>,
        locations: Vec<ast::schema::DirectiveLocation>,
    ) -> Self {
        Self {
            arguments: vec![],
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            locations,
            name: name.into(),
            repeatable: false,
        }
    }

    pub fn with_argument(mut self, argument: InputValue) -> Self {
        self.arguments.push(argument);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_repeatable(mut self, repeatable: bool) -> Self {
        self.repeatable = repeatable;
        self
    }

    pub fn arguments(&self) -> &[InputValue] {
        &self.arguments
    }

    /// The syntax node this directive was parsed from, if any.
    pub fn ast_node(&self) -> Option<&ast::schema::DirectiveDefinition> {
        self.ast_node.as_ref()
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.def_location, loc::SchemaDefLocation::GraphQLBuiltIn)
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[ast::schema::DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The directives injected into every schema that doesn't define them.
    pub fn builtins() -> &'static [Directive] {
        static BUILTINS: OnceLock<Vec<Directive>> = OnceLock::new();
        BUILTINS.get_or_init(|| {
            use ast::schema::DirectiveLocation as Loc;

            let conditional_locations = vec![
                Loc::Field,
                Loc::FragmentSpread,
                Loc::InlineFragment,
            ];
            vec![
                Self::builtin("skip", conditional_locations.clone())
                    .with_description("Directs the executor to skip this field or fragment when the `if` argument is true.")
                    .with_argument(InputValue::new("if", non_null_named_type("Boolean"))),
                Self::builtin("include", conditional_locations)
                    .with_description("Directs the executor to include this field or fragment only when the `if` argument is true.")
                    .with_argument(InputValue::new("if", non_null_named_type("Boolean"))),
                Self::builtin("deprecated", vec![
                    Loc::FieldDefinition,
                    Loc::ArgumentDefinition,
                    Loc::InputFieldDefinition,
                    Loc::EnumValue,
                ])
                    .with_description("Marks an element of a GraphQL schema as no longer supported.")
                    .with_argument(
                        InputValue::new("reason", ast::Type::NamedType("String".to_string()))
                            .with_default_value(ast::Value::String(
                                DEFAULT_DEPRECATION_REASON.to_string(),
                            )),
                    ),
                Self::builtin("specifiedBy", vec![Loc::Scalar])
                    .with_description("Exposes a URL that specifies the behavior of this scalar.")
                    .with_argument(InputValue::new("url", non_null_named_type("String"))),
            ]
        })
    }

    fn builtin(
        name: &str,
        locations: Vec<ast::schema::DirectiveLocation>,
    ) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            ..Self::new(name, locations)
        }
    }

    pub(crate) fn from_ast(file_path: &Path, def: ast::schema::DirectiveDefinition) -> Self {
        Self {
            arguments: def.arguments.iter()
                .map(|arg| InputValue::from_ast(file_path, arg))
                .collect(),
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            locations: def.locations.clone(),
            name: def.name.to_string(),
            repeatable: def.repeatable,
            ast_node: Some(def),
        }
    }

    /// Drops annotations on this directive's arguments (and on their syntax
    /// nodes) whose directive name does not satisfy `keep`.
    pub fn retain_directive_annotations<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.retain_directive_annotations_impl(&keep);
    }

    fn retain_directive_annotations_impl(&mut self, keep: AnnotationFilter<'_>) {
        for arg in self.arguments.iter_mut() {
            arg.retain_directive_annotations(keep);
        }
        if let Some(ast_node) = self.ast_node.as_mut() {
            input_value::retain_ast_input_value_annotations(&mut ast_node.arguments, keep);
        }
    }

    /// The syntax node this directive was defined by, wrapped as a schema
    /// definition. Returns `None` when the directive was not parsed from SDL.
    pub fn source_definition(&self) -> Option<ast::schema::Definition> {
        self.ast_node.as_ref().map(|ast_node| {
            ast::schema::Definition::DirectiveDefinition(ast_node.clone())
        })
    }
}

fn non_null_named_type(name: &str) -> ast::Type {
    ast::Type::NonNullType(Box::new(ast::Type::NamedType(name.to_string())))
}
