use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use std::path::Path;

/// Names of the scalars every GraphQL schema provides.
pub const SPECIFIED_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) ast_node: Option<ast::schema::ScalarType>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::ScalarTypeExtension>,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_ast_nodes: vec![],
            name: name.into(),
        }
    }

    pub(crate) fn builtin(name: &str) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::GraphQLBuiltIn,
            ..Self::new(name)
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn ast_node(&self) -> Option<&ast::schema::ScalarType> {
        self.ast_node.as_ref()
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::ScalarTypeExtension] {
        &self.extension_ast_nodes
    }

    /// Whether this is one of the five scalars every GraphQL schema provides.
    ///
    /// A schema that redeclares e.g. `scalar String` still gets the
    /// specified scalar, so this is decided by name.
    pub fn is_specified(&self) -> bool {
        SPECIFIED_SCALAR_NAMES.contains(&self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(file_path: &Path, def: ast::schema::ScalarType) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            extension_ast_nodes: vec![],
            name: def.name.to_string(),
            ast_node: Some(def),
        }
    }

    pub(crate) fn extend(&mut self, file_path: &Path, ext: ast::schema::ScalarTypeExtension) {
        self.directives.extend(DirectiveAnnotation::from_ast(file_path, &ext.directives));
        self.extension_ast_nodes.push(ext);
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
        if let Some(ast_node) = self.ast_node.as_mut() {
            directive_annotation::retain_ast_annotations(&mut ast_node.directives, keep);
        }
        for ext in self.extension_ast_nodes.iter_mut() {
            directive_annotation::retain_ast_annotations(&mut ext.directives, keep);
        }
    }

    pub(crate) fn source_definitions(&self) -> Option<Vec<ast::schema::Definition>> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let ast_node = self.ast_node.as_ref()?;
        let mut defs = vec![
            Definition::TypeDefinition(TypeDefinition::Scalar(ast_node.clone())),
        ];
        defs.extend(self.extension_ast_nodes.iter().map(|ext| {
            Definition::TypeExtension(TypeExtension::Scalar(ext.clone()))
        }));
        Some(defs)
    }
}
