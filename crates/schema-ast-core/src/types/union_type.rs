use crate::ast;
use crate::loc;
use crate::types::DirectiveAnnotation;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use std::path::Path;

/// Represents a defined GraphQL
/// [union type](https://spec.graphql.org/October2021/#sec-Unions).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) ast_node: Option<ast::schema::UnionType>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::UnionTypeExtension>,
    pub(crate) members: Vec<String>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_ast_nodes: vec![],
            members: vec![],
            name: name.into(),
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

    pub fn with_member(mut self, type_name: impl Into<String>) -> Self {
        self.members.push(type_name.into());
        self
    }

    pub fn ast_node(&self) -> Option<&ast::schema::UnionType> {
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

    pub fn extension_ast_nodes(&self) -> &[ast::schema::UnionTypeExtension] {
        &self.extension_ast_nodes
    }

    /// Names of the member types, in declaration order.
    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(file_path: &Path, def: ast::schema::UnionType) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            extension_ast_nodes: vec![],
            members: def.types.clone(),
            name: def.name.to_string(),
            ast_node: Some(def),
        }
    }

    pub(crate) fn extend(&mut self, file_path: &Path, ext: ast::schema::UnionTypeExtension) {
        self.directives.extend(DirectiveAnnotation::from_ast(file_path, &ext.directives));
        self.members.extend(ext.types.iter().cloned());
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
            Definition::TypeDefinition(TypeDefinition::Union(ast_node.clone())),
        ];
        defs.extend(self.extension_ast_nodes.iter().map(|ext| {
            Definition::TypeExtension(TypeExtension::Union(ext.clone()))
        }));
        Some(defs)
    }
}
