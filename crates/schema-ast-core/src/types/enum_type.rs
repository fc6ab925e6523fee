use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::EnumValue;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a defined GraphQL
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) ast_node: Option<ast::schema::EnumType>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::EnumTypeExtension>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_ast_nodes: vec![],
            name: name.into(),
            values: IndexMap::new(),
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

    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name.to_string(), value);
        self
    }

    pub fn ast_node(&self) -> Option<&ast::schema::EnumType> {
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

    pub fn extension_ast_nodes(&self) -> &[ast::schema::EnumTypeExtension] {
        &self.extension_ast_nodes
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum, keyed by name, in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub(crate) fn from_ast(file_path: &Path, def: ast::schema::EnumType) -> Result<Self> {
        let mut values = IndexMap::new();
        add_values_from_ast(&mut values, file_path, def.name.as_str(), &def.values)?;

        Ok(Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            extension_ast_nodes: vec![],
            name: def.name.to_string(),
            values,
            ast_node: Some(def),
        })
    }

    pub(crate) fn extend(
        &mut self,
        file_path: &Path,
        ext: ast::schema::EnumTypeExtension,
    ) -> Result<()> {
        add_values_from_ast(&mut self.values, file_path, &self.name, &ext.values)?;
        self.directives.extend(DirectiveAnnotation::from_ast(file_path, &ext.directives));
        self.extension_ast_nodes.push(ext);
        Ok(())
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
        for value in self.values.values_mut() {
            value.retain_directive_annotations(keep);
        }

        if let Some(ast_node) = self.ast_node.as_mut() {
            directive_annotation::retain_ast_annotations(&mut ast_node.directives, keep);
            retain_ast_value_annotations(&mut ast_node.values, keep);
        }
        for ext in self.extension_ast_nodes.iter_mut() {
            directive_annotation::retain_ast_annotations(&mut ext.directives, keep);
            retain_ast_value_annotations(&mut ext.values, keep);
        }
    }

    pub(crate) fn source_definitions(&self) -> Option<Vec<ast::schema::Definition>> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let ast_node = self.ast_node.as_ref()?;
        let mut defs = vec![
            Definition::TypeDefinition(TypeDefinition::Enum(ast_node.clone())),
        ];
        defs.extend(self.extension_ast_nodes.iter().map(|ext| {
            Definition::TypeExtension(TypeExtension::Enum(ext.clone()))
        }));
        Some(defs)
    }
}

fn add_values_from_ast(
    values: &mut IndexMap<String, EnumValue>,
    file_path: &Path,
    enum_name: &str,
    defs: &[ast::schema::EnumValue],
) -> Result<()> {
    for def in defs {
        let value = EnumValue::from_ast(file_path, def);
        if let Some(existing) = values.get(value.name.as_str()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_name.to_string(),
                value_name: value.name,
                value_def1: existing.def_location.clone(),
                value_def2: value.def_location,
            });
        }
        values.insert(value.name.to_string(), value);
    }
    Ok(())
}

fn retain_ast_value_annotations(
    values: &mut [ast::schema::EnumValue],
    keep: AnnotationFilter<'_>,
) {
    for value in values {
        directive_annotation::retain_ast_annotations(&mut value.directives, keep);
    }
}
