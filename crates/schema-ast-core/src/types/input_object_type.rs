use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::InputValue;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use crate::types::input_value;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a defined GraphQL
/// [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectType {
    pub(crate) ast_node: Option<ast::schema::InputObjectType>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::InputObjectTypeExtension>,
    pub(crate) fields: IndexMap<String, InputValue>,
    pub(crate) name: String,
}
impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_ast_nodes: vec![],
            fields: IndexMap::new(),
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

    pub fn with_field(mut self, field: InputValue) -> Self {
        self.fields.insert(field.name.to_string(), field);
        self
    }

    pub fn ast_node(&self) -> Option<&ast::schema::InputObjectType> {
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

    pub fn extension_ast_nodes(&self) -> &[ast::schema::InputObjectTypeExtension] {
        &self.extension_ast_nodes
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        &self.fields
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        def: ast::schema::InputObjectType,
    ) -> Result<Self> {
        let mut fields = IndexMap::new();
        add_fields_from_ast(&mut fields, file_path, def.name.as_str(), &def.fields)?;

        Ok(Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            extension_ast_nodes: vec![],
            fields,
            name: def.name.to_string(),
            ast_node: Some(def),
        })
    }

    pub(crate) fn extend(
        &mut self,
        file_path: &Path,
        ext: ast::schema::InputObjectTypeExtension,
    ) -> Result<()> {
        add_fields_from_ast(&mut self.fields, file_path, &self.name, &ext.fields)?;
        self.directives.extend(DirectiveAnnotation::from_ast(file_path, &ext.directives));
        self.extension_ast_nodes.push(ext);
        Ok(())
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
        for field in self.fields.values_mut() {
            field.retain_directive_annotations(keep);
        }

        if let Some(ast_node) = self.ast_node.as_mut() {
            directive_annotation::retain_ast_annotations(&mut ast_node.directives, keep);
            input_value::retain_ast_input_value_annotations(&mut ast_node.fields, keep);
        }
        for ext in self.extension_ast_nodes.iter_mut() {
            directive_annotation::retain_ast_annotations(&mut ext.directives, keep);
            input_value::retain_ast_input_value_annotations(&mut ext.fields, keep);
        }
    }

    pub(crate) fn source_definitions(&self) -> Option<Vec<ast::schema::Definition>> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let ast_node = self.ast_node.as_ref()?;
        let mut defs = vec![
            Definition::TypeDefinition(TypeDefinition::InputObject(ast_node.clone())),
        ];
        defs.extend(self.extension_ast_nodes.iter().map(|ext| {
            Definition::TypeExtension(TypeExtension::InputObject(ext.clone()))
        }));
        Some(defs)
    }
}

fn add_fields_from_ast(
    fields: &mut IndexMap<String, InputValue>,
    file_path: &Path,
    type_name: &str,
    defs: &[ast::schema::InputValue],
) -> Result<()> {
    for def in defs {
        let field = InputValue::from_ast(file_path, def);
        if field.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field.def_location,
                field_name: field.name,
                type_name: type_name.to_string(),
            });
        }

        if let Some(existing) = fields.get(field.name.as_str()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                type_name: type_name.to_string(),
                field_name: field.name,
                field_def1: existing.def_location.clone(),
                field_def2: field.def_location,
            });
        }

        fields.insert(field.name.to_string(), field);
    }
    Ok(())
}
