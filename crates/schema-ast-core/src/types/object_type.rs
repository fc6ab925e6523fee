use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::Field;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use crate::types::field;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a defined GraphQL
/// [object type](https://spec.graphql.org/October2021/#sec-Objects).
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectType {
    pub(crate) ast_node: Option<ast::schema::ObjectType>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) extension_ast_nodes: Vec<ast::schema::ObjectTypeExtension>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) interfaces: Vec<String>,
    pub(crate) name: String,
}
impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ast_node: None,
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            extension_ast_nodes: vec![],
            fields: IndexMap::new(),
            interfaces: vec![],
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

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.insert(field.name.to_string(), field);
        self
    }

    pub fn with_interface(mut self, interface_name: impl Into<String>) -> Self {
        self.interfaces.push(interface_name.into());
        self
    }

    /// The syntax node this type was parsed from, if any.
    pub fn ast_node(&self) -> Option<&ast::schema::ObjectType> {
        self.ast_node.as_ref()
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Annotations from the type definition followed by those added by each
    /// `extend type` block, in load order.
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn extension_ast_nodes(&self) -> &[ast::schema::ObjectTypeExtension] {
        &self.extension_ast_nodes
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        &self.fields
    }

    /// Names of the interfaces this type declares that it implements.
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Removes a field from this type and from every syntax node this type
    /// retains, returning the removed field (if it existed).
    pub fn remove_field(&mut self, field_name: &str) -> Option<Field> {
        if let Some(ast_node) = self.ast_node.as_mut() {
            ast_node.fields.retain(|field| field.name != field_name);
        }
        for ext in self.extension_ast_nodes.iter_mut() {
            ext.fields.retain(|field| field.name != field_name);
        }
        self.fields.shift_remove(field_name)
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        def: ast::schema::ObjectType,
    ) -> Result<Self> {
        let mut fields = IndexMap::new();
        field::add_fields_from_ast(&mut fields, file_path, def.name.as_str(), &def.fields)?;

        Ok(Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            extension_ast_nodes: vec![],
            fields,
            interfaces: def.implements_interfaces.clone(),
            name: def.name.to_string(),
            ast_node: Some(def),
        })
    }

    pub(crate) fn extend(
        &mut self,
        file_path: &Path,
        ext: ast::schema::ObjectTypeExtension,
    ) -> Result<()> {
        field::add_fields_from_ast(&mut self.fields, file_path, &self.name, &ext.fields)?;
        self.directives.extend(DirectiveAnnotation::from_ast(file_path, &ext.directives));
        self.interfaces.extend(ext.implements_interfaces.iter().cloned());
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
            field::retain_ast_field_annotations(&mut ast_node.fields, keep);
        }
        for ext in self.extension_ast_nodes.iter_mut() {
            directive_annotation::retain_ast_annotations(&mut ext.directives, keep);
            field::retain_ast_field_annotations(&mut ext.fields, keep);
        }
    }

    pub(crate) fn source_definitions(&self) -> Option<Vec<ast::schema::Definition>> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;

        let ast_node = self.ast_node.as_ref()?;
        let mut defs = vec![
            Definition::TypeDefinition(TypeDefinition::Object(ast_node.clone())),
        ];
        defs.extend(self.extension_ast_nodes.iter().map(|ext| {
            Definition::TypeExtension(TypeExtension::Object(ext.clone()))
        }));
        Some(defs)
    }
}
