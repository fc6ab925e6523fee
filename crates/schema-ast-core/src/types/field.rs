use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::InputValue;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use crate::types::input_value;
use indexmap::IndexMap;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a defined field on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) arguments: Vec<InputValue>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field_type: ast::Type,
    pub(crate) name: String,
}
impl Field {
    pub fn new(name: impl Into<String>, field_type: ast::Type) -> Self {
        Self {
            arguments: vec![],
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
            field_type,
            name: name.into(),
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

    pub fn with_directive(mut self, annot: DirectiveAnnotation) -> Self {
        self.directives.push(annot);
        self
    }

    pub fn arguments(&self) -> &[InputValue] {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn field_type(&self) -> &ast::Type {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    fn from_ast(file_path: &Path, def: &ast::schema::Field) -> Self {
        Self {
            arguments: def.arguments.iter()
                .map(|arg| InputValue::from_ast(file_path, arg))
                .collect(),
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            field_type: def.field_type.clone(),
            name: def.name.to_string(),
        }
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
        for arg in self.arguments.iter_mut() {
            arg.retain_directive_annotations(keep);
        }
    }
}

/// Adds each field in `defs` to `fields`, rejecting `__`-prefixed names and
/// names already present (whether from the base definition or an earlier
/// extension).
pub(crate) fn add_fields_from_ast(
    fields: &mut IndexMap<String, Field>,
    file_path: &Path,
    type_name: &str,
    defs: &[ast::schema::Field],
) -> Result<()> {
    for def in defs {
        let field = Field::from_ast(file_path, def);
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

pub(crate) fn retain_ast_field_annotations(
    fields: &mut [ast::schema::Field],
    keep: AnnotationFilter<'_>,
) {
    for field in fields {
        directive_annotation::retain_ast_annotations(&mut field.directives, keep);
        input_value::retain_ast_input_value_annotations(&mut field.arguments, keep);
    }
}
