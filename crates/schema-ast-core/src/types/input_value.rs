use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use std::path::Path;

/// Represents an argument on a field or directive, or a field on an input
/// object type. All three share the same shape in GraphQL.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) default_value: Option<ast::Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) value_type: ast::Type,
}
impl InputValue {
    pub fn new(name: impl Into<String>, value_type: ast::Type) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            default_value: None,
            description: None,
            directives: vec![],
            name: name.into(),
            value_type,
        }
    }

    pub fn with_default_value(mut self, default_value: ast::Value) -> Self {
        self.default_value = Some(default_value);
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

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&ast::Value> {
        self.default_value.as_ref()
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

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value_type(&self) -> &ast::Type {
        &self.value_type
    }

    pub(crate) fn from_ast(file_path: &Path, def: &ast::schema::InputValue) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            default_value: def.default_value.clone(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            name: def.name.to_string(),
            value_type: def.value_type.clone(),
        }
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
    }
}

pub(crate) fn retain_ast_input_value_annotations(
    values: &mut [ast::schema::InputValue],
    keep: AnnotationFilter<'_>,
) {
    for value in values {
        directive_annotation::retain_ast_annotations(&mut value.directives, keep);
    }
}
