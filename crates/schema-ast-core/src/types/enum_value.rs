use crate::ast;
use crate::loc;
use crate::types::DeprecationState;
use crate::types::DirectiveAnnotation;
use crate::types::directive_annotation;
use crate::types::directive_annotation::AnnotationFilter;
use std::path::Path;

/// Represents an
/// [enum value](https://spec.graphql.org/October2021/#sec-Enum-Value) defined
/// within a specific [`EnumType`](crate::types::EnumType).
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue {
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
}
impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SchemaDefLocation::Programmatic,
            description: None,
            directives: vec![],
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

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    pub fn deprecation_state(&self) -> DeprecationState<'_> {
        self.directives.as_slice().into()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The list of [`DirectiveAnnotation`]s applied to this [`EnumValue`], in
    /// the order they were written.
    pub fn directives(&self) -> &[DirectiveAnnotation] {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(file_path: &Path, def: &ast::schema::EnumValue) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file_path, def.position).into(),
            description: def.description.clone(),
            directives: DirectiveAnnotation::from_ast(file_path, &def.directives),
            name: def.name.to_string(),
        }
    }

    pub(crate) fn retain_directive_annotations(&mut self, keep: AnnotationFilter<'_>) {
        directive_annotation::retain_annotations(&mut self.directives, keep);
    }
}
