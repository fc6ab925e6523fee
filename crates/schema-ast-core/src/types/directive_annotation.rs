use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// Predicate over directive names used when filtering annotations out of a
/// type, its members, and their retained syntax nodes.
pub(crate) type AnnotationFilter<'a> = &'a dyn Fn(&str) -> bool;

/// Represents a
/// [directive annotation](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// placed on a type, field, argument, enum value, or input field.
///
/// Arguments are kept in the order they were written.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) args: IndexMap<String, ast::Value>,
    pub(crate) def_location: loc::SchemaDefLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            args: IndexMap::new(),
            def_location: loc::SchemaDefLocation::Programmatic,
            name: name.into(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: ast::Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn args(&self) -> &IndexMap<String, ast::Value> {
        &self.args
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        &self.def_location
    }

    /// The name of the directive this annotation refers to (without the
    /// leading `@`).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        ast_annots: &[ast::Directive],
    ) -> Vec<Self> {
        ast_annots.iter().map(|ast_annot| Self {
            args: ast_annot.arguments.iter()
                .map(|(arg_name, arg_val)| (arg_name.to_string(), arg_val.clone()))
                .collect(),
            def_location: loc::FilePosition::from_pos(
                file_path,
                ast_annot.position,
            ).into(),
            name: ast_annot.name.to_string(),
        }).collect()
    }
}

pub(crate) fn retain_annotations(
    annots: &mut Vec<DirectiveAnnotation>,
    keep: AnnotationFilter<'_>,
) {
    annots.retain(|annot| keep(annot.name()));
}

pub(crate) fn retain_ast_annotations(
    annots: &mut Vec<ast::Directive>,
    keep: AnnotationFilter<'_>,
) {
    annots.retain(|annot| keep(annot.name.as_str()));
}
