use crate::ast;
use crate::types::DirectiveAnnotation;

/// The reason reported for `@deprecated` when no `reason` argument is given.
pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeprecationState<'a> {
    Deprecated(&'a str),
    NotDeprecated,
}
impl<'a> DeprecationState<'a> {
    pub fn is_deprecated(&self) -> bool {
        matches!(self, Self::Deprecated(_))
    }
}

impl<'a> std::convert::From<&'a [DirectiveAnnotation]> for DeprecationState<'a> {
    fn from(value: &'a [DirectiveAnnotation]) -> DeprecationState<'a> {
        let directive_annot = value.iter().find(|directive_annot| {
            directive_annot.name() == "deprecated"
        });
        match directive_annot {
            Some(directive_annot) => match directive_annot.args().get("reason") {
                Some(ast::Value::String(reason)) =>
                    DeprecationState::Deprecated(reason.as_str()),
                _ => DeprecationState::Deprecated(DEFAULT_DEPRECATION_REASON),
            },
            None => DeprecationState::NotDeprecated,
        }
    }
}
