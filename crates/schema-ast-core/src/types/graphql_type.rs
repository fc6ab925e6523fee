use crate::ast;
use crate::loc;
use crate::schema::SchemaBuildError;
use crate::types::DirectiveAnnotation;
use crate::types::EnumType;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::type_annotation;
use std::path::Path;

type Result<T> = std::result::Result<T, SchemaBuildError>;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Enum(EnumType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self { Some(enum_type) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(t) = self { Some(t) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(t) = self { Some(t) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(t) = self { Some(t) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(t) = self { Some(t) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(t) = self { Some(t) } else { None }
    }

    pub fn def_location(&self) -> &loc::SchemaDefLocation {
        match self {
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        match self {
            Self::Enum(t) => t.directives(),
            Self::InputObject(t) => t.directives(),
            Self::Interface(t) => t.directives(),
            Self::Object(t) => t.directives(),
            Self::Scalar(t) => t.directives(),
            Self::Union(t) => t.directives(),
        }
    }

    /// Whether this type is provided by GraphQL itself rather than by the
    /// schema author. Only the specified scalars qualify.
    pub fn is_builtin(&self) -> bool {
        match self {
            Self::Scalar(scalar_type) => scalar_type.is_specified(),
            _ => false,
        }
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Enum(_) => GraphQLTypeKind::Enum,
            Self::InputObject(_) => GraphQLTypeKind::InputObject,
            Self::Interface(_) => GraphQLTypeKind::Interface,
            Self::Object(_) => GraphQLTypeKind::Object,
            Self::Scalar(_) => GraphQLTypeKind::Scalar,
            Self::Union(_) => GraphQLTypeKind::Union,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(t) => t.name(),
            Self::InputObject(t) => t.name(),
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::Union(t) => t.name(),
        }
    }

    /// Drops every annotation whose directive name does not satisfy `keep`
    /// from this type and its fields, arguments, enum values, and input
    /// fields. Retained syntax nodes are filtered the same way so that
    /// reprinting them agrees with the model.
    pub fn retain_directive_annotations<F: Fn(&str) -> bool>(&mut self, keep: F) {
        let keep = &keep;
        match self {
            Self::Enum(t) => t.retain_directive_annotations(keep),
            Self::InputObject(t) => t.retain_directive_annotations(keep),
            Self::Interface(t) => t.retain_directive_annotations(keep),
            Self::Object(t) => t.retain_directive_annotations(keep),
            Self::Scalar(t) => t.retain_directive_annotations(keep),
            Self::Union(t) => t.retain_directive_annotations(keep),
        }
    }

    /// The syntax nodes this type was built from: its definition followed by
    /// any extensions. Returns `None` when the type was not parsed from SDL.
    pub fn source_definitions(&self) -> Option<Vec<ast::schema::Definition>> {
        match self {
            Self::Enum(t) => t.source_definitions(),
            Self::InputObject(t) => t.source_definitions(),
            Self::Interface(t) => t.source_definitions(),
            Self::Object(t) => t.source_definitions(),
            Self::Scalar(t) => t.source_definitions(),
            Self::Union(t) => t.source_definitions(),
        }
    }

    pub(crate) fn from_ast(
        file_path: &Path,
        def: ast::schema::TypeDefinition,
    ) -> Result<Self> {
        use ast::schema::TypeDefinition;
        Ok(match def {
            TypeDefinition::Enum(def) =>
                Self::Enum(EnumType::from_ast(file_path, def)?),
            TypeDefinition::InputObject(def) =>
                Self::InputObject(InputObjectType::from_ast(file_path, def)?),
            TypeDefinition::Interface(def) =>
                Self::Interface(InterfaceType::from_ast(file_path, def)?),
            TypeDefinition::Object(def) =>
                Self::Object(ObjectType::from_ast(file_path, def)?),
            TypeDefinition::Scalar(def) =>
                Self::Scalar(ScalarType::from_ast(file_path, def)),
            TypeDefinition::Union(def) =>
                Self::Union(UnionType::from_ast(file_path, def)),
        })
    }

    pub(crate) fn extend(
        &mut self,
        file_path: &Path,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use ast::schema::TypeExtension;
        match (self, ext) {
            (Self::Enum(t), TypeExtension::Enum(ext)) =>
                t.extend(file_path, ext),
            (Self::InputObject(t), TypeExtension::InputObject(ext)) =>
                t.extend(file_path, ext),
            (Self::Interface(t), TypeExtension::Interface(ext)) =>
                t.extend(file_path, ext),
            (Self::Object(t), TypeExtension::Object(ext)) =>
                t.extend(file_path, ext),
            (Self::Scalar(t), TypeExtension::Scalar(ext)) => {
                t.extend(file_path, ext);
                Ok(())
            },
            (Self::Union(t), TypeExtension::Union(ext)) => {
                t.extend(file_path, ext);
                Ok(())
            },
            (schema_type, ext) => {
                let extension_kind = GraphQLTypeKind::of_extension(&ext);
                Err(SchemaBuildError::InvalidExtensionType {
                    type_name: schema_type.name().to_string(),
                    type_kind: schema_type.kind(),
                    extension_kind,
                    extension_loc: loc::FilePosition::from_pos(
                        file_path,
                        type_annotation::extension_position(&ext),
                    ).into(),
                })
            },
        }
    }

    /// Every named type this type refers to, paired with a short description
    /// of where the reference occurs (e.g. `Query.user(id:)`).
    pub(crate) fn type_references(&self) -> Vec<(&str, String)> {
        let mut refs = vec![];
        let type_name = self.name();
        match self {
            Self::Enum(_) | Self::Scalar(_) => (),

            Self::InputObject(t) => {
                for field in t.fields().values() {
                    refs.push((
                        type_annotation::innermost_type_name(field.value_type()),
                        format!("{type_name}.{}", field.name()),
                    ));
                }
            },

            Self::Interface(t) => {
                for iface_name in t.interfaces() {
                    refs.push((iface_name.as_str(), format!("{type_name} (implements)")));
                }
                for field in t.fields().values() {
                    collect_field_refs(&mut refs, type_name, field);
                }
            },

            Self::Object(t) => {
                for iface_name in t.interfaces() {
                    refs.push((iface_name.as_str(), format!("{type_name} (implements)")));
                }
                for field in t.fields().values() {
                    collect_field_refs(&mut refs, type_name, field);
                }
            },

            Self::Union(t) => {
                for member_name in t.members() {
                    refs.push((member_name.as_str(), format!("{type_name} (member)")));
                }
            },
        }
        refs
    }
}

fn collect_field_refs<'a>(
    refs: &mut Vec<(&'a str, String)>,
    type_name: &str,
    field: &'a crate::types::Field,
) {
    refs.push((
        type_annotation::innermost_type_name(field.field_type()),
        format!("{type_name}.{}", field.name()),
    ));
    for arg in field.arguments() {
        refs.push((
            type_annotation::innermost_type_name(arg.value_type()),
            format!("{type_name}.{}({}:)", field.name(), arg.name()),
        ));
    }
}
