use crate::ast;

/// Unwraps list and non-null wrappers, returning the named type at the core
/// of a type annotation (`[User!]!` -> `User`).
pub fn innermost_type_name(type_annotation: &ast::Type) -> &str {
    match type_annotation {
        ast::Type::ListType(inner) | ast::Type::NonNullType(inner) =>
            innermost_type_name(inner),
        ast::Type::NamedType(name) => name.as_str(),
    }
}

pub(crate) fn extension_position(ext: &ast::schema::TypeExtension) -> ast::Pos {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.position,
        TypeExtension::InputObject(ext) => ext.position,
        TypeExtension::Interface(ext) => ext.position,
        TypeExtension::Object(ext) => ext.position,
        TypeExtension::Scalar(ext) => ext.position,
        TypeExtension::Union(ext) => ext.position,
    }
}

pub(crate) fn extension_type_name(ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match ext {
        TypeExtension::Enum(ext) => ext.name.as_str(),
        TypeExtension::InputObject(ext) => ext.name.as_str(),
        TypeExtension::Interface(ext) => ext.name.as_str(),
        TypeExtension::Object(ext) => ext.name.as_str(),
        TypeExtension::Scalar(ext) => ext.name.as_str(),
        TypeExtension::Union(ext) => ext.name.as_str(),
    }
}
