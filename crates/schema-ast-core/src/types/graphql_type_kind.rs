#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphQLTypeKind {
    Enum,
    InputObject,
    Interface,
    Object,
    Scalar,
    Union,
}
impl GraphQLTypeKind {
    pub(crate) fn of_extension(ext: &crate::ast::schema::TypeExtension) -> Self {
        use crate::ast::schema::TypeExtension;
        match ext {
            TypeExtension::Enum(_) => Self::Enum,
            TypeExtension::InputObject(_) => Self::InputObject,
            TypeExtension::Interface(_) => Self::Interface,
            TypeExtension::Object(_) => Self::Object,
            TypeExtension::Scalar(_) => Self::Scalar,
            TypeExtension::Union(_) => Self::Union,
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Enum => "enum type",
            Self::InputObject => "input object type",
            Self::Interface => "interface type",
            Self::Object => "object type",
            Self::Scalar => "scalar type",
            Self::Union => "union type",
        })
    }
}
