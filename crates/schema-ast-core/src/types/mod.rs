mod deprecation_state;
mod directive;
pub(crate) mod directive_annotation;
mod enum_type;
mod enum_value;
pub(crate) mod field;
mod graphql_type;
mod graphql_type_kind;
mod input_object_type;
pub(crate) mod input_value;
mod interface_type;
mod object_type;
mod scalar_type;
pub(crate) mod type_annotation;
mod union_type;

pub use deprecation_state::DEFAULT_DEPRECATION_REASON;
pub use deprecation_state::DeprecationState;
pub use directive::Directive;
pub use directive::SPECIFIED_DIRECTIVE_NAMES;
pub use directive_annotation::DirectiveAnnotation;
pub use enum_type::EnumType;
pub use enum_value::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type_kind::GraphQLTypeKind;
pub use input_object_type::InputObjectType;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use object_type::ObjectType;
pub use scalar_type::SPECIFIED_SCALAR_NAMES;
pub use scalar_type::ScalarType;
pub use type_annotation::innermost_type_name;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
