use schema_ast_core::Schema;
use schema_ast_core::SchemaMapper;
use schema_ast_core::types::Directive;
use schema_ast_core::types::GraphQLType;
use thiserror::Error;

/// Types added to a schema by Apollo federation.
pub const FEDERATION_TYPE_NAMES: [&str; 4] = ["_Service", "_Entity", "_Any", "_FieldSet"];

/// Fields added to the query root type by Apollo federation.
pub const FEDERATION_QUERY_FIELD_NAMES: [&str; 2] = ["_service", "_entities"];

/// Directives defined by Apollo federation.
pub const FEDERATION_DIRECTIVE_NAMES: [&str; 5] = [
    "key",
    "extends",
    "external",
    "requires",
    "provides",
];

/// `_FieldSet` is the argument type of the federation directives, so it stays
/// whenever they do.
const FIELD_SET_TYPE_NAME: &str = "_FieldSet";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StripFederationOptions {
    /// Keep the federation directive definitions and their annotations.
    pub with_directives: bool,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum FederationError {
    #[error("Unable to remove federation from a schema that has no query root type")]
    NoQueryType,
}

/// Removes Apollo federation constructs from a [`Schema`].
pub trait FederationStripper {
    fn strip_federation(
        &self,
        schema: &Schema,
        options: StripFederationOptions,
    ) -> Result<Schema, FederationError>;
}

/// The default [`FederationStripper`].
///
/// Drops the federation types, removes `_service` and `_entities` from the
/// query root type, and (unless
/// [`with_directives`](StripFederationOptions::with_directives) is set)
/// drops the federation directive definitions along with every annotation
/// that uses them. Retained syntax nodes are updated in step with the model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemoveFederation;
impl FederationStripper for RemoveFederation {
    fn strip_federation(
        &self,
        schema: &Schema,
        options: StripFederationOptions,
    ) -> Result<Schema, FederationError> {
        let query_type_name =
            schema.query_type_name().ok_or(FederationError::NoQueryType)?;

        log::debug!(
            "Removing federation from schema (query root: `{query_type_name}`, \
            with_directives: {}).",
            options.with_directives,
        );

        let mut mapper = FederationMapper {
            query_type_name,
            with_directives: options.with_directives,
        };
        Ok(schema.map_schema(&mut mapper))
    }
}

struct FederationMapper<'a> {
    query_type_name: &'a str,
    with_directives: bool,
}
impl FederationMapper<'_> {
    fn is_removed_type(&self, type_name: &str) -> bool {
        if type_name == FIELD_SET_TYPE_NAME {
            return !self.with_directives;
        }
        FEDERATION_TYPE_NAMES.contains(&type_name)
    }
}
impl SchemaMapper for FederationMapper<'_> {
    fn map_directive(&mut self, mut directive: Directive) -> Option<Directive> {
        if self.with_directives {
            return Some(directive);
        }

        if FEDERATION_DIRECTIVE_NAMES.contains(&directive.name()) {
            log::trace!("Removing federation directive `@{}`.", directive.name());
            return None;
        }
        directive.retain_directive_annotations(is_not_federation_directive);
        Some(directive)
    }

    fn map_type(&mut self, mut graphql_type: GraphQLType) -> Option<GraphQLType> {
        if self.is_removed_type(graphql_type.name()) {
            log::trace!("Removing federation type `{}`.", graphql_type.name());
            return None;
        }

        if let GraphQLType::Object(object_type) = &mut graphql_type
            && object_type.name() == self.query_type_name {
            for field_name in FEDERATION_QUERY_FIELD_NAMES {
                if object_type.remove_field(field_name).is_some() {
                    log::trace!(
                        "Removing federation field `{}.{field_name}`.",
                        self.query_type_name,
                    );
                }
            }
        }

        if !self.with_directives {
            graphql_type.retain_directive_annotations(is_not_federation_directive);
        }
        Some(graphql_type)
    }
}

fn is_not_federation_directive(directive_name: &str) -> bool {
    !FEDERATION_DIRECTIVE_NAMES.contains(&directive_name)
}
