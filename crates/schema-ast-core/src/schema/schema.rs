use crate::ast;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a fully built and immutable GraphQL schema.
///
/// Every type and directive that was loaded from SDL text keeps the syntax
/// node it was parsed from; see [`GraphQLType::source_definitions`] and
/// [`Directive::ast_node`].
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub(crate) ast_node: Option<ast::schema::SchemaDefinition>,
    pub(crate) directives: Vec<Directive>,
    pub(crate) mutation_type: Option<String>,
    pub(crate) query_type: Option<String>,
    pub(crate) subscription_type: Option<String>,
    pub(crate) types: IndexMap<String, GraphQLType>,
}
impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// The `schema { ... }` block this schema was loaded with, if any.
    pub fn ast_node(&self) -> Option<&ast::schema::SchemaDefinition> {
        self.ast_node.as_ref()
    }

    /// All directives, in load order, followed by whichever built-in
    /// directives the loaded SDL didn't define.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.name() == name)
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.types.get(name)
    }

    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// All types keyed by name, in load order, followed by whichever
    /// specified scalars the loaded SDL didn't define.
    pub fn types(&self) -> &IndexMap<String, GraphQLType> {
        &self.types
    }
}
