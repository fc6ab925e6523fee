use crate::schema::Schema;
use crate::types::Directive;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// A transform over the definitions of a [`Schema`], applied with
/// [`Schema::map_schema`].
///
/// Each hook receives an owned copy of one definition and returns either the
/// (possibly modified) definition to keep, or `None` to drop it. The default
/// hooks keep everything unchanged.
pub trait SchemaMapper {
    fn map_directive(&mut self, directive: Directive) -> Option<Directive> {
        Some(directive)
    }

    fn map_type(&mut self, graphql_type: GraphQLType) -> Option<GraphQLType> {
        Some(graphql_type)
    }
}

impl Schema {
    /// Produces a new [`Schema`] by passing every directive and every type
    /// through `mapper`, in order.
    ///
    /// Root operation types that the mapper drops are dropped from the new
    /// schema's roots as well. No other consistency checks are made: a
    /// mapper that removes a type is responsible for removing references to
    /// it.
    pub fn map_schema<M: SchemaMapper + ?Sized>(&self, mapper: &mut M) -> Schema {
        let directives: Vec<Directive> =
            self.directives.iter()
                .cloned()
                .filter_map(|directive| mapper.map_directive(directive))
                .collect();

        let types: IndexMap<String, GraphQLType> =
            self.types.values()
                .cloned()
                .filter_map(|graphql_type| mapper.map_type(graphql_type))
                .map(|graphql_type| (graphql_type.name().to_string(), graphql_type))
                .collect();

        let retained_root = |root: &Option<String>| {
            root.as_ref()
                .filter(|type_name| types.contains_key(type_name.as_str()))
                .cloned()
        };

        log::trace!(
            "Mapped schema from {} to {} types and from {} to {} directives.",
            self.types.len(),
            types.len(),
            self.directives.len(),
            directives.len(),
        );

        Schema {
            ast_node: self.ast_node.clone(),
            mutation_type: retained_root(&self.mutation_type),
            query_type: retained_root(&self.query_type),
            subscription_type: retained_root(&self.subscription_type),
            directives,
            types,
        }
    }
}
