#[allow(clippy::module_inception)]
mod schema;
pub(crate) mod schema_builder;
mod schema_mapper;

pub use schema::Schema;
pub use schema_builder::NamedTypeDefLocation;
pub use schema_builder::RootOperationKind;
pub use schema_builder::SchemaBuildError;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::UndefinedTypeReference;
pub use schema_mapper::SchemaMapper;

#[cfg(test)]
mod tests;
