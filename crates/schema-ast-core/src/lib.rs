pub mod ast;
mod file_reader;
pub mod loc;
pub mod printer;
mod schema;
pub mod types;

pub use file_reader::ReadContentError;
pub use schema::NamedTypeDefLocation;
pub use schema::RootOperationKind;
pub use schema::Schema;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuilder;
pub use schema::SchemaMapper;
pub use schema::UndefinedTypeReference;
