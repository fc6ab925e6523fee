//! SDL printers.
//!
//! [`print_schema`] renders a [`Schema`](crate::Schema) from its model in the
//! canonical layout. [`print_ast_definition`] renders a single retained
//! syntax node with `graphql-parser`'s own formatter.

mod ast_printer;
mod block_string;
mod description;
mod schema_printer;
mod value;

pub use ast_printer::print_ast_definition;
pub use block_string::print_block_string;
pub use schema_printer::PrintSchemaOptions;
pub use schema_printer::print_directive;
pub use schema_printer::print_schema;
pub use schema_printer::print_type;
pub use value::print_string_literal;
pub use value::print_type_annotation;
pub use value::print_value;

#[cfg(test)]
mod tests;
