mod config_tests;
mod validate_tests;

use schema_ast_core::Schema;
use schema_ast_core::SchemaBuildError;
use schema_ast_core::SchemaBuilder;

pub(super) const FEDERATED_SDL: &str = r#"
scalar _Any
scalar _FieldSet

directive @key(fields: _FieldSet!) on OBJECT | INTERFACE
directive @extends on OBJECT | INTERFACE
directive @external on FIELD_DEFINITION
directive @requires(fields: _FieldSet!) on FIELD_DEFINITION
directive @provides(fields: _FieldSet!) on FIELD_DEFINITION
directive @audit(level: Int) on FIELD_DEFINITION

type _Service {
  sdl: String
}

union _Entity = User

type User @key(fields: "id") {
  id: ID! @external
  name: String @requires(fields: "id") @audit(level: 1)
}

type Query {
  me: User
  _service: _Service!
  _entities(representations: [_Any!]!): [_Entity]!
}
"#;

pub(super) fn build_schema(sdl: &str) -> Result<Schema, SchemaBuildError> {
    SchemaBuilder::new().load_str(None, sdl)?.build()
}
