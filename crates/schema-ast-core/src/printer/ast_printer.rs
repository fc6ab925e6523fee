use crate::ast;

/// Renders one syntax node back to SDL text using `graphql-parser`'s
/// formatter, without a trailing newline.
pub fn print_ast_definition(def: ast::schema::Definition) -> String {
    let doc = ast::schema::Document {
        definitions: vec![def],
    };
    doc.to_string().trim_end_matches('\n').to_string()
}
