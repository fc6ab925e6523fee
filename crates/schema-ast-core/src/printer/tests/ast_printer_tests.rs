use crate::ast;
use crate::printer::print_ast_definition;

fn parse_single_def(sdl: &str) -> ast::schema::Definition {
    let doc = graphql_parser::schema::parse_schema::<String>(sdl)
        .expect("parse error")
        .into_static();
    doc.definitions.into_iter().next().expect("no definitions")
}

#[test]
fn prints_object_type_without_trailing_newline() {
    let def = parse_single_def("type Query @cache(ttl: 10) { a(x: Int = 1): Int @deprecated }");

    assert_eq!(
        print_ast_definition(def),
        "type Query @cache(ttl: 10) {\n  a(x: Int = 1): Int @deprecated\n}",
    );
}

#[test]
fn prints_directive_definition() {
    let def = parse_single_def("directive @auth(role: String) on OBJECT | FIELD_DEFINITION");

    assert_eq!(
        print_ast_definition(def),
        "directive @auth(role: String) on OBJECT | FIELD_DEFINITION",
    );
}

#[test]
fn prints_type_extension() {
    let def = parse_single_def("extend type Query { b: String }");

    assert_eq!(print_ast_definition(def), "extend type Query {\n  b: String\n}");
}
