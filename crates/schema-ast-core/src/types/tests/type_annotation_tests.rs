use crate::ast;
use crate::loc;
use crate::types::innermost_type_name;
use std::path::PathBuf;

#[test]
fn innermost_type_name_unwraps_lists_and_non_null() {
    let annot = ast::Type::NonNullType(Box::new(ast::Type::ListType(Box::new(
        ast::Type::NonNullType(Box::new(ast::Type::NamedType("User".to_string()))),
    ))));

    assert_eq!(innermost_type_name(&annot), "User");
    assert_eq!(innermost_type_name(&ast::Type::NamedType("ID".to_string())), "ID");
}

#[test]
fn def_location_display() {
    let file_loc: loc::SchemaDefLocation = loc::FilePosition {
        col: 3,
        file: PathBuf::from("schema.graphql"),
        line: 7,
    }.into();

    assert_eq!(file_loc.to_string(), "schema.graphql:7:3");
    assert_eq!(loc::SchemaDefLocation::GraphQLBuiltIn.to_string(), "<graphql built-in>");
}
