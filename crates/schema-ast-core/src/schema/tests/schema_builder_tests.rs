use crate::ast;
use crate::loc;
use crate::schema::RootOperationKind;
use crate::schema::Schema;
use crate::schema::SchemaBuildError;
use crate::schema::SchemaBuilder;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::ObjectType;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn build_from_str(sdl: &str) -> Result<Schema> {
    SchemaBuilder::new().load_str(None, sdl)?.build()
}

mod build_operations {
    use super::*;

    #[test]
    fn build_empty_query_type_str() -> Result<()> {
        let schema = build_from_str("type Query")?;

        assert_eq!(schema.directives().len(), 4);
        assert_eq!(schema.types().len(), 6);
        assert_eq!(schema.query_type_name(), Some("Query"));
        assert!(schema.mutation_type_name().is_none());
        assert!(schema.subscription_type_name().is_none());

        let query_type = schema.get_type("Query").unwrap().as_object().unwrap();
        assert_eq!(query_type.def_location(), &loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 1,
        }.into());
        assert!(query_type.directives().is_empty());
        assert!(query_type.fields().is_empty());
        assert!(query_type.ast_node().is_some());

        Ok(())
    }

    #[test]
    fn build_all_conventional_operation_types() -> Result<()> {
        let schema = build_from_str(concat!(
            "type Mutation\n",
            "type Query\n",
            "type Subscription",
        ))?;

        assert_eq!(schema.types().len(), 8);
        assert_eq!(schema.mutation_type_name(), Some("Mutation"));
        assert_eq!(schema.query_type_name(), Some("Query"));
        assert_eq!(schema.subscription_type_name(), Some("Subscription"));
        assert!(schema.ast_node().is_none());

        let subscription_type = schema.get_type("Subscription").unwrap();
        assert_eq!(subscription_type.def_location(), &loc::FilePosition {
            col: 1,
            file: PathBuf::from("str://0"),
            line: 3,
        }.into());

        Ok(())
    }

    #[test]
    fn conventional_name_on_non_object_type_is_not_a_root() -> Result<()> {
        let schema = build_from_str("scalar Query")?;

        assert!(schema.query_type_name().is_none());

        Ok(())
    }

    #[test]
    fn explicit_schema_block_wins_over_conventional_names() -> Result<()> {
        let schema = build_from_str(concat!(
            "schema { query: Root, mutation: Mut }\n",
            "type Root { a: Int }\n",
            "type Mut { b: Int }\n",
            "type Query { c: Int }",
        ))?;

        assert_eq!(schema.query_type_name(), Some("Root"));
        assert_eq!(schema.mutation_type_name(), Some("Mut"));
        assert!(schema.subscription_type_name().is_none());
        assert!(schema.ast_node().is_some());

        Ok(())
    }

    #[test]
    fn duplicate_schema_block_operation() -> Result<()> {
        let result = build_from_str(concat!(
            "schema { query: Query }\n",
            "schema { query: Query }\n",
            "type Query { a: Int }",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateOperationDefinition {
                operation: RootOperationKind::Query,
                ..
            }),
        ));

        Ok(())
    }

    #[test]
    fn root_operations_must_use_different_types() -> Result<()> {
        let result = build_from_str(concat!(
            "schema { query: Root, mutation: Root }\n",
            "type Root { a: Int }",
        ));

        assert_eq!(result, Err(SchemaBuildError::NonUniqueOperationTypes {
            reused_type_name: "Root".to_string(),
            operation1: RootOperationKind::Query,
            operation2: RootOperationKind::Mutation,
        }));

        Ok(())
    }

    #[test]
    fn undefined_root_operation_type() -> Result<()> {
        let result = build_from_str("schema { query: Missing }");

        let Err(SchemaBuildError::UndefinedTypeReferences { references }) = result else {
            panic!("Expected UndefinedTypeReferences, got {result:?}");
        };
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].type_name, "Missing");
        assert_eq!(references[0].referenced_at, "schema (query root)");

        Ok(())
    }
}

mod build_types {
    use super::*;

    #[test]
    fn builtin_scalars_are_injected_after_declared_types() -> Result<()> {
        let schema = build_from_str("scalar Date\ntype Query { today: Date }")?;

        let type_names: Vec<&str> = schema.types().keys().map(String::as_str).collect();
        assert_eq!(type_names, vec![
            "Date",
            "Query",
            "Boolean",
            "Float",
            "ID",
            "Int",
            "String",
        ]);
        assert!(!schema.get_type("Date").unwrap().is_builtin());
        assert!(schema.get_type("String").unwrap().is_builtin());
        assert_eq!(
            schema.get_type("String").unwrap().def_location(),
            &loc::SchemaDefLocation::GraphQLBuiltIn,
        );

        Ok(())
    }

    #[test]
    fn builtin_directives_are_injected_after_declared_directives() -> Result<()> {
        let schema = build_from_str(concat!(
            "directive @auth(role: String) on FIELD_DEFINITION\n",
            "type Query { a: Int }",
        ))?;

        let directive_names: Vec<&str> =
            schema.directives().iter().map(|d| d.name()).collect();
        assert_eq!(directive_names, vec![
            "auth",
            "skip",
            "include",
            "deprecated",
            "specifiedBy",
        ]);
        assert!(!schema.get_directive("auth").unwrap().is_builtin());
        assert!(schema.get_directive("deprecated").unwrap().is_builtin());

        Ok(())
    }

    #[test]
    fn duplicate_type_definition() -> Result<()> {
        let result = build_from_str("type Query { a: Int }\ntype Query { b: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateTypeDefinition { type_name, .. })
                if type_name == "Query"
        ));

        Ok(())
    }

    #[test]
    fn duplicate_type_definition_across_strs() -> Result<()> {
        let result =
            SchemaBuilder::new()
                .load_str(None, "type Query { a: Int }")?
                .load_str(None, "type Query { b: Int }");

        assert_eq!(result.unwrap_err(), SchemaBuildError::DuplicateTypeDefinition {
            type_name: "Query".to_string(),
            def1: loc::FilePosition {
                col: 1,
                file: PathBuf::from("str://0"),
                line: 1,
            }.into(),
            def2: loc::FilePosition {
                col: 1,
                file: PathBuf::from("str://1"),
                line: 1,
            }.into(),
        });

        Ok(())
    }

    #[test]
    fn dunder_prefixed_type_name() -> Result<()> {
        let result = build_from_str("type __Query { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedTypeName { type_name, .. })
                if type_name == "__Query"
        ));

        Ok(())
    }

    #[test]
    fn dunder_prefixed_field_name() -> Result<()> {
        let result = build_from_str("type Query { __a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                field_name,
                type_name,
                ..
            }) if field_name == "__a" && type_name == "Query"
        ));

        Ok(())
    }

    #[test]
    fn duplicate_field_name() -> Result<()> {
        let result = build_from_str("type Query { a: Int, a: String }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a"
        ));

        Ok(())
    }

    #[test]
    fn duplicate_enum_value() -> Result<()> {
        let result = build_from_str("enum Color { RED GREEN RED }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateEnumValueDefinition { enum_name, value_name, .. })
                if enum_name == "Color" && value_name == "RED"
        ));

        Ok(())
    }

    #[test]
    fn undefined_field_and_argument_types() -> Result<()> {
        let result = build_from_str(concat!(
            "type Query {\n",
            "  user(filter: UserFilter): [User!]!\n",
            "}",
        ));

        let Err(SchemaBuildError::UndefinedTypeReferences { references }) = result else {
            panic!("Expected UndefinedTypeReferences, got {result:?}");
        };
        let missing: Vec<(&str, &str)> =
            references.iter()
                .map(|r| (r.type_name.as_str(), r.referenced_at.as_str()))
                .collect();
        assert_eq!(missing, vec![
            ("User", "Query.user"),
            ("UserFilter", "Query.user(filter:)"),
        ]);

        Ok(())
    }

    #[test]
    fn undefined_union_member_and_interface() -> Result<()> {
        let result = build_from_str(concat!(
            "type Query implements Node { a: Int }\n",
            "union Result = Query | Missing",
        ));

        let Err(SchemaBuildError::UndefinedTypeReferences { references }) = result else {
            panic!("Expected UndefinedTypeReferences, got {result:?}");
        };
        let missing: Vec<&str> =
            references.iter().map(|r| r.type_name.as_str()).collect();
        assert_eq!(missing, vec!["Node", "Missing"]);

        Ok(())
    }

    #[test]
    fn parse_error_names_the_source() -> Result<()> {
        let result = build_from_str("type Query {");

        assert!(matches!(
            result,
            Err(SchemaBuildError::ParseError { file, .. })
                if file == PathBuf::from("str://0")
        ));

        Ok(())
    }

    #[test]
    fn programmatic_types_have_no_syntax_node() -> Result<()> {
        let schema =
            SchemaBuilder::new()
                .add_type(GraphQLType::Object(
                    ObjectType::new("Query")
                        .with_field(Field::new("a", ast::Type::NamedType("Int".to_string()))),
                ))?
                .build()?;

        let query_type = schema.get_type("Query").unwrap();
        assert_eq!(schema.query_type_name(), Some("Query"));
        assert_eq!(query_type.def_location(), &loc::SchemaDefLocation::Programmatic);
        assert!(query_type.source_definitions().is_none());

        Ok(())
    }
}

mod build_directives {
    use super::*;

    #[test]
    fn directive_definition_retains_syntax_node() -> Result<()> {
        let schema = build_from_str(concat!(
            "directive @cache(ttl: Int = 60) repeatable on OBJECT | FIELD_DEFINITION\n",
            "type Query { a: Int }",
        ))?;

        let directive = schema.get_directive("cache").unwrap();
        assert!(directive.is_repeatable());
        assert_eq!(directive.locations(), &[
            ast::schema::DirectiveLocation::Object,
            ast::schema::DirectiveLocation::FieldDefinition,
        ]);
        assert_eq!(directive.arguments().len(), 1);
        assert_eq!(
            directive.arguments()[0].default_value(),
            Some(&ast::Value::Int(60.into())),
        );
        assert!(directive.ast_node().is_some());

        Ok(())
    }

    #[test]
    fn redefinition_of_builtin_directive() -> Result<()> {
        let result = build_from_str("directive @skip(if: Boolean!) on FIELD");

        assert!(matches!(
            result,
            Err(SchemaBuildError::RedefinitionOfBuiltinDirective { directive_name, .. })
                if directive_name == "skip"
        ));

        Ok(())
    }

    #[test]
    fn duplicate_directive_definition() -> Result<()> {
        let result = build_from_str(concat!(
            "directive @auth on OBJECT\n",
            "directive @auth on FIELD_DEFINITION",
        ));

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateDirectiveDefinition { directive_name, .. })
                if directive_name == "auth"
        ));

        Ok(())
    }

    #[test]
    fn dunder_prefixed_directive_name() -> Result<()> {
        let result = build_from_str("directive @__auth on OBJECT");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName { directive_name, .. })
                if directive_name == "__auth"
        ));

        Ok(())
    }

    #[test]
    fn undefined_directive_argument_type() -> Result<()> {
        let result = build_from_str("directive @auth(role: Role) on OBJECT");

        let Err(SchemaBuildError::UndefinedTypeReferences { references }) = result else {
            panic!("Expected UndefinedTypeReferences, got {result:?}");
        };
        assert_eq!(references[0].type_name, "Role");
        assert_eq!(references[0].referenced_at, "@auth(role:)");

        Ok(())
    }

    #[test]
    fn programmatic_directive() -> Result<()> {
        let schema =
            SchemaBuilder::new()
                .add_directive(Directive::new(
                    "internal",
                    vec![ast::schema::DirectiveLocation::Object],
                ))?
                .build()?;

        let directive = schema.get_directive("internal").unwrap();
        assert_eq!(directive.def_location(), &loc::SchemaDefLocation::Programmatic);
        assert!(directive.ast_node().is_none());

        Ok(())
    }
}

mod build_extensions {
    use super::*;

    #[test]
    fn extension_merges_into_base_type() -> Result<()> {
        let schema = build_from_str(concat!(
            "type Query { a: Int }\n",
            "extend type Query @tag { b: String }",
        ))?;

        let query_type = schema.get_type("Query").unwrap().as_object().unwrap();
        let field_names: Vec<&str> = query_type.fields().keys().map(String::as_str).collect();
        assert_eq!(field_names, vec!["a", "b"]);
        assert_eq!(query_type.directives().len(), 1);
        assert_eq!(query_type.directives()[0].name(), "tag");
        assert_eq!(query_type.extension_ast_nodes().len(), 1);
        assert_eq!(
            schema.get_type("Query").unwrap().source_definitions().map(|defs| defs.len()),
            Some(2),
        );

        Ok(())
    }

    #[test]
    fn extension_may_precede_its_base_type() -> Result<()> {
        let schema =
            SchemaBuilder::new()
                .load_str(None, "extend enum Color { BLUE }")?
                .load_str(None, "enum Color { RED }\ntype Query { color: Color }")?
                .build()?;

        let color_type = schema.get_type("Color").unwrap().as_enum().unwrap();
        let value_names: Vec<&str> = color_type.values().keys().map(String::as_str).collect();
        assert_eq!(value_names, vec!["RED", "BLUE"]);

        Ok(())
    }

    #[test]
    fn extension_of_undefined_type() -> Result<()> {
        // Extension positions point at the keyword after `extend`.
        let result = build_from_str("extend type Missing { a: Int }");

        assert_eq!(result, Err(SchemaBuildError::ExtensionOfUndefinedType {
            type_name: "Missing".to_string(),
            extension_type_loc: loc::FilePosition {
                col: 8,
                file: PathBuf::from("str://0"),
                line: 1,
            }.into(),
        }));

        Ok(())
    }

    #[test]
    fn extension_of_different_kind() -> Result<()> {
        let result = build_from_str("type Query { a: Int }\nextend enum Query { B }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::InvalidExtensionType {
                type_kind: GraphQLTypeKind::Object,
                extension_kind: GraphQLTypeKind::Enum,
                ..
            })
        ));

        Ok(())
    }

    #[test]
    fn extension_duplicating_a_field() -> Result<()> {
        let result = build_from_str("type Query { a: Int }\nextend type Query { a: Int }");

        assert!(matches!(
            result,
            Err(SchemaBuildError::DuplicateFieldNameDefinition { field_name, .. })
                if field_name == "a"
        ));

        Ok(())
    }
}

mod load_files {
    use super::*;

    #[test]
    fn load_file_labels_definitions_with_path() -> Result<()> {
        let file_path =
            std::env::temp_dir().join("schema_ast_core_load_file_test.graphql");
        std::fs::write(&file_path, "type Query {\n  a: Int\n}\n").unwrap();

        let schema = SchemaBuilder::new().load_file(&file_path)?.build()?;

        assert_eq!(schema.get_type("Query").unwrap().def_location(), &loc::FilePosition {
            col: 1,
            file: file_path.clone(),
            line: 1,
        }.into());

        std::fs::remove_file(&file_path).unwrap();
        Ok(())
    }

    #[test]
    fn load_missing_file() -> Result<()> {
        let file_path = PathBuf::from("/this/path/does/not/exist.graphql");

        let result = SchemaBuilder::new().load_file(&file_path);

        assert!(matches!(result, Err(SchemaBuildError::SchemaFileReadError(_))));

        Ok(())
    }
}
