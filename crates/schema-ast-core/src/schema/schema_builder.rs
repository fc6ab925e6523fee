use crate::ast;
use crate::file_reader;
use crate::loc;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::SPECIFIED_DIRECTIVE_NAMES;
use crate::types::SPECIFIED_SCALAR_NAMES;
use crate::types::ScalarType;
use crate::types::innermost_type_name;
use crate::types::type_annotation;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootOperationKind {
    Query,
    Mutation,
    Subscription,
}
impl std::fmt::Display for RootOperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        })
    }
}

/// Utility for building a [Schema].
///
/// Definitions may come from SDL text (via the `load_*` methods) or be
/// constructed in code and added with [`SchemaBuilder::add_type`] and
/// [`SchemaBuilder::add_directive`]. Only the former retain syntax nodes.
#[derive(Debug)]
pub struct SchemaBuilder {
    directives: IndexMap<String, Directive>,
    mutation_type: Option<NamedTypeDefLocation>,
    pending_extensions: Vec<(PathBuf, ast::schema::TypeExtension)>,
    query_type: Option<NamedTypeDefLocation>,
    schema_ast_node: Option<ast::schema::SchemaDefinition>,
    str_load_counter: u16,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            directives: IndexMap::new(),
            mutation_type: None,
            pending_extensions: vec![],
            query_type: None,
            schema_ast_node: None,
            str_load_counter: 0,
            subscription_type: None,
            types: IndexMap::new(),
        }
    }

    pub fn add_directive(mut self, directive: Directive) -> Result<Self> {
        self.insert_directive(directive)?;
        Ok(self)
    }

    pub fn add_type(mut self, graphql_type: GraphQLType) -> Result<Self> {
        self.insert_type(graphql_type)?;
        Ok(self)
    }

    pub fn build(mut self) -> Result<Schema> {
        // Extensions are applied after everything is loaded so that an
        // `extend` block may appear in an earlier file than the type it
        // extends.
        for (file_path, ext) in std::mem::take(&mut self.pending_extensions) {
            let type_name = type_annotation::extension_type_name(&ext);
            let Some(schema_type) = self.types.get_mut(type_name) else {
                return Err(SchemaBuildError::ExtensionOfUndefinedType {
                    type_name: type_name.to_string(),
                    extension_type_loc: loc::FilePosition::from_pos(
                        file_path.as_path(),
                        type_annotation::extension_position(&ext),
                    ).into(),
                });
            };
            schema_type.extend(file_path.as_path(), ext)?;
        }

        self.inject_missing_builtin_scalars();
        self.inject_missing_builtin_directives();

        let query_type = self.resolve_root_type(RootOperationKind::Query);
        let mutation_type = self.resolve_root_type(RootOperationKind::Mutation);
        let subscription_type = self.resolve_root_type(RootOperationKind::Subscription);

        // Root operation types:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (RootOperationKind::Query, &query_type),
            (RootOperationKind::Mutation, &mutation_type),
            (RootOperationKind::Subscription, &subscription_type),
        ];
        for (idx, (op1, root1)) in roots.iter().enumerate() {
            for (op2, root2) in roots.iter().skip(idx + 1) {
                if let (Some(root1), Some(root2)) = (root1, root2)
                    && root1 == root2 {
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name: root1.to_string(),
                        operation1: *op1,
                        operation2: *op2,
                    });
                }
            }
        }

        let mut undefined_refs = vec![];
        for (op, root) in roots {
            if let Some(type_name) = root
                && !self.types.contains_key(type_name.as_str()) {
                undefined_refs.push(UndefinedTypeReference {
                    referenced_at: format!("schema ({op} root)"),
                    type_name: type_name.to_string(),
                });
            }
        }
        for graphql_type in self.types.values() {
            for (type_name, referenced_at) in graphql_type.type_references() {
                if !self.types.contains_key(type_name) {
                    undefined_refs.push(UndefinedTypeReference {
                        referenced_at,
                        type_name: type_name.to_string(),
                    });
                }
            }
        }
        for directive in self.directives.values() {
            for arg in directive.arguments() {
                let type_name = innermost_type_name(arg.value_type());
                if !self.types.contains_key(type_name) {
                    undefined_refs.push(UndefinedTypeReference {
                        referenced_at: format!("@{}({}:)", directive.name(), arg.name()),
                        type_name: type_name.to_string(),
                    });
                }
            }
        }
        if !undefined_refs.is_empty() {
            return Err(SchemaBuildError::UndefinedTypeReferences {
                references: undefined_refs,
            });
        }

        log::debug!(
            "Built schema with {} types and {} directives.",
            self.types.len(),
            self.directives.len(),
        );

        Ok(Schema {
            ast_node: self.schema_ast_node,
            directives: self.directives.into_values().collect(),
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)
                .map_err(|err| SchemaBuildError::SchemaFileReadError(
                    Box::new(err),
                ))?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        log::trace!(
            "Loading {} definitions from {file_path:?}.",
            ast_doc.definitions.len(),
        );
        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_path(), def)?;
        }

        Ok(self)
    }

    fn inject_missing_builtin_directives(&mut self) {
        for builtin in Directive::builtins() {
            if !self.directives.contains_key(builtin.name()) {
                self.directives.insert(builtin.name().to_string(), builtin.clone());
            }
        }
    }

    fn inject_missing_builtin_scalars(&mut self) {
        for scalar_name in SPECIFIED_SCALAR_NAMES {
            if !self.types.contains_key(scalar_name) {
                self.types.insert(
                    scalar_name.to_string(),
                    GraphQLType::Scalar(ScalarType::builtin(scalar_name)),
                );
            }
        }
    }

    fn insert_directive(&mut self, directive: Directive) -> Result<()> {
        if SPECIFIED_DIRECTIVE_NAMES.contains(&directive.name()) {
            return Err(SchemaBuildError::RedefinitionOfBuiltinDirective {
                directive_name: directive.name().to_string(),
                location: directive.def_location().clone(),
            });
        }

        if directive.name().starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location: directive.def_location().clone(),
                directive_name: directive.name().to_string(),
            });
        }

        if let Some(existing) = self.directives.get(directive.name()) {
            return Err(SchemaBuildError::DuplicateDirectiveDefinition {
                directive_name: directive.name().to_string(),
                location1: existing.def_location().clone(),
                location2: directive.def_location().clone(),
            });
        }

        self.directives.insert(directive.name().to_string(), directive);
        Ok(())
    }

    fn insert_type(&mut self, graphql_type: GraphQLType) -> Result<()> {
        if graphql_type.name().starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: graphql_type.def_location().clone(),
                type_name: graphql_type.name().to_string(),
            });
        }

        if let Some(existing) = self.types.get(graphql_type.name()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                type_name: graphql_type.name().to_string(),
                def1: existing.def_location().clone(),
                def2: graphql_type.def_location().clone(),
            });
        }

        self.types.insert(graphql_type.name().to_string(), graphql_type);
        Ok(())
    }

    /// An explicit `schema { ... }` entry wins; otherwise an object type with
    /// the conventional name (`Query`, `Mutation`, `Subscription`) is used.
    fn resolve_root_type(&self, operation: RootOperationKind) -> Option<String> {
        let explicit = match operation {
            RootOperationKind::Query => &self.query_type,
            RootOperationKind::Mutation => &self.mutation_type,
            RootOperationKind::Subscription => &self.subscription_type,
        };
        if let Some(explicit) = explicit {
            return Some(explicit.type_name.to_string());
        }

        let conventional_name = match operation {
            RootOperationKind::Query => "Query",
            RootOperationKind::Mutation => "Mutation",
            RootOperationKind::Subscription => "Subscription",
        };
        match self.types.get(conventional_name) {
            Some(GraphQLType::Object(_)) => Some(conventional_name.to_string()),
            _ => None,
        }
    }

    fn visit_ast_def(
        &mut self,
        file_path: &Path,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use ast::schema::Definition;
        match def {
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.insert_type(GraphQLType::from_ast(file_path, type_def)?),
            Definition::TypeExtension(type_ext) => {
                self.pending_extensions.push((file_path.to_path_buf(), type_ext));
                Ok(())
            },
            Definition::DirectiveDefinition(directive_def) =>
                self.insert_directive(Directive::from_ast(file_path, directive_def)),
        }
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: &Path,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let root_defs = [
            (RootOperationKind::Query, &schema_def.query),
            (RootOperationKind::Mutation, &schema_def.mutation),
            (RootOperationKind::Subscription, &schema_def.subscription),
        ];
        for (operation, type_name) in root_defs {
            let Some(type_name) = type_name else {
                continue;
            };
            let typedef_loc = NamedTypeDefLocation::from_pos(
                type_name.to_string(),
                file_path,
                schema_def.position,
            );
            let slot = match operation {
                RootOperationKind::Query => &mut self.query_type,
                RootOperationKind::Mutation => &mut self.mutation_type,
                RootOperationKind::Subscription => &mut self.subscription_type,
            };
            if let Some(existing_typedef_loc) = slot.as_ref() {
                return Err(SchemaBuildError::DuplicateOperationDefinition {
                    operation,
                    location1: existing_typedef_loc.clone(),
                    location2: typedef_loc,
                });
            }
            *slot = Some(typedef_loc);
        }

        if self.schema_ast_node.is_none() {
            self.schema_ast_node = Some(schema_def);
        }
        Ok(())
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SchemaDefLocation,
        location2: loc::SchemaDefLocation,
    },

    #[error(
        "The `{value_name}` value was defined more than once on the \
        `{enum_name}` enum type"
    )]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_name: String,
        value_def1: loc::SchemaDefLocation,
        value_def2: loc::SchemaDefLocation,
    },

    #[error("The `{field_name}` field was defined more than once on the `{type_name}` type")]
    DuplicateFieldNameDefinition {
        type_name: String,
        field_name: String,
        field_def1: loc::SchemaDefLocation,
        field_def2: loc::SchemaDefLocation,
    },

    #[error("The {operation} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: RootOperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined elsewhere")]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_type_loc: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the {type_kind} `{type_name}` with an \
        extension for a {extension_kind}"
    )]
    InvalidExtensionType {
        type_name: String,
        type_kind: GraphQLTypeKind,
        extension_kind: GraphQLTypeKind,
        extension_loc: loc::SchemaDefLocation,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SchemaDefLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SchemaDefLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SchemaDefLocation,
        type_name: String,
    },

    #[error(
        "The {operation1} and {operation2} root operations are both defined \
        with the `{reused_type_name}` type, but all root operations must use \
        different types"
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: RootOperationKind,
        operation2: RootOperationKind,
    },

    #[error("Error parsing schema string from {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SchemaDefLocation,
    },

    #[error("Failure while trying to read a schema file from disk")]
    SchemaFileReadError(#[source] Box<file_reader::ReadContentError>),

    #[error(
        "The schema references types that are not defined:\n\n{}",
        references.iter()
            .map(|r| format!("  * `{}` at {}", r.type_name, r.referenced_at))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    UndefinedTypeReferences {
        references: Vec<UndefinedTypeReference>,
    },
}

/// Represents the file location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SchemaDefLocation,
    pub type_name: String,
}
impl NamedTypeDefLocation {
    pub(crate) fn from_pos(
        type_name: String,
        file: &Path,
        pos: graphql_parser::Pos,
    ) -> Self {
        Self {
            def_location: loc::FilePosition::from_pos(file, pos).into(),
            type_name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UndefinedTypeReference {
    pub referenced_at: String,
    pub type_name: String,
}
