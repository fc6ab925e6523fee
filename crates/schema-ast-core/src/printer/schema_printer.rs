use crate::Schema;
use crate::printer::description::print_description;
use crate::printer::value::print_string_literal;
use crate::printer::value::print_type_annotation;
use crate::printer::value::print_value;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::DeprecationState;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::cmp::Ordering;

/// Options for [`print_schema`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrintSchemaOptions {
    /// Render descriptions as `#` comment lines instead of `"""` block
    /// strings.
    pub comment_descriptions: bool,
}

/// Prints `schema` as SDL text.
///
/// Built-in scalars and directives are omitted. Directive definitions come
/// first in declaration order, followed by types sorted by name. Directive
/// annotations are not printed, with the exception of `@deprecated`.
pub fn print_schema(schema: &Schema, options: &PrintSchemaOptions) -> String {
    let mut blocks = vec![];
    if let Some(schema_def) = print_schema_definition(schema) {
        blocks.push(schema_def);
    }

    for directive in schema.directives().iter().filter(|d| !d.is_builtin()) {
        blocks.push(print_directive(directive, options));
    }

    let mut types: Vec<&GraphQLType> =
        schema.types().values()
            .filter(|graphql_type| !graphql_type.is_builtin())
            .collect();
    types.sort_by(|a, b| compare_type_names(a.name(), b.name()));
    for graphql_type in types {
        blocks.push(print_type(graphql_type, options));
    }

    log::trace!("Printed {} schema blocks.", blocks.len());
    let mut sdl = blocks.join("\n\n");
    sdl.push('\n');
    sdl
}

pub fn print_directive(directive: &Directive, options: &PrintSchemaOptions) -> String {
    format!(
        "{}directive @{}{}{} on {}",
        print_description(directive.description(), options.comment_descriptions, "", true),
        directive.name(),
        print_args(directive.arguments(), options, ""),
        if directive.is_repeatable() { " repeatable" } else { "" },
        directive.locations().iter()
            .map(|location| location.as_str())
            .collect::<Vec<_>>()
            .join(" | "),
    )
}

pub fn print_type(graphql_type: &GraphQLType, options: &PrintSchemaOptions) -> String {
    match graphql_type {
        GraphQLType::Enum(t) => print_enum(t, options),
        GraphQLType::InputObject(t) => print_input_object(t, options),
        GraphQLType::Interface(t) => print_interface(t, options),
        GraphQLType::Object(t) => print_object(t, options),
        GraphQLType::Scalar(t) => print_scalar(t, options),
        GraphQLType::Union(t) => print_union(t, options),
    }
}

/// The `schema { ... }` block is only needed when a root operation type
/// doesn't use its conventional name.
fn print_schema_definition(schema: &Schema) -> Option<String> {
    let roots = [
        ("query", schema.query_type_name(), "Query"),
        ("mutation", schema.mutation_type_name(), "Mutation"),
        ("subscription", schema.subscription_type_name(), "Subscription"),
    ];
    let uses_common_names = roots.iter().all(|(_, type_name, conventional_name)| {
        type_name.is_none_or(|type_name| type_name == *conventional_name)
    });
    if uses_common_names {
        return None;
    }

    let operation_types: Vec<String> =
        roots.iter()
            .filter_map(|(operation, type_name, _)| {
                type_name.map(|type_name| format!("  {operation}: {type_name}"))
            })
            .collect();
    Some(format!("schema {{\n{}\n}}", operation_types.join("\n")))
}

fn print_scalar(scalar_type: &ScalarType, options: &PrintSchemaOptions) -> String {
    format!(
        "{}scalar {}",
        print_description(scalar_type.description(), options.comment_descriptions, "", true),
        scalar_type.name(),
    )
}

fn print_object(object_type: &ObjectType, options: &PrintSchemaOptions) -> String {
    format!(
        "{}type {}{}{}",
        print_description(object_type.description(), options.comment_descriptions, "", true),
        object_type.name(),
        print_implemented_interfaces(object_type.interfaces()),
        print_fields(object_type.fields(), options),
    )
}

fn print_interface(interface_type: &InterfaceType, options: &PrintSchemaOptions) -> String {
    format!(
        "{}interface {}{}{}",
        print_description(interface_type.description(), options.comment_descriptions, "", true),
        interface_type.name(),
        print_implemented_interfaces(interface_type.interfaces()),
        print_fields(interface_type.fields(), options),
    )
}

fn print_union(union_type: &UnionType, options: &PrintSchemaOptions) -> String {
    let possible_types =
        if union_type.members().is_empty() {
            String::new()
        } else {
            format!(" = {}", union_type.members().join(" | "))
        };
    format!(
        "{}union {}{possible_types}",
        print_description(union_type.description(), options.comment_descriptions, "", true),
        union_type.name(),
    )
}

fn print_enum(enum_type: &EnumType, options: &PrintSchemaOptions) -> String {
    let values: Vec<String> =
        enum_type.values().values()
            .enumerate()
            .map(|(idx, value)| format!(
                "{}  {}{}",
                print_description(value.description(), options.comment_descriptions, "  ", idx == 0),
                value.name(),
                print_deprecated(value.deprecation_state()),
            ))
            .collect();
    format!(
        "{}enum {}{}",
        print_description(enum_type.description(), options.comment_descriptions, "", true),
        enum_type.name(),
        print_block(&values),
    )
}

fn print_input_object(
    input_object_type: &InputObjectType,
    options: &PrintSchemaOptions,
) -> String {
    let fields: Vec<String> =
        input_object_type.fields().values()
            .enumerate()
            .map(|(idx, field)| format!(
                "{}  {}",
                print_description(field.description(), options.comment_descriptions, "  ", idx == 0),
                print_input_value(field),
            ))
            .collect();
    format!(
        "{}input {}{}",
        print_description(input_object_type.description(), options.comment_descriptions, "", true),
        input_object_type.name(),
        print_block(&fields),
    )
}

fn print_implemented_interfaces(interfaces: &[String]) -> String {
    if interfaces.is_empty() {
        String::new()
    } else {
        format!(" implements {}", interfaces.join(" & "))
    }
}

fn print_fields(fields: &IndexMap<String, Field>, options: &PrintSchemaOptions) -> String {
    let fields: Vec<String> =
        fields.values()
            .enumerate()
            .map(|(idx, field)| format!(
                "{}  {}{}: {}{}",
                print_description(field.description(), options.comment_descriptions, "  ", idx == 0),
                field.name(),
                print_args(field.arguments(), options, "  "),
                print_type_annotation(field.field_type()),
                print_deprecated(field.deprecation_state()),
            ))
            .collect();
    print_block(&fields)
}

fn print_block(items: &[String]) -> String {
    if items.is_empty() {
        String::new()
    } else {
        format!(" {{\n{}\n}}", items.join("\n"))
    }
}

/// Arguments print inline unless at least one of them has a description.
fn print_args(args: &[InputValue], options: &PrintSchemaOptions, indentation: &str) -> String {
    if args.is_empty() {
        return String::new();
    }

    if args.iter().all(|arg| arg.description().is_none_or(str::is_empty)) {
        return format!(
            "({})",
            args.iter().map(print_input_value).collect::<Vec<_>>().join(", "),
        );
    }

    let arg_indentation = format!("  {indentation}");
    let args: Vec<String> =
        args.iter()
            .enumerate()
            .map(|(idx, arg)| format!(
                "{}{arg_indentation}{}",
                print_description(arg.description(), options.comment_descriptions, &arg_indentation, idx == 0),
                print_input_value(arg),
            ))
            .collect();
    format!("(\n{}\n{indentation})", args.join("\n"))
}

fn print_input_value(input_value: &InputValue) -> String {
    let mut decl = format!(
        "{}: {}",
        input_value.name(),
        print_type_annotation(input_value.value_type()),
    );
    if let Some(default_value) = input_value.default_value() {
        decl.push_str(" = ");
        decl.push_str(&print_value(default_value));
    }
    decl
}

fn print_deprecated(deprecation_state: DeprecationState<'_>) -> String {
    match deprecation_state {
        DeprecationState::NotDeprecated => String::new(),
        DeprecationState::Deprecated(reason)
            if reason.is_empty() || reason == DEFAULT_DEPRECATION_REASON =>
            " @deprecated".to_string(),
        DeprecationState::Deprecated(reason) =>
            format!(" @deprecated(reason: {})", print_string_literal(reason)),
    }
}

/// Orders type names the way a locale-aware string comparison does: case is
/// ignored at first (with punctuation before digits before letters), and
/// lowercase sorts before uppercase only to break ties.
fn compare_type_names(a: &str, b: &str) -> Ordering {
    fn primary_key(c: char) -> (u8, char) {
        let class =
            if c.is_alphabetic() {
                2
            } else if c.is_numeric() {
                1
            } else {
                0
            };
        (class, c.to_lowercase().next().unwrap_or(c))
    }

    a.chars().map(primary_key).cmp(b.chars().map(primary_key))
        .then_with(|| {
            a.chars().map(|c| c.is_uppercase())
                .cmp(b.chars().map(|c| c.is_uppercase()))
        })
}
