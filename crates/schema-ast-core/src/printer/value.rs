use crate::ast;

/// Prints a type annotation the way it is written in SDL (`[User!]!`).
pub fn print_type_annotation(type_annotation: &ast::Type) -> String {
    match type_annotation {
        ast::Type::ListType(inner) => format!("[{}]", print_type_annotation(inner)),
        ast::Type::NamedType(name) => name.to_string(),
        ast::Type::NonNullType(inner) => format!("{}!", print_type_annotation(inner)),
    }
}

/// Prints a GraphQL input value literal.
pub fn print_value(value: &ast::Value) -> String {
    match value {
        ast::Value::Boolean(b) => b.to_string(),
        ast::Value::Enum(name) => name.to_string(),
        ast::Value::Float(f) => print_float(*f),
        ast::Value::Int(n) => n.as_i64().unwrap_or_default().to_string(),
        ast::Value::List(items) => format!(
            "[{}]",
            items.iter().map(print_value).collect::<Vec<_>>().join(", "),
        ),
        ast::Value::Null => "null".to_string(),
        ast::Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!("{name}: {}", print_value(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        ast::Value::String(s) => print_string_literal(s),
        ast::Value::Variable(name) => format!("${name}"),
    }
}

/// Prints a float the way JavaScript's `Number#toString` does: plain decimal
/// digits for magnitudes in `1e-6..1e21`, exponent form (`1e-7`, `1.5e+21`)
/// outside of it.
fn print_float(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() || (1e-6..1e21).contains(&value.abs()) {
        return value.to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        },
        _ => formatted,
    }
}

/// Prints `value` as a double-quoted string literal with JSON-style
/// escaping.
pub fn print_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
