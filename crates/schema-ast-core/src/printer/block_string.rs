/// Prints `value` as a `"""` block string.
///
/// Single-line values stay on one line unless they end in a quote or
/// `prefer_multiple_lines` is set. A value with leading whitespace is never
/// moved onto its own line, since the leading whitespace would otherwise be
/// stripped as indentation when the block string is read back.
pub fn print_block_string(
    value: &str,
    indentation: &str,
    prefer_multiple_lines: bool,
) -> String {
    let is_single_line = !value.contains('\n');
    let has_leading_space = value.starts_with(' ') || value.starts_with('\t');
    let has_trailing_quote = value.ends_with('"');
    let print_as_multiple_lines =
        !is_single_line || has_trailing_quote || prefer_multiple_lines;

    let mut result = String::new();
    if print_as_multiple_lines && !(is_single_line && has_leading_space) {
        result.push('\n');
        result.push_str(indentation);
    }
    if indentation.is_empty() {
        result.push_str(value);
    } else {
        result.push_str(&value.replace('\n', &format!("\n{indentation}")));
    }
    if print_as_multiple_lines {
        result.push('\n');
    }

    format!("\"\"\"{}\"\"\"", result.replace("\"\"\"", "\\\"\"\""))
}
