use crate::printer::print_block_string;

#[test]
fn short_single_line_stays_inline() {
    assert_eq!(print_block_string("Hello", "", false), "\"\"\"Hello\"\"\"");
}

#[test]
fn multi_line_value() {
    assert_eq!(
        print_block_string("first\nsecond", "", false),
        "\"\"\"\nfirst\nsecond\n\"\"\"",
    );
}

#[test]
fn indentation_applies_to_every_line() {
    assert_eq!(
        print_block_string("first\nsecond", "  ", false),
        "\"\"\"\n  first\n  second\n\"\"\"",
    );
}

#[test]
fn trailing_quote_forces_multiple_lines() {
    assert_eq!(
        print_block_string("say \"hi\"", "", false),
        "\"\"\"\nsay \"hi\"\n\"\"\"",
    );
}

#[test]
fn leading_space_is_not_moved_to_own_line() {
    assert_eq!(
        print_block_string("  indented", "", true),
        "\"\"\"  indented\n\"\"\"",
    );
}

#[test]
fn triple_quotes_are_escaped() {
    assert_eq!(
        print_block_string("a \"\"\" b", "", false),
        "\"\"\"a \\\"\"\" b\"\"\"",
    );
}
