use crate::printer::block_string::print_block_string;

const MAX_LINE_LENGTH: usize = 120;

/// Prints a description ahead of a definition (or of a field, argument, or
/// enum value when `indentation` is non-empty).
///
/// Members other than the first in their block are separated from the
/// previous member by an empty line.
pub(crate) fn print_description(
    description: Option<&str>,
    comment_descriptions: bool,
    indentation: &str,
    first_in_block: bool,
) -> String {
    let Some(description) = description.filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let max_len = MAX_LINE_LENGTH.saturating_sub(indentation.chars().count());
    let lines = description_lines(description, max_len);
    if comment_descriptions {
        return print_description_with_comments(&lines, indentation, first_in_block);
    }

    let text = lines.join("\n");
    let prefer_multiple_lines = text.chars().count() > 70;
    let block_string = print_block_string(&text, "", prefer_multiple_lines);
    let prefix =
        if !indentation.is_empty() && !first_in_block {
            format!("\n{indentation}")
        } else {
            indentation.to_string()
        };

    format!(
        "{prefix}{}\n",
        block_string.replace('\n', &format!("\n{indentation}")),
    )
}

fn print_description_with_comments(
    lines: &[String],
    indentation: &str,
    first_in_block: bool,
) -> String {
    let mut description =
        if !indentation.is_empty() && !first_in_block {
            "\n".to_string()
        } else {
            String::new()
        };
    for line in lines {
        if line.is_empty() {
            description.push_str(&format!("{indentation}#\n"));
        } else {
            description.push_str(&format!("{indentation}# {line}\n"));
        }
    }
    description
}

fn description_lines(description: &str, max_len: usize) -> Vec<String> {
    description.split('\n')
        .flat_map(|line| {
            if line.chars().count() < max_len + 5 {
                vec![line.to_string()]
            } else {
                break_line(line, max_len)
            }
        })
        .collect()
}

/// Splits an overlong line at spaces into chunks of between 15 and
/// `max_len - 40` characters. A trailing remainder too short to form its own
/// chunk stays attached to the last one.
fn break_line(line: &str, max_len: usize) -> Vec<String> {
    let max_chunk = max_len.saturating_sub(40);
    if max_chunk < 15 {
        return vec![line.to_string()];
    }

    let chars: Vec<char> = line.chars().collect();
    let slice = |from: usize, to: usize| chars[from..to].iter().collect::<String>();

    // Alternates unmatched text and matched chunks, starting and ending with
    // unmatched text (which may be empty).
    let mut parts: Vec<String> = vec![];
    let mut last_end = 0;
    let mut pos = 0;
    while pos < chars.len() {
        match match_chunk(&chars, pos, max_chunk) {
            Some(end) => {
                parts.push(slice(last_end, pos));
                parts.push(slice(pos, end));
                last_end = end;
                pos = end;
            },
            None => pos += 1,
        }
    }
    parts.push(slice(last_end, chars.len()));

    if parts.len() < 4 {
        return vec![line.to_string()];
    }

    let mut sublines = vec![format!("{}{}{}", parts[0], parts[1], parts[2])];
    for pair in parts[3..].chunks(2) {
        let chunk = pair[0].chars().skip(1).collect::<String>();
        let rest = pair.get(1).map(String::as_str).unwrap_or_default();
        sublines.push(format!("{chunk}{rest}"));
    }
    sublines
}

/// Finds the longest chunk starting at `pos` that begins with a space (or
/// at the very start of the line), has between 15 and `max_chunk`
/// characters after that, and is followed by a space or the end of the
/// line. Returns the exclusive end index of the chunk.
fn match_chunk(chars: &[char], pos: usize, max_chunk: usize) -> Option<usize> {
    let mut body_starts = vec![];
    if chars[pos] == ' ' {
        body_starts.push(pos + 1);
    }
    if pos == 0 {
        body_starts.push(0);
    }

    body_starts.into_iter().find_map(|body_start| {
        let longest = (chars.len() - body_start).min(max_chunk);
        (15..=longest).rev()
            .map(|len| body_start + len)
            .find(|&end| end == chars.len() || chars[end] == ' ')
    })
}
