//! Shared text helpers for the replacer implementations.
//!
//! All line handling in this crate uses `str::split('\n')` rather than
//! `str::lines()` so that rejoining with `'\n'` reproduces the original
//! content byte for byte. Content is expected to be LF-normalized before
//! it reaches the engine.

/// Extract the original text of lines `start..=end` from `content`.
///
/// `lines` must be the result of `content.split('\n')`. The returned
/// string is a byte-exact slice of `content`, preserving whatever
/// whitespace the lines carried.
pub fn slice_lines(content: &str, lines: &[&str], start: usize, end: usize) -> String {
    let mut start_byte = 0;
    for line in lines.iter().take(start) {
        start_byte += line.len() + 1; // +1 for the separating newline
    }
    let mut end_byte = start_byte;
    for (k, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        end_byte += line.len();
        if k < end {
            end_byte += 1;
        }
    }
    content[start_byte..end_byte].to_owned()
}

/// Collapse every run of whitespace to a single space and trim the ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove the minimum common leading whitespace from every line.
///
/// The minimum is computed over non-empty lines only; empty lines pass
/// through unchanged. Falls back to a full `trim_start` when the strip
/// point is not a char boundary.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let non_empty: Vec<&&str> = lines.iter().filter(|l| !l.trim().is_empty()).collect();

    if non_empty.is_empty() {
        return text.to_owned();
    }

    let min_indent = non_empty
        .iter()
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                *line
            } else if line.len() > min_indent && line.is_char_boundary(min_indent) {
                &line[min_indent..]
            } else {
                line.trim_start()
            }
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Resolve literal escape sequences (`\n`, `\t`, `\r`, `\'`, `\"`,
/// `` \` ``, `\\`, `\$`) and backslash-newline continuations.
///
/// Unrecognized sequences keep the backslash untouched.
pub fn unescape_sequences(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                result.push('\n');
            }
            Some('t') => {
                chars.next();
                result.push('\t');
            }
            Some('r') => {
                chars.next();
                result.push('\r');
            }
            Some('\'') => {
                chars.next();
                result.push('\'');
            }
            Some('"') => {
                chars.next();
                result.push('"');
            }
            Some('`') => {
                chars.next();
                result.push('`');
            }
            Some('\\') => {
                chars.next();
                result.push('\\');
            }
            Some('$') => {
                chars.next();
                result.push('$');
            }
            Some('\n') => {
                chars.next();
                result.push('\n');
            }
            _ => result.push(ch),
        }
    }

    result
}

/// Truncate a string for error messages and debug logs.
pub fn truncate_for_log(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
