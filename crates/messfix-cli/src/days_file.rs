//! Days file reader
//!
//! One day per non-blank line, records deepest-first:
//!
//! ```text
//! # day 1
//! [P1, F1, B1]
//! P2 P1 F1 B1
//! ```
//!
//! Records are separated by commas and/or whitespace, surrounding brackets
//! are optional and `#` starts a comment. A line holding only `[]` is a day
//! with an empty snapshot. Records are not validated here.

use std::path::Path;

/// Read and split a days file
pub fn read_days(path: &Path) -> std::io::Result<Vec<Vec<String>>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_days(&text))
}

/// Split days file text into one raw snapshot per day
pub fn parse_days(text: &str) -> Vec<Vec<String>> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<Vec<String>> {
    let content = match line.find('#') {
        Some(start) => &line[..start],
        None => line,
    }
    .trim();
    if content.is_empty() {
        return None;
    }

    let inner = content
        .strip_prefix('[')
        .map(|rest| rest.strip_suffix(']').unwrap_or(rest))
        .unwrap_or(content);

    Some(
        inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|record| !record.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
