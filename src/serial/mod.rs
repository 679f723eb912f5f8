//! Escaped-delimiter text format used for preference strings.
//!
//! An object is a brace-delimited list of comma-separated fields (`{a,b,c}`); an array is a
//! bracket-delimited list of objects (`[{a,b},{c}]`). Inside a field, `\` escapes any of the
//! reserved characters `\ { } [ ] ,`, so a field may itself hold a serialized object or array.
//! `{}` and `[]` are the empty object and the empty array.

/// Array of objects.
pub mod array;
/// Single object of string fields.
pub mod object;

use crate::foundation::error::{FlowError, FlowResult};

pub(crate) const ESCAPE: char = '\\';
pub(crate) const OBJECT_OPEN: char = '{';
pub(crate) const OBJECT_CLOSE: char = '}';
pub(crate) const ARRAY_OPEN: char = '[';
pub(crate) const ARRAY_CLOSE: char = ']';
pub(crate) const SEPARATOR: char = ',';

fn is_reserved(c: char) -> bool {
    matches!(
        c,
        ESCAPE | OBJECT_OPEN | OBJECT_CLOSE | ARRAY_OPEN | ARRAY_CLOSE | SEPARATOR
    )
}

pub(crate) fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        if is_reserved(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

/// Parse one object starting at byte offset `pos`.
///
/// Returns the unescaped fields and the offset just past the closing brace.
pub(crate) fn parse_object_at(input: &str, pos: usize) -> FlowResult<(Vec<String>, usize)> {
    let mut chars = input[pos..].char_indices().map(|(i, c)| (pos + i, c));
    match chars.next() {
        Some((_, OBJECT_OPEN)) => {}
        Some((at, c)) => {
            return Err(FlowError::serial(format!(
                "expected '{OBJECT_OPEN}' at offset {at}, found '{c}'"
            )));
        }
        None => {
            return Err(FlowError::serial(format!(
                "expected '{OBJECT_OPEN}' at offset {pos}, found end of input"
            )));
        }
    }

    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut saw_content = false;
    while let Some((at, c)) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some((_, escaped)) => {
                    cur.push(escaped);
                    saw_content = true;
                }
                None => {
                    return Err(FlowError::serial(format!(
                        "dangling escape at offset {at}"
                    )));
                }
            },
            SEPARATOR => {
                fields.push(std::mem::take(&mut cur));
                saw_content = true;
            }
            OBJECT_CLOSE => {
                if saw_content {
                    fields.push(cur);
                }
                return Ok((fields, at + c.len_utf8()));
            }
            OBJECT_OPEN | ARRAY_OPEN | ARRAY_CLOSE => {
                return Err(FlowError::serial(format!(
                    "unescaped '{c}' inside object at offset {at}"
                )));
            }
            other => {
                cur.push(other);
                saw_content = true;
            }
        }
    }
    Err(FlowError::serial(format!(
        "unterminated object starting at offset {pos}"
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/serial/escape.rs"]
mod tests;
