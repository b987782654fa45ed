//! Options normalization.
//!
//! Converts a [`TableOptions`] value into indented, comma-terminated JS
//! object-literal text ready to drop into a call argument position.
//! Structured mappings are serialized with a 4-space indent; raw text is
//! dedented first so users can paste indented fragments without the paste
//! indentation leaking into the output.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::options::TableOptions;

/// One indent unit in the generated script.
pub const INDENT: &str = "    ";

/// Renders `options` as JS object-literal text at the given indent level.
///
/// Every non-blank output line is prefixed with `indent_level` copies of
/// [`INDENT`]. The result always ends with a trailing comma; one is appended
/// only when the text does not already end with one, so normalization is
/// idempotent. Empty structured options render as `{}` plus the comma, never
/// as an empty string.
///
/// Raw text is passed through after dedenting; its syntactic validity is
/// deliberately not checked.
///
/// # Example
///
/// ```rust
/// use doctables_render::{options_to_js, TableOptions};
/// use serde_json::{json, Map};
///
/// let mut map = Map::new();
/// map.insert("paging".to_string(), json!(true));
///
/// let text = options_to_js(&TableOptions::Structured(map), 1);
/// assert_eq!(text, "    {\n        \"paging\": true\n    },");
/// ```
pub fn options_to_js(options: &TableOptions, indent_level: usize) -> String {
    let body = match options {
        TableOptions::Structured(map) => to_pretty_js(map),
        TableOptions::Raw(text) => dedent(text),
    };

    let prefix = INDENT.repeat(indent_level);
    let mut out = indent_lines(&body, &prefix);
    out.truncate(out.trim_end().len());
    if !out.ends_with(',') {
        out.push(',');
    }
    out
}

/// Serializes a mapping as a JSON object with a 4-space indent.
///
/// JSON object-literal syntax is valid JS, so the serialized form is used
/// directly. Keys keep their declaration order.
fn to_pretty_js(map: &Map<String, Value>) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    map.serialize(&mut ser)
        .expect("serializing an in-memory JSON map cannot fail");
    String::from_utf8(buf).expect("serde_json emits valid UTF-8")
}

/// Prefixes every non-blank line with `prefix`. Blank lines are kept as-is.
fn indent_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes the whitespace prefix common to all non-blank lines.
///
/// Whitespace-only lines are ignored when computing the margin and are
/// normalized to empty lines in the result.
fn dedent(text: &str) -> String {
    let mut margin: Option<&str> = None;
    for line in text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        let indent = &line[..line.len() - line.trim_start().len()];
        margin = Some(match margin {
            None => indent,
            Some(current) => common_prefix(current, indent),
        });
    }

    let margin = margin.unwrap_or("");
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line.strip_prefix(margin).unwrap_or(line).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}
