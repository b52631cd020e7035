//! Writer for the INI-like format.

use std::fmt::Write;

use crate::document::Document;

/// Serializes a [`Document`] to text.
///
/// Sections and entries are written in document order as `key = value`
/// lines, each section followed by a blank line. Values are written
/// verbatim; callers are responsible for values that would not survive
/// [`parse`](crate::parse) (line breaks, surrounding whitespace).
#[must_use]
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();
    for block in doc.sections() {
        let _ = writeln!(out, "[{}]", block.name());
        for (key, entry) in block.entries() {
            if entry.value.is_empty() {
                let _ = writeln!(out, "{key} =");
            } else {
                let _ = writeln!(out, "{key} = {}", entry.value);
            }
        }
        out.push('\n');
    }
    out
}
