//! Integration tests for the writer

use typedini_format::{Document, parse, serialize};

#[test]
fn writes_sections_in_order() {
    let mut doc = Document::new();
    doc.section_mut("server").insert("port", "8080");
    doc.section_mut("server").insert("host", "127.0.0.1");
    doc.section_mut("users").insert("whitelist", "admin,root");

    assert_eq!(
        serialize(&doc),
        "[server]\nport = 8080\nhost = 127.0.0.1\n\n[users]\nwhitelist = admin,root\n\n"
    );
}

#[test]
fn parse_of_written_text_is_identical() {
    let text = "[a]\nx = 1\ny =\n\n[b]\nz = p,q\n\n";
    assert_eq!(serialize(&parse(text).unwrap()), text);
}
