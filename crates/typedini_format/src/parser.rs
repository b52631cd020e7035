//! Parser for the INI-like format.
//!
//! Builds a [`Document`] from lexer tokens, rejecting structure the format
//! cannot represent unambiguously.

use typedini_foundation::{Error, Result};

use crate::document::{Document, Entry, SectionBlock};
use crate::lexer::Lexer;
use crate::token::TokenKind;

/// Parses configuration text into a [`Document`].
///
/// # Errors
///
/// Returns a parse error for malformed lines, entries before the first
/// section header, duplicate sections, and duplicate keys within a section.
pub fn parse(source: &str) -> Result<Document> {
    let mut doc = Document::new();
    let mut current: Option<SectionBlock> = None;

    for token in Lexer::new(source) {
        match token.kind {
            TokenKind::Blank | TokenKind::Comment(_) => {}
            TokenKind::Header(name) => {
                if let Some(block) = current.take() {
                    doc.push_section(block);
                }
                if doc.contains_section(&name) {
                    return Err(Error::parse(
                        format!("duplicate section: {name}"),
                        token.line,
                    ));
                }
                current = Some(SectionBlock::at_line(name, token.line));
            }
            TokenKind::Entry { key, value } => {
                let Some(block) = current.as_mut() else {
                    return Err(Error::parse(
                        format!("option {key:?} appears before any section header"),
                        token.line,
                    ));
                };
                if block.contains(&key) {
                    return Err(Error::parse(
                        format!("duplicate option {key:?} in section {}", block.name()),
                        token.line,
                    ));
                }
                block.insert_entry(key, Entry {
                    value,
                    line: token.line,
                });
            }
            TokenKind::Error(message) => return Err(Error::parse(message, token.line)),
            TokenKind::Eof => break,
        }
    }

    if let Some(block) = current {
        doc.push_section(block);
    }
    Ok(doc)
}
