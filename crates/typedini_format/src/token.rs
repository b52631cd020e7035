//! Token types for the INI-like format.
//!
//! The format is line oriented, so every token covers exactly one line.

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// 1-based line number of this token.
    pub line: u32,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, line: u32) -> Self {
        Self { kind, line }
    }
}

/// Token types for the INI-like format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// `[name]`
    Header(String),
    /// `key = value` or `key: value`, both sides trimmed.
    Entry {
        /// The option name.
        key: String,
        /// The raw value text.
        value: String,
    },
    /// A full-line comment starting with `#` or `;`.
    Comment(String),
    /// An empty or whitespace-only line.
    Blank,
    /// A malformed line.
    Error(String),
    /// End of input.
    Eof,
}
