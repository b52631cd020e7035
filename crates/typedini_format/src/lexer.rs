//! Lexer for the INI-like format.
//!
//! The lexer converts source text into a stream of line tokens.

use crate::token::{Token, TokenKind};

/// Lexer for INI-like source text.
pub struct Lexer<'src> {
    /// Remaining source text.
    rest: &'src str,
    /// Line number of the next line (1-based).
    line: u32,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            rest: source,
            line: 1,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        if self.rest.is_empty() {
            return Token::new(TokenKind::Eof, self.line);
        }

        let raw = match self.rest.find('\n') {
            Some(end) => {
                let raw = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                raw
            }
            None => std::mem::take(&mut self.rest),
        };
        let line = self.line;
        self.line += 1;

        Token::new(classify(raw.strip_suffix('\r').unwrap_or(raw)), line)
    }

    /// Tokenizes all source and returns a vector of tokens.
    ///
    /// Comments and blank lines are included in the output.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}

fn classify(raw: &str) -> TokenKind {
    let text = raw.trim();

    if text.is_empty() {
        return TokenKind::Blank;
    }
    if text.starts_with('#') || text.starts_with(';') {
        return TokenKind::Comment(text[1..].trim_start().to_string());
    }
    if let Some(inner) = text.strip_prefix('[') {
        return scan_header(inner);
    }
    scan_entry(text)
}

/// Scans the remainder of a `[name]` line after the opening bracket.
fn scan_header(inner: &str) -> TokenKind {
    let Some(name) = inner.strip_suffix(']') else {
        return TokenKind::Error("unterminated section header".into());
    };
    let name = name.trim();
    if name.is_empty() {
        TokenKind::Error("empty section name".into())
    } else if name.contains(['[', ']']) {
        TokenKind::Error(format!("invalid section name: {name}"))
    } else {
        TokenKind::Header(name.to_string())
    }
}

/// Scans a `key = value` line. The first `=` or `:` is the delimiter.
fn scan_entry(text: &str) -> TokenKind {
    let Some(at) = text.find(['=', ':']) else {
        return TokenKind::Error(format!("expected `key = value`, found {text:?}"));
    };
    let key = text[..at].trim();
    if key.is_empty() {
        return TokenKind::Error("empty option name".into());
    }
    TokenKind::Entry {
        key: key.to_string(),
        value: text[at + 1..].trim().to_string(),
    }
}
