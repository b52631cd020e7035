//! Parser and writer for the INI-like text format used by typedini.
//!
//! The format is flat: `[section]` headers followed by `key = value` lines.
//!
//! # Example
//!
//! ```
//! use typedini_format::{parse, serialize};
//!
//! let doc = parse("[server]\nport = 8080\n").unwrap();
//! assert_eq!(doc.get("server", "port"), Some("8080"));
//! assert_eq!(serialize(&doc), "[server]\nport = 8080\n\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod writer;

pub use document::{Document, Entry, SectionBlock};
pub use lexer::Lexer;
pub use parser::parse;
pub use token::{Token, TokenKind};
pub use writer::serialize;
