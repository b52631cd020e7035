//! Error types for typedini.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::types::Type;

/// The main error type for typedini operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown type error.
    #[must_use]
    pub fn unknown_type(ty: Type) -> Self {
        Self::new(ErrorKind::UnknownType(ty))
    }

    /// Creates an unsupported default error.
    #[must_use]
    pub fn unsupported_default(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedDefaultType(reason.into()))
    }

    /// Creates a duplicate option error.
    #[must_use]
    pub fn duplicate_option(section: impl Into<String>, option: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateOption {
            section: section.into(),
            option: option.into(),
        })
    }

    /// Creates an undefined option error.
    #[must_use]
    pub fn undefined_option(section: impl Into<String>, option: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedOption {
            section: section.into(),
            option: option.into(),
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(ty: Type, text: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DecodeError {
            ty,
            text: text.into(),
            message: message.into(),
        })
    }

    /// Creates an encode error.
    #[must_use]
    pub fn encode(ty: Type, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncodeError {
            ty,
            message: message.into(),
        })
    }

    /// Creates an invalid path error.
    #[must_use]
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPath(path.into()))
    }

    /// Creates a parse error at the given line.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: u32) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
        })
    }

    /// Creates an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<String>, source: io::Error) -> Self {
        Self::new(ErrorKind::Io {
            path: path.into(),
            source,
        })
    }

    /// Returns true if this is an I/O error for a file that does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(&self.kind, ErrorKind::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// No codec is registered for the type.
    #[error("unknown type: {0}")]
    UnknownType(Type),

    /// No type could be inferred from, or no default produced for, a definition.
    #[error("unsupported default: {0}")]
    UnsupportedDefaultType(String),

    /// The option is already defined in its section.
    #[error("option already defined: {section}.{option}")]
    DuplicateOption {
        /// The section holding the option.
        section: String,
        /// The option name.
        option: String,
    },

    /// The option (or its section) was never defined.
    #[error("undefined option: {section}.{option}")]
    UndefinedOption {
        /// The section that was addressed.
        section: String,
        /// The option name that was addressed.
        option: String,
    },

    /// An assigned value cannot be represented by the declared type.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The declared type.
        expected: Type,
        /// The type of the offered value.
        actual: Type,
    },

    /// Stored text cannot be decoded by the declared codec.
    #[error("cannot decode {text:?} as {ty}: {message}")]
    DecodeError {
        /// The declared type.
        ty: Type,
        /// The raw text.
        text: String,
        /// Description from the codec.
        message: String,
    },

    /// A value cannot be written as text without loss.
    #[error("cannot encode {ty} value: {message}")]
    EncodeError {
        /// The declared type.
        ty: Type,
        /// Description from the codec.
        message: String,
    },

    /// A dotted path is malformed.
    #[error("invalid path: {0:?} (expected \"section.option\")")]
    InvalidPath(String),

    /// The configuration text is malformed.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file involved.
        path: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file the failing text came from.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Dotted path of the option involved.
    pub option: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source file.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line.
    #[must_use]
    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    /// Sets the option path.
    #[must_use]
    pub fn with_option(mut self, option: impl Into<String>) -> Self {
        self.option = Some(option.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let Some(line) = self.line {
                write!(f, ":{line}")?;
            }
        }
        if let Some(option) = &self.option {
            if self.source.is_some() {
                write!(f, " ")?;
            }
            write!(f, "in {option}")?;
        }
        Ok(())
    }
}
