//! Integration tests for Error
//!
//! Tests error kinds, messages, and context rendering.

use std::io;

use typedini_foundation::{Error, ErrorContext, ErrorKind, Type};

#[test]
fn undefined_option_message() {
    let err = Error::undefined_option("server", "port");
    assert_eq!(err.to_string(), "undefined option: server.port");
}

#[test]
fn type_mismatch_message() {
    let err = Error::type_mismatch(Type::Int, Type::Str);
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch: expected int, got str");
}

#[test]
fn parse_error_keeps_line() {
    let err = Error::parse("missing delimiter", 7);
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 7, .. }));
}

#[test]
fn io_not_found() {
    let err = Error::io("missing.ini", io::Error::from(io::ErrorKind::NotFound));
    assert!(err.is_not_found());
    assert!(!Error::invalid_path("x").is_not_found());
}

#[test]
fn context_display() {
    let ctx = ErrorContext::new()
        .with_source("app.ini")
        .with_line(3)
        .with_option("server.port");
    assert_eq!(ctx.to_string(), "at app.ini:3 in server.port");

    let err = Error::decode(Type::Int, "eighty", "invalid digit").with_context(ctx.clone());
    assert_eq!(err.context, Some(ctx));
}
