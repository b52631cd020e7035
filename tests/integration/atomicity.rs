//! Failed reads and writes leave both the store and the file alone.

use typedini_foundation::{ErrorKind, Value};

use crate::{Scratch, server_store};

#[test]
fn decode_failure_reports_location() {
    let scratch = Scratch::new();
    scratch.write("[server]\nhost = example.org\nport = eighty\n");

    let mut cfg = server_store(&scratch.path);
    let before = cfg.to_map();
    let err = cfg.read().unwrap_err();

    assert!(matches!(err.kind, ErrorKind::DecodeError { .. }));
    let context = err.context.unwrap();
    assert_eq!(context.source, Some(scratch.path.display().to_string()));
    assert_eq!(context.line, Some(3));
    assert_eq!(context.option.as_deref(), Some("server.port"));
    assert_eq!(cfg.to_map(), before);
}

#[test]
fn parse_failure_leaves_store_untouched() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1\n[server]\n");

    let mut cfg = server_store(&scratch.path);
    let err = cfg.read().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 3, .. }));
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn missing_primary_file() {
    let scratch = Scratch::new();
    let mut cfg = server_store(&scratch.path);
    let err = cfg.read().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn unencodable_value_does_not_truncate_file() {
    let scratch = Scratch::new();
    let mut cfg = server_store(&scratch.path);
    cfg.write().unwrap();
    let before = scratch.contents();

    cfg.get_mut("users.whitelist")
        .unwrap()
        .as_str_set_mut()
        .unwrap()
        .insert(" padded ".to_string());
    let err = cfg.write().unwrap_err();

    assert!(matches!(err.kind, ErrorKind::EncodeError { .. }));
    assert_eq!(scratch.contents(), before);
}
