//! Integration tests for reading and assigning options

use typedini_foundation::{ErrorKind, Value};
use typedini_store::Store;

fn sample() -> Store {
    let mut cfg = Store::new("unused.ini");
    cfg.define("server.port", 8080).unwrap();
    cfg.define("server.host", "127.0.0.1").unwrap();
    cfg.define("users.whitelist", Value::str_set(["root", "admin"]))
        .unwrap();
    cfg
}

// =============================================================================
// Assignment
// =============================================================================

#[test]
fn set_then_get() {
    let mut cfg = sample();
    cfg.set("server.port", 1337).unwrap();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1337));
    assert_eq!(cfg.default_of("server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn set_wrong_type_keeps_value() {
    let mut cfg = sample();
    let err = cfg.set("server.port", "eighty").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn set_undefined_in_strict_store() {
    let mut cfg = sample();
    let err = cfg.set("server.timeout", 30).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UndefinedOption { .. }));
}

#[test]
fn set_through_section_handle() {
    let mut cfg = sample();
    cfg.section("server").set("host", "0.0.0.0").unwrap();
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("0.0.0.0"));
}

#[test]
fn set_unwritable_string() {
    let mut cfg = sample();
    let err = cfg.set("server.host", "a\nb").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EncodeError { .. }));
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("127.0.0.1"));
}

// =============================================================================
// Aliasing
// =============================================================================

#[test]
fn mutation_through_get_mut_is_visible() {
    let mut cfg = sample();
    cfg.get_mut("users.whitelist")
        .unwrap()
        .as_str_set_mut()
        .unwrap()
        .insert("guest".to_string());

    assert_eq!(
        cfg.get("users.whitelist").unwrap(),
        &Value::str_set(["admin", "guest", "root"])
    );
    assert_eq!(
        cfg.default_of("users.whitelist").unwrap(),
        &Value::str_set(["admin", "root"])
    );
}

#[test]
fn list_mutation_through_get_mut_is_visible() {
    let mut cfg = sample();
    cfg.define("server.aliases", vec!["www"]).unwrap();
    cfg.define("server.ports", vec![80_i64]).unwrap();

    let aliases = cfg.get_mut("server.aliases").unwrap();
    aliases.as_str_list_mut().unwrap().push("api".to_string());
    assert!(aliases.as_int_list_mut().is_none());

    let ports = cfg.get_mut("server.ports").unwrap();
    ports.as_int_list_mut().unwrap().push(443);
    assert!(ports.as_str_list_mut().is_none());

    assert_eq!(
        cfg.get("server.aliases").unwrap(),
        &Value::str_list(["www", "api"])
    );
    assert_eq!(cfg.get("server.ports").unwrap(), &Value::int_list([80, 443]));
    assert_eq!(cfg.get_encoded("server.ports").unwrap(), "80,443");
    assert_eq!(cfg.default_of("server.ports").unwrap(), &Value::int_list([80]));
}

#[test]
fn get_returns_the_stored_value() {
    let cfg = sample();
    let a = cfg.get("users.whitelist").unwrap();
    let b = cfg.get("users.whitelist").unwrap();
    assert!(std::ptr::eq(a, b));
}

// =============================================================================
// Encoded Access and Reset
// =============================================================================

#[test]
fn encoded_forms() {
    let mut cfg = sample();
    assert_eq!(cfg.get_encoded("users.whitelist").unwrap(), "admin,root");
    cfg.set_encoded("server.port", " 1234 ").unwrap();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1234));

    let err = cfg.set_encoded("server.port", "eighty").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DecodeError { .. }));
}

#[test]
fn clear_restores_defaults() {
    let mut cfg = sample();
    cfg.set("server.port", 1).unwrap();
    cfg.section("users").clear();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1));
    cfg.clear();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn snapshot_map_keeps_definition_order() {
    let cfg = sample();
    let map = cfg.to_map();
    let sections: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(sections, vec!["server", "users"]);
    let server: Vec<&str> = map["server"].keys().map(String::as_str).collect();
    assert_eq!(server, vec!["port", "host"]);
}

#[test]
fn get_or_fallback() {
    let cfg = sample();
    assert_eq!(cfg.get_or("server.port", 1).unwrap(), Value::Int(8080));
    assert_eq!(cfg.get_or("server.missing", 1).unwrap(), Value::Int(1));
}
