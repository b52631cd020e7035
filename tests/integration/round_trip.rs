//! Write then read against a real file.

use typedini_foundation::{Type, Value};
use typedini_store::Store;

use crate::{Scratch, server_store};

#[test]
fn write_produces_expected_text() {
    let scratch = Scratch::new();
    let cfg = server_store(&scratch.path);
    cfg.write().unwrap();

    assert_eq!(
        scratch.contents(),
        "[server]\nport = 8080\nhost = 127.0.0.1\n\n[users]\nwhitelist = admin,root\n\n"
    );
}

#[test]
fn external_edit_is_picked_up() {
    let scratch = Scratch::new();
    let mut cfg = server_store(&scratch.path);
    cfg.write().unwrap();

    let edited = scratch.contents().replace("8080", "1234");
    scratch.write(&edited);

    cfg.read().unwrap();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1234));
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("127.0.0.1"));
    assert_eq!(
        cfg.get("users.whitelist").unwrap(),
        &Value::str_set(["admin", "root"])
    );
}

#[test]
fn write_read_write_is_stable() {
    let scratch = Scratch::new();
    let mut cfg = server_store(&scratch.path);
    cfg.set("server.port", 9000).unwrap();
    cfg.write().unwrap();
    let first = scratch.contents();

    cfg.read().unwrap();
    cfg.write().unwrap();
    assert_eq!(scratch.contents(), first);
}

#[test]
fn fresh_store_reads_written_values() {
    let scratch = Scratch::new();
    let mut writer = Store::new(&scratch.path);
    writer.define("mix.flag", true).unwrap();
    writer.define("mix.ratio", 0.1).unwrap();
    writer.define("mix.ports", vec![80_i64, 443]).unwrap();
    writer.define("mix.hosts", vec!["b", "a"]).unwrap();
    writer.define_as("mix.empty", Type::StrSet, None).unwrap();
    writer.write().unwrap();

    let mut reader = Store::new(&scratch.path);
    reader.define("mix.flag", false).unwrap();
    reader.define("mix.ratio", 0.0).unwrap();
    reader.define_as("mix.ports", Type::IntList, None).unwrap();
    reader.define_as("mix.hosts", Type::StrList, None).unwrap();
    reader
        .define("mix.empty", Value::str_set(["placeholder"]))
        .unwrap();
    reader.read().unwrap();

    assert_eq!(reader.to_map(), writer.to_map());
}

#[test]
fn boolean_spellings() {
    let scratch = Scratch::new();
    scratch.write("[flags]\na = yes\nb = OFF\nc = 1\nd = false\n");

    let mut cfg = Store::new(&scratch.path);
    for name in ["a", "b", "c", "d"] {
        cfg.section("flags").define(name, false).unwrap();
    }
    cfg.read().unwrap();

    let values: Vec<bool> = cfg
        .get_section("flags")
        .unwrap()
        .items()
        .filter_map(|(_, v)| v.as_bool())
        .collect();
    assert_eq!(values, vec![true, false, true, false]);
}

#[test]
fn sequence_elements_are_trimmed() {
    let scratch = Scratch::new();
    scratch.write("[users]\nwhitelist = root , admin,, guest\n");

    let mut cfg = server_store(&scratch.path);
    cfg.read().unwrap();
    assert_eq!(
        cfg.get("users.whitelist").unwrap(),
        &Value::str_set(["admin", "guest", "root"])
    );
}

#[test]
fn missing_entries_keep_current_values() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1\n");

    let mut cfg = server_store(&scratch.path);
    cfg.set("server.host", "example.org").unwrap();
    cfg.read().unwrap();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1));
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("example.org"));
}

#[test]
fn edit_scenario_with_empty_whitelist() {
    let scratch = Scratch::new();
    let mut cfg = Store::new(&scratch.path);
    cfg.define("server.port", 8080).unwrap();
    cfg.define("server.host", "127.0.0.1").unwrap();
    cfg.define("users.whitelist", Value::str_set(Vec::<String>::new()))
        .unwrap();

    cfg.set("server.port", 1337).unwrap();
    cfg.write().unwrap();
    assert!(scratch.contents().contains("whitelist =\n"));

    let edited = scratch.contents().replace("1337", "1234");
    scratch.write(&edited);
    cfg.read().unwrap();

    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1234));
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("127.0.0.1"));
    assert_eq!(
        cfg.get("users.whitelist").unwrap(),
        &Value::str_set(Vec::<String>::new())
    );
}

#[test]
fn empty_sections_do_not_break_reading() {
    let scratch = Scratch::new();
    let mut cfg = server_store(&scratch.path);
    cfg.section("");
    cfg.section("x]");
    cfg.write().unwrap();

    assert!(!scratch.contents().contains("[]"));
    let mut fresh = server_store(&scratch.path);
    fresh.read().unwrap();
    assert_eq!(fresh.to_map(), server_store(&scratch.path).to_map());
}
