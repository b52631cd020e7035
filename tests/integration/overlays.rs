//! Overlay sources read after the primary file.

use typedini_foundation::Value;

use crate::{Scratch, server_store};

#[test]
fn later_sources_win() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1000\nhost = primary\n");
    let local = scratch.sibling("local.ini");
    std::fs::write(&local, "[server]\nport = 2000\n").unwrap();

    let mut cfg = server_store(&scratch.path);
    cfg.add_source(&local);
    cfg.read().unwrap();

    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(2000));
    assert_eq!(cfg.get("server.host").unwrap(), &Value::from("primary"));
    assert_eq!(cfg.sources().count(), 2);
}

#[test]
fn missing_overlay_is_skipped() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1000\n");

    let mut cfg = server_store(&scratch.path);
    cfg.add_source(scratch.sibling("absent.ini"));
    cfg.read().unwrap();
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1000));
}

#[test]
fn bad_overlay_aborts_whole_read() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1000\n");
    let local = scratch.sibling("local.ini");
    std::fs::write(&local, "[server]\nport = lots\n").unwrap();

    let mut cfg = server_store(&scratch.path);
    cfg.add_source(&local);
    assert!(cfg.read().is_err());
    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn write_targets_primary_only() {
    let scratch = Scratch::new();
    scratch.write("[server]\nport = 1000\n");
    let local = scratch.sibling("local.ini");
    std::fs::write(&local, "[server]\nport = 2000\n").unwrap();

    let mut cfg = server_store(&scratch.path);
    cfg.add_source(&local);
    cfg.read().unwrap();
    cfg.write().unwrap();

    assert!(scratch.contents().contains("port = 2000"));
    assert_eq!(
        std::fs::read_to_string(&local).unwrap(),
        "[server]\nport = 2000\n"
    );
}
