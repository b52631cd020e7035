//! Entries in the file that the program never defined.

use typedini_foundation::Value;
use typedini_store::{Store, StoreOptions};

use crate::{Scratch, server_store};

const WITH_EXTRAS: &str = "\
# written by hand
[server]
port = 1234
legacy = true

[metrics]
enabled = yes
";

#[test]
fn strict_store_ignores_extras() {
    let scratch = Scratch::new();
    scratch.write(WITH_EXTRAS);

    let mut cfg = server_store(&scratch.path);
    cfg.read().unwrap();

    assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1234));
    assert!(!cfg.contains("server.legacy"));
    assert!(cfg.get_section("metrics").is_none());
}

#[test]
fn strict_store_drops_extras_on_write() {
    let scratch = Scratch::new();
    scratch.write(WITH_EXTRAS);

    let mut cfg = server_store(&scratch.path);
    cfg.read().unwrap();
    cfg.write().unwrap();

    let text = scratch.contents();
    assert!(!text.contains("legacy"));
    assert!(!text.contains("[metrics]"));
}

#[test]
fn lenient_store_keeps_extras_as_text() {
    let scratch = Scratch::new();
    scratch.write(WITH_EXTRAS);

    let mut cfg = Store::with_options(&scratch.path, StoreOptions::lenient());
    cfg.define("server.port", 8080).unwrap();
    cfg.read().unwrap();

    assert_eq!(cfg.get("server.legacy").unwrap(), &Value::from("true"));
    assert_eq!(cfg.get("metrics.enabled").unwrap(), &Value::from("yes"));

    cfg.write().unwrap();
    let text = scratch.contents();
    assert!(text.contains("legacy = true"));
    assert!(text.contains("[metrics]\nenabled = yes\n"));
}
