//! Typed configuration store for typedini.
//!
//! This crate provides:
//! - [`Store`] - Sections of typed options backed by an INI-like file
//! - [`Section`] / [`SectionMut`] - Ordered groups of options
//! - [`ConfigOption`] - A single option: name, type, default, current value
//! - [`CodecRegistry`] / [`Codec`] - Text encoders and decoders keyed by [`Type`]
//! - [`StoreOptions`] - Strictness and path delimiter settings
//!
//! [`Type`]: typedini_foundation::Type
//!
//! # Example
//!
//! ```no_run
//! use typedini_store::Store;
//! use typedini_foundation::Value;
//!
//! let mut cfg = Store::new("settings.ini");
//! cfg.define("server.port", 8080).unwrap();
//! cfg.define("server.host", "127.0.0.1").unwrap();
//! cfg.define("users.whitelist", Value::str_set(["root", "admin"])).unwrap();
//!
//! cfg.write().unwrap();
//! cfg.read().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codec;
pub mod option;
pub mod path;
mod persist;
pub mod registry;
pub mod section;
pub mod settings;
pub mod store;

pub use codec::Codec;
pub use option::ConfigOption;
pub use path::{join_path, split_path};
pub use registry::CodecRegistry;
pub use section::{Section, SectionMut};
pub use settings::StoreOptions;
pub use store::Store;
