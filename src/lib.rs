//! Typedini - Typed options over a flat INI-style configuration file
//!
//! This crate re-exports all layers of the typedini system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: typedini_store      Store, sections, options, codec registry, read/write
//! Layer 1: typedini_format     Lexer, parser, and writer for the file format
//! Layer 0: typedini_foundation Core types (Value, Type, Error)
//! ```

pub use typedini_format as format;
pub use typedini_foundation as foundation;
pub use typedini_store as store;

pub use typedini_foundation::{CfgSet, CfgVec, Error, ErrorKind, Result, Type, Value};
pub use typedini_store::{CodecRegistry, ConfigOption, Section, SectionMut, Store, StoreOptions};
