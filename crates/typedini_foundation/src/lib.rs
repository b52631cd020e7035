//! Core values, type identifiers, collections, and errors for typedini.
//!
//! This crate provides:
//! - [`Value`] - The in-memory value of a configuration option
//! - [`Type`] - Canonical type identifiers resolved through a codec registry
//! - [`Error`] - Rich error types with context
//! - Composite collections ([`CfgVec`], [`CfgSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod types;
pub mod value;

pub use collections::{CfgSet, CfgVec};
pub use error::{Error, ErrorContext, ErrorKind};
pub use types::{Type, TypeKey};
pub use value::{Opaque, OpaqueValue, Value};

/// Result type alias using the typedini [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
