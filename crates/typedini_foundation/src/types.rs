//! Canonical type identifiers.
//!
//! Callers may name a type by a string (`"int"`, `"str_set"`, `"port"`) or by
//! a Rust type registered as an external codec. Both forms normalize to
//! [`Type`] at the API boundary; everything past that point compares `Type`s.

use std::any::{self, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Canonical identifier of an option type.
///
/// Two `Type`s are equal iff they resolve to the same codec.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Text.
    Str,
    /// Set of text, comma separated on disk.
    StrSet,
    /// List of text, comma separated on disk, order preserved.
    StrList,
    /// List of integers, comma separated on disk, order preserved.
    IntList,
    /// A user-registered type addressed by name.
    Named(Arc<str>),
    /// A user-registered Rust type carried as an opaque value.
    External(TypeKey),
}

impl Type {
    /// Every structural tag, in registration order.
    pub const BUILTIN: [Type; 7] = [
        Type::Bool,
        Type::Int,
        Type::Float,
        Type::Str,
        Type::StrSet,
        Type::StrList,
        Type::IntList,
    ];

    /// Creates a named type.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Creates the external type identifier for `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self::External(TypeKey::of::<T>())
    }

    /// Normalizes a type name.
    ///
    /// Structural names map to their tags; anything else becomes [`Type::Named`].
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name.trim() {
            "bool" => Self::Bool,
            "int" => Self::Int,
            "float" => Self::Float,
            "str" => Self::Str,
            "str_set" => Self::StrSet,
            "str_list" => Self::StrList,
            "int_list" => Self::IntList,
            other => Self::named(other),
        }
    }

    /// Returns the canonical name of this type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Str => "str",
            Self::StrSet => "str_set",
            Self::StrList => "str_list",
            Self::IntList => "int_list",
            Self::Named(name) => &name[..],
            Self::External(key) => key.name(),
        }
    }

    /// Returns true for the structural tags the registry seeds itself with.
    #[must_use]
    pub const fn is_builtin(&self) -> bool {
        !matches!(self, Self::Named(_) | Self::External(_))
    }

    /// Checks if a value of type `value_type` can be stored under this type
    /// without going through a codec.
    ///
    /// - Structural tags must match exactly
    /// - `Float` accepts `Int` (numeric promotion)
    /// - External types match by Rust type identity
    /// - Named types never accept structurally; the registry validates them
    #[must_use]
    pub fn accepts(&self, value_type: &Type) -> bool {
        match (self, value_type) {
            (Self::Named(_), _) => false,
            (Self::Float, Self::Int) => true,
            (expected, actual) => expected == actual,
        }
    }
}

impl From<&str> for Type {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for Type {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<TypeKey> for Type {
    fn from(key: TypeKey) -> Self {
        Self::External(key)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => write!(f, "named<{name}>"),
            Self::External(key) => write!(f, "external<{}>", key.name()),
            builtin => f.write_str(builtin.name()),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Identity of a Rust type registered as an external codec.
///
/// Equality and hashing use [`TypeId`] only; the name is for diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Returns the key for `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// Returns the Rust type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this key identifies `T`.
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}
