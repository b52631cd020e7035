//! In-memory value of a configuration option.

use std::any::Any;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

use crate::collections::{CfgSet, CfgVec};
use crate::types::{Type, TypeKey};

/// The in-memory value of a configuration option.
///
/// Every variant maps onto exactly one structural [`Type`], except
/// [`Value::Opaque`], which carries its Rust type identity with it.
#[derive(Clone)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text value.
    Str(String),
    /// Set of text.
    StrSet(CfgSet<String>),
    /// Ordered list of text.
    StrList(CfgVec<String>),
    /// Ordered list of integers.
    IntList(CfgVec<i64>),
    /// A value of a caller-registered Rust type.
    Opaque(Opaque),
}

impl Value {
    /// Returns the structural type of this value.
    #[must_use]
    pub fn value_type(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Int(_) => Type::Int,
            Self::Float(_) => Type::Float,
            Self::Str(_) => Type::Str,
            Self::StrSet(_) => Type::StrSet,
            Self::StrList(_) => Type::StrList,
            Self::IntList(_) => Type::IntList,
            Self::Opaque(o) => Type::External(o.key()),
        }
    }

    /// Returns the zero value of a structural type.
    ///
    /// Returns `None` for named and external types, which have no zero.
    #[must_use]
    pub fn empty_of(ty: &Type) -> Option<Self> {
        match ty {
            Type::Bool => Some(Self::Bool(false)),
            Type::Int => Some(Self::Int(0)),
            Type::Float => Some(Self::Float(0.0)),
            Type::Str => Some(Self::Str(String::new())),
            Type::StrSet => Some(Self::StrSet(CfgSet::new())),
            Type::StrList => Some(Self::StrList(CfgVec::new())),
            Type::IntList => Some(Self::IntList(CfgVec::new())),
            Type::Named(_) | Type::External(_) => None,
        }
    }

    /// Creates a set-of-text value.
    pub fn str_set<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StrSet(items.into_iter().map(Into::into).collect())
    }

    /// Creates a list-of-text value.
    pub fn str_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::StrList(items.into_iter().map(Into::into).collect())
    }

    /// Creates a list-of-integer value.
    pub fn int_list<I: IntoIterator<Item = i64>>(items: I) -> Self {
        Self::IntList(items.into_iter().collect())
    }

    /// Wraps a value of a caller-registered Rust type.
    pub fn opaque<T: OpaqueValue>(value: T) -> Self {
        Self::Opaque(Opaque::new(value))
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    ///
    /// Note: Converting large i64 values to f64 may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a set-of-text reference.
    #[must_use]
    pub const fn as_str_set(&self) -> Option<&CfgSet<String>> {
        match self {
            Self::StrSet(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable access to a set-of-text.
    pub fn as_str_set_mut(&mut self) -> Option<&mut CfgSet<String>> {
        match self {
            Self::StrSet(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list-of-text reference.
    #[must_use]
    pub const fn as_str_list(&self) -> Option<&CfgVec<String>> {
        match self {
            Self::StrList(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable access to a list-of-text.
    pub fn as_str_list_mut(&mut self) -> Option<&mut CfgVec<String>> {
        match self {
            Self::StrList(v) => Some(v),
            _ => None,
        }
    }

    /// Attempts to extract a list-of-integer reference.
    #[must_use]
    pub const fn as_int_list(&self) -> Option<&CfgVec<i64>> {
        match self {
            Self::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Mutable access to a list-of-integer.
    pub fn as_int_list_mut(&mut self) -> Option<&mut CfgVec<i64>> {
        match self {
            Self::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Downcasts an opaque value to `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Self::Opaque(o) => o.downcast_ref(),
            _ => None,
        }
    }

    /// Mutably downcasts an opaque value to `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        match self {
            Self::Opaque(o) => o.downcast_mut(),
            _ => None,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::StrSet(a), Self::StrSet(b)) => a == b,
            (Self::StrList(a), Self::StrList(b)) => a == b,
            (Self::IntList(a), Self::IntList(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::StrSet(s) => write!(f, "{s:?}"),
            Self::StrList(v) => write!(f, "{v:?}"),
            Self::IntList(v) => write!(f, "{v:?}"),
            Self::Opaque(o) => write!(f, "{o:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::StrSet(s) => {
                write!(f, "{{")?;
                for (i, item) in s.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            }
            Self::StrList(v) => write_list(f, v.iter()),
            Self::IntList(v) => write_list(f, v.iter()),
            Self::Opaque(o) => write!(f, "{o:?}"),
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    write!(f, "[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, "]")
}

/// A value type that can live inside [`Value::Opaque`].
///
/// Implemented for every `Clone + PartialEq + Debug + Send + Sync` type.
pub trait OpaqueValue: Any + fmt::Debug + Send + Sync {
    /// Clones into a new box.
    fn clone_box(&self) -> Box<dyn OpaqueValue>;
    /// Compares with another opaque value of possibly different type.
    fn eq_dyn(&self, other: &dyn OpaqueValue) -> bool;
    /// Upcasts for downcasting.
    fn as_any(&self) -> &dyn Any;
    /// Upcasts for mutable downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T> OpaqueValue for T
where
    T: Any + Clone + PartialEq + fmt::Debug + Send + Sync,
{
    fn clone_box(&self) -> Box<dyn OpaqueValue> {
        Box::new(self.clone())
    }

    fn eq_dyn(&self, other: &dyn OpaqueValue) -> bool {
        other.as_any().downcast_ref::<T>() == Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A boxed value of a caller-registered Rust type, tagged with its [`TypeKey`].
pub struct Opaque {
    key: TypeKey,
    inner: Box<dyn OpaqueValue>,
}

impl Opaque {
    /// Wraps a value.
    pub fn new<T: OpaqueValue>(value: T) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the type identity of the wrapped value.
    #[must_use]
    pub const fn key(&self) -> TypeKey {
        self.key
    }

    /// Downcasts to `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }

    /// Mutably downcasts to `T`.
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut().downcast_mut()
    }
}

impl Clone for Opaque {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            inner: self.inner.clone_box(),
        }
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.inner.eq_dyn(other.inner.as_ref())
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.inner)
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u16> for Value {
    fn from(n: u16) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<CfgSet<String>> for Value {
    fn from(s: CfgSet<String>) -> Self {
        Self::StrSet(s)
    }
}

impl From<BTreeSet<String>> for Value {
    fn from(s: BTreeSet<String>) -> Self {
        Self::StrSet(s.into_iter().collect())
    }
}

impl From<HashSet<String>> for Value {
    fn from(s: HashSet<String>) -> Self {
        Self::StrSet(s.into_iter().collect())
    }
}

impl From<CfgVec<String>> for Value {
    fn from(v: CfgVec<String>) -> Self {
        Self::StrList(v)
    }
}

impl From<Vec<String>> for Value {
    fn from(v: Vec<String>) -> Self {
        Self::StrList(v.into_iter().collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Self::str_list(v)
    }
}

impl From<CfgVec<i64>> for Value {
    fn from(v: CfgVec<i64>) -> Self {
        Self::IntList(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::IntList(v.into_iter().collect())
    }
}

impl From<Opaque> for Value {
    fn from(o: Opaque) -> Self {
        Self::Opaque(o)
    }
}
