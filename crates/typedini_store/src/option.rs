//! A single named, typed configuration value.

use typedini_foundation::{Type, Value};

/// A configuration option: a name, a resolved type, a default, and the
/// current value.
///
/// Both the default and the value encode and decode through the codec
/// registered for [`ty`](Self::ty).
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigOption {
    name: String,
    ty: Type,
    default: Value,
    value: Value,
}

impl ConfigOption {
    /// Creates an option whose value starts at its default.
    pub(crate) fn new(name: impl Into<String>, ty: Type, default: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            value: default.clone(),
            default,
        }
    }

    /// Returns the option name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared type.
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default(&self) -> &Value {
        &self.default
    }

    /// Returns the current value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the current value for in-place mutation.
    ///
    /// This is a working alias of the stored value, not a copy: inserting into
    /// a returned set changes the option. No type check happens here; values
    /// that can no longer be encoded are reported by the next write.
    pub fn value_mut(&mut self) -> &mut Value {
        &mut self.value
    }

    /// Replaces the current value. Callers validate first.
    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    /// Returns true if the value differs from the default.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value != self.default
    }

    /// Resets the value to the default.
    pub fn reset(&mut self) {
        self.value = self.default.clone();
    }
}
