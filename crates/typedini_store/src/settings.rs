//! Settings that control how a [`Store`](crate::Store) behaves.

/// Behavior settings for a store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreOptions {
    /// Reject access to options that were never defined (default: true).
    ///
    /// When false, `set` on an undefined option defines it on the fly and
    /// `read` adopts unknown entries as text options.
    pub strict: bool,

    /// Separator between section and option in dotted paths (default: `.`).
    pub delimiter: char,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            strict: true,
            delimiter: '.',
        }
    }
}

impl StoreOptions {
    /// Creates settings that accept undefined options.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Builder method to set strictness.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder method to set the path delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}
