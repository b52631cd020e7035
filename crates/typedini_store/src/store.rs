//! The top-level configuration store.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use typedini_foundation::{Error, ErrorKind, OpaqueValue, Result, Type, Value};

use crate::path::split_path;
use crate::registry::CodecRegistry;
use crate::section::{Section, SectionMut};
use crate::settings::StoreOptions;

/// A typed configuration store backed by an INI-like file.
///
/// The store owns its sections (and, through them, every option), a private
/// [`CodecRegistry`], and the path it reads from and writes to. Construction
/// performs no I/O.
///
/// # Example
///
/// ```
/// use typedini_store::Store;
/// use typedini_foundation::Value;
///
/// let mut cfg = Store::new("app.ini");
/// cfg.define("server.port", 8080).unwrap();
/// cfg.set("server.port", 1337).unwrap();
/// assert_eq!(cfg.get("server.port").unwrap(), &Value::Int(1337));
/// ```
#[derive(Clone, Debug)]
pub struct Store {
    pub(crate) path: PathBuf,
    pub(crate) overlays: Vec<PathBuf>,
    pub(crate) options: StoreOptions,
    pub(crate) registry: CodecRegistry,
    pub(crate) sections: IndexMap<String, Section>,
}

impl Store {
    /// Creates an empty store for `path` with default settings.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, StoreOptions::default())
    }

    /// Creates an empty store for `path` with the given settings.
    #[must_use]
    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            path: path.into(),
            overlays: Vec::new(),
            options,
            registry: CodecRegistry::new(),
            sections: IndexMap::new(),
        }
    }

    /// Returns the primary path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the store settings.
    #[must_use]
    pub const fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Adds an overlay source, read after the primary path and any earlier
    /// overlays. Overlays are never written.
    pub fn add_source(&mut self, path: impl Into<PathBuf>) {
        self.overlays.push(path.into());
    }

    /// Iterates every source in read order, primary first.
    pub fn sources(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.path.as_path()).chain(self.overlays.iter().map(PathBuf::as_path))
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Returns the codec registry.
    #[must_use]
    pub const fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    /// Installs or overwrites the codec for `ty`.
    ///
    /// Existing options of that type are not re-encoded; they use the new
    /// codec from the next read or write on.
    pub fn register_type<E, D>(&mut self, ty: impl Into<Type>, encode: E, decode: D)
    where
        E: Fn(&Value) -> std::result::Result<String, String> + Send + Sync + 'static,
        D: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.registry.register(ty, encode, decode);
    }

    /// Registers a codec for the Rust type `T`, carried as [`Value::Opaque`].
    pub fn register_external<T, E, D>(&mut self, encode: E, decode: D)
    where
        T: OpaqueValue,
        E: Fn(&T) -> String + Send + Sync + 'static,
        D: Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    {
        self.registry.register_external(encode, decode);
    }

    /// Removes the codec for `ty`. Returns true if one was registered.
    pub fn unregister_type(&mut self, ty: impl Into<Type>) -> bool {
        self.registry.unregister(&ty.into()).is_some()
    }

    /// Removes every codec, built-ins included.
    pub fn unregister_all_types(&mut self) {
        self.registry.clear();
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Returns the section named `name`, creating an empty one if absent.
    pub fn section(&mut self, name: &str) -> SectionMut<'_> {
        let section = self
            .sections
            .entry(name.to_string())
            .or_insert_with(|| Section::new(name));
        SectionMut::new(section, &self.registry, &self.options)
    }

    /// Returns the section named `name`, if it exists.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterates sections in creation order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the store has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    // =========================================================================
    // Options by dotted path
    // =========================================================================

    /// Defines `section.key`, inferring the type from `default`.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error for a malformed path, a duplicate option
    /// error if it is already defined, or an unsupported default error if no
    /// codec handles the default's kind.
    pub fn define(&mut self, path: &str, default: impl Into<Value>) -> Result<()> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.section(section).define(key, default)
    }

    /// Defines `section.key` with an explicit type and optional default.
    ///
    /// # Errors
    ///
    /// As [`define`](Self::define), plus an unknown type error if `ty` has no
    /// codec and a type mismatch if `default` does not fit `ty`.
    pub fn define_as(
        &mut self,
        path: &str,
        ty: impl Into<Type>,
        default: Option<Value>,
    ) -> Result<()> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.section(section).define_as(key, ty, default)
    }

    /// Returns the current value at `section.key`.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error or an undefined option error.
    pub fn get(&self, path: &str) -> Result<&Value> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.sections
            .get(section)
            .ok_or_else(|| Error::undefined_option(section, key))?
            .get(key)
    }

    /// Returns the current value at `section.key` for in-place mutation.
    ///
    /// The reference aliases the stored value; see [`Section::get_mut`].
    ///
    /// # Errors
    ///
    /// Returns an invalid path error or an undefined option error.
    pub fn get_mut(&mut self, path: &str) -> Result<&mut Value> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.sections
            .get_mut(section)
            .ok_or_else(|| Error::undefined_option(section, key))?
            .get_mut(key)
    }

    /// Returns a copy of the value at `section.key`, or `fallback` if the
    /// option is not defined.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error for a malformed path.
    pub fn get_or(&self, path: &str, fallback: impl Into<Value>) -> Result<Value> {
        match self.get(path) {
            Ok(value) => Ok(value.clone()),
            Err(err) if matches!(err.kind, ErrorKind::UndefinedOption { .. }) => {
                Ok(fallback.into())
            }
            Err(err) => Err(err),
        }
    }

    /// Returns the default value at `section.key`.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error or an undefined option error.
    pub fn default_of(&self, path: &str) -> Result<&Value> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.sections
            .get(section)
            .ok_or_else(|| Error::undefined_option(section, key))?
            .default_of(key)
    }

    /// Returns true if `section.key` is defined.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        split_path(path, self.options.delimiter).is_ok_and(|(section, key)| {
            self.sections
                .get(section)
                .is_some_and(|s| s.contains(key))
        })
    }

    /// Assigns `value` to `section.key` after checking it against the
    /// option's type.
    ///
    /// A non-strict store defines unknown options on the fly.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error, an undefined option error, a type
    /// mismatch, or an encode error.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> Result<()> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.existing_or_lenient(section, key)?.set(key, value)
    }

    /// Returns the encoded text of the value at `section.key`.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error, an undefined option error, or an
    /// encode error.
    pub fn get_encoded(&self, path: &str) -> Result<String> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        let section = self
            .sections
            .get(section)
            .ok_or_else(|| Error::undefined_option(section, key))?;
        section.get_encoded_with(&self.registry, key)
    }

    /// Decodes `text` through the codec of `section.key` and assigns it.
    ///
    /// # Errors
    ///
    /// Returns an invalid path error, an undefined option error, or a decode
    /// error.
    pub fn set_encoded(&mut self, path: &str, text: &str) -> Result<()> {
        let (section, key) = split_path(path, self.options.delimiter)?;
        self.existing_or_lenient(section, key)?
            .set_encoded(key, text)
    }

    /// Resets every option in every section to its default.
    pub fn clear(&mut self) {
        for section in self.sections.values_mut() {
            section.clear();
        }
    }

    /// Returns a `section -> option -> value` snapshot in definition order.
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, IndexMap<String, Value>> {
        self.sections
            .values()
            .map(|section| {
                let items = section
                    .items()
                    .map(|(name, value)| (name.to_string(), value.clone()))
                    .collect();
                (section.name().to_string(), items)
            })
            .collect()
    }

    /// Resolves the section for an assignment: existing sections always,
    /// missing ones only when the store is not strict.
    fn existing_or_lenient(&mut self, section: &str, key: &str) -> Result<SectionMut<'_>> {
        if self.options.strict && !self.sections.contains_key(section) {
            return Err(Error::undefined_option(section, key));
        }
        Ok(self.section(section))
    }
}
