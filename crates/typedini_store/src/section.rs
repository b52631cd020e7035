//! Sections: named, ordered groups of options.
//!
//! A [`Section`] only exists inside a [`Store`](crate::Store). Read access goes
//! through `&Section`; anything that needs the store's codecs (defining,
//! assigning, encoding) goes through the [`SectionMut`] handle returned by
//! [`Store::section`](crate::Store::section).

use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use typedini_foundation::{Error, Result, Type, Value};

use crate::option::ConfigOption;
use crate::path::{validate_option_name, validate_section_name};
use crate::registry::CodecRegistry;
use crate::settings::StoreOptions;

/// An ordered mapping from option name to [`ConfigOption`].
///
/// Iteration order is definition order.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    name: String,
    strict: Option<bool>,
    options: IndexMap<String, ConfigOption>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strict: None,
            options: IndexMap::new(),
        }
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overrides the store's strictness for this section. `None` inherits it.
    pub fn set_strict(&mut self, strict: Option<bool>) {
        self.strict = strict;
    }

    /// Returns the strictness in effect given the store-wide setting.
    #[must_use]
    pub fn is_strict(&self, store_default: bool) -> bool {
        self.strict.unwrap_or(store_default)
    }

    /// Returns the current value of `name`.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error if `name` was never defined.
    pub fn get(&self, name: &str) -> Result<&Value> {
        self.option(name)
            .map(ConfigOption::value)
            .ok_or_else(|| self.undefined(name))
    }

    /// Returns the current value of `name` for in-place mutation.
    ///
    /// The returned reference aliases the stored value: mutating a set or
    /// list through it changes the option without a separate `set`.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error if `name` was never defined.
    pub fn get_mut(&mut self, name: &str) -> Result<&mut Value> {
        match self.options.get_mut(name) {
            Some(option) => Ok(option.value_mut()),
            None => Err(Error::undefined_option(self.name.clone(), name)),
        }
    }

    /// Returns the default value of `name`.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error if `name` was never defined.
    pub fn default_of(&self, name: &str) -> Result<&Value> {
        self.option(name)
            .map(ConfigOption::default)
            .ok_or_else(|| self.undefined(name))
    }

    /// Returns the option definition for `name`.
    #[must_use]
    pub fn option(&self, name: &str) -> Option<&ConfigOption> {
        self.options.get(name)
    }

    pub(crate) fn option_mut(&mut self, name: &str) -> Option<&mut ConfigOption> {
        self.options.get_mut(name)
    }

    /// Returns true if `name` is defined.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Iterates options in definition order.
    pub fn options(&self) -> impl Iterator<Item = &ConfigOption> {
        self.options.values()
    }

    /// Iterates `(name, value)` pairs in definition order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.options.values().map(|o| (o.name(), o.value()))
    }

    /// Returns the number of defined options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if no options are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Resets every option to its default. Definitions are kept.
    pub fn clear(&mut self) {
        for option in self.options.values_mut() {
            option.reset();
        }
    }

    fn undefined(&self, name: &str) -> Error {
        Error::undefined_option(self.name.clone(), name)
    }

    /// Defines a new option.
    ///
    /// With only a default, the type is inferred from it. With only a type,
    /// the default is that type's empty value. With both, the default must
    /// be representable by the type.
    pub(crate) fn define_with(
        &mut self,
        registry: &CodecRegistry,
        delimiter: char,
        name: &str,
        default: Option<Value>,
        ty: Option<Type>,
    ) -> Result<()> {
        validate_section_name(&self.name, delimiter)?;
        validate_option_name(name)?;
        if self.options.contains_key(name) {
            return Err(Error::duplicate_option(self.name.clone(), name));
        }

        let (ty, default) = match (ty, default) {
            (None, None) => {
                return Err(Error::unsupported_default(
                    "neither a default nor a type was given",
                ));
            }
            (None, Some(default)) => (registry.infer(&default)?, default),
            (Some(ty), None) => {
                registry.lookup(&ty)?;
                let default = Value::empty_of(&ty).ok_or_else(|| {
                    Error::unsupported_default(format!(
                        "type {ty} has no empty value; supply a default"
                    ))
                })?;
                (ty, default)
            }
            (Some(ty), Some(default)) => (ty, default),
        };
        let default = registry.lookup(&ty)?.check(default)?;

        self.options
            .insert(name.to_string(), ConfigOption::new(name, ty, default));
        Ok(())
    }

    /// Assigns a value after validating it against the option's codec.
    pub(crate) fn set_with(
        &mut self,
        registry: &CodecRegistry,
        name: &str,
        value: Value,
    ) -> Result<()> {
        let option = self
            .options
            .get_mut(name)
            .ok_or_else(|| Error::undefined_option(self.name.clone(), name))?;
        let value = registry.lookup(option.ty())?.check(value)?;
        option.set_value(value);
        Ok(())
    }

    /// Decodes `text` through the option's codec and assigns the result.
    pub(crate) fn set_encoded_with(
        &mut self,
        registry: &CodecRegistry,
        name: &str,
        text: &str,
    ) -> Result<()> {
        let option = self
            .options
            .get_mut(name)
            .ok_or_else(|| Error::undefined_option(self.name.clone(), name))?;
        let value = registry.lookup(option.ty())?.decode(text)?;
        option.set_value(value);
        Ok(())
    }

    /// Takes over an undeclared entry read from a file as a plain string
    /// option whose default is the text itself.
    pub(crate) fn adopt(&mut self, name: &str, text: String) {
        match self.options.get_mut(name) {
            Some(option) => option.set_value(Value::Str(text)),
            None => {
                let option = ConfigOption::new(name, Type::Str, Value::Str(text));
                self.options.insert(name.to_string(), option);
            }
        }
    }

    /// Encodes the current value of `name`.
    pub(crate) fn get_encoded_with(&self, registry: &CodecRegistry, name: &str) -> Result<String> {
        let option = self.option(name).ok_or_else(|| self.undefined(name))?;
        registry.lookup(option.ty())?.encode(option.value())
    }
}

/// A mutable handle on a [`Section`] bound to its store's codecs and settings.
///
/// Dereferences to [`Section`] for read access and in-place mutation.
pub struct SectionMut<'a> {
    section: &'a mut Section,
    registry: &'a CodecRegistry,
    options: &'a StoreOptions,
}

impl<'a> SectionMut<'a> {
    pub(crate) fn new(
        section: &'a mut Section,
        registry: &'a CodecRegistry,
        options: &'a StoreOptions,
    ) -> Self {
        Self {
            section,
            registry,
            options,
        }
    }

    /// Defines a new option, inferring its type from `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or already defined, or if no
    /// registered codec handles the default's kind.
    pub fn define(&mut self, name: &str, default: impl Into<Value>) -> Result<()> {
        self.section.define_with(
            self.registry,
            self.options.delimiter,
            name,
            Some(default.into()),
            None,
        )
    }

    /// Defines a new option with an explicit type.
    ///
    /// Without a default, structural types start at their empty value.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or already defined, the type
    /// is unknown, the default does not fit the type, or the type has no
    /// empty value and no default was given.
    pub fn define_as(
        &mut self,
        name: &str,
        ty: impl Into<Type>,
        default: Option<Value>,
    ) -> Result<()> {
        self.section.define_with(
            self.registry,
            self.options.delimiter,
            name,
            default,
            Some(ty.into()),
        )
    }

    /// Assigns a value to `name`.
    ///
    /// In a non-strict section an undefined `name` is defined on the fly with
    /// the value as its default.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error (strict sections), a type mismatch,
    /// or an encode error if the value could not be written.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if !self.section.contains(name) && !self.section.is_strict(self.options.strict) {
            return self.define(name, value);
        }
        self.section.set_with(self.registry, name, value)
    }

    /// Decodes `text` through the option's codec and assigns the result.
    ///
    /// In a non-strict section an undefined `name` is defined as text.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error (strict sections) or a decode error.
    pub fn set_encoded(&mut self, name: &str, text: &str) -> Result<()> {
        if !self.section.contains(name) && !self.section.is_strict(self.options.strict) {
            return self.define(name, text);
        }
        self.section.set_encoded_with(self.registry, name, text)
    }

    /// Returns the encoded text of `name`'s current value.
    ///
    /// # Errors
    ///
    /// Returns an undefined option error or an encode error.
    pub fn get_encoded(&self, name: &str) -> Result<String> {
        self.section.get_encoded_with(self.registry, name)
    }
}

impl Deref for SectionMut<'_> {
    type Target = Section;

    fn deref(&self) -> &Section {
        self.section
    }
}

impl DerefMut for SectionMut<'_> {
    fn deref_mut(&mut self) -> &mut Section {
        self.section
    }
}
