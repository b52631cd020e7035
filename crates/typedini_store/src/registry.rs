//! The codec registry: maps [`Type`]s to [`Codec`]s.
//!
//! Each [`Store`](crate::Store) owns a private registry, so registrations in
//! one store never leak into another.

use indexmap::IndexMap;
use tracing::debug;

use typedini_foundation::{Error, OpaqueValue, Result, Type, Value};

use crate::codec::Codec;

/// Registry of codecs, seeded with the built-in structural types.
#[derive(Clone, Debug)]
pub struct CodecRegistry {
    codecs: IndexMap<Type, Codec>,
}

impl CodecRegistry {
    /// Creates a registry holding the built-in codecs.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for ty in Type::BUILTIN {
            if let Some(codec) = Codec::builtin(&ty) {
                registry.codecs.insert(ty, codec);
            }
        }
        registry
    }

    /// Creates a registry with no codecs at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            codecs: IndexMap::new(),
        }
    }

    /// Installs or overwrites the codec for `ty`.
    ///
    /// Options already defined with `ty` keep their values; they encode and
    /// decode through the new codec from now on.
    pub fn register<E, D>(&mut self, ty: impl Into<Type>, encode: E, decode: D)
    where
        E: Fn(&Value) -> std::result::Result<String, String> + Send + Sync + 'static,
        D: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.register_codec(Codec::new(ty.into(), encode, decode));
    }

    /// Installs or overwrites a prebuilt codec.
    pub fn register_codec(&mut self, codec: Codec) {
        let ty = codec.ty().clone();
        let replaced = self.codecs.insert(ty.clone(), codec).is_some();
        debug!(%ty, replaced, "registered codec");
    }

    /// Registers a codec for the Rust type `T`, carried as [`Value::Opaque`].
    ///
    /// Options defined with a default of `Value::opaque(t)` infer this type.
    pub fn register_external<T, E, D>(&mut self, encode: E, decode: D)
    where
        T: OpaqueValue,
        E: Fn(&T) -> String + Send + Sync + 'static,
        D: Fn(&str) -> std::result::Result<T, String> + Send + Sync + 'static,
    {
        let ty = Type::of::<T>();
        let expected = ty.clone();
        self.register(
            ty,
            move |value: &Value| {
                value
                    .downcast_ref::<T>()
                    .map(&encode)
                    .ok_or_else(|| format!("expected {expected}, got {}", value.value_type()))
            },
            move |text: &str| decode(text).map(Value::opaque),
        );
    }

    /// Removes the codec for `ty`, returning it if it was registered.
    pub fn unregister(&mut self, ty: &Type) -> Option<Codec> {
        let removed = self.codecs.shift_remove(ty);
        debug!(%ty, removed = removed.is_some(), "unregistered codec");
        removed
    }

    /// Removes every codec, built-ins included.
    pub fn clear(&mut self) {
        debug!(count = self.codecs.len(), "unregistered all codecs");
        self.codecs.clear();
    }

    /// Looks up the codec for `ty`.
    ///
    /// # Errors
    ///
    /// Returns an unknown type error if no codec is registered for `ty`.
    pub fn lookup(&self, ty: &Type) -> Result<&Codec> {
        self.codecs
            .get(ty)
            .ok_or_else(|| Error::unknown_type(ty.clone()))
    }

    /// Returns true if a codec is registered for `ty`.
    #[must_use]
    pub fn contains(&self, ty: &Type) -> bool {
        self.codecs.contains_key(ty)
    }

    /// Iterates registered types in registration order.
    pub fn types(&self) -> impl Iterator<Item = &Type> {
        self.codecs.keys()
    }

    /// Infers the option type of a default value from its structural kind.
    ///
    /// # Errors
    ///
    /// Returns an unsupported default error if no registered codec handles
    /// the value's kind.
    pub fn infer(&self, default: &Value) -> Result<Type> {
        let ty = default.value_type();
        if self.contains(&ty) {
            Ok(ty)
        } else {
            Err(Error::unsupported_default(format!(
                "no codec registered for default of type {ty}"
            )))
        }
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}
