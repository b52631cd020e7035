//! Codecs: paired encode/decode functions bound to a [`Type`].
//!
//! Every codec promises `decode(encode(v)) == v` for the values it accepts.
//! The built-in codecs enforce that promise by refusing to encode values
//! whose text form would not survive the file format (see [`Codec::encode`]).

use std::fmt;
use std::sync::Arc;

use typedini_foundation::{CfgSet, CfgVec, Error, Result, Type, Value};

/// Encodes a value to text. `Err` carries a human-readable reason.
pub type EncodeFn = Arc<dyn Fn(&Value) -> std::result::Result<String, String> + Send + Sync>;

/// Decodes text to a value. `Err` carries a human-readable reason.
pub type DecodeFn = Arc<dyn Fn(&str) -> std::result::Result<Value, String> + Send + Sync>;

/// Separator between the elements of sequence types.
pub const ELEMENT_SEPARATOR: char = ',';

/// An encode/decode pair for one [`Type`].
#[derive(Clone)]
pub struct Codec {
    ty: Type,
    encode: EncodeFn,
    decode: DecodeFn,
}

impl Codec {
    /// Creates a codec from closures.
    pub fn new<E, D>(ty: Type, encode: E, decode: D) -> Self
    where
        E: Fn(&Value) -> std::result::Result<String, String> + Send + Sync + 'static,
        D: Fn(&str) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            ty,
            encode: Arc::new(encode),
            decode: Arc::new(decode),
        }
    }

    /// Returns the codec for a structural type.
    ///
    /// Returns `None` for named and external types.
    #[must_use]
    pub fn builtin(ty: &Type) -> Option<Self> {
        let codec = match ty {
            Type::Bool => Self::new(Type::Bool, encode_bool, decode_bool),
            Type::Int => Self::new(Type::Int, encode_int, decode_int),
            Type::Float => Self::new(Type::Float, encode_float, decode_float),
            Type::Str => Self::new(Type::Str, encode_str, decode_str),
            Type::StrSet => Self::new(Type::StrSet, encode_str_set, decode_str_set),
            Type::StrList => Self::new(Type::StrList, encode_str_list, decode_str_list),
            Type::IntList => Self::new(Type::IntList, encode_int_list, decode_int_list),
            Type::Named(_) | Type::External(_) => return None,
        };
        Some(codec)
    }

    /// Returns the type this codec is bound to.
    #[must_use]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Encodes a value to its text form.
    ///
    /// # Errors
    ///
    /// Returns an encode error if the value cannot be written losslessly.
    /// For the built-in codecs that covers the wrong value variant, text with
    /// line breaks or surrounding whitespace, and sequence elements that are
    /// empty or contain the separator.
    pub fn encode(&self, value: &Value) -> Result<String> {
        (self.encode)(value).map_err(|message| Error::encode(self.ty.clone(), message))
    }

    /// Decodes a value from its text form.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the codec rejects the text.
    pub fn decode(&self, text: &str) -> Result<Value> {
        (self.decode)(text).map_err(|message| Error::decode(self.ty.clone(), text, message))
    }

    /// Validates a value for assignment to an option of this codec's type.
    ///
    /// Structural and external types are checked directly (an `Int` offered
    /// to a `Float` option is promoted) and then encoded once so values that
    /// could not be written fail here rather than at write time. Named types
    /// have no structure to check against, so the value is round-tripped
    /// through the codec and must come back equal.
    ///
    /// # Errors
    ///
    /// Returns a type mismatch if the value cannot be represented by this
    /// type, or an encode error if a structural value is not writable.
    pub fn check(&self, value: Value) -> Result<Value> {
        let actual = value.value_type();

        if let Type::Named(_) = self.ty {
            let mismatch = || Error::type_mismatch(self.ty.clone(), actual.clone());
            let text = self.encode(&value).map_err(|_| mismatch())?;
            let back = self.decode(&text).map_err(|_| mismatch())?;
            return if back == value { Ok(value) } else { Err(mismatch()) };
        }

        if !self.ty.accepts(&actual) {
            return Err(Error::type_mismatch(self.ty.clone(), actual));
        }
        let value = match (&self.ty, value) {
            (Type::Float, Value::Int(n)) => exact_float(n)
                .map(Value::Float)
                .ok_or_else(|| Error::type_mismatch(Type::Float, actual))?,
            (_, value) => value,
        };
        self.encode(&value)?;
        Ok(value)
    }
}

impl fmt::Debug for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec").field("ty", &self.ty).finish_non_exhaustive()
    }
}

/// Converts `n` to a float only when no precision is lost.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn exact_float(n: i64) -> Option<f64> {
    let f = n as f64;
    (f as i128 == i128::from(n)).then_some(f)
}

// =============================================================================
// Built-in codecs
// =============================================================================

fn wrong_variant(expected: &Type, value: &Value) -> String {
    format!("expected {expected}, got {}", value.value_type())
}

fn encode_bool(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::Bool(true) => Ok("true".into()),
        Value::Bool(false) => Ok("false".into()),
        other => Err(wrong_variant(&Type::Bool, other)),
    }
}

fn decode_bool(text: &str) -> std::result::Result<Value, String> {
    match text.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(Value::Bool(true)),
        "0" | "no" | "false" | "off" => Ok(Value::Bool(false)),
        _ => Err("expected one of 1/yes/true/on or 0/no/false/off".into()),
    }
}

fn encode_int(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::Int(n) => Ok(n.to_string()),
        other => Err(wrong_variant(&Type::Int, other)),
    }
}

fn decode_int(text: &str) -> std::result::Result<Value, String> {
    text.trim()
        .parse::<i64>()
        .map(Value::Int)
        .map_err(|e| e.to_string())
}

// `Display` for f64 prints the shortest text that parses back to the same bits.
fn encode_float(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::Float(n) => Ok(n.to_string()),
        other => Err(wrong_variant(&Type::Float, other)),
    }
}

fn decode_float(text: &str) -> std::result::Result<Value, String> {
    text.trim()
        .parse::<f64>()
        .map(Value::Float)
        .map_err(|e| e.to_string())
}

fn encode_str(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::Str(s) => {
            check_text(s)?;
            Ok(s.clone())
        }
        other => Err(wrong_variant(&Type::Str, other)),
    }
}

#[allow(clippy::unnecessary_wraps)]
fn decode_str(text: &str) -> std::result::Result<Value, String> {
    Ok(Value::Str(text.to_string()))
}

fn encode_str_set(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::StrSet(items) => join_elements(items.iter()),
        other => Err(wrong_variant(&Type::StrSet, other)),
    }
}

#[allow(clippy::unnecessary_wraps)]
fn decode_str_set(text: &str) -> std::result::Result<Value, String> {
    Ok(Value::StrSet(
        split_elements(text).map(str::to_string).collect::<CfgSet<_>>(),
    ))
}

fn encode_str_list(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::StrList(items) => join_elements(items.iter()),
        other => Err(wrong_variant(&Type::StrList, other)),
    }
}

#[allow(clippy::unnecessary_wraps)]
fn decode_str_list(text: &str) -> std::result::Result<Value, String> {
    Ok(Value::StrList(
        split_elements(text).map(str::to_string).collect::<CfgVec<_>>(),
    ))
}

fn encode_int_list(value: &Value) -> std::result::Result<String, String> {
    match value {
        Value::IntList(items) => Ok(items
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",")),
        other => Err(wrong_variant(&Type::IntList, other)),
    }
}

fn decode_int_list(text: &str) -> std::result::Result<Value, String> {
    split_elements(text)
        .map(|item| {
            item.parse::<i64>()
                .map_err(|e| format!("element {item:?}: {e}"))
        })
        .collect::<std::result::Result<CfgVec<_>, _>>()
        .map(Value::IntList)
}

/// Splits sequence text on the separator, trimming elements and dropping
/// empty ones. Empty text yields no elements.
fn split_elements(text: &str) -> impl Iterator<Item = &str> {
    text.split(ELEMENT_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}

fn join_elements<'a>(
    items: impl Iterator<Item = &'a String>,
) -> std::result::Result<String, String> {
    let mut out = String::new();
    for (i, item) in items.enumerate() {
        if item.is_empty() {
            return Err("empty element".into());
        }
        if item.contains(ELEMENT_SEPARATOR) {
            return Err(format!("element {item:?} contains {ELEMENT_SEPARATOR:?}"));
        }
        check_text(item)?;
        if i > 0 {
            out.push(ELEMENT_SEPARATOR);
        }
        out.push_str(item);
    }
    Ok(out)
}

/// Rejects text the line-oriented format would alter on read.
fn check_text(text: &str) -> std::result::Result<(), String> {
    if text.contains(['\n', '\r']) {
        return Err(format!("{text:?} contains a line break"));
    }
    if text.trim() != text {
        return Err(format!("{text:?} has surrounding whitespace"));
    }
    Ok(())
}
