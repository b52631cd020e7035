//! Dotted-path resolution and name validation.

use typedini_foundation::{Error, Result};

/// Splits `"section.key"` on the first delimiter.
///
/// # Errors
///
/// Returns an invalid path error if there is no delimiter or either side is
/// empty.
pub fn split_path(path: &str, delimiter: char) -> Result<(&str, &str)> {
    match path.split_once(delimiter) {
        Some((section, key)) if !section.is_empty() && !key.is_empty() => Ok((section, key)),
        _ => Err(Error::invalid_path(path)),
    }
}

/// Joins a section and option name into a dotted path.
#[must_use]
pub fn join_path(section: &str, key: &str, delimiter: char) -> String {
    format!("{section}{delimiter}{key}")
}

/// Checks that a section name survives the file format and dotted paths.
///
/// # Errors
///
/// Returns an invalid path error naming the offending section.
pub fn validate_section_name(name: &str, delimiter: char) -> Result<()> {
    if !is_writable_name(name) || name.contains(delimiter) {
        return Err(Error::invalid_path(name));
    }
    Ok(())
}

/// Checks that an option name survives the file format.
///
/// # Errors
///
/// Returns an invalid path error naming the offending option.
pub fn validate_option_name(name: &str) -> Result<()> {
    if !is_writable_name(name) {
        return Err(Error::invalid_path(name));
    }
    Ok(())
}

fn is_writable_name(name: &str) -> bool {
    !name.is_empty()
        && name.trim() == name
        && !name.starts_with(['#', ';'])
        && !name.contains(['[', ']', '=', ':', '\n', '\r'])
}
