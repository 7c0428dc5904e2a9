//! Structured errors for the library's string boundaries
//!
//! Converter execution itself never fails: missing or partial data degrades
//! to the original value. Errors only surface where strings are resolved
//! into known names (registry fields, unit conversion kinds).

use thiserror::Error;

/// Errors raised when resolving names at the registry boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LorebookError {
    /// No converter is registered under the given field name
    #[error("no converter registered for field '{0}'")]
    UnknownConverter(String),

    /// A kind string did not name a known unit conversion
    #[error("unit conversion kind '{0}' not implemented")]
    UnknownUnitKind(String),
}
