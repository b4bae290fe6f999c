//! Unit conversion error types

use thiserror::Error;

/// Result type for unit conversions
pub type UnitResult<T> = std::result::Result<T, UnitError>;

/// Errors that can occur during a unit conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// The symbol is not a canonical unit of any supported family
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units are known but belong to different families
    #[error("Cannot convert {from} to {to}")]
    Incompatible { from: String, to: String },
}
