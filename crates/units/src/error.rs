//! Result and Error types for the units module

use crate::dimension::Dimension;

/// Type alias for `Result<T, units::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `tritium-units` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// Arithmetic or conversion between incompatible dimensions
    #[error("dimension mismatch in {operation} (expected [{expected}], found [{found}])")]
    DimensionMismatch {
        operation: &'static str,
        expected: Dimension,
        found: Dimension,
    },

    /// Unit name not found in the table of known units
    #[error("unknown unit \"{0}\"")]
    UnknownUnit(String),

    /// Malformed quantity or unit expression
    #[error("failed to parse \"{0}\"")]
    ParseError(String),
}
