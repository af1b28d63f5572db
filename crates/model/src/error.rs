//! Result and Error types for tritium-model

// crate modules
use crate::solver::SolverError;

// tritium modules
use tritium_units::Dimension;

/// Type alias for Result<T, model::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `tritium-model` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("quantity operation failed")]
    Units(#[from] tritium_units::Error),

    #[error("series operation failed")]
    Utils(#[from] tritium_utils::Error),

    #[error("{parameter} has dimension [{found}], expected [{expected}]")]
    UnexpectedDimension {
        parameter: &'static str,
        expected: Dimension,
        found: Dimension,
    },

    #[error("invalid {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("concentration did not converge at t = {time} s")]
    NonConvergence {
        time: f64,
        #[source]
        cause: SolverError,
    },
}
