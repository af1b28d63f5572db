//! Result and Error types for tritium-lsc

/// Type alias for Result<T, lsc::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `tritium-lsc` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to (de)serialise")]
    FailedSerde(#[from] serde_json::Error),

    #[error("quantity operation failed")]
    Units(#[from] tritium_units::Error),

    #[error("no background activity for sample {sample}")]
    MissingBackground { sample: u32 },

    #[error("sample {sample} still carries a background, subtract it before accumulating")]
    BackgroundNotSubtracted { sample: u32 },
}
