//! Error types for the MWS core.

/// Core error type raised when a value falls outside one of the closed sets
/// this crate defines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MwsError {
    /// The product identifier type is not one MWS accepts.
    #[error("invalid product id type: {0:?}")]
    UnknownIdType(String),

    /// The item condition is not one MWS accepts.
    #[error("invalid item condition: {0:?}")]
    UnknownItemCondition(String),

    /// No marketplace matches the given identifier or region code.
    #[error("unknown marketplace: {0:?}")]
    UnknownMarketplace(String),
}

/// Convenience result type for core operations.
pub type MwsResult<T> = Result<T, MwsError>;
