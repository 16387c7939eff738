//! Error types for substring index construction.

use thiserror::Error;

/// Errors that can occur while extending a substring index.
///
/// Both variants are contract violations of the layer feeding the index. The
/// index is left exactly as it was before the rejected call, but the string
/// being processed cannot be completed; callers are expected to `reset()`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// No room is left for the states a single extension may allocate.
    ///
    /// Capacity is derived from [`IndexConfig::max_string_len`](crate::IndexConfig::max_string_len),
    /// so this only fires when the input exceeds its declared limits.
    #[error("state capacity of {capacity} exhausted")]
    ResourceExhausted { capacity: usize },

    /// The symbol does not belong to the alphabet of the transition table.
    #[error("symbol {0} is outside the alphabet")]
    InvalidSymbol(String),
}

/// A specialized `Result` type for substring index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
