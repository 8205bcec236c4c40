//! Error types for building parser options.
//!
//! Parsing itself never fails: an unrecognized literal is a decline (`None`).
//! Errors only arise when a caller assembles options that no parser could
//! honor.

use thiserror::Error;

/// Error raised when parser options violate the parser contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// No `#` hex length was enabled.
    #[error("no hex literal length enabled (expected any of 3, 6 or 8 digits)")]
    NoHexLengths,

    /// The minimum hex length exceeds the maximum.
    #[error("invalid hex length bounds: minlen {minlen} > maxlen {maxlen}")]
    InvalidBounds {
        /// The minimum number of digits.
        minlen: usize,
        /// The maximum number of digits.
        maxlen: usize,
    },

    /// A CSS function prefix other than `rgb`, `rgba`, `hsl` or `hsla`.
    #[error("unknown color function prefix: {0}")]
    UnknownPrefix(String),

    /// An extended-palette mode name that is not recognized.
    #[error("unknown tailwind mode: {0} (expected normal, lsp or both)")]
    UnknownTailwindMode(String),
}

/// Result type alias for option construction.
pub type Result<T> = std::result::Result<T, OptionsError>;
