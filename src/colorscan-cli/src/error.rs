//! Error types for the command-line front end.

use std::path::PathBuf;

use colorscan_core::OptionsError;
use thiserror::Error;

/// Errors raised while loading configuration or preparing a scan.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for this schema.
    #[error("Failed to parse {}: {source}", path.display())]
    Toml {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },

    /// A `[palette]` entry is not `#rgb` or `#rrggbb`.
    #[error("Invalid palette color for {name}: {value:?} (expected #rrggbb)")]
    InvalidPaletteColor {
        /// Palette name.
        name: String,
        /// Offending value.
        value: String,
    },

    /// `tailwind` holds an unknown mode name.
    #[error("Invalid tailwind mode: {0:?} (expected normal, lsp, both or a boolean)")]
    InvalidTailwindMode(String),

    /// The matcher switches describe no usable parser set.
    #[error(transparent)]
    Options(#[from] OptionsError),
}

/// Result type alias for configuration handling.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
