//! Error types for building and configuring an OTP input.
//!
//! Only construction and configuration can fail. Once built, the component
//! never returns errors: input that does not match the validation pattern is
//! reverted locally and is not reported to the caller.

use std::io;
use std::path::PathBuf;

/// Errors produced while building or configuring an [`Otp`](crate::Otp).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The validation pattern is not a valid regular expression.
    #[error("invalid validation pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// The underlying regex compile error.
        #[source]
        source: regex::Error,
    },

    /// The root declares no display cells, so the item count would be zero.
    #[error("an otp root must declare at least one item")]
    NoItems,

    /// The root declares no hidden input to receive keyboard events.
    #[error("an otp root must declare a hidden input")]
    MissingHiddenInput,

    /// The root declares more than one hidden input.
    #[error("an otp root must declare exactly one hidden input, found {0}")]
    DuplicateHiddenInput(usize),

    /// A configuration value is semantically invalid.
    #[error("invalid otp configuration: {0}")]
    InvalidConfig(String),

    /// A TOML configuration document could not be parsed.
    #[error("failed to parse toml config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON configuration document could not be parsed.
    #[error("failed to parse json config: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// A specialized [`Result`](std::result::Result) for otp operations.
pub type Result<T> = std::result::Result<T, Error>;
