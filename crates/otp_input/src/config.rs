//! File-backed configuration for the standard OTP layout.
//!
//! [`OtpConfig`] covers the common case of one hidden input and a single
//! row of cells. It loads from TOML or JSON and produces an
//! [`OtpBuilder`] that callers can refine further (callbacks, a bound
//! value) before building.
//!
//! ```toml
//! length = 6
//! pattern = "^[A-Z0-9]*$"
//! caret_mode = "static"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::caret::CaretMode;
use crate::error::{Error, Result};
use crate::pattern::{DEFAULT_PATTERN, Pattern};
use crate::root::{Otp, OtpBuilder};
use crate::style::Styles;
use crate::tree::Node;

/// Settings for an OTP input with the standard layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OtpConfig {
    /// Number of cells.
    pub length: usize,
    /// Initial value.
    pub value: String,
    /// Validation pattern for candidate values.
    pub pattern: String,
    /// Start disabled.
    pub disabled: bool,
    /// Mark the hidden input for password-manager badge offset.
    pub shift_password_managers: bool,
    /// Caret glyph.
    pub caret: String,
    /// Caret drawing mode.
    pub caret_mode: CaretMode,
    /// Shown in empty cells.
    pub placeholder: char,
    /// Columns between cells.
    pub gap: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            length: 4,
            value: String::new(),
            pattern: DEFAULT_PATTERN.to_string(),
            disabled: false,
            shift_password_managers: true,
            caret: "|".to_string(),
            caret_mode: CaretMode::Blink,
            placeholder: ' ',
            gap: 1,
        }
    }
}

impl OtpConfig {
    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] on malformed input or unknown keys.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed input or unknown keys.
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads a config file; `.json` files are parsed as JSON, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or the parse error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading otp config");

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// Checks the settings for consistency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero length or an empty caret,
    /// and [`Error::InvalidPattern`] if the pattern does not compile.
    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            return Err(Error::InvalidConfig("length must be at least 1".into()));
        }
        if self.caret.is_empty() {
            return Err(Error::InvalidConfig("caret glyph must not be empty".into()));
        }
        Pattern::new(&self.pattern)?;
        Ok(())
    }

    /// The styles these settings imply.
    #[must_use]
    pub fn styles(&self) -> Styles {
        Styles::default().placeholder(self.placeholder).gap(self.gap)
    }

    /// A builder for the standard layout with these settings.
    ///
    /// # Errors
    ///
    /// Returns the [`validate`](Self::validate) error.
    pub fn builder(&self) -> Result<OtpBuilder> {
        self.validate()?;
        let row = Node::row((0..self.length).map(|_| Node::item_with_caret(self.caret.as_str())));
        Ok(Otp::builder()
            .child(Node::hidden_input_with_pattern(self.pattern.as_str()))
            .child(row)
            .value(self.value.as_str())
            .disabled(self.disabled)
            .shift_password_managers(self.shift_password_managers)
            .caret_mode(self.caret_mode)
            .styles(self.styles()))
    }
}
