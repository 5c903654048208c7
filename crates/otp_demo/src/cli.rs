//! Command-line interface for `otp-demo`.
//!
//! ```bash
//! # Six-digit code
//! otp-demo --length 6
//!
//! # Alphanumeric code from a config file, with debug logs
//! otp-demo --config otp.toml --log-file otp.log -v
//!
//! # Print the markup for the configured input and exit
//! otp-demo --length 4 --value 12 --markup
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use otp_input::{CaretMode, OtpConfig};

/// Interactive segmented one-time-passcode input.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "otp-demo",
    author,
    version,
    about = "Interactive segmented one-time-passcode input"
)]
pub struct Cli {
    /// Number of cells
    #[arg(long, short = 'n', env = "OTP_LENGTH")]
    pub length: Option<usize>,

    /// Initial value
    #[arg(long, env = "OTP_VALUE")]
    pub value: Option<String>,

    /// Validation pattern for the whole value
    #[arg(long, short = 'p', env = "OTP_PATTERN")]
    pub pattern: Option<String>,

    /// Start disabled (Ctrl+D toggles)
    #[arg(long)]
    pub disabled: bool,

    /// Do not mark the hidden input for password-manager offset
    #[arg(long)]
    pub no_shift: bool,

    /// Caret drawing mode
    #[arg(long, value_enum)]
    pub caret_mode: Option<CaretModeArg>,

    /// Configuration file (TOML, or JSON by extension)
    #[arg(long, short = 'c', env = "OTP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Force color output off
    ///
    /// Respects `NO_COLOR` environment variable
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Write logs to this file; the terminal is owned by the UI
    #[arg(long, env = "OTP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the markup of the configured input and exit
    #[arg(long)]
    pub markup: bool,
}

/// Caret modes accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CaretModeArg {
    /// Blinking caret
    Blink,
    /// Steady caret
    Static,
    /// No caret
    Hide,
}

impl From<CaretModeArg> for CaretMode {
    fn from(arg: CaretModeArg) -> Self {
        match arg {
            CaretModeArg::Blink => Self::Blink,
            CaretModeArg::Static => Self::Static,
            CaretModeArg::Hide => Self::Hide,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Loads the config file, if any, and applies flag overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be loaded or the result is
    /// invalid.
    pub fn resolve_config(&self) -> anyhow::Result<OtpConfig> {
        let mut config = match &self.config {
            Some(path) => OtpConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => OtpConfig::default(),
        };

        if let Some(length) = self.length {
            config.length = length;
        }
        if let Some(value) = &self.value {
            config.value.clone_from(value);
        }
        if let Some(pattern) = &self.pattern {
            config.pattern.clone_from(pattern);
        }
        if let Some(mode) = self.caret_mode {
            config.caret_mode = mode.into();
        }
        config.disabled |= self.disabled;
        if self.no_shift {
            config.shift_password_managers = false;
        }

        config.validate().context("invalid otp configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["otp-demo"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.markup);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config, OtpConfig::default());
    }

    #[test]
    fn test_flags_override() {
        let cli = Cli::try_parse_from([
            "otp-demo",
            "--length",
            "6",
            "--value",
            "12",
            "--no-shift",
            "--caret-mode",
            "static",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.length, 6);
        assert_eq!(config.value, "12");
        assert!(!config.shift_password_managers);
        assert_eq!(config.caret_mode, CaretMode::Static);
    }

    #[test]
    fn test_invalid_length_rejected() {
        let cli = Cli::try_parse_from(["otp-demo", "--length", "0"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn test_unknown_caret_mode_rejected() {
        assert!(Cli::try_parse_from(["otp-demo", "--caret-mode", "wobble"]).is_err());
    }
}
