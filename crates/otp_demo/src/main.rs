#![forbid(unsafe_code)]

//! # otp-demo
//!
//! Interactive terminal demo of the `otp_input` component.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p otp_demo -- --length 6
//! ```

mod app;
mod cli;

use std::fs::File;
use std::io::{self, Write};
use std::sync::Mutex;

use anyhow::Context;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logging(&cli)?;

    let config = cli.resolve_config()?;
    let mut app = App::new(&config, !cli.no_color)?;

    if cli.markup {
        println!("{}", app.otp().markup());
        return Ok(());
    }

    tracing::info!(length = config.length, pattern = %config.pattern, "starting otp demo");

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(
        stdout,
        EnterAlternateScreen,
        Hide,
        EnableMouseCapture,
        EnableFocusChange,
        EnableBracketedPaste
    )?;

    let result = app.run(&mut stdout);

    let _ = execute!(
        stdout,
        DisableBracketedPaste,
        DisableFocusChange,
        DisableMouseCapture,
        Show,
        LeaveAlternateScreen
    );
    let _ = disable_raw_mode();

    result?;

    let otp = app.otp();
    if otp.is_complete() {
        println!("{}", otp.value());
    } else {
        writeln!(io::stderr(), "incomplete code: {:?}", otp.value())?;
    }
    Ok(())
}

/// Sends logs to `--log-file`; without one, logging stays off so the
/// terminal UI is not disturbed. `RUST_LOG` overrides the `-v` level.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("otp_input={level},otp_demo={level}")));
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
