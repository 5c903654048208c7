//! The demo's event loop and screen.

use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::queue;
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{Clear, ClearType};
use otp_input::style::visible_width;
use otp_input::{InputEvent, Otp, OtpConfig, Styles};
use tracing::{debug, info};

/// Blink interval of the caret.
const BLINK: Duration = Duration::from_millis(530);
/// Column where the cell row starts.
const LEFT: u16 = 2;
/// Row where the cell row starts.
const TOP: u16 = 2;
const MAX_NOTICES: usize = 5;

enum Notice {
    Changed(String),
    Completed,
}

/// Demo application state.
pub struct App {
    otp: Otp,
    notices: Receiver<Notice>,
    history: Vec<String>,
    color: bool,
}

impl App {
    /// Builds the input described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not produce a valid input.
    pub fn new(config: &OtpConfig, color: bool) -> anyhow::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let complete_tx = tx.clone();
        let styles = if color {
            config.styles()
        } else {
            Styles::plain().placeholder(config.placeholder).gap(config.gap)
        };

        let mut otp = config
            .builder()?
            .styles(styles)
            .on_change(move |value| {
                if tx.send(Notice::Changed(value.to_string())).is_err() {
                    debug!("notice receiver gone, dropping change");
                }
            })
            .on_complete(move || {
                if complete_tx.send(Notice::Completed).is_err() {
                    debug!("notice receiver gone, dropping completion");
                }
            })
            .build()?;
        otp.init();

        Ok(Self {
            otp,
            notices: rx,
            history: Vec::new(),
            color,
        })
    }

    /// The input being demonstrated.
    #[must_use]
    pub fn otp(&self) -> &Otp {
        &self.otp
    }

    /// Runs until Esc or Ctrl+C, redrawing after every event and blink.
    ///
    /// # Errors
    ///
    /// Returns terminal I/O errors.
    pub fn run<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.otp.update(InputEvent::Focus);
        self.drain_notices();
        self.draw(out)?;

        loop {
            if !event::poll(BLINK)? {
                self.otp.blink();
                self.draw(out)?;
                continue;
            }

            let ev = event::read()?;
            if self.handle(&ev) {
                info!(value = %self.otp.value(), "quitting");
                return Ok(());
            }
            self.drain_notices();
            self.draw(out)?;
        }
    }

    /// Handles one terminal event. Returns true to quit.
    fn handle(&mut self, ev: &Event) -> bool {
        match ev {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                match key.code {
                    KeyCode::Esc => return true,
                    KeyCode::Char('c') if ctrl => return true,
                    KeyCode::Char('d') if ctrl => {
                        let disabled = !self.otp.is_disabled();
                        debug!(disabled, "toggling disabled");
                        self.otp.set_disabled(disabled);
                        return false;
                    }
                    KeyCode::Tab => {
                        let next = if self.otp.is_focused() {
                            InputEvent::Blur
                        } else {
                            InputEvent::Focus
                        };
                        self.otp.update(next);
                        return false;
                    }
                    _ => {}
                }
            }
            Event::Mouse(mouse) => {
                if let Some(index) = self.cell_at(mouse) {
                    self.otp.update(InputEvent::Click(index));
                }
                return false;
            }
            _ => {}
        }

        if let Some(input) = InputEvent::from_crossterm(ev) {
            self.otp.update(input);
        }
        false
    }

    /// Maps a left click on the cell row to a cell index.
    fn cell_at(&self, mouse: &MouseEvent) -> Option<usize> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || mouse.row != TOP {
            return None;
        }
        let styles = self.otp.styles();
        let span = visible_width(&styles.open) + styles.cell_width + visible_width(&styles.close);
        let stride = span + styles.gap;
        let col = usize::from(mouse.column.checked_sub(LEFT)?);
        let index = col / stride;
        (col % stride < span && index < self.otp.item_count()).then_some(index)
    }

    fn drain_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            let line = match notice {
                Notice::Changed(value) => format!("changed: {value:?}"),
                Notice::Completed => format!("complete: {:?}", self.otp.value()),
            };
            self.history.push(line);
        }
        let excess = self.history.len().saturating_sub(MAX_NOTICES);
        self.history.drain(..excess);
    }

    fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;

        let title = "One-time code";
        if self.color {
            queue!(out, Print(title.bold()))?;
        } else {
            queue!(out, Print(title))?;
        }

        let mut row = TOP;
        for line in self.otp.view().lines() {
            queue!(out, MoveTo(LEFT, row), Print(line))?;
            row += 1;
        }

        row += 1;
        let status = format!(
            "value {:?}  {:?}{}",
            self.otp.value(),
            self.otp.phase(),
            if self.otp.is_disabled() { "  disabled" } else { "" }
        );
        queue!(out, MoveTo(0, row), Print(status))?;
        row += 1;
        let help = "type to fill  ←/→ move  shift+←/→ select  tab focus  ctrl+d disable  esc quit";
        if self.color {
            queue!(out, MoveTo(0, row), Print(help.dim()))?;
        } else {
            queue!(out, MoveTo(0, row), Print(help))?;
        }

        row += 2;
        for line in &self.history {
            queue!(out, MoveTo(0, row), Print(line))?;
            row += 1;
        }

        out.flush()
    }
}
