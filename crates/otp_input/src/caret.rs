//! Caret indicator shown inside the empty cell at the current index.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::markup::Element;
use crate::state::SharedState;

/// How the caret is drawn by [`Otp::view`](crate::Otp::view).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaretMode {
    /// Caret alternates with the placeholder on each [`Otp::blink`](crate::Otp::blink).
    #[default]
    Blink,
    /// Caret is always drawn while visible.
    Static,
    /// Caret is never drawn; markup still carries it.
    Hide,
}

impl fmt::Display for CaretMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blink => write!(f, "blink"),
            Self::Static => write!(f, "static"),
            Self::Hide => write!(f, "hide"),
        }
    }
}

/// The caret of one cell.
#[derive(Debug, Clone)]
pub struct Caret {
    index: usize,
    glyph: String,
    state: SharedState,
}

impl Caret {
    pub(crate) fn new(index: usize, glyph: impl Into<String>, state: SharedState) -> Self {
        Self {
            index,
            glyph: glyph.into(),
            state,
        }
    }

    /// Index of the owning cell.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The glyph drawn while visible.
    #[must_use]
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Whether the caret is visible: its cell is current, empty and focused.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.read().shows_caret(self.index)
    }

    /// The glyph to draw this frame, if any.
    #[must_use]
    pub fn view(&self, mode: CaretMode, blink_on: bool) -> Option<&str> {
        if !self.is_visible() {
            return None;
        }
        match mode {
            CaretMode::Static => Some(&self.glyph),
            CaretMode::Blink if blink_on => Some(&self.glyph),
            CaretMode::Blink | CaretMode::Hide => None,
        }
    }

    /// Markup for the caret; the glyph is only present while visible.
    #[must_use]
    pub fn element(&self) -> Element {
        let el = Element::new("span").attr("data-qds-otp-caret", self.index.to_string());
        if self.is_visible() {
            el.text(self.glyph.as_str())
        } else {
            el
        }
    }
}
