//! Display cells.
//!
//! A cell shows the character at its index and reflects whether it is
//! highlighted. Cells hold no state of their own: everything is read from
//! the shared [`OtpState`](crate::state::OtpState) at render time.

use unicode_width::UnicodeWidthChar;

use crate::caret::{Caret, CaretMode};
use crate::markup::Element;
use crate::state::SharedState;
use crate::style::{Styles, paint};

/// What a cell displays at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshot {
    /// The cell's index.
    pub index: usize,
    /// The value's character at the index, if any.
    pub character: Option<char>,
    /// Whether the cell is highlighted.
    pub highlighted: bool,
    /// Whether the input is disabled.
    pub disabled: bool,
}

/// One display cell.
#[derive(Debug, Clone)]
pub struct Cell {
    index: usize,
    state: SharedState,
    caret: Option<Caret>,
}

impl Cell {
    pub(crate) fn new(index: usize, state: SharedState, caret_glyph: Option<&str>) -> Self {
        let caret = caret_glyph.map(|glyph| Caret::new(index, glyph, state.clone()));
        Self {
            index,
            state,
            caret,
        }
    }

    /// The cell's index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The cell's caret, if it declares one.
    #[must_use]
    pub fn caret(&self) -> Option<&Caret> {
        self.caret.as_ref()
    }

    /// Character displayed by the cell.
    #[must_use]
    pub fn character(&self) -> Option<char> {
        self.state.read().char_at(self.index)
    }

    /// Whether the cell is highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.state.read().is_highlighted(self.index)
    }

    /// Reads everything the cell displays under one lock.
    #[must_use]
    pub fn snapshot(&self) -> CellSnapshot {
        let state = self.state.read();
        CellSnapshot {
            index: self.index,
            character: state.char_at(self.index),
            highlighted: state.is_highlighted(self.index),
            disabled: state.is_disabled(),
        }
    }

    /// Renders the cell for the terminal.
    #[must_use]
    pub fn view(&self, styles: &Styles, mode: CaretMode, blink_on: bool) -> String {
        let snap = self.snapshot();
        let base = if snap.disabled {
            &styles.disabled
        } else if snap.highlighted {
            &styles.highlighted
        } else {
            &styles.cell
        };

        let caret = self.caret.as_ref().and_then(|c| c.view(mode, blink_on));
        let (glyph, glyph_style) = match (snap.character, caret) {
            (Some(c), _) => (c.to_string(), base),
            (None, Some(caret)) => (caret.to_string(), &styles.caret),
            (None, None) => (styles.placeholder.to_string(), base),
        };

        let width: usize = glyph.chars().map(|c| c.width().unwrap_or(0)).sum();
        let padded = format!(
            "{glyph}{}",
            " ".repeat(styles.cell_width.saturating_sub(width))
        );

        let mut out = paint(base, &styles.open);
        out.push_str(&paint(glyph_style, &padded));
        out.push_str(&paint(base, &styles.close));
        out
    }

    /// Markup for the cell.
    #[must_use]
    pub fn element(&self) -> Element {
        let snap = self.snapshot();
        let mut el = Element::new("div")
            .attr("data-qds-otp-item", self.index.to_string())
            .flag("data-highlighted", snap.highlighted)
            .flag("data-disabled", snap.disabled);
        if let Some(c) = snap.character {
            el = el.text(c.to_string());
        }
        if let Some(caret) = &self.caret {
            el = el.child(caret.element());
        }
        el
    }
}
