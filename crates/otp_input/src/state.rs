//! Shared state for one OTP input.
//!
//! Every part of the component (the hidden input controller, each display
//! cell and each caret) holds a clone of the same [`SharedState`] handle.
//! Only the controller and the root write to it, and only from event
//! handling; rendering reads it.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::signal::Signal;

/// Where the selection currently stands, derived from [`OtpState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    /// Not focused, or focused without a projected selection.
    Unfocused,
    /// A single cell is active.
    Single(usize),
    /// A multi-cell range `[start, end)` is selected.
    Range(usize, usize),
}

/// The reactive fields shared by all parts of an OTP input.
#[derive(Debug)]
pub struct OtpState {
    value: Signal<String>,
    item_count: usize,
    current_index: Option<usize>,
    focused: bool,
    disabled: bool,
    selection_start: Option<usize>,
    selection_end: Option<usize>,
}

impl OtpState {
    pub(crate) fn new(value: Signal<String>, item_count: usize, disabled: bool) -> Self {
        Self {
            value,
            item_count,
            current_index: None,
            focused: false,
            disabled,
            selection_start: None,
            selection_end: None,
        }
    }

    /// The committed value storage.
    #[must_use]
    pub fn value(&self) -> &Signal<String> {
        &self.value
    }

    /// Number of display cells.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// The logically active cell, `None` while unfocused.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Whether the hidden input has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the component is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Selection range as `(start, end)`, `None` when unfocused.
    #[must_use]
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection_start.zip(self.selection_end)
    }

    /// Character shown in cell `index`, if that position is filled.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.value.with(|v| v.chars().nth(index))
    }

    /// Number of characters in the committed value.
    #[must_use]
    pub fn value_len(&self) -> usize {
        self.value.with(|v| v.chars().count())
    }

    /// Classifies the selection.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        match self.selection() {
            Some((start, end)) if self.focused => {
                if end > start + 1 {
                    SelectionPhase::Range(start, end)
                } else {
                    SelectionPhase::Single(start)
                }
            }
            _ => SelectionPhase::Unfocused,
        }
    }

    /// Whether cell `index` should render as highlighted.
    ///
    /// A focused cell is highlighted when it lies inside a non-empty
    /// selection range, or when it is the current index and still empty.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        if !self.focused {
            return false;
        }

        if let Some((start, end)) = self.selection()
            && start != end
        {
            return index >= start && index < end;
        }

        self.current_index == Some(index) && self.char_at(index).is_none()
    }

    /// Whether the caret belongs in cell `index`.
    #[must_use]
    pub fn shows_caret(&self, index: usize) -> bool {
        self.current_index == Some(index) && self.focused && self.char_at(index).is_none()
    }

    pub(crate) fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Projects a selection; `end` is clamped to the item count and the
    /// current index follows `start`.
    pub(crate) fn select(&mut self, start: usize, end: usize) {
        let end = end.min(self.item_count);
        let start = start.min(end);
        self.selection_start = Some(start);
        self.selection_end = Some(end);
        self.current_index = Some(start);
    }

    /// Drops the selection and marks the state unfocused.
    pub(crate) fn clear_selection(&mut self) {
        self.selection_start = None;
        self.selection_end = None;
        self.current_index = None;
        self.focused = false;
    }
}

/// Cloneable handle to an [`OtpState`].
#[derive(Debug, Clone)]
pub struct SharedState(Arc<RwLock<OtpState>>);

impl SharedState {
    pub(crate) fn new(state: OtpState) -> Self {
        Self(Arc::new(RwLock::new(state)))
    }

    /// Locks the state for reading.
    pub fn read(&self) -> RwLockReadGuard<'_, OtpState> {
        self.0.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, OtpState> {
        self.0.write()
    }
}
