//! The hidden native text field.
//!
//! [`NativeInput`] models a single-line text field the way a platform text
//! control behaves: a value, a selection range with a direction, a
//! `maxlength`, focus and disabled flags, and the default actions keys
//! perform on it. The hidden input controller drives it the way a page
//! script drives a real `<input>`: it lets (or prevents) default actions and
//! then reads back and corrects the value and selection.
//!
//! Positions are character indices.

/// Direction of a selection, which decides the end that moves when the
/// selection is extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionDirection {
    /// Extending moves the end.
    Forward,
    /// Extending moves the start.
    Backward,
    /// No direction; extending behaves like [`Forward`](Self::Forward).
    #[default]
    None,
}

/// Caret motion for arrow and Home/End keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// One character left.
    Left,
    /// One character right.
    Right,
    /// Start of the value.
    Home,
    /// End of the value.
    End,
}

/// What a caller compares to decide whether a selection change occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    value: Vec<char>,
    start: usize,
    end: usize,
    focused: bool,
}

/// A single-line text field.
#[derive(Debug, Clone)]
pub struct NativeInput {
    value: Vec<char>,
    start: usize,
    end: usize,
    direction: SelectionDirection,
    max_length: usize,
    focused: bool,
    disabled: bool,
}

impl NativeInput {
    /// Creates a field holding `value`, caret at its end.
    #[must_use]
    pub fn new(value: &str, max_length: usize) -> Self {
        let value: Vec<char> = value.chars().collect();
        let len = value.len();
        Self {
            value,
            start: len,
            end: len,
            direction: SelectionDirection::None,
            max_length,
            focused: false,
            disabled: false,
        }
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Character at `index`, if any.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.value.get(index).copied()
    }

    /// Number of characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the value. A different value moves the caret to its end.
    pub fn set_value(&mut self, value: &str) {
        let chars: Vec<char> = value.chars().collect();
        if chars == self.value {
            return;
        }
        self.value = chars;
        self.start = self.value.len();
        self.end = self.value.len();
        self.direction = SelectionDirection::None;
    }

    /// Selection as `(start, end)`.
    #[must_use]
    pub fn selection(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Selection start.
    #[must_use]
    pub fn selection_start(&self) -> usize {
        self.start
    }

    /// Selection end.
    #[must_use]
    pub fn selection_end(&self) -> usize {
        self.end
    }

    /// Selection direction.
    #[must_use]
    pub fn direction(&self) -> SelectionDirection {
        self.direction
    }

    /// Whether the selection is a caret.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Sets the selection. Both ends are clamped to the value length, and a
    /// start past the end collapses onto the end.
    pub fn set_selection_range(&mut self, start: usize, end: usize, direction: SelectionDirection) {
        let len = self.value.len();
        let end = end.min(len);
        self.start = start.min(end);
        self.end = end;
        self.direction = direction;
    }

    /// The `maxlength` attribute.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether the field has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Gives the field focus; returns false if it is disabled or already
    /// focused.
    pub fn focus(&mut self) -> bool {
        if self.disabled || self.focused {
            return false;
        }
        self.focused = true;
        true
    }

    /// Removes focus; returns false if it was not focused.
    pub fn blur(&mut self) -> bool {
        std::mem::replace(&mut self.focused, false)
    }

    /// Whether the field is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Sets the disabled flag. A disabled field cannot hold focus.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.focused = false;
        }
    }

    /// Captures value, selection and focus for change detection.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            value: self.value.clone(),
            start: self.start,
            end: self.end,
            focused: self.focused,
        }
    }

    /// Default action for typing or pasting `text`: replaces the selection,
    /// keeping the value within `maxlength`. Returns true if an edit happened.
    pub fn insert_text(&mut self, text: &str) -> bool {
        let selected = self.end - self.start;
        let room = self
            .max_length
            .saturating_sub(self.value.len().saturating_sub(selected));
        let inserted: Vec<char> = text.chars().take(room).collect();
        if inserted.is_empty() {
            return false;
        }

        let caret = self.start + inserted.len();
        self.value.splice(self.start..self.end, inserted);
        self.start = caret;
        self.end = caret;
        self.direction = SelectionDirection::None;
        true
    }

    /// Default action for Backspace. Returns true if an edit happened.
    pub fn delete_backward(&mut self) -> bool {
        if !self.is_collapsed() {
            return self.delete_selection();
        }
        if self.start == 0 {
            return false;
        }
        self.value.remove(self.start - 1);
        self.start -= 1;
        self.end = self.start;
        true
    }

    /// Default action for Delete. Returns true if an edit happened.
    pub fn delete_forward(&mut self) -> bool {
        if !self.is_collapsed() {
            return self.delete_selection();
        }
        if self.start >= self.value.len() {
            return false;
        }
        self.value.remove(self.start);
        true
    }

    fn delete_selection(&mut self) -> bool {
        self.value.drain(self.start..self.end);
        self.end = self.start;
        self.direction = SelectionDirection::None;
        true
    }

    /// Default action for select-all.
    pub fn select_all(&mut self) {
        self.set_selection_range(0, self.value.len(), SelectionDirection::Forward);
    }

    /// Default action for caret keys. With `extend` the end given by the
    /// selection direction moves and the other stays anchored; without it a
    /// selection collapses toward the motion before the caret moves.
    pub fn move_caret(&mut self, motion: Motion, extend: bool) {
        let len = self.value.len();

        if extend {
            let (anchor, focus) = match self.direction {
                SelectionDirection::Backward => (self.end, self.start),
                _ => (self.start, self.end),
            };
            let focus = match motion {
                Motion::Left => focus.saturating_sub(1),
                Motion::Right => (focus + 1).min(len),
                Motion::Home => 0,
                Motion::End => len,
            };
            let direction = if focus < anchor {
                SelectionDirection::Backward
            } else if focus > anchor {
                SelectionDirection::Forward
            } else {
                SelectionDirection::None
            };
            self.start = anchor.min(focus);
            self.end = anchor.max(focus);
            self.direction = direction;
            return;
        }

        let caret = match motion {
            Motion::Left if !self.is_collapsed() => self.start,
            Motion::Right if !self.is_collapsed() => self.end,
            Motion::Left => self.start.saturating_sub(1),
            Motion::Right => (self.end + 1).min(len),
            Motion::Home => 0,
            Motion::End => len,
        };
        self.start = caret;
        self.end = caret;
        self.direction = SelectionDirection::None;
    }
}
