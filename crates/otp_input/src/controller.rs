//! The hidden input controller.
//!
//! [`HiddenInput`] owns the one real text field behind the row of cells. It
//! receives every keyboard, focus and pointer event, lets the field apply
//! its default action, and translates the result into the shared selection
//! state the cells render from.
//!
//! Each key press runs through the same pipeline:
//!
//! 1. the pre-default hook, which may cancel the field's default action;
//! 2. the default action (insert, delete, caret motion);
//! 3. the input handler, if the default action edited the value;
//! 4. the post-default hook, which sees the field's final state;
//! 5. the selection-change handler, if value, selection or focus changed.
//!
//! The selection-change handler always reads the field's current selection,
//! so it stays correct whatever the earlier steps did to it.

use tracing::{debug, trace, warn};

use crate::event::InputEvent;
use crate::key::{Key, KeyEvent};
use crate::native::{Motion, NativeInput, SelectionDirection};
use crate::pattern::Pattern;
use crate::state::SharedState;

/// The selection last projected onto the shared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct PreviousSelection {
    inserting: bool,
    start: Option<usize>,
    end: Option<usize>,
}

/// Controller for the hidden text field.
#[derive(Debug)]
pub struct HiddenInput {
    state: SharedState,
    native: NativeInput,
    pattern: Pattern,
    shift_password_managers: bool,
    shift_held: bool,
    first_keystroke: bool,
    previous_value: String,
    previous_selection: PreviousSelection,
    committed_version: u64,
}

impl HiddenInput {
    pub(crate) fn new(state: SharedState, pattern: Pattern, shift_password_managers: bool) -> Self {
        let (value, item_count, disabled, version) = {
            let s = state.read();
            (
                s.value().get(),
                s.item_count(),
                s.is_disabled(),
                s.value().version(),
            )
        };

        let mut native = NativeInput::new(&value, item_count);
        native.set_disabled(disabled);

        Self {
            state,
            native,
            pattern,
            shift_password_managers,
            shift_held: false,
            first_keystroke: true,
            previous_value: value,
            previous_selection: PreviousSelection::default(),
            committed_version: version,
        }
    }

    /// The underlying text field.
    #[must_use]
    pub fn native(&self) -> &NativeInput {
        &self.native
    }

    /// The validation pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Whether password manager popups should be shifted past the cells.
    #[must_use]
    pub fn shift_password_managers(&self) -> bool {
        self.shift_password_managers
    }

    /// Whether Shift is currently held.
    #[must_use]
    pub fn is_shift_held(&self) -> bool {
        self.shift_held
    }

    /// Whether the last projected selection was an insertion point past the
    /// end of the value.
    #[must_use]
    pub fn is_inserting(&self) -> bool {
        self.previous_selection.inserting
    }

    fn item_count(&self) -> usize {
        self.state.read().item_count()
    }

    /// Runs one event through the pipeline.
    pub fn handle(&mut self, event: &InputEvent) {
        if self.native.is_disabled() {
            trace!(?event, "otp input disabled, ignoring event");
            return;
        }

        let before = self.native.snapshot();

        match event {
            InputEvent::Focus => {
                if !self.native.focus() {
                    return;
                }
                self.on_focus();
            }
            InputEvent::Blur => {
                if !self.native.blur() {
                    return;
                }
                self.on_blur();
            }
            InputEvent::KeyDown(key) => {
                if !self.native.is_focused() {
                    return;
                }
                self.key_down(key);
            }
            InputEvent::KeyUp(key) => {
                if !self.native.is_focused() {
                    return;
                }
                self.on_key_up(key);
            }
            InputEvent::Paste(text) => {
                if !self.native.is_focused() {
                    return;
                }
                if self.native.insert_text(text) {
                    self.on_input();
                }
            }
            InputEvent::Click(index) => {
                if !self.native.is_focused() {
                    if !self.native.focus() {
                        return;
                    }
                    self.on_focus();
                }
                let pos = (*index).min(self.native.len());
                self.native
                    .set_selection_range(pos, pos, SelectionDirection::None);
                // A pointer placement is not a keyboard step backward.
                self.previous_selection = PreviousSelection::default();
            }
        }

        if self.native.snapshot() != before {
            self.on_selection_change();
        }
    }

    fn key_down(&mut self, key: &KeyEvent) {
        // Terminals rarely report bare modifier presses, so the modifier
        // state on ordinary keys is authoritative for the shift flag.
        if !key.is_shift_key() && key.shift != self.shift_held {
            trace!(held = key.shift, "shift state taken from key modifiers");
            self.shift_held = key.shift;
        }

        let prevented = self.before_default(key);
        if !prevented && self.apply_default(key) {
            self.on_input();
        }
        self.after_default(key);
    }

    /// Position of a collapsed caret sitting just past the last filled cell,
    /// when `key` is ArrowLeft. From there the field's own caret motion would
    /// skip the filled cell, so both hooks take over the move.
    fn skip_empty_from(&self, key: &KeyEvent) -> Option<usize> {
        if key.key != Key::Left || !self.native.is_collapsed() {
            return None;
        }
        let pos = self.native.selection_start();
        if pos == 0 {
            return None;
        }
        (self.native.char_at(pos).is_none() && self.native.char_at(pos - 1).is_some())
            .then_some(pos)
    }

    /// Pre-default hook. Returns true to cancel the default action.
    fn before_default(&self, key: &KeyEvent) -> bool {
        let prevent = self.skip_empty_from(key).is_some();
        if prevent {
            trace!("cancelling native caret move over empty cells");
        }
        prevent
    }

    /// Applies the field's default action for `key`. Returns true if the
    /// value was edited.
    fn apply_default(&mut self, key: &KeyEvent) -> bool {
        match key.key {
            Key::Char('a' | 'A') if key.ctrl => {
                self.native.select_all();
                false
            }
            Key::Char(c) if !key.ctrl && !key.alt => {
                let mut buf = [0u8; 4];
                self.native.insert_text(c.encode_utf8(&mut buf))
            }
            Key::Backspace => self.native.delete_backward(),
            Key::Delete => self.native.delete_forward(),
            Key::Left => {
                self.native.move_caret(Motion::Left, key.shift);
                false
            }
            Key::Right => {
                self.native.move_caret(Motion::Right, key.shift);
                false
            }
            Key::Home => {
                self.native.move_caret(Motion::Home, key.shift);
                false
            }
            Key::End => {
                self.native.move_caret(Motion::End, key.shift);
                false
            }
            _ => false,
        }
    }

    /// Post-default hook.
    fn after_default(&mut self, key: &KeyEvent) {
        if key.is_shift_key() {
            trace!("shift pressed");
            self.shift_held = true;
            return;
        }

        if let Some(pos) = self.skip_empty_from(key) {
            let mut new_pos = pos - 1;
            while new_pos > 0 && self.native.char_at(new_pos - 1).is_none() {
                new_pos -= 1;
            }
            trace!(from = pos, to = new_pos, "walked back over empty cells");
            self.select_range(new_pos, new_pos + 1, SelectionDirection::None, false);
        }
    }

    fn on_key_up(&mut self, key: &KeyEvent) {
        if key.is_shift_key() {
            trace!("shift released");
            self.shift_held = false;
        }
    }

    fn on_focus(&mut self) {
        self.first_keystroke = true;
        self.state.write().set_focused(true);

        let pos = self.state.read().value_len();
        self.native
            .set_selection_range(pos, pos, SelectionDirection::None);
        self.sync_selection(Some(pos), Some(pos), false);
    }

    fn on_blur(&mut self) {
        self.shift_held = false;
        self.state.write().set_focused(false);
        self.sync_selection(None, None, false);
    }

    fn on_input(&mut self) {
        let item_count = self.item_count();
        let candidate: String = self.native.value().chars().take(item_count).collect();

        if !self.pattern.is_match(&candidate) {
            debug!(%candidate, pattern = %self.pattern, "rejected input");
            let committed = self.state.read().value().get();
            self.native.set_value(&committed);
            // A rejected first keystroke must not move the highlight.
            if self.first_keystroke {
                self.state.write().select(0, 1);
                self.native.set_selection_range(0, 1, SelectionDirection::None);
            }
            return;
        }

        self.first_keystroke = false;

        let new_len = candidate.chars().count();
        let is_backspace = self.previous_value.chars().count() > new_len;
        let position = self.native.selection_start().min(item_count);

        self.native.set_value(&candidate);
        if self.state.read().value().set(candidate.clone()) {
            debug!(value = %candidate, "committed otp value");
        }
        self.committed_version = self.state.read().value().version();
        self.previous_value = candidate;

        let start = if is_backspace && position > 0 && position != new_len {
            position - 1
        } else {
            position
        };
        self.state.write().select(start, start + 1);
        self.native
            .set_selection_range(start, start + 1, SelectionDirection::None);
        self.previous_selection = PreviousSelection {
            inserting: false,
            start: Some(start),
            end: Some(start + 1),
        };
    }

    fn on_selection_change(&mut self) {
        if !self.native.is_focused() {
            self.sync_selection(None, None, false);
            return;
        }

        let max = self.item_count();
        let len = self.native.len();
        let (start, end) = self.native.selection();

        if len < max && start == len {
            trace!(start, "selection: insertion point");
            self.select_range(start, end + 1, SelectionDirection::None, true);
            return;
        }

        if self.shift_held && start != end {
            trace!(start, end, "selection: shift range");
            self.select_range(start, end, self.native.direction(), false);
            return;
        }

        if start != end {
            return;
        }

        let previous = self.previous_selection;
        if start == 0 {
            trace!("selection: first cell");
            self.select_range(0, 1, SelectionDirection::Forward, false);
        } else if start == max {
            trace!("selection: last cell");
            self.select_range(max - 1, max, SelectionDirection::Backward, false);
        } else if previous.end.is_some_and(|prev_end| start < prev_end) {
            trace!(start, "selection: step backward");
            self.select_range(start - 1, start, SelectionDirection::None, false);
        } else if let Some(prev_start) = previous.start
            && self.shift_held
        {
            trace!(prev_start, start, "selection: shift extend");
            self.select_range(prev_start, start + 1, SelectionDirection::None, false);
        } else {
            trace!(start, "selection: single cell");
            self.select_range(start, start + 1, SelectionDirection::None, false);
        }
    }

    /// Sets the field's selection and projects it onto the shared state.
    fn select_range(
        &mut self,
        start: usize,
        end: usize,
        direction: SelectionDirection,
        inserting: bool,
    ) {
        self.native.set_selection_range(start, end, direction);
        self.sync_selection(Some(start), Some(end), inserting);
    }

    fn sync_selection(&mut self, start: Option<usize>, end: Option<usize>, inserting: bool) {
        self.previous_selection = PreviousSelection {
            inserting,
            start,
            end,
        };

        let mut state = self.state.write();
        match start.zip(end) {
            Some((start, end)) => state.select(start, end),
            None => state.clear_selection(),
        }
    }

    /// Adopts a value written to the bound signal from outside the
    /// controller. Returns true if there was one.
    pub(crate) fn sync_external(&mut self) -> bool {
        let (mut version, value, item_count) = {
            let s = self.state.read();
            (s.value().version(), s.value().get(), s.item_count())
        };
        if version == self.committed_version {
            return false;
        }

        let mut adopted: String = value.chars().take(item_count).collect();
        if adopted != value {
            warn!(item_count, "bound otp value longer than item count, truncating");
            let s = self.state.read();
            s.value().set(adopted.clone());
            version = s.value().version();
            adopted = s.value().get();
        }

        if !self.pattern.is_match(&adopted) {
            warn!(value = %adopted, pattern = %self.pattern, "bound otp value does not match pattern");
        }
        debug!(value = %adopted, "adopting externally written otp value");
        self.committed_version = version;
        self.previous_value.clone_from(&adopted);

        let before = self.native.snapshot();
        self.native.set_value(&adopted);
        if self.native.is_focused() && self.native.snapshot() != before {
            self.on_selection_change();
        }
        true
    }

    /// Mirrors the disabled flag onto the field. A focused field loses focus.
    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.state.write().set_disabled(disabled);
        let was_focused = self.native.is_focused();
        self.native.set_disabled(disabled);
        if disabled && was_focused {
            self.on_blur();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Signal;
    use crate::state::{OtpState, SelectionPhase};

    fn controller(value: &str, count: usize) -> (HiddenInput, SharedState) {
        let state = SharedState::new(OtpState::new(
            Signal::new(value.to_string()),
            count,
            false,
        ));
        let input = HiddenInput::new(state.clone(), Pattern::default(), true);
        (input, state)
    }

    fn key(input: &mut HiddenInput, key: KeyEvent) {
        input.handle(&InputEvent::KeyDown(key));
    }

    fn typed(input: &mut HiddenInput, text: &str) {
        for c in text.chars() {
            key(input, KeyEvent::from_char(c));
        }
    }

    fn selection(state: &SharedState) -> Option<(usize, usize)> {
        state.read().selection()
    }

    #[test]
    fn test_focus_empty_value_selects_first_cell() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        {
            let s = state.read();
            assert!(s.is_focused());
            assert_eq!(s.current_index(), Some(0));
            assert_eq!(s.selection(), Some((0, 1)));
            assert_eq!(s.phase(), SelectionPhase::Single(0));
            assert!(s.is_highlighted(0));
        }
        assert!(input.is_inserting());
        assert_eq!(input.native().selection(), (0, 0));
    }

    #[test]
    fn test_clearing_value_returns_to_first_cell() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        state.read().value().set(String::new());
        assert!(input.sync_external());
        assert_eq!(selection(&state), Some((0, 1)));
        assert!(input.is_inserting());
    }

    #[test]
    fn test_focus_partial_value_enters_insertion_mode() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        assert_eq!(selection(&state), Some((2, 3)));
        assert!(input.is_inserting());
        // The field itself cannot select past its value.
        assert_eq!(input.native().selection(), (2, 2));
    }

    #[test]
    fn test_focus_full_value_selects_last_cell() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        assert_eq!(selection(&state), Some((3, 4)));
        assert_eq!(input.native().direction(), SelectionDirection::Backward);
    }

    #[test]
    fn test_blur_clears_selection() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Shift));
        assert!(input.is_shift_held());
        input.handle(&InputEvent::Blur);
        let s = state.read();
        assert!(!s.is_focused());
        assert_eq!(s.selection(), None);
        assert_eq!(s.current_index(), None);
        assert!(!input.is_shift_held());
    }

    #[test]
    fn test_keys_ignored_while_unfocused() {
        let (mut input, state) = controller("", 4);
        typed(&mut input, "12");
        assert_eq!(state.read().value().get(), "");
    }

    #[test]
    fn test_typing_advances() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        typed(&mut input, "1");
        assert_eq!(state.read().value().get(), "1");
        assert_eq!(state.read().current_index(), Some(1));
        assert_eq!(selection(&state), Some((1, 2)));

        typed(&mut input, "234");
        assert_eq!(state.read().value().get(), "1234");
        assert_eq!(selection(&state), Some((3, 4)));
        assert_eq!(state.read().current_index(), Some(3));
    }

    #[test]
    fn test_typing_beyond_item_count_is_ignored() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        typed(&mut input, "5");
        // The last cell is selected, so typing replaces it.
        assert_eq!(state.read().value().get(), "1235");
        assert_eq!(selection(&state), Some((3, 4)));
    }

    #[test]
    fn test_rejected_first_keystroke_forces_first_cell() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        typed(&mut input, "a");
        assert_eq!(state.read().value().get(), "");
        assert_eq!(input.native().value(), "");
        assert_eq!(selection(&state), Some((0, 1)));
        assert_eq!(state.read().current_index(), Some(0));
    }

    #[test]
    fn test_rejected_later_keystroke_keeps_selection() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        typed(&mut input, "12");
        typed(&mut input, "x");
        assert_eq!(state.read().value().get(), "12");
        assert_eq!(input.native().value(), "12");
        assert_eq!(selection(&state), Some((2, 3)));
    }

    #[test]
    fn test_backspace_at_end() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Backspace));
        assert_eq!(state.read().value().get(), "123");
        assert_eq!(state.read().current_index(), Some(3));
        assert_eq!(selection(&state), Some((3, 4)));
    }

    #[test]
    fn test_backspace_interior_moves_back() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Left));
        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((1, 2)));

        key(&mut input, KeyEvent::new(Key::Backspace));
        assert_eq!(state.read().value().get(), "134");
        assert_eq!(state.read().current_index(), Some(0));
        assert_eq!(selection(&state), Some((0, 1)));
    }

    #[test]
    fn test_arrow_navigation() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        assert_eq!(selection(&state), Some((3, 4)));

        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((2, 3)));
        key(&mut input, KeyEvent::new(Key::Left));
        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((0, 1)));
        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((0, 1)));

        key(&mut input, KeyEvent::new(Key::Right));
        assert_eq!(selection(&state), Some((1, 2)));
        key(&mut input, KeyEvent::new(Key::End));
        assert_eq!(selection(&state), Some((3, 4)));
        key(&mut input, KeyEvent::new(Key::Right));
        assert_eq!(selection(&state), Some((3, 4)));
        key(&mut input, KeyEvent::new(Key::Home));
        assert_eq!(selection(&state), Some((0, 1)));
    }

    #[test]
    fn test_arrow_left_from_insertion_point_lands_on_last_filled() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        assert_eq!(selection(&state), Some((2, 3)));

        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((1, 2)));
        assert_eq!(input.native().selection(), (1, 2));

        key(&mut input, KeyEvent::new(Key::Left));
        assert_eq!(selection(&state), Some((0, 1)));
    }

    #[test]
    fn test_arrow_right_stops_at_insertion_point() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Home));
        assert_eq!(selection(&state), Some((0, 1)));
        key(&mut input, KeyEvent::new(Key::Right));
        assert_eq!(selection(&state), Some((1, 2)));
        key(&mut input, KeyEvent::new(Key::Right));
        assert_eq!(selection(&state), Some((2, 3)));
        key(&mut input, KeyEvent::new(Key::Right));
        assert_eq!(selection(&state), Some((2, 3)));
    }

    #[test]
    fn test_shift_range_selection() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Shift));
        key(&mut input, KeyEvent::new(Key::Left).with_shift());
        assert_eq!(selection(&state), Some((2, 4)));
        assert_eq!(state.read().phase(), SelectionPhase::Range(2, 4));
        key(&mut input, KeyEvent::new(Key::Left).with_shift());
        assert_eq!(selection(&state), Some((1, 4)));

        input.handle(&InputEvent::KeyUp(KeyEvent::new(Key::Shift)));
        assert!(!input.is_shift_held());
    }

    #[test]
    fn test_shift_extends_from_previous_start() {
        let (mut input, state) = controller("12345", 5);
        input.handle(&InputEvent::Focus);
        input
            .native
            .set_selection_range(3, 3, SelectionDirection::None);
        input.shift_held = true;
        input.previous_selection = PreviousSelection {
            inserting: false,
            start: Some(1),
            end: Some(2),
        };

        input.on_selection_change();
        assert_eq!(selection(&state), Some((1, 4)));
        assert_eq!(state.read().phase(), SelectionPhase::Range(1, 4));
        assert_eq!(input.native().selection(), (1, 4));
    }

    #[test]
    fn test_shift_from_modifiers_without_bare_shift_key() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::new(Key::Home));
        key(&mut input, KeyEvent::new(Key::Right).with_shift());
        assert!(input.is_shift_held());
        assert_eq!(selection(&state), Some((0, 2)));

        key(&mut input, KeyEvent::new(Key::Right));
        assert!(!input.is_shift_held());
        assert_eq!(selection(&state), Some((2, 3)));
    }

    #[test]
    fn test_paste_truncates_and_completes() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        input.handle(&InputEvent::Paste("123456".into()));
        assert_eq!(state.read().value().get(), "1234");
        assert_eq!(selection(&state), Some((3, 4)));
    }

    #[test]
    fn test_paste_rejected_when_invalid() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        input.handle(&InputEvent::Paste("12ab".into()));
        assert_eq!(state.read().value().get(), "");
        assert_eq!(input.native().value(), "");
    }

    #[test]
    fn test_click_places_selection() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Click(1));
        assert!(state.read().is_focused());
        assert_eq!(selection(&state), Some((1, 2)));

        input.handle(&InputEvent::Click(0));
        assert_eq!(selection(&state), Some((0, 1)));

        input.handle(&InputEvent::Click(9));
        assert_eq!(selection(&state), Some((3, 4)));
    }

    #[test]
    fn test_click_past_value_enters_insertion_mode() {
        let (mut input, state) = controller("1", 4);
        input.handle(&InputEvent::Click(3));
        assert_eq!(selection(&state), Some((1, 2)));
        assert!(input.is_inserting());
    }

    #[test]
    fn test_select_all_then_type_replaces_everything() {
        let (mut input, state) = controller("1234", 4);
        input.handle(&InputEvent::Focus);
        key(&mut input, KeyEvent::from_char('a').with_ctrl());
        assert_eq!(input.native().selection(), (0, 4));
        typed(&mut input, "9");
        assert_eq!(state.read().value().get(), "9");
        assert_eq!(selection(&state), Some((1, 2)));
    }

    #[test]
    fn test_disabled_ignores_events() {
        let (mut input, state) = controller("", 4);
        input.set_disabled(true);
        input.handle(&InputEvent::Focus);
        assert!(!state.read().is_focused());
        assert!(state.read().is_disabled());
    }

    #[test]
    fn test_disabling_blurs() {
        let (mut input, state) = controller("12", 4);
        input.handle(&InputEvent::Focus);
        input.set_disabled(true);
        assert!(!state.read().is_focused());
        assert_eq!(selection(&state), None);
        assert!(input.native().is_disabled());
    }

    #[test]
    fn test_external_value_adopted() {
        let (mut input, state) = controller("", 4);
        input.handle(&InputEvent::Focus);
        state.read().value().set("12".to_string());
        assert!(input.sync_external());
        assert!(!input.sync_external());
        assert_eq!(input.native().value(), "12");
        assert_eq!(selection(&state), Some((2, 3)));

        // Backspace bookkeeping follows the adopted value.
        key(&mut input, KeyEvent::new(Key::Backspace));
        assert_eq!(state.read().value().get(), "1");
        assert_eq!(selection(&state), Some((1, 2)));
    }

    #[test]
    fn test_external_value_truncated() {
        let (mut input, state) = controller("", 4);
        state.read().value().set("123456".to_string());
        assert!(input.sync_external());
        assert_eq!(state.read().value().get(), "1234");
        assert_eq!(input.native().value(), "1234");
        assert!(!input.sync_external());
    }
}
