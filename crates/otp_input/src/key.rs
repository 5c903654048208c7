//! Keyboard input.
//!
//! [`KeyEvent`] is the key press or release the hidden input sees, together
//! with the modifier state at that moment.

use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers, ModifierKeyCode};

/// A key on the keyboard, reduced to what the hidden input cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Backspace.
    Backspace,
    /// Forward delete.
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
    /// Tab.
    Tab,
    /// Enter.
    Enter,
    /// Escape.
    Esc,
    /// A bare Shift key press or release.
    Shift,
    /// Anything else.
    Other,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Backspace => write!(f, "backspace"),
            Self::Delete => write!(f, "delete"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Home => write!(f, "home"),
            Self::End => write!(f, "end"),
            Self::Tab => write!(f, "tab"),
            Self::Enter => write!(f, "enter"),
            Self::Esc => write!(f, "esc"),
            Self::Shift => write!(f, "shift"),
            Self::Other => write!(f, "unknown"),
        }
    }
}

/// A key event with its modifier state.
///
/// # Example
///
/// ```rust
/// use otp_input::{Key, KeyEvent};
///
/// let key = KeyEvent::new(Key::Left).with_shift();
/// assert_eq!(key.to_string(), "shift+left");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Whether Shift was held.
    pub shift: bool,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    /// Whether Alt was held.
    pub alt: bool,
}

impl KeyEvent {
    /// Creates a key event with no modifiers.
    #[must_use]
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: key == Key::Shift,
            ctrl: false,
            alt: false,
        }
    }

    /// Creates a key event for a typed character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::new(Key::Char(c))
    }

    /// Sets the Shift modifier.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Sets the Ctrl modifier.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    /// Sets the Alt modifier.
    #[must_use]
    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    /// Whether this is the bare Shift key.
    #[must_use]
    pub fn is_shift_key(&self) -> bool {
        self.key == Key::Shift
    }

    /// Converts a crossterm key event.
    #[must_use]
    pub fn from_crossterm(event: &crossterm::event::KeyEvent) -> Self {
        let modifiers = event.modifiers;
        let shift = modifiers.contains(KeyModifiers::SHIFT);

        let (key, shift) = match event.code {
            KeyCode::Char(c) => (Key::Char(c), shift),
            KeyCode::Backspace => (Key::Backspace, shift),
            KeyCode::Delete => (Key::Delete, shift),
            KeyCode::Left => (Key::Left, shift),
            KeyCode::Right => (Key::Right, shift),
            KeyCode::Up => (Key::Up, shift),
            KeyCode::Down => (Key::Down, shift),
            KeyCode::Home => (Key::Home, shift),
            KeyCode::End => (Key::End, shift),
            KeyCode::Tab => (Key::Tab, shift),
            KeyCode::BackTab => (Key::Tab, true),
            KeyCode::Enter => (Key::Enter, shift),
            KeyCode::Esc => (Key::Esc, shift),
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                (Key::Shift, true)
            }
            _ => (Key::Other, shift),
        };

        Self {
            key,
            shift,
            ctrl: modifiers.contains(KeyModifiers::CONTROL),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+")?;
        }
        if self.alt {
            write!(f, "alt+")?;
        }
        if self.shift && !self.is_shift_key() {
            write!(f, "shift+")?;
        }
        write!(f, "{}", self.key)
    }
}
