//! Events delivered to the hidden input.

use crossterm::event::{Event, KeyEventKind};

use crate::key::KeyEvent;

/// An event on the hidden input.
///
/// Selection-change notifications are not part of this enum: the hidden
/// input raises them itself whenever handling an event changes its value,
/// selection or focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The input gained focus.
    Focus,
    /// The input lost focus.
    Blur,
    /// A key went down (or auto-repeated).
    KeyDown(KeyEvent),
    /// A key was released.
    KeyUp(KeyEvent),
    /// Text was pasted or filled in by a password manager.
    Paste(String),
    /// A pointer press on cell `index`.
    Click(usize),
}

impl InputEvent {
    /// Converts a crossterm terminal event.
    ///
    /// Mouse events are not converted because mapping a column to a cell
    /// depends on where the host draws the component.
    #[must_use]
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => {
                let converted = KeyEvent::from_crossterm(key);
                Some(match key.kind {
                    KeyEventKind::Release => Self::KeyUp(converted),
                    KeyEventKind::Press | KeyEventKind::Repeat => Self::KeyDown(converted),
                })
            }
            Event::Paste(text) => Some(Self::Paste(text.clone())),
            Event::FocusGained => Some(Self::Focus),
            Event::FocusLost => Some(Self::Blur),
            _ => None,
        }
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(key: KeyEvent) -> Self {
        Self::KeyDown(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Key;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_from_crossterm_press_and_release() {
        let mut raw = crossterm::event::KeyEvent {
            code: KeyCode::Char('3'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            InputEvent::from_crossterm(&Event::Key(raw)),
            Some(InputEvent::KeyDown(KeyEvent::from_char('3')))
        );

        raw.kind = KeyEventKind::Release;
        assert_eq!(
            InputEvent::from_crossterm(&Event::Key(raw)),
            Some(InputEvent::KeyUp(KeyEvent::from_char('3')))
        );
    }

    #[test]
    fn test_from_crossterm_focus_and_paste() {
        assert_eq!(
            InputEvent::from_crossterm(&Event::FocusGained),
            Some(InputEvent::Focus)
        );
        assert_eq!(
            InputEvent::from_crossterm(&Event::FocusLost),
            Some(InputEvent::Blur)
        );
        assert_eq!(
            InputEvent::from_crossterm(&Event::Paste("1234".into())),
            Some(InputEvent::Paste("1234".into()))
        );
        assert_eq!(InputEvent::from_crossterm(&Event::Resize(80, 24)), None);
    }

    #[test]
    fn test_key_into_event() {
        let ev: InputEvent = KeyEvent::new(Key::Left).into();
        assert_eq!(ev, InputEvent::KeyDown(KeyEvent::new(Key::Left)));
    }
}
