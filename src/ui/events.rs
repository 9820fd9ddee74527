use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl AppEvent {
    /// Keeps the events the screen reacts to.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(Self::Key(key)),
            Event::Mouse(mouse) => Some(Self::Mouse(mouse)),
            Event::Resize(cols, rows) => Some(Self::Resize(cols, rows)),
            _ => None,
        }
    }
}

/// Waits up to `timeout` for the next terminal event, on the calling thread.
///
/// `Ok(None)` means the timeout elapsed or the event was not one the
/// screen handles.
pub fn next_event(timeout: Duration) -> io::Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(AppEvent::from_terminal(event::read()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn keys_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(
            AppEvent::from_terminal(Event::Key(key)),
            Some(AppEvent::Key(forwarded)) if forwarded == key
        ));
    }

    #[test]
    fn resize_is_forwarded() {
        assert!(matches!(
            AppEvent::from_terminal(Event::Resize(100, 40)),
            Some(AppEvent::Resize(100, 40))
        ));
        assert!(AppEvent::from_terminal(Event::FocusGained).is_none());
        assert!(AppEvent::from_terminal(Event::Paste("x".to_string())).is_none());
    }
}
