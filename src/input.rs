use crossterm::event::{poll, read, KeyEvent};
use std::io;
use std::time::Duration;

/// A source of keyboard input
pub(crate) trait EventSource {
    /// Return every key press received since the last call, without waiting
    /// for new ones
    fn poll_events(&mut self) -> io::Result<Vec<KeyEvent>>;
}

/// Key presses read from the terminal
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_events(&mut self) -> io::Result<Vec<KeyEvent>> {
        let mut keys = Vec::new();
        while poll(Duration::ZERO)? {
            if let Some(ev) = read()?.as_key_press_event() {
                keys.push(ev);
            }
        }
        Ok(keys)
    }
}
