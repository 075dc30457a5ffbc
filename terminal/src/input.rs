use anyhow::Result;
use common::KEY_ESCAPE;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::collections::VecDeque;
use std::time::Duration;

/// Source of raw key codes, polled once per loop iteration.
pub trait InputSource {
    /// Wait at most `timeout` for one key. `Ok(None)` means nothing was pressed.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<u8>>;
}

/// Convert a terminal key press to the game's key code space.
pub fn key_code(key: &KeyEvent) -> Option<u8> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Esc => Some(KEY_ESCAPE),
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        _ => None,
    }
}

pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<u8>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(key_code(&key));
            }
        }
        Ok(None)
    }
}

/// Plays back a fixed list of polls, then reports escape forever.
pub struct ScriptedInput {
    keys: VecDeque<Option<u8>>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Option<u8>>) -> Self {
        Self { keys: keys.into_iter().collect() }
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self, _timeout: Duration) -> Result<Option<u8>> {
        Ok(self.keys.pop_front().unwrap_or(Some(KEY_ESCAPE)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn converts_presses() {
        assert_eq!(key_code(&key(KeyCode::Char('w'), KeyEventKind::Press)), Some(b'w'));
        assert_eq!(key_code(&key(KeyCode::Esc, KeyEventKind::Press)), Some(27));
        assert_eq!(key_code(&key(KeyCode::Up, KeyEventKind::Press)), None);
        assert_eq!(key_code(&key(KeyCode::Char('é'), KeyEventKind::Press)), None);
    }

    #[test]
    fn ignores_releases() {
        assert_eq!(key_code(&key(KeyCode::Char('w'), KeyEventKind::Release)), None);
    }

    #[test]
    fn script_ends_with_escape() {
        let mut input = ScriptedInput::new([Some(b'a'), None]);
        let t = Duration::ZERO;
        assert_eq!(input.poll_key(t).unwrap(), Some(b'a'));
        assert_eq!(input.poll_key(t).unwrap(), None);
        assert_eq!(input.poll_key(t).unwrap(), Some(27));
    }
}
