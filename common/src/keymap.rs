use std::collections::HashMap;
use crate::{Direction, GameCommand, KEY_ESCAPE, PRINTABLE_KEYS};

/// Maps raw key codes to game commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMap {
    bindings: HashMap<u8, GameCommand>,
}

impl KeyMap {
    pub fn empty() -> Self {
        KeyMap { bindings: HashMap::new() }
    }

    /// Bind `code` to `command`, replacing any earlier binding. Codes outside
    /// the printable range (other than escape) are refused.
    pub fn bind(&mut self, code: u8, command: GameCommand) -> bool {
        if !Self::accepts(code) {
            return false;
        }
        self.bindings.insert(code, command);
        true
    }

    pub fn command_for(&self, code: u8) -> Option<GameCommand> {
        if !Self::accepts(code) {
            return None;
        }
        self.bindings.get(&code).copied()
    }

    fn accepts(code: u8) -> bool {
        code == KEY_ESCAPE || PRINTABLE_KEYS.contains(&code)
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut map = KeyMap::empty();
        map.bind(b'w', GameCommand::Turn(Direction::Up));
        map.bind(b'a', GameCommand::Turn(Direction::Left));
        map.bind(b's', GameCommand::Turn(Direction::Down));
        map.bind(b'd', GameCommand::Turn(Direction::Right));
        map.bind(b'g', GameCommand::Grow);
        map.bind(b'm', GameCommand::SlowDown);
        map.bind(b'n', GameCommand::SpeedUp);
        map.bind(KEY_ESCAPE, GameCommand::Quit);
        map
    }
}
