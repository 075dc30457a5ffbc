/// How many terminal characters one board cell takes up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellDimensions {
    pub horizontal: u16,
    pub vertical: u16,
}

impl CellDimensions {
    pub fn new(horizontal: u16, vertical: u16) -> Self {
        Self { horizontal, vertical }
    }
}

impl Default for CellDimensions {
    // Terminal glyphs are roughly twice as tall as wide
    fn default() -> Self {
        Self::new(2, 1)
    }
}

/// Status shown under the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub round: u32,
    pub tick_interval_ms: u64,
    pub allow_reverse: bool,
    pub auto_restart: bool,
}

impl Hud {
    pub fn from_state(state: &common::GameState) -> Self {
        Self {
            score: state.score(),
            high_score: state.high_score,
            round: state.round,
            tick_interval_ms: state.tick_interval().as_millis() as u64,
            allow_reverse: state.rules.allow_reverse,
            auto_restart: state.rules.auto_restart_on_death,
        }
    }

    pub fn status_line(&self) -> String {
        format!(
            "Score: {}  Best: {}  Round: {}  Tick: {}ms{}{}",
            self.score,
            self.high_score,
            self.round,
            self.tick_interval_ms,
            if self.allow_reverse { "  [reverse]" } else { "" },
            if self.auto_restart { "" } else { "  [no restart]" },
        )
    }
}
