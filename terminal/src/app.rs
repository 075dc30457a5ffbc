use anyhow::Result;
use common::{Board, GameCommand, GameConfig, GameEvent, GameState, KeyMap};
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use crate::input::InputSource;
use crate::render::{DisplaySink, Hud};

/// How long one input poll may wait. Paces the loop when no key is pressed.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(16);

pub struct App {
    pub state: GameState,
    keymap: KeyMap,
    board: Board,
    pending: Vec<GameCommand>,
}

impl App {
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::with_keymap(config, KeyMap::default())
    }

    pub fn with_keymap(config: &GameConfig, keymap: KeyMap) -> Result<Self> {
        let mut state = GameState::new(config)?;
        let board = Board::new(config.cols, config.rows, config.cell_size, config.palette.background);
        log_events(&state.init_world());

        let mut app = Self { state, keymap, board, pending: Vec::new() };
        app.redraw();
        Ok(app)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    pub fn should_quit(&self) -> bool {
        !self.state.is_running()
    }

    /// Queue the command bound to `code`. Unbound keys are dropped.
    pub fn handle_key(&mut self, code: u8) {
        match self.keymap.command_for(code) {
            Some(command) => self.pending.push(command),
            None => trace!("Ignoring key code {}", code),
        }
    }

    /// Apply queued commands, run due ticks, and repaint the board.
    pub fn update(&mut self, dt: Duration) -> Vec<GameEvent> {
        let inputs = std::mem::take(&mut self.pending);
        let events = self.state.advance(&inputs, dt);
        log_events(&events);
        self.redraw();
        events
    }

    /// One loop iteration: poll, simulate, present.
    pub fn step<I: InputSource, D: DisplaySink>(
        &mut self,
        input: &mut I,
        sink: &mut D,
        dt: Duration,
    ) -> Result<Vec<GameEvent>> {
        if let Some(code) = input.poll_key(POLL_TIMEOUT)? {
            self.handle_key(code);
        }
        let events = self.update(dt);
        sink.present(&self.board, &self.hud())?;
        Ok(events)
    }

    fn redraw(&mut self) {
        self.state.draw(&mut self.board);
    }
}

/// Drive the app against the wall clock until a quit command arrives.
pub fn run_app<I: InputSource, D: DisplaySink>(app: &mut App, input: &mut I, sink: &mut D) -> Result<()> {
    let mut last_update = Instant::now();
    sink.present(app.board(), &app.hud())?;

    while !app.should_quit() {
        let now = Instant::now();
        let dt = now.duration_since(last_update);
        last_update = now;

        app.step(input, sink, dt)?;
    }

    info!(
        "Game over after {} ticks, best score {}",
        app.state.tick, app.state.high_score
    );
    Ok(())
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Moved { .. } => trace!(?event),
            GameEvent::RoundReset { round, final_score } => {
                info!(round, final_score, "Snake bit itself, new round")
            }
            _ => debug!(?event),
        }
    }
}
