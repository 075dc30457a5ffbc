use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::error::ConfigError;
use crate::util::PseudoRandom;
use crate::*;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Turn(Direction),
    /// Grow and step right away, outside the tick cadence.
    Grow,
    SpeedUp,
    SlowDown,
    Quit,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Moved { head: Position },
    Turned { direction: Direction },
    TurnRejected { direction: Direction },
    Grew { length: usize },
    FoodEaten { position: Position, points: u32, score: u32 },
    FoodSpawned { position: Position },
    SnakeBitItself { position: Position },
    RoundReset { round: u32, final_score: u32 },
    SpeedChanged { interval_ms: u64 },
    QuitRequested,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Quit,
}

/// Everything the simulation needs, owned in one place and driven by the host loop.
#[derive(Debug, Clone)]
pub struct GameState {
    pub tick: u32,
    pub player: Player,
    pub world: World,
    pub rules: Rules,
    pub palette: Palette,
    pub status: GameStatus,
    /// Rounds started so far, counting the first.
    pub round: u32,
    pub high_score: u32,
    scheduler: TickScheduler,
    rng: PseudoRandom,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new(config.grid(), config.palette.background);
        world.food_color = config.palette.food;
        world.food_points = config.food_points;
        world.spawn_policy = config.rules.food_spawn;

        Ok(GameState {
            tick: 0,
            player: Player::new(config.spawn, config.spawn_direction),
            world,
            rules: config.rules,
            palette: config.palette,
            status: GameStatus::Running,
            round: 1,
            high_score: 0,
            scheduler: TickScheduler::new(config.tick_interval()),
            rng: PseudoRandom::new(config.seed.unwrap_or_default()),
        })
    }

    pub fn tick_interval(&self) -> Duration {
        self.scheduler.interval()
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Put the first food on the board.
    pub fn init_world(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        self.spawn_food(&mut out);
        out
    }

    /// Start a new round in place: score, body and food are cleared and a fresh food spawned.
    pub fn reset(&mut self) -> Vec<GameEvent> {
        let final_score = self.player.score;
        self.player.reset();
        self.world.reset();
        self.round += 1;
        log::info!("Round {} starting, previous score {}", self.round, final_score);

        let mut out = vec![GameEvent::RoundReset { round: self.round, final_score }];
        self.spawn_food(&mut out);
        out
    }

    pub fn exec_command(&mut self, command: GameCommand) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if !self.is_running() {
            return out;
        }

        match command {
            GameCommand::Turn(direction) => {
                let before = self.player.snake.direction();
                if self.player.snake.turn(direction, self.rules.allow_reverse) {
                    if before != direction {
                        log::debug!("Turned {:?} -> {:?}", before, direction);
                        out.push(GameEvent::Turned { direction });
                    }
                } else {
                    log::debug!("Rejected reversal {:?} -> {:?}", before, direction);
                    out.push(GameEvent::TurnRejected { direction });
                }
            }

            GameCommand::Grow => {
                self.player.snake.grow();
                out.push(GameEvent::Grew { length: self.player.snake.len() });
                self.player.snake.step(&self.world.grid);
                out.push(GameEvent::Moved { head: self.player.snake.head() });
            }

            GameCommand::SpeedUp => self.adjust_interval(false, &mut out),
            GameCommand::SlowDown => self.adjust_interval(true, &mut out),

            GameCommand::Quit => {
                log::info!("Quit requested at tick {}", self.tick);
                self.status = GameStatus::Quit;
                out.push(GameEvent::QuitRequested);
            }
        }

        out
    }

    /// Run one simulation step: move, then resolve bites and food.
    pub fn tick_forward(&mut self) -> Vec<GameEvent> {
        let mut out = Vec::new();
        if !self.is_running() {
            return out;
        }

        self.player.snake.step(&self.world.grid);
        self.tick += 1;
        let head = self.player.snake.head();
        out.push(GameEvent::Moved { head });

        if self.player.snake.is_biting_itself() {
            out.push(GameEvent::SnakeBitItself { position: head });
            if self.rules.auto_restart_on_death {
                out.extend(self.reset());
                return out;
            }
        }

        if self.world.is_colliding_food(&self.player.snake) {
            if let Some(food) = self.world.take_food_at(head) {
                self.player.score += food.points;
                self.high_score = self.high_score.max(self.player.score);
                self.player.snake.extend_tail();
                log::info!("Food eaten at {:?}, score {}", head, self.player.score);
                out.push(GameEvent::FoodEaten {
                    position: head,
                    points: food.points,
                    score: self.player.score,
                });
                self.spawn_food(&mut out);
            }
        }

        out
    }

    /// Apply pending commands, then run however many ticks `dt` makes due.
    pub fn advance(&mut self, inputs: &[GameCommand], dt: Duration) -> Vec<GameEvent> {
        let mut out = Vec::new();
        for command in inputs {
            out.extend(self.exec_command(*command));
        }

        let ticks = self.scheduler.advance(dt);
        for _ in 0..ticks {
            if !self.is_running() {
                break;
            }
            out.extend(self.tick_forward());
        }
        out
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        draw_world(surface, &self.world, &self.player, &self.palette);
    }

    fn spawn_food(&mut self, out: &mut Vec<GameEvent>) {
        match self.world.spawn_food(&mut self.rng, &self.player.snake) {
            Some(position) => out.push(GameEvent::FoodSpawned { position }),
            None => log::warn!("No free cell left for food"),
        }
    }

    fn adjust_interval(&mut self, slower: bool, out: &mut Vec<GameEvent>) {
        let current = self.scheduler.interval().as_millis() as u64;
        let stepped = if slower {
            current.saturating_add(TICK_INTERVAL_STEP_MS)
        } else {
            current.saturating_sub(TICK_INTERVAL_STEP_MS)
        };
        let next = stepped.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);

        if next != current {
            self.scheduler.set_interval(Duration::from_millis(next));
            log::debug!("Tick interval {}ms -> {}ms", current, next);
            out.push(GameEvent::SpeedChanged { interval_ms: next });
        }
    }
}

/// Value-in, value-out form of [`GameState::advance`].
pub fn advance(mut state: GameState, inputs: &[GameCommand], dt: Duration) -> (GameState, Vec<GameEvent>) {
    let events = state.advance(inputs, dt);
    (state, events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new(&GameConfig { seed: Some(1), ..GameConfig::default() }).unwrap()
    }

    #[test]
    fn new_rejects_invalid_config() {
        let config = GameConfig { rows: 0, ..GameConfig::default() };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn init_world_spawns_one_food() {
        let mut s = state();
        let events = s.init_world();
        assert_eq!(s.world.foods.len(), 1);
        assert!(matches!(events.as_slice(), [GameEvent::FoodSpawned { .. }]));
    }

    #[test]
    fn speed_is_clamped() {
        let mut s = state();
        for _ in 0..50 {
            s.exec_command(GameCommand::SpeedUp);
        }
        assert_eq!(s.tick_interval(), Duration::from_millis(MIN_TICK_INTERVAL_MS));
        assert!(s.exec_command(GameCommand::SpeedUp).is_empty());

        let events = s.exec_command(GameCommand::SlowDown);
        assert_eq!(events, vec![GameEvent::SpeedChanged { interval_ms: MIN_TICK_INTERVAL_MS + 10 }]);

        for _ in 0..500 {
            s.exec_command(GameCommand::SlowDown);
        }
        assert_eq!(s.tick_interval(), Duration::from_millis(MAX_TICK_INTERVAL_MS));
    }

    #[test]
    fn quit_stops_everything() {
        let mut s = state();
        assert_eq!(s.exec_command(GameCommand::Quit), vec![GameEvent::QuitRequested]);
        assert!(!s.is_running());
        assert!(s.tick_forward().is_empty());
        assert!(s.exec_command(GameCommand::Grow).is_empty());
    }

    #[test]
    fn manual_grow_steps_once() {
        let mut s = state();
        let events = s.exec_command(GameCommand::Grow);
        assert_eq!(s.player.snake.len(), 1);
        assert_eq!(s.player.snake.head(), Position::new(5, 6));
        assert_eq!(s.player.snake.body()[0].position, Position::new(5, 5));
        assert_eq!(s.tick, 0);
        assert_eq!(
            events,
            vec![GameEvent::Grew { length: 1 }, GameEvent::Moved { head: Position::new(5, 6) }]
        );
    }

    #[test]
    fn same_direction_turn_is_silent() {
        let mut s = state();
        assert!(s.exec_command(GameCommand::Turn(Direction::Down)).is_empty());
    }

    #[test]
    fn reset_clears_round() {
        let mut s = state();
        s.init_world();
        s.player.score = 3;
        s.player.snake.grow();
        s.player.snake.step(&s.world.grid);

        let events = s.reset();

        assert_eq!(s.score(), 0);
        assert!(s.player.snake.is_empty());
        assert_eq!(s.player.snake.head(), Position::new(5, 5));
        assert_eq!(s.player.snake.last_position(), Position::new(5, 5));
        assert_eq!(s.world.foods.len(), 1);
        assert_eq!(s.round, 2);
        assert_eq!(events[0], GameEvent::RoundReset { round: 2, final_score: 3 });
    }
}
