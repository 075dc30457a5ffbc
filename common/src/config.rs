use serde::{Deserialize, Serialize};
use std::time::Duration;
use crate::error::ConfigError;
use crate::*;

/// Rule switches that differ between the two classic variants of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Accept a turn straight back onto the body.
    pub allow_reverse: bool,
    /// Start a new round when the head runs into the body. When off, the bite
    /// is reported and the snake carries on.
    pub auto_restart_on_death: bool,
    pub food_spawn: FoodSpawnPolicy,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            allow_reverse: false,
            auto_restart_on_death: true,
            food_spawn: FoodSpawnPolicy::Anywhere,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    pub cell_size: u16,
    pub spawn: Position,
    pub spawn_direction: Direction,
    pub tick_interval_ms: u64,
    pub food_points: u32,
    pub rules: Rules,
    pub palette: Palette,
    /// Seed for food placement. The host picks one when this is unset.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            cols: DEFAULT_GRID_COLS,
            rows: DEFAULT_GRID_ROWS,
            cell_size: DEFAULT_CELL_SIZE,
            spawn: Position::new(DEFAULT_SPAWN_X, DEFAULT_SPAWN_Y),
            spawn_direction: Direction::Down,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            food_points: DEFAULT_FOOD_POINTS,
            rules: Rules::default(),
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.cols, self.rows)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyGrid { cols: self.cols, rows: self.rows });
        }
        if self.cols > MAX_GRID_SIDE || self.rows > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                cols: self.cols,
                rows: self.rows,
                max: MAX_GRID_SIDE,
            });
        }
        if !self.grid().contains(self.spawn) {
            return Err(ConfigError::SpawnOutOfBounds {
                x: self.spawn.x,
                y: self.spawn.y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let pixels = self.grid().cell_count() as u64 * self.cell_size as u64 * self.cell_size as u64;
        if pixels > MAX_BOARD_PIXELS {
            return Err(ConfigError::BoardTooLarge { pixels, max: MAX_BOARD_PIXELS });
        }
        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::TickIntervalOutOfRange {
                value_ms: self.tick_interval_ms,
                min_ms: MIN_TICK_INTERVAL_MS,
                max_ms: MAX_TICK_INTERVAL_MS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_setup() {
        let c = GameConfig::default();
        assert_eq!((c.cols, c.rows), (12, 12));
        assert_eq!(c.spawn, Position::new(5, 5));
        assert_eq!(c.spawn_direction, Direction::Down);
        assert_eq!(c.tick_interval(), Duration::from_millis(100));
        assert!(!c.rules.allow_reverse);
        assert!(c.rules.auto_restart_on_death);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let c = GameConfig::from_json_str(
            r#"{ "cols": 20, "rules": { "allow_reverse": true }, "palette": { "head": [1, 2, 3] } }"#,
        )
        .unwrap();
        assert_eq!(c.cols, 20);
        assert_eq!(c.rows, 12);
        assert!(c.rules.allow_reverse);
        assert!(c.rules.auto_restart_on_death);
        assert_eq!(c.palette.head, Color::new(1, 2, 3));
        assert_eq!(c.palette.body, Color::GREEN);
    }

    #[test]
    fn rejects_bad_values() {
        let c = GameConfig { cols: 0, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::EmptyGrid { .. })));

        let c = GameConfig { spawn: Position::new(12, 0), ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::SpawnOutOfBounds { .. })));

        let c = GameConfig { cell_size: 0, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::ZeroCellSize)));

        let c = GameConfig { tick_interval_ms: 0, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::TickIntervalOutOfRange { .. })));

        let c = GameConfig { cols: 40000, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::GridTooLarge { .. })));
    }

    #[test]
    fn grid_size_limits() {
        let c = GameConfig { cols: 32767, rows: 1, cell_size: 1, spawn: Position::new(0, 0), ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::GridTooLarge { .. })));

        let c = GameConfig { cols: MAX_GRID_SIDE, rows: 1, cell_size: 1, ..GameConfig::default() };
        assert!(matches!(c.validate(), Err(ConfigError::SpawnOutOfBounds { .. })));

        let c = GameConfig {
            cols: MAX_GRID_SIDE,
            rows: MAX_GRID_SIDE,
            cell_size: 8,
            ..GameConfig::default()
        };
        assert!(c.validate().is_ok());

        // 512 * 512 cells of 9x9 pixels is over the buffer budget
        let c = GameConfig { cell_size: 9, ..c };
        assert!(matches!(c.validate(), Err(ConfigError::BoardTooLarge { .. })));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(GameConfig::from_json_str("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn food_spawn_policy_names() {
        let c = GameConfig::from_json_str(r#"{ "rules": { "food_spawn": "free_cells" } }"#).unwrap();
        assert_eq!(c.rules.food_spawn, FoodSpawnPolicy::FreeCells);
    }
}
