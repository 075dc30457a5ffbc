use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column, got {cols}x{rows}")]
    EmptyGrid { cols: u16, rows: u16 },

    #[error("grid {cols}x{rows} is too large, each side must be at most {max}")]
    GridTooLarge { cols: u16, rows: u16, max: u16 },

    #[error("spawn position ({x}, {y}) is outside the {cols}x{rows} grid")]
    SpawnOutOfBounds { x: i16, y: i16, cols: u16, rows: u16 },

    #[error("board of {pixels} pixels exceeds the limit of {max} pixels")]
    BoardTooLarge { pixels: u64, max: u64 },

    #[error("cell size must be positive")]
    ZeroCellSize,

    #[error("tick interval {value_ms}ms is outside {min_ms}..={max_ms}ms")]
    TickIntervalOutOfRange { value_ms: u64, min_ms: u64, max_ms: u64 },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
