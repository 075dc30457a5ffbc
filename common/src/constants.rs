/// Default tick interval in milliseconds for the simulation loop
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Amount the speed keys add to or remove from the tick interval
pub const TICK_INTERVAL_STEP_MS: u64 = 10;

/// Lower bound for the tick interval. Anything below this turns the host loop into a busy spin.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Upper bound for the tick interval
pub const MAX_TICK_INTERVAL_MS: u64 = 2000;

/// Most ticks a single scheduler advance will release after a stall
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Largest grid side accepted by config validation
pub const MAX_GRID_SIDE: u16 = 512;

/// Pixel budget for the board buffer, cols * rows * cell_size^2
pub const MAX_BOARD_PIXELS: u64 = 4096 * 4096;

pub const DEFAULT_GRID_COLS: u16 = 12;
pub const DEFAULT_GRID_ROWS: u16 = 12;

/// Side length of a cell in the pixel board
pub const DEFAULT_CELL_SIZE: u16 = 32;

pub const DEFAULT_SPAWN_X: i16 = 5;
pub const DEFAULT_SPAWN_Y: i16 = 5;

/// Points awarded per food item
pub const DEFAULT_FOOD_POINTS: u32 = 1;

/// Key code that requests quitting the game
pub const KEY_ESCAPE: u8 = 27;

/// Printable key codes accepted by the key map
pub const PRINTABLE_KEYS: std::ops::Range<u8> = 32..127;
