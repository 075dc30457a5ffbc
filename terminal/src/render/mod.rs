pub mod board;
pub mod sink;
pub mod types;

pub use board::board_lines;
pub use sink::{DisplaySink, TerminalSink};
pub use types::{CellDimensions, Hud};
