//! Simulation core for a single-player snake on a wrap-around grid.
//!
//! Nothing in here touches a terminal or a clock. The host loop feeds key
//! commands and elapsed time into [`GameState::advance`] and paints the
//! result through a [`Surface`].

mod board;
mod config;
mod constants;
mod game_state;
mod keymap;
mod scheduler;
mod snake;
mod world;

pub mod error;
pub mod util;

pub use board::*;
pub use config::*;
pub use constants::*;
pub use game_state::*;
pub use keymap::*;
pub use scheduler::*;
pub use snake::*;
pub use world::*;
pub use util::PseudoRandom;
