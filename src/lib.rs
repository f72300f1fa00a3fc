//! Sea Battle: a turn-based grid combat simulation.
//!
//! One side places a fixed fleet of units on a square grid under the
//! no-touch adjacency rule; the sides then alternate firing at coordinates
//! on each other's grid until one fleet is fully destroyed.

mod common;
mod config;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod player_cli;

pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
