mod board;
mod cli;
mod common;
mod config;
mod game;
pub mod input;
mod logging;
mod player;
pub mod prelude;
mod ship;

pub use board::*;
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::{MenuChoice, PlacementMode, TurnCommand};
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
