//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, BoardError, Cell, ConsoleApp, Coord, Game, GameStatus, Orientation, Player,
    ShipType, ShotOutcome, FLEET,
};
