//! Common types for Battleship: coordinates, cell states, shot outcomes and
//! board errors.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// A (row, column) position. Signed so out-of-range input stays representable
/// until the board rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `true` when both components fall inside the board.
    pub fn in_bounds(&self) -> bool {
        let n = BOARD_SIZE as i32;
        (0..n).contains(&self.row) && (0..n).contains(&self.col)
    }

    /// Coordinate `steps` cells away from this one along `orientation`.
    pub fn offset(&self, orientation: Orientation, steps: usize) -> Coord {
        let steps = steps as i32;
        match orientation {
            Orientation::Horizontal => Coord::new(self.row, self.col + steps),
            Orientation::Vertical => Coord::new(self.row + steps, self.col),
        }
    }
}

/// Formats as the console notation, e.g. `A5` for row 4, column 0.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

/// State of a single board cell. `Hit` and `Miss` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Hit,
    Miss,
}

/// Result of a first-time shot at an in-bounds cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot sank a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Hit!"),
            ShotOutcome::Miss => write!(f, "Miss."),
            ShotOutcome::Sunk(name) => write!(f, "Hit! You sank: {}", name),
        }
    }
}

/// Errors returned by Board and Game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot target lies outside the board.
    OutOfBounds,
    /// Target cell was already hit or missed.
    AlreadyShot,
    /// Ship would extend past the board edge.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Random placement exhausted its attempts.
    UnableToPlaceShip,
    /// The game has already been decided.
    GameOver,
    /// A ship cell with no owning ship; the board is corrupt.
    UnknownShipHit,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Shot outside board."),
            BoardError::AlreadyShot => write!(f, "Already shot here."),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::GameOver => write!(f, "The game is already over"),
            BoardError::UnknownShipHit => write!(f, "Ship cell without an owning ship"),
        }
    }
}

impl std::error::Error for BoardError {}
