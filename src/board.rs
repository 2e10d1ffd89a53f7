//! Game board: the cell grid plus the ships placed on it.

use core::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use crate::common::{BoardError, Cell, Coord, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET, MAX_FLEET_RESTARTS, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipType};

const GRID_SIZE: usize = BOARD_SIZE as usize;

type Grid = [[Cell; GRID_SIZE]; GRID_SIZE];

/// One player's private board.
///
/// Every `Cell::Ship` in the grid belongs to exactly one entry of `ships`
/// and every ship coordinate is marked in the grid, either as `Ship` or, once
/// shot, as `Hit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Empty; GRID_SIZE]; GRID_SIZE],
            ships: Vec::new(),
        }
    }

    /// Reset every cell to empty and drop all ships.
    pub fn clear(&mut self) {
        self.grid = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        self.ships.clear();
    }

    /// State of the cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if coord.in_bounds() {
            Some(self.grid[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if coord.in_bounds() {
            Some(&mut self.grid[coord.row as usize][coord.col as usize])
        } else {
            None
        }
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn check_placement(
        &self,
        origin: Coord,
        orientation: Orientation,
        length: usize,
    ) -> Result<(), BoardError> {
        for i in 0..length {
            match self.cell(origin.offset(orientation, i)) {
                None => return Err(BoardError::ShipOutOfBounds),
                // a hit cell still belongs to the ship that was struck there
                Some(Cell::Ship | Cell::Hit) => return Err(BoardError::ShipOverlaps),
                Some(Cell::Miss) => return Err(BoardError::AlreadyShot),
                Some(Cell::Empty) => {}
            }
        }
        Ok(())
    }

    /// Whether a ship of `length` fits at `origin` using only empty cells.
    pub fn can_place(&self, origin: Coord, orientation: Orientation, length: usize) -> bool {
        self.check_placement(origin, orientation, length).is_ok()
    }

    /// Place a ship at `origin`. All-or-nothing: on error the board is left
    /// untouched.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        orientation: Orientation,
        ship_type: ShipType,
    ) -> Result<(), BoardError> {
        self.check_placement(origin, orientation, ship_type.length())?;
        let ship = Ship::new(ship_type, origin, orientation);
        for &coord in ship.coords() {
            if let Some(cell) = self.cell_mut(coord) {
                *cell = Cell::Ship;
            }
        }
        debug!(
            "placed {} at {} ({:?})",
            ship_type.name(),
            origin,
            orientation
        );
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random valid (origin, orientation) for `ship_type`.
    ///
    /// Draws row, column and orientation uniformly over the whole board, up to
    /// `MAX_PLACEMENT_ATTEMPTS` times.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Coord, Orientation), BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..GRID_SIZE as i32);
            let col = rng.random_range(0..GRID_SIZE as i32);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let origin = Coord::new(row, col);
            if self.can_place(origin, orientation, ship_type.length()) {
                return Ok((origin, orientation));
            }
        }
        trace!("no room found for {}", ship_type.name());
        Err(BoardError::UnableToPlaceShip)
    }

    /// Clear the board and place the whole fleet at random.
    ///
    /// If any ship cannot be placed the board is wiped and the fleet started
    /// over, so a partial fleet is never left behind.
    pub fn place_fleet_randomly<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for restart in 0..MAX_FLEET_RESTARTS {
            self.clear();
            match self.try_place_fleet(rng) {
                Ok(()) => return Ok(()),
                Err(e) => warn!("random fleet placement failed ({}), restart {}", e, restart + 1),
            }
        }
        self.clear();
        Err(BoardError::UnableToPlaceShip)
    }

    fn try_place_fleet<R: Rng>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for ship_type in FLEET {
            let (origin, orientation) = self.random_placement(rng, ship_type)?;
            self.place_ship(origin, orientation, ship_type)?;
        }
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Out-of-bounds and repeat shots are errors and leave the board
    /// untouched; only a first-time shot mutates a cell.
    pub fn shoot_at(&mut self, target: Coord) -> Result<ShotOutcome, BoardError> {
        let cell = self.cell(target).ok_or(BoardError::OutOfBounds)?;
        match cell {
            Cell::Hit | Cell::Miss => Err(BoardError::AlreadyShot),
            Cell::Empty => {
                self.grid[target.row as usize][target.col as usize] = Cell::Miss;
                Ok(ShotOutcome::Miss)
            }
            Cell::Ship => {
                let ship = self
                    .ships
                    .iter_mut()
                    .find(|s| s.occupies(target).is_some())
                    .ok_or(BoardError::UnknownShipHit)?;
                ship.register_hit(target);
                self.grid[target.row as usize][target.col as usize] = Cell::Hit;
                if ship.is_sunk() {
                    Ok(ShotOutcome::Sunk(ship.name()))
                } else {
                    Ok(ShotOutcome::Hit)
                }
            }
        }
    }

    /// Returns `true` when every placed ship is sunk. A board without ships
    /// counts as all sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Renderable view of the board. With `reveal == false` unshot ship
    /// cells look like open water.
    pub fn view(&self, reveal: bool) -> BoardView<'_> {
        BoardView {
            board: self,
            reveal,
        }
    }
}

/// Text rendering of a [`Board`], from its owner's or opponent's perspective.
pub struct BoardView<'a> {
    board: &'a Board,
    reveal: bool,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..GRID_SIZE {
            write!(f, "{} ", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.board.grid.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for cell in row {
                let ch = match cell {
                    Cell::Ship if self.reveal => 'S',
                    Cell::Hit => 'X',
                    Cell::Miss => 'O',
                    Cell::Empty | Cell::Ship => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
