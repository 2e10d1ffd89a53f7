//! Ship definitions and per-segment hit tracking.

use core::fmt;

use crate::common::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub const fn length(&self) -> usize {
        self.length
    }
}

/// A placed ship: the cells it covers and which of them have been hit.
///
/// `coords` and `hits` are parallel and always `length` long.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    coords: Vec<Coord>,
    hits: Vec<bool>,
}

impl Ship {
    /// Lay out `ship_type` from `origin` along `orientation`.
    ///
    /// No bounds or overlap checks happen here; the board validates before
    /// constructing.
    pub fn new(ship_type: ShipType, origin: Coord, orientation: Orientation) -> Self {
        let coords = (0..ship_type.length())
            .map(|i| origin.offset(orientation, i))
            .collect();
        Ship {
            ship_type,
            coords,
            hits: vec![false; ship_type.length()],
        }
    }

    /// Index of the segment at `point`, if this ship covers it.
    pub fn occupies(&self, point: Coord) -> Option<usize> {
        self.coords.iter().position(|&c| c == point)
    }

    /// Mark the segment at `point` as hit. Returns `false` if the ship does
    /// not cover `point`.
    pub fn register_hit(&mut self, point: Coord) -> bool {
        match self.occupies(point) {
            Some(idx) => {
                self.hits[idx] = true;
                true
            }
            None => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.iter().all(|&h| h)
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    /// Occupied cells, in order from the origin.
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, length: {}, hits: {} }}",
            self.ship_type.name(),
            self.coords.first().map_or(Coord::new(-1, -1), |c| *c),
            self.ship_type.length(),
            self.hit_count(),
        )
    }
}
