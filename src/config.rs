use crate::ship::ShipType;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = fleet_cells(&FLEET);

const fn fleet_cells(fleet: &[ShipType]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < fleet.len() {
        total += fleet[i].length();
        i += 1;
    }
    total
}

/// Random (row, col, orientation) draws tried per ship before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 500;

/// Times a whole random fleet placement is restarted from an empty board.
pub const MAX_FLEET_RESTARTS: usize = 20;

/// Blank lines printed to push the previous player's board off screen.
pub const CLEAR_LINES: usize = 40;

pub const PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];
