use crate::board::Board;

/// A seat at the table: a name, a private board and a shot counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    board: Board,
    shots_taken: usize,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            board: Board::new(),
            shots_taken: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable reference to the player's board for ship placement.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Consuming shots fired so far.
    pub fn shots_taken(&self) -> usize {
        self.shots_taken
    }

    pub(crate) fn record_shot(&mut self) {
        self.shots_taken += 1;
    }
}
