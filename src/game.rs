//! Turn state machine for a two-player match.

use log::{debug, info};
use rand::Rng;

use crate::common::{BoardError, Coord, ShotOutcome};
use crate::config::{NUM_SHIPS, PLAYER_NAMES};
use crate::player::Player;

/// Current status of a game. Players are referred to by seat index (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingShot { current: usize },
    GameOver { winner: usize },
}

/// What a consuming shot did and where the game stands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnResult {
    pub shooter: usize,
    pub target: Coord,
    pub outcome: ShotOutcome,
    pub status: GameStatus,
}

impl TurnResult {
    /// The shooter keeps the turn after a hit that did not end the game.
    pub fn shoot_again(&self) -> bool {
        matches!(self.status, GameStatus::AwaitingShot { current } if current == self.shooter)
    }
}

/// A single match: both players and whose turn it is.
#[derive(Clone, Debug)]
pub struct Game {
    players: [Player; 2],
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(PLAYER_NAMES[0], PLAYER_NAMES[1])
    }
}

impl Game {
    /// Start a match with two empty boards; player 1 shoots first.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            players: [Player::new(first), Player::new(second)],
            status: GameStatus::AwaitingShot { current: 0 },
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: usize) -> &mut Player {
        &mut self.players[seat]
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seat index of the player to shoot, or the winner once the game is over.
    pub fn current(&self) -> usize {
        match self.status {
            GameStatus::AwaitingShot { current } => current,
            GameStatus::GameOver { winner } => winner,
        }
    }

    pub fn opponent(&self) -> usize {
        1 - self.current()
    }

    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::GameOver { winner } => Some(&self.players[winner]),
            GameStatus::AwaitingShot { .. } => None,
        }
    }

    /// Both boards carry the complete fleet.
    pub fn is_ready(&self) -> bool {
        self.players
            .iter()
            .all(|p| p.board().ships().len() == NUM_SHIPS)
    }

    /// Replace the fleet of the player in `seat` with a random one.
    pub fn place_randomly<R: Rng>(&mut self, seat: usize, rng: &mut R) -> Result<(), BoardError> {
        let player = &mut self.players[seat];
        player.board_mut().place_fleet_randomly(rng)?;
        debug!("{} ships placed randomly", player.name());
        Ok(())
    }

    /// Fire the current player's shot at the opponent's board.
    ///
    /// Out-of-bounds and repeat shots return an error and change nothing: the
    /// shot counter stays put and the same player is still to move.
    pub fn fire(&mut self, target: Coord) -> Result<TurnResult, BoardError> {
        let current = match self.status {
            GameStatus::AwaitingShot { current } => current,
            GameStatus::GameOver { .. } => return Err(BoardError::GameOver),
        };
        let opponent = 1 - current;

        let outcome = self.players[opponent].board_mut().shoot_at(target)?;
        self.players[current].record_shot();
        debug!("{} fires at {}: {:?}", self.players[current].name(), target, outcome);

        self.status = if !outcome.is_hit() {
            GameStatus::AwaitingShot { current: opponent }
        } else if self.players[opponent].board().all_sunk() {
            info!("{} wins", self.players[current].name());
            GameStatus::GameOver { winner: current }
        } else {
            GameStatus::AwaitingShot { current }
        };

        Ok(TurnResult {
            shooter: current,
            target,
            outcome,
            status: self.status,
        })
    }
}
