//! Console front end: menu, fleet setup and the hot-seat turn loop.
//!
//! The session runs as an explicit state machine
//! `Menu -> Setup -> Playing -> GameOver -> Menu`, leaving through `Exit`
//! when the player picks it or input runs out.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use rand::rngs::SmallRng;

use crate::common::BoardError;
use crate::config::{CLEAR_LINES, FLEET};
use crate::game::{Game, GameStatus};
use crate::input::{
    parse_coord, parse_menu_choice, parse_orientation, parse_turn_command, MenuChoice,
    PlacementMode, TurnCommand,
};
use crate::player::Player;

enum AppState {
    Menu,
    Setup(PlacementMode),
    Playing(Box<Game>),
    GameOver(Box<Game>),
    Exit,
}

/// Line-oriented console session over any reader/writer pair.
pub struct ConsoleApp<R, W> {
    input: R,
    out: W,
    rng: SmallRng,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> ConsoleApp<R, W> {
    pub fn new(input: R, out: W, rng: SmallRng) -> Self {
        Self {
            input,
            out,
            rng,
            clear_screen: true,
        }
    }

    /// Enable or disable the blank-line screen clear after pauses.
    pub fn with_clear_screen(mut self, enabled: bool) -> Self {
        self.clear_screen = enabled;
        self
    }

    /// Consume the app and hand back the writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Drive the session until the player exits or input is exhausted.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut state = AppState::Menu;
        loop {
            state = match state {
                AppState::Menu => self.main_menu()?,
                AppState::Setup(mode) => self.setup(mode)?,
                AppState::Playing(game) => self.play(game)?,
                AppState::GameOver(game) => {
                    self.show_stats(&game)?;
                    AppState::Menu
                }
                AppState::Exit => {
                    info!("exiting");
                    return Ok(());
                }
            };
        }
    }

    /// Read one line, `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, msg: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{}", msg)?;
        self.out.flush()?;
        self.read_line()
    }

    /// Wait for Enter, then push the screen contents out of view. Returns
    /// `false` if input ran out.
    fn pause_clear(&mut self) -> anyhow::Result<bool> {
        if self.prompt("Press Enter...")?.is_none() {
            return Ok(false);
        }
        if self.clear_screen {
            write!(self.out, "{}", "\n".repeat(CLEAR_LINES))?;
        }
        Ok(true)
    }

    fn main_menu(&mut self) -> anyhow::Result<AppState> {
        writeln!(self.out, "=== Battleship ===")?;
        writeln!(self.out, "1) New game (manual)")?;
        writeln!(self.out, "2) New game (random)")?;
        writeln!(self.out, "0) Exit")?;
        let Some(line) = self.prompt("Choice: ")? else {
            return Ok(AppState::Exit);
        };
        Ok(match parse_menu_choice(&line) {
            Ok(MenuChoice::ManualGame) => AppState::Setup(PlacementMode::Manual),
            Ok(MenuChoice::RandomGame) => AppState::Setup(PlacementMode::Random),
            Ok(MenuChoice::Exit) => AppState::Exit,
            Err(e) => {
                writeln!(self.out, "{}", e)?;
                AppState::Menu
            }
        })
    }

    fn setup(&mut self, mode: PlacementMode) -> anyhow::Result<AppState> {
        info!("new game, {:?} placement", mode);
        let mut game = Box::new(Game::default());
        for seat in 0..2 {
            let name = game.player(seat).name().to_string();
            writeln!(self.out, "\nSetup {}", name)?;
            match mode {
                PlacementMode::Manual => {
                    if !self.manual_place_all(game.player_mut(seat))? {
                        return Ok(AppState::Exit);
                    }
                }
                PlacementMode::Random => {
                    if let Err(e) = game.place_randomly(seat, &mut self.rng) {
                        warn!("random setup for {} failed: {}", name, e);
                        writeln!(self.out, "Could not place the fleet: {}", e)?;
                        return Ok(AppState::Menu);
                    }
                    writeln!(self.out, "{} ships placed randomly.", name)?;
                }
            }
            if !self.pause_clear()? {
                return Ok(AppState::Exit);
            }
        }
        if !game.is_ready() {
            warn!("setup finished without two complete fleets");
            writeln!(self.out, "Both fleets must be complete to start.")?;
            return Ok(AppState::Menu);
        }
        Ok(AppState::Playing(game))
    }

    /// Prompt for every ship of the fleet in order. Returns `false` if input
    /// ran out before the fleet was complete.
    fn manual_place_all(&mut self, player: &mut Player) -> anyhow::Result<bool> {
        writeln!(self.out, "{} manual placement.", player.name())?;
        for ship_type in FLEET {
            loop {
                write!(self.out, "{}", player.board().view(true))?;
                writeln!(
                    self.out,
                    "Place {} (size {})",
                    ship_type.name(),
                    ship_type.length()
                )?;

                let Some(line) = self.prompt("Coordinate (A5): ")? else {
                    return Ok(false);
                };
                let origin = match parse_coord(&line) {
                    Ok(coord) => coord,
                    Err(e) => {
                        writeln!(self.out, "Invalid coordinate: {}", e)?;
                        continue;
                    }
                };

                let Some(line) = self.prompt("Orientation (H/V): ")? else {
                    return Ok(false);
                };
                let orientation = match parse_orientation(&line) {
                    Ok(o) => o,
                    Err(e) => {
                        writeln!(self.out, "Invalid orientation: {}", e)?;
                        continue;
                    }
                };

                match player
                    .board_mut()
                    .place_ship(origin, orientation, ship_type)
                {
                    Ok(()) => break,
                    Err(e) => writeln!(self.out, "Invalid placement: {}", e)?,
                }
            }
            if !self.pause_clear()? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn play(&mut self, mut game: Box<Game>) -> anyhow::Result<AppState> {
        loop {
            let current = game.player(game.current());
            let opponent = game.player(game.opponent());
            writeln!(self.out, "\n--- {} ---", current.name())?;
            writeln!(self.out, "Your board:")?;
            write!(self.out, "{}", current.board().view(true))?;
            writeln!(self.out, "\nOpponent view:")?;
            write!(self.out, "{}", opponent.board().view(false))?;

            let Some(line) = self.prompt("\nShot (A5), P=pause: ")? else {
                return Ok(AppState::Exit);
            };
            let target = match parse_turn_command(&line) {
                Ok(TurnCommand::Pause) => {
                    if !self.pause_clear()? {
                        return Ok(AppState::Exit);
                    }
                    continue;
                }
                Ok(TurnCommand::Shoot(target)) => target,
                Err(e) => {
                    writeln!(self.out, "Invalid: {}", e)?;
                    continue;
                }
            };

            let turn = match game.fire(target) {
                Ok(turn) => turn,
                Err(e @ (BoardError::AlreadyShot | BoardError::OutOfBounds)) => {
                    debug!("rejected shot at {}: {}", target, e);
                    writeln!(self.out, "{}", e)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            writeln!(self.out, "{}", turn.outcome)?;

            if let GameStatus::GameOver { winner } = turn.status {
                writeln!(self.out, "\n*** {} WINS! ***", game.player(winner).name())?;
                return Ok(AppState::GameOver(game));
            }
            if turn.shoot_again() {
                writeln!(self.out, "Shoot again!")?;
            }
        }
    }

    fn show_stats(&mut self, game: &Game) -> anyhow::Result<()> {
        writeln!(self.out, "\n=== Stats ===")?;
        for player in game.players() {
            writeln!(self.out, "{}: {} shots", player.name(), player.shots_taken())?;
        }
        Ok(())
    }
}
