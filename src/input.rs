//! Parsing of console input: coordinates, orientations, menu choices and
//! in-turn commands.

use core::fmt;

use crate::common::Coord;
use crate::config::BOARD_SIZE;
use crate::ship::Orientation;

/// Why a line of input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    TooShort,
    InvalidColumn(char),
    InvalidRow(String),
    RowOutOfRange(u32),
    InvalidOrientation(String),
    InvalidChoice(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last_col = (b'A' + BOARD_SIZE - 1) as char;
        match self {
            InputError::Empty => write!(f, "Empty input"),
            InputError::TooShort => write!(
                f,
                "Too short - need column letter and row number (e.g., A5)"
            ),
            InputError::InvalidColumn(c) => {
                write!(f, "Invalid column '{}' - must be a letter A-{}", c, last_col)
            }
            InputError::InvalidRow(r) => {
                write!(f, "Invalid row '{}' - must be a number 1-{}", r, BOARD_SIZE)
            }
            InputError::RowOutOfRange(r) => {
                write!(f, "Row {} out of bounds - must be 1-{}", r, BOARD_SIZE)
            }
            InputError::InvalidOrientation(o) => {
                write!(f, "Invalid orientation '{}' - use H or V", o)
            }
            InputError::InvalidChoice(c) => write!(f, "Invalid choice '{}'", c),
        }
    }
}

impl std::error::Error for InputError {}

/// Main menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ManualGame,
    RandomGame,
    Exit,
}

/// Placement mode chosen from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    Manual,
    Random,
}

/// What a player typed at the shot prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnCommand {
    Pause,
    Shoot(Coord),
}

/// Parse `<COLUMN><ROW>`, e.g. `A5` or `j10`. Whitespace anywhere is ignored.
pub fn parse_coord(input: &str) -> Result<Coord, InputError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(InputError::Empty);
    }
    let mut chars = compact.chars();
    let col_ch = match chars.next() {
        Some(c) => c.to_ascii_uppercase(),
        None => return Err(InputError::Empty),
    };
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err(InputError::TooShort);
    }
    if !col_ch.is_ascii_uppercase() || col_ch as u32 >= (b'A' + BOARD_SIZE) as u32 {
        return Err(InputError::InvalidColumn(col_ch));
    }
    if !row_str.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::InvalidRow(row_str.to_string()));
    }
    let row: u32 = row_str
        .parse()
        .map_err(|_| InputError::InvalidRow(row_str.to_string()))?;
    if row == 0 || row > BOARD_SIZE as u32 {
        return Err(InputError::RowOutOfRange(row));
    }
    Ok(Coord::new(row as i32 - 1, (col_ch as u8 - b'A') as i32))
}

/// Parse an orientation from the first non-blank character: `H` or `V`.
pub fn parse_orientation(input: &str) -> Result<Orientation, InputError> {
    let trimmed = input.trim();
    match trimmed.chars().next().map(|c| c.to_ascii_uppercase()) {
        Some('H') => Ok(Orientation::Horizontal),
        Some('V') => Ok(Orientation::Vertical),
        Some(_) => Err(InputError::InvalidOrientation(trimmed.to_string())),
        None => Err(InputError::Empty),
    }
}

pub fn parse_menu_choice(input: &str) -> Result<MenuChoice, InputError> {
    match input.trim() {
        "1" => Ok(MenuChoice::ManualGame),
        "2" => Ok(MenuChoice::RandomGame),
        "0" => Ok(MenuChoice::Exit),
        "" => Err(InputError::Empty),
        other => Err(InputError::InvalidChoice(other.to_string())),
    }
}

/// `P` (any case) as the first character pauses; anything else must be a
/// coordinate.
pub fn parse_turn_command(input: &str) -> Result<TurnCommand, InputError> {
    let trimmed = input.trim();
    if trimmed
        .chars()
        .next()
        .is_some_and(|c| c.eq_ignore_ascii_case(&'p'))
    {
        return Ok(TurnCommand::Pause);
    }
    parse_coord(trimmed).map(TurnCommand::Shoot)
}
