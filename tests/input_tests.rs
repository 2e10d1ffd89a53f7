use battleship::input::{
    parse_coord, parse_menu_choice, parse_orientation, parse_turn_command, InputError,
};
use battleship::{Coord, MenuChoice, Orientation, TurnCommand};

#[test]
fn test_parse_coord_valid() {
    assert_eq!(parse_coord("A5"), Ok(Coord::new(4, 0)));
    assert_eq!(parse_coord("j10"), Ok(Coord::new(9, 9)));
    assert_eq!(parse_coord("  b 3 \n"), Ok(Coord::new(2, 1)));
    assert_eq!(parse_coord("C01"), Ok(Coord::new(0, 2)));
}

#[test]
fn test_parse_coord_rejects_malformed() {
    assert_eq!(parse_coord(""), Err(InputError::Empty));
    assert_eq!(parse_coord("   "), Err(InputError::Empty));
    assert_eq!(parse_coord("A"), Err(InputError::TooShort));
    assert_eq!(parse_coord("K1"), Err(InputError::InvalidColumn('K')));
    assert_eq!(parse_coord("5A"), Err(InputError::InvalidColumn('5')));
    assert_eq!(parse_coord("Ax"), Err(InputError::InvalidRow("x".to_string())));
    assert_eq!(parse_coord("A-1"), Err(InputError::InvalidRow("-1".to_string())));
    assert_eq!(parse_coord("A0"), Err(InputError::RowOutOfRange(0)));
    assert_eq!(parse_coord("A11"), Err(InputError::RowOutOfRange(11)));
}

#[test]
fn test_parse_orientation() {
    assert_eq!(parse_orientation("h"), Ok(Orientation::Horizontal));
    assert_eq!(parse_orientation(" Vertical"), Ok(Orientation::Vertical));
    assert!(matches!(
        parse_orientation("x"),
        Err(InputError::InvalidOrientation(_))
    ));
    assert_eq!(parse_orientation(""), Err(InputError::Empty));
}

#[test]
fn test_parse_menu_choice() {
    assert_eq!(parse_menu_choice("1"), Ok(MenuChoice::ManualGame));
    assert_eq!(parse_menu_choice("2\n"), Ok(MenuChoice::RandomGame));
    assert_eq!(parse_menu_choice(" 0 "), Ok(MenuChoice::Exit));
    assert_eq!(
        parse_menu_choice("5"),
        Err(InputError::InvalidChoice("5".to_string()))
    );
}

#[test]
fn test_parse_turn_command() {
    assert_eq!(parse_turn_command("p"), Ok(TurnCommand::Pause));
    assert_eq!(parse_turn_command(" Pause"), Ok(TurnCommand::Pause));
    assert_eq!(
        parse_turn_command("c7"),
        Ok(TurnCommand::Shoot(Coord::new(6, 2)))
    );
    assert!(parse_turn_command("zz").is_err());
}

#[test]
fn test_input_error_messages() {
    assert_eq!(
        InputError::InvalidColumn('K').to_string(),
        "Invalid column 'K' - must be a letter A-J"
    );
    assert_eq!(
        InputError::RowOutOfRange(11).to_string(),
        "Row 11 out of bounds - must be 1-10"
    );
}
