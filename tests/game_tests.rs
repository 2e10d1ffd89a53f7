use battleship::prelude::*;
use battleship::BOARD_SIZE;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

const CARRIER: usize = 0;
const CRUISER: usize = 2;
const DESTROYER: usize = 4;

fn small_game() -> Game {
    let mut game = Game::default();
    game.player_mut(0)
        .board_mut()
        .place_ship(Coord::new(0, 0), Orientation::Horizontal, FLEET[CARRIER])
        .unwrap();
    let opponent = game.player_mut(1).board_mut();
    opponent
        .place_ship(Coord::new(0, 0), Orientation::Horizontal, FLEET[DESTROYER])
        .unwrap();
    opponent
        .place_ship(Coord::new(5, 5), Orientation::Vertical, FLEET[CRUISER])
        .unwrap();
    game
}

#[test]
fn test_hit_keeps_turn_miss_passes_it() {
    let mut game = small_game();
    assert_eq!(game.status(), GameStatus::AwaitingShot { current: 0 });

    let turn = game.fire(Coord::new(0, 0)).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Hit);
    assert!(turn.shoot_again());
    assert_eq!(game.current(), 0);
    assert_eq!(game.player(0).shots_taken(), 1);

    let turn = game.fire(Coord::new(9, 9)).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Miss);
    assert!(!turn.shoot_again());
    assert_eq!(game.status(), GameStatus::AwaitingShot { current: 1 });
    assert_eq!(game.opponent(), 0);

    let turn = game.fire(Coord::new(9, 9)).unwrap();
    assert_eq!(turn.shooter, 1);
    assert_eq!(game.current(), 0);
    assert_eq!(game.player(1).shots_taken(), 1);
}

#[test]
fn test_rejected_shots_consume_nothing() {
    let mut game = small_game();
    game.fire(Coord::new(0, 0)).unwrap();
    game.fire(Coord::new(3, 3)).unwrap();
    game.fire(Coord::new(3, 3)).unwrap();
    assert_eq!(game.current(), 0);

    assert_eq!(game.fire(Coord::new(0, 0)).unwrap_err(), BoardError::AlreadyShot);
    assert_eq!(game.fire(Coord::new(3, 3)).unwrap_err(), BoardError::AlreadyShot);
    assert_eq!(game.fire(Coord::new(-1, 0)).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(game.fire(Coord::new(10, 0)).unwrap_err(), BoardError::OutOfBounds);

    assert_eq!(game.current(), 0);
    assert_eq!(game.player(0).shots_taken(), 2);
    assert_eq!(game.player(1).shots_taken(), 1);
}

#[test]
fn test_sinking_last_ship_ends_game() {
    let mut game = small_game();
    game.fire(Coord::new(0, 0)).unwrap();
    let turn = game.fire(Coord::new(0, 1)).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Sunk("Destroyer"));
    assert_eq!(turn.status, GameStatus::AwaitingShot { current: 0 });
    assert!(game.winner().is_none());

    game.fire(Coord::new(5, 5)).unwrap();
    game.fire(Coord::new(6, 5)).unwrap();
    let turn = game.fire(Coord::new(7, 5)).unwrap();
    assert_eq!(turn.outcome, ShotOutcome::Sunk("Cruiser"));
    assert_eq!(turn.status, GameStatus::GameOver { winner: 0 });
    assert!(!turn.shoot_again());
    assert_eq!(game.winner().map(|p| p.name()), Some("Player 1"));
    assert_eq!(game.player(0).shots_taken(), 5);

    assert_eq!(game.fire(Coord::new(9, 9)).unwrap_err(), BoardError::GameOver);
    assert_eq!(game.player(0).shots_taken(), 5);
}

#[test]
fn test_place_randomly_readies_both_boards() {
    let mut game = Game::default();
    assert!(!game.is_ready());
    let mut rng = SmallRng::seed_from_u64(99);
    game.place_randomly(0, &mut rng).unwrap();
    assert!(!game.is_ready());
    game.place_randomly(1, &mut rng).unwrap();
    assert!(game.is_ready());
    assert_ne!(game.player(0).board(), game.player(1).board());
}

#[test]
fn test_partial_manual_fleet_is_not_ready() {
    let game = small_game();
    assert!(!game.is_ready());
}

#[test]
fn test_full_random_game() {
    let n = BOARD_SIZE as i32;
    let mut rng = SmallRng::seed_from_u64(123);
    let mut game = Game::new("Alice", "Bob");
    game.place_randomly(0, &mut rng).unwrap();
    game.place_randomly(1, &mut rng).unwrap();

    let mut targets: [Vec<Coord>; 2] = core::array::from_fn(|_| {
        let mut all: Vec<Coord> = (0..n)
            .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
            .collect();
        all.shuffle(&mut rng);
        all
    });

    let mut turns = 0;
    let winner = loop {
        turns += 1;
        assert!(turns <= 200, "game took too many shots");
        let seat = game.current();
        let target = targets[seat].pop().unwrap();
        let turn = game.fire(target).unwrap();
        if let GameStatus::GameOver { winner } = turn.status {
            break winner;
        }
    };

    let loser = 1 - winner;
    assert!(game.player(loser).board().all_sunk());
    assert!(!game.player(winner).board().all_sunk());
    assert!(game.player(winner).shots_taken() >= 17);

    // every consuming shot resolved exactly one cell
    for seat in 0..2 {
        let shot_cells = (0..n)
            .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
            .filter(|&p| {
                matches!(
                    game.player(1 - seat).board().cell(p),
                    Some(Cell::Hit | Cell::Miss)
                )
            })
            .count();
        assert_eq!(shot_cells, game.player(seat).shots_taken());
    }
}
