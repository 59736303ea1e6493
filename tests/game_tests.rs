//! Game-level integration tests.
//!
//! These drive `FocusGame` through its public API from the standard starting
//! position: layout, turn order, move validation and reserve placement.

use focus_engine::{
    Coord, FocusError, FocusGame, InvalidMove, MoveOutcome, Piece, PlayerId, Square, Turn,
    BOARD_SIZE,
};

const R: Piece = Piece::new('R');
const G: Piece = Piece::new('G');

fn new_game() -> FocusGame {
    FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap()
}

fn sq(row: usize, col: usize) -> Square {
    Square::new(row, col).unwrap()
}

fn invalid(result: Result<MoveOutcome, FocusError>) -> InvalidMove {
    match result {
        Err(FocusError::InvalidMove(reason)) => reason,
        other => panic!("expected an invalid move, got {:?}", other),
    }
}

// =============================================================================
// Starting Position
// =============================================================================

/// Every square starts with exactly one piece in the alternating pattern.
#[test]
fn test_starting_layout() {
    let game = new_game();
    let even = [R, R, G, G, R, R];
    let odd = [G, G, R, R, G, G];

    for row in 0..BOARD_SIZE {
        let pattern = if row % 2 == 0 { even } else { odd };
        for col in 0..BOARD_SIZE {
            let pieces = game.show_pieces((row as i32, col as i32)).unwrap();
            assert_eq!(pieces, &[pattern[col]], "square ({}, {})", row, col);
        }
    }
}

/// Counters start at zero for both players.
#[test]
fn test_starting_counters() {
    let game = new_game();

    for name in ["PlayerA", "PlayerB"] {
        assert_eq!(game.show_reserve(name), Ok(0));
        assert_eq!(game.show_captured(name), Ok(0));
    }
    assert_eq!(game.turn(), Turn::NotStarted);
}

// =============================================================================
// End-to-End
// =============================================================================

/// The basic opening scenario.
#[test]
fn test_opening_scenario() {
    let mut game = new_game();

    let outcome = game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(outcome.to_string(), "successfully moved");

    assert_eq!(game.show_pieces((0, 1)), Ok(&[R, R][..]));
    assert!(game.show_pieces((0, 0)).unwrap().is_empty());
    assert_eq!(game.current_player_name(), Some("PlayerB"));
    assert_eq!(game.show_captured("PlayerA"), Ok(0));

    assert_eq!(
        invalid(game.reserved_move("PlayerA", (0, 0))),
        InvalidMove::NoReserve { player: "PlayerA".into() }
    );
    assert_eq!(game.show_reserve("PlayerA"), Ok(0));
}

/// A longer sequence from the opening that overflows a stack twice with
/// captures, once into reserve, and then plays the reserve piece.
#[test]
fn test_overflow_sequence_from_opening() {
    let mut game = new_game();
    let mut play = |name: &str, from: (i32, i32), to: (i32, i32), count: usize| {
        assert_eq!(
            game.move_piece(name, from, to, count),
            Ok(MoveOutcome::Moved),
            "{} {:?} -> {:?} x{}",
            name,
            from,
            to,
            count
        );
    };

    play("PlayerA", (0, 0), (0, 1), 1);
    play("PlayerB", (0, 2), (0, 3), 1);
    play("PlayerA", (0, 1), (0, 3), 2);
    play("PlayerB", (1, 1), (0, 1), 1);
    play("PlayerA", (1, 3), (0, 3), 1);
    play("PlayerB", (1, 0), (0, 0), 1);
    // [G, G, R, R, R] + R: the bottom G is captured.
    play("PlayerA", (0, 4), (0, 3), 1);
    play("PlayerB", (0, 1), (0, 2), 1);
    play("PlayerA", (1, 2), (1, 3), 1);
    play("PlayerB", (0, 0), (0, 1), 1);
    // [G, R, R, R, R] + R: the bottom G is captured.
    play("PlayerA", (1, 3), (0, 3), 1);
    play("PlayerB", (0, 2), (1, 2), 1);
    play("PlayerA", (0, 5), (0, 4), 1);
    play("PlayerB", (0, 1), (0, 0), 1);
    // [R, R, R, R, R] + R: the bottom R returns to reserve.
    play("PlayerA", (0, 4), (0, 3), 1);
    play("PlayerB", (0, 0), (0, 1), 1);

    assert_eq!(game.show_pieces((0, 3)), Ok(&[R, R, R, R, R][..]));
    assert_eq!(game.show_captured("PlayerA"), Ok(2));
    assert_eq!(game.show_reserve("PlayerA"), Ok(1));
    assert_eq!(game.show_captured("PlayerB"), Ok(0));

    let outcome = game.reserved_move("PlayerA", (0, 0)).unwrap();
    assert_eq!(outcome, MoveOutcome::Moved);
    assert_eq!(game.show_pieces((0, 0)), Ok(&[R][..]));
    assert_eq!(game.show_reserve("PlayerA"), Ok(0));
    assert_eq!(game.turn(), Turn::Player(PlayerId::SECOND));
}

// =============================================================================
// Turn Order
// =============================================================================

/// Whoever moves first claims the turn; turns then alternate strictly.
#[test]
fn test_turn_alternation() {
    let mut game = new_game();

    game.move_piece("PlayerB", (1, 0), (0, 0), 1).unwrap();
    assert_eq!(game.turn(), Turn::Player(PlayerId::FIRST));

    game.move_piece("PlayerA", (0, 1), (1, 1), 1).unwrap();
    assert_eq!(game.turn(), Turn::Player(PlayerId::SECOND));
}

/// Moving twice in a row fails and leaves the turn where it was.
#[test]
fn test_out_of_turn_move_rejected() {
    let mut game = new_game();
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    let before = game.state().clone();

    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 4), (0, 3), 1)),
        InvalidMove::NotYourTurn { player: "PlayerA".into() }
    );
    assert_eq!(game.state(), &before);
    assert_eq!(game.turn(), Turn::Player(PlayerId::SECOND));
}

// =============================================================================
// Validation
// =============================================================================

/// Each validation failure reports its reason.
#[test]
fn test_validation_reasons() {
    let mut game = new_game();

    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 0), (0, 0), 0)),
        InvalidMove::WrongPieceCount { requested: 0, available: 1 }
    );
    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 0), (0, 6), 6)),
        InvalidMove::OutOfRange(Coord::new(0, 6))
    );
    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 0), (0, 2), 2)),
        InvalidMove::WrongPieceCount { requested: 2, available: 1 }
    );
    assert_eq!(
        invalid(game.move_piece("PlayerA", (1, 0), (2, 0), 1)),
        InvalidMove::WrongOwner { origin: sq(1, 0) }
    );
    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 0), (1, 1), 1)),
        InvalidMove::DiagonalMove { from: sq(0, 0), to: sq(1, 1) }
    );
    assert_eq!(
        invalid(game.move_piece("PlayerA", (0, 0), (0, 3), 1)),
        InvalidMove::WrongMoveLength { distance: 3, count: 1 }
    );
}

/// Off-board coordinates are caught on every axis, including mixed signs.
#[test]
fn test_range_checks() {
    let mut game = new_game();

    for (origin, destination) in [
        ((-1, 0), (0, 0)),
        ((0, -1), (0, 0)),
        ((0, 0), (6, 0)),
        ((0, 0), (0, 6)),
        ((3, -2), (3, 0)),
        ((0, 0), (-5, 9)),
    ] {
        assert!(matches!(
            invalid(game.move_piece("PlayerA", origin, destination, 1)),
            InvalidMove::OutOfRange(_)
        ));
    }

    assert!(matches!(
        game.reserved_move("PlayerA", (6, 6)),
        Err(FocusError::InvalidMove(InvalidMove::NoReserve { .. }))
    ));
    assert!(matches!(
        game.show_pieces((0, 9)),
        Err(FocusError::InvalidMove(InvalidMove::OutOfRange(_)))
    ));
}

/// Rejected moves leave board, counters and turn untouched.
#[test]
fn test_rejected_moves_are_atomic() {
    let mut game = new_game();
    game.move_piece("PlayerA", (0, 0), (0, 1), 1).unwrap();
    let before = game.state().clone();

    let attempts: [(&str, (i32, i32), (i32, i32), usize); 6] = [
        ("PlayerB", (1, 0), (1, 0), 1),
        ("PlayerB", (1, 0), (2, 1), 1),
        ("PlayerB", (0, 1), (0, 2), 1),
        ("PlayerB", (1, 0), (4, 0), 3),
        ("PlayerB", (0, 0), (1, 0), 1),
        ("Nobody", (1, 0), (2, 0), 1),
    ];
    for (name, from, to, count) in attempts {
        assert!(game.move_piece(name, from, to, count).is_err());
        assert_eq!(game.state(), &before);
    }
}

/// Unknown names fail every query.
#[test]
fn test_unknown_player_queries() {
    let game = new_game();

    assert_eq!(
        game.show_reserve("PlayerC"),
        Err(FocusError::InvalidPlayer("PlayerC".into()))
    );
    assert_eq!(
        game.show_captured("PlayerC"),
        Err(FocusError::InvalidPlayer("PlayerC".into()))
    );
    assert!(game.player("PlayerC").is_err());
}
