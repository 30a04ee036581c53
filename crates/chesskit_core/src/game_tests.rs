use super::*;

fn sq(coord: &str) -> Square {
    Square::from_coord(coord).unwrap()
}

#[test]
fn test_new_game_in_progress() {
    let game = Game::new();
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_over());
    assert_eq!(game.side_to_move(), Side::White);
    assert!(game.captured().is_empty());
}

#[test]
fn test_select_exposes_legal_destinations() {
    let game = Game::new();
    let mut dests = game.select(sq("e2"));
    dests.sort();
    assert_eq!(dests, vec![sq("e3"), sq("e4")]);
}

#[test]
fn test_select_wrong_side_is_noop() {
    let game = Game::new();
    assert!(game.select(sq("e7")).is_empty());
    assert!(game.select(sq("e5")).is_empty(), "vacant square");
}

#[test]
fn test_try_move_rejections_leave_state_unchanged() {
    let mut game = Game::new();
    let before = game.position().clone();

    assert_eq!(
        game.try_move(sq("e5"), sq("e6")),
        Err(MoveError::EmptySquare(sq("e5")))
    );
    assert_eq!(
        game.try_move(sq("e7"), sq("e5")),
        Err(MoveError::WrongSide(sq("e7")))
    );
    assert_eq!(
        game.try_move(sq("e2"), sq("e5")),
        Err(MoveError::Illegal(sq("e2"), sq("e5")))
    );
    assert_eq!(
        game.try_move(sq("e1"), sq("e2")),
        Err(MoveError::Illegal(sq("e1"), sq("e2"))),
        "own-piece destination"
    );

    assert_eq!(game.position(), &before);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_capture_is_reported_and_tracked() {
    let mut game = Game::new();
    game.try_move(sq("e2"), sq("e4")).unwrap();
    game.try_move(sq("d7"), sq("d5")).unwrap();
    let outcome = game.try_move(sq("e4"), sq("d5")).unwrap();

    assert_eq!(outcome.captured.map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(outcome.captured.map(|p| p.side), Some(Side::Black));
    assert_eq!(game.captured().len(), 1);
    assert_eq!(game.last_move().map(|m| m.to), Some(sq("d5")));
}

#[test]
fn test_en_passant_outcome_flags() {
    let mut game = Game::new();
    for (f, t) in [("e2", "e4"), ("a7", "a6"), ("e4", "e5"), ("d7", "d5")] {
        game.try_move(sq(f), sq(t)).unwrap();
    }
    let outcome = game.try_move(sq("e5"), sq("d6")).unwrap();
    assert!(outcome.mv.is_en_passant);
    assert_eq!(outcome.en_passant_capture, Some(sq("d5")));
    assert_eq!(outcome.captured.map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_castle_outcome_flags() {
    let mut game = Game::from_fen("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1").unwrap();
    let outcome = game.try_move(sq("e1"), sq("g1")).unwrap();
    assert!(outcome.mv.is_castle);
    assert_eq!(outcome.rook_move, Some((sq("h1"), sq("f1"))));
    assert!(outcome.captured.is_none());
}

#[test]
fn test_check_status_announced() {
    // 1. e4 e5 2. Bc4 Nc6 3. Qh5 Nf6 4. Qxf7+ (also a capture)
    let mut game = Game::new();
    for (f, t) in [
        ("e2", "e4"),
        ("e7", "e5"),
        ("f1", "c4"),
        ("b8", "c6"),
        ("d1", "h5"),
        ("g8", "f6"),
    ] {
        game.try_move(sq(f), sq(t)).unwrap();
    }
    let outcome = game.try_move(sq("h5"), sq("f7")).unwrap();
    assert_eq!(outcome.status, GameStatus::Check);
    assert!(!game.is_over());
}

#[test]
fn test_fools_mate_is_checkmate() {
    let mut game = Game::new();
    game.try_move(sq("f2"), sq("f3")).unwrap();
    game.try_move(sq("e7"), sq("e5")).unwrap();
    game.try_move(sq("g2"), sq("g4")).unwrap();
    let outcome = game.try_move(sq("d8"), sq("h4")).unwrap();

    assert_eq!(outcome.status, GameStatus::Checkmate(Side::Black));
    assert_eq!(game.status(), GameStatus::Checkmate(Side::Black));
    assert!(game.is_over());

    // The machine is frozen: any further move is rejected.
    assert_eq!(
        game.try_move(sq("e2"), sq("e4")),
        Err(MoveError::GameOver)
    );
    assert!(game.select(sq("e2")).is_empty());
}

#[test]
fn test_stalemate_from_fen() {
    let game = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert_eq!(game.status(), GameStatus::Stalemate);
    assert!(game.is_over());
}

#[test]
fn test_from_fen_rejects_malformed() {
    assert!(Game::from_fen("garbage").is_err());
}
