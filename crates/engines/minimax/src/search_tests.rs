use super::*;
use chesskit_core::{Position, Square, decode};

fn sq(coord: &str) -> Square {
    Square::from_coord(coord).unwrap()
}

fn unlimited() -> TimeBudget {
    let budget = TimeBudget::new(None);
    budget.start();
    budget
}

// Exhaustive negamax without the alpha-beta window, over the same move
// ordering. Serves as the oracle for the pruning search.
fn plain_negamax(pos: &mut Position, depth: u8) -> i32 {
    if depth == 0 {
        return evaluate(pos);
    }
    let mover = pos.side_to_move;
    let mut best = i32::MIN / 2;
    let mut any_legal = false;
    for mv in ordered_moves(pos) {
        let undo = pos.make_move(mv);
        if pos.in_check(mover) {
            pos.unmake_move(mv, undo);
            continue;
        }
        any_legal = true;
        let score = -plain_negamax(pos, depth - 1);
        pos.unmake_move(mv, undo);
        if score > best {
            best = score;
        }
    }
    if !any_legal {
        return if pos.in_check(mover) { MATE_SCORE } else { 0 };
    }
    best
}

fn plain_best(pos: &Position, depth: u8) -> Option<(Move, i32)> {
    let mut tmp = pos.clone();
    let mover = tmp.side_to_move;
    let mut best: Option<(Move, i32)> = None;
    for mv in ordered_moves(&tmp) {
        let undo = tmp.make_move(mv);
        if tmp.in_check(mover) {
            tmp.unmake_move(mv, undo);
            continue;
        }
        let score = -plain_negamax(&mut tmp, depth - 1);
        tmp.unmake_move(mv, undo);
        // First strictly highest wins, as in the pruning search.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

#[test]
fn test_finds_mate_in_one() {
    let pos = decode("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut nodes = 0;
    let outcome = pick_best_move(&pos, 2, &mut nodes, &unlimited());
    let (mv, score) = outcome.best_move.unwrap();
    assert_eq!(mv.to, sq("e8"), "Qe8 is mate");
    assert_eq!(score, -MATE_SCORE);
}

#[test]
fn test_black_grabs_the_hanging_queen() {
    // Search maximizes for the side to move, also when that side is Black.
    let pos = decode("3qk3/8/8/3Q4/8/8/8/4K3 b - - 0 1").unwrap();
    let mut nodes = 0;
    let outcome = pick_best_move(&pos, 2, &mut nodes, &unlimited());
    let (mv, score) = outcome.best_move.unwrap();
    assert_eq!((mv.from, mv.to), (sq("d8"), sq("d5")));
    assert!(score > 0);
}

#[test]
fn test_no_legal_moves_yields_no_best_move() {
    // Stalemate at the root.
    let pos = decode("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    let mut nodes = 0;
    let outcome = pick_best_move(&pos, 3, &mut nodes, &unlimited());
    assert!(outcome.best_move.is_none());
    assert!(!outcome.stopped);
}

#[test]
fn test_pruning_matches_plain_minimax() {
    // Same depth, same evaluation, same ordering: the alpha-beta search
    // must land on the same move and score as the exhaustive one. Equal
    // scores resolve to the first move in ordering in both searches, so
    // the comparison is exact (the tie-break is an iteration artifact,
    // pinned here on purpose).
    let fens = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "3qk3/8/8/3Q4/8/8/8/4K3 b - - 0 1",
    ];
    for fen in fens {
        let pos = decode(fen).unwrap();
        let mut nodes = 0;
        let pruned = pick_best_move(&pos, 2, &mut nodes, &unlimited())
            .best_move
            .unwrap();
        let exhaustive = plain_best(&pos, 2).unwrap();
        assert_eq!(pruned, exhaustive, "divergence on {fen}");
    }
}

#[test]
fn test_capture_ordering_prefers_valuable_victims() {
    // Pawn takes queen must sort ahead of pawn takes knight and quiets.
    let pos = decode("4k3/8/8/2q1n3/3P4/8/8/4K3 w - - 0 1").unwrap();
    let moves = ordered_moves(&pos);
    assert_eq!((moves[0].from, moves[0].to), (sq("d4"), sq("c5")));
    assert_eq!((moves[1].from, moves[1].to), (sq("d4"), sq("e5")));
}

#[test]
fn test_blown_budget_still_returns_a_move() {
    let pos = Position::startpos();
    let budget = TimeBudget::new(Some(std::time::Duration::ZERO));
    budget.start();
    let mut nodes = 0;
    let outcome = pick_best_move(&pos, 3, &mut nodes, &budget);
    assert!(outcome.best_move.is_some(), "a usable move survives the deadline");
    assert!(outcome.stopped);
}

#[test]
fn test_simulation_leaves_position_unchanged() {
    let pos = decode("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1").unwrap();
    let before = pos.clone();
    let mut nodes = 0;
    pick_best_move(&pos, 2, &mut nodes, &unlimited());
    assert_eq!(pos, before);
}
