//! Negamax search with alpha-beta pruning and a soft wall-clock deadline.

use chesskit_core::{Move, Position, TimeBudget, pseudo_moves_for};

use crate::eval::evaluate;

/// Score for a position where the side to move is checkmated. Well beyond
/// any reachable material sum.
const MATE_SCORE: i32 = -100_000;

/// Result from `pick_best_move` indicating whether search completed or was
/// cut short by the time budget.
pub struct SearchOutcome {
    /// Best move found (None only when no legal move exists at the root)
    pub best_move: Option<(Move, i32)>,
    /// True if the budget expired before the search finished
    pub stopped: bool,
}

/// Search depth in plies: cheaper when the root branches wide, to stay
/// inside the move-time budget.
pub fn depth_for_branching(root_legal_moves: usize) -> u8 {
    if root_legal_moves > 20 { 2 } else { 3 }
}

/// Move-ordering heuristic: captures first, most valuable victim with the
/// least valuable attacker. Quiet moves score 0.
fn order_score(pos: &Position, mv: Move) -> i32 {
    let victim = if mv.is_en_passant {
        // The victim pawn is not on the landing square.
        chesskit_core::PieceKind::Pawn.value()
    } else {
        match pos.piece_at(mv.to) {
            Some(pc) => pc.kind.value(),
            None => return 0,
        }
    };
    let attacker = pos
        .piece_at(mv.from)
        .map(|pc| pc.kind.value())
        .unwrap_or(0);
    10 * victim - attacker
}

/// Pseudo-legal moves for the node's side, best ordering score first.
/// The sort is stable, so equally scored moves keep generation order —
/// which is what makes the root's first-found tie-breaking deterministic.
fn ordered_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    pseudo_moves_for(pos, pos.side_to_move, &mut moves);
    moves.sort_by_key(|&mv| std::cmp::Reverse(order_score(pos, mv)));
    moves
}

/// Searches the position and returns the best move with its score.
///
/// The root plays every pseudo-legal move, skips those that leave its own
/// king in check, and keeps the first strictly highest score. The deadline
/// is checked after each root move, so whenever at least one legal move
/// exists the outcome carries one even on a blown budget.
pub fn pick_best_move(
    pos: &Position,
    depth: u8,
    nodes: &mut u64,
    budget: &TimeBudget,
) -> SearchOutcome {
    let mut tmp = pos.clone();
    let mover = tmp.side_to_move;
    let moves = ordered_moves(&tmp);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = i32::MIN / 2;
    let beta = i32::MAX / 2;
    let mut stopped = false;

    for mv in moves {
        let undo = tmp.make_move(mv);
        *nodes += 1;

        if tmp.in_check(mover) {
            tmp.unmake_move(mv, undo);
            continue;
        }

        let (child, child_stopped) =
            negamax(&mut tmp, depth.saturating_sub(1), -beta, -alpha, nodes, budget);
        let score = -child;
        tmp.unmake_move(mv, undo);

        // A stopped child still yields a usable (shallower) evaluation.
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((mv, score));
        }
        if score > alpha {
            alpha = score;
        }

        // Deadline check comes after the move so a blown budget still
        // leaves a usable best move behind.
        if child_stopped || budget.check_time() {
            stopped = true;
            break;
        }
    }

    SearchOutcome { best_move: best, stopped }
}

/// Recursive negamax with alpha-beta pruning.
///
/// Returns (score, stopped). On a blown budget the node returns its static
/// evaluation and the flag unwinds the recursion normally.
fn negamax(
    pos: &mut Position,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    nodes: &mut u64,
    budget: &TimeBudget,
) -> (i32, bool) {
    if budget.should_check_time(*nodes) && budget.check_time() {
        return (evaluate(pos), true);
    }
    if depth == 0 {
        return (evaluate(pos), false);
    }

    let mover = pos.side_to_move;
    let mut best = i32::MIN / 2;
    let mut any_legal = false;

    for mv in ordered_moves(pos) {
        let undo = pos.make_move(mv);
        *nodes += 1;

        if pos.in_check(mover) {
            pos.unmake_move(mv, undo);
            continue;
        }
        any_legal = true;

        let (child, stopped) = negamax(pos, depth - 1, -beta, -alpha, nodes, budget);
        let score = -child;
        pos.unmake_move(mv, undo);

        if score > best {
            best = score;
        }
        if best > alpha {
            alpha = best;
        }
        if stopped {
            return (best, true);
        }
        if alpha >= beta {
            break;
        }
    }

    if !any_legal {
        // Mate or stalemate right at this node.
        if pos.in_check(mover) {
            return (MATE_SCORE, false);
        }
        return (0, false);
    }

    (best, false)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
