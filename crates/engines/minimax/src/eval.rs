//! Material-only evaluation.

use chesskit_core::{Position, Side, Square};

/// Evaluates the position from the side-to-move's perspective.
///
/// Pure material sum with the classic 1/3/3/5/9 values (king 100), no
/// positional or mobility term. Positive = good for the side to move.
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0i32;
    for sq in Square::all() {
        if let Some(pc) = pos.piece_at(sq) {
            let v = pc.kind.value();
            score += if pc.side == Side::White { v } else { -v };
        }
    }
    if pos.side_to_move == Side::White {
        score
    } else {
        -score
    }
}
