//! Legality engine: attack queries and check-filtered move sets.
//!
//! Pseudo-legal moves come from `movegen`; everything here is about whether
//! a move leaves the mover's own king safe.

use crate::{
    board::Position,
    movegen::{piece_pseudo_no_castle, pseudo_legal_moves, pseudo_moves_for},
    types::*,
};

impl Position {
    /// True iff any piece of `by` attacks `target`.
    ///
    /// Defined through pseudo-legal enumeration (castling excluded, king
    /// safety ignored) so the same movement rules drive movement and attack
    /// detection. Pawns are the exception: their capture moves are only
    /// generated onto occupied squares, so the two diagonal attack offsets
    /// are tested directly, and their pushes never attack anything.
    pub fn is_square_attacked(&self, target: Square, by: Side) -> bool {
        let back = -Position::pawn_dir(by);
        for df in [-1, 1] {
            if let Some(s) = target.offset(df, back)
                && let Some(pc) = self.piece_at(s)
                && pc.side == by
                && pc.kind == PieceKind::Pawn
            {
                return true;
            }
        }

        let mut buf = Vec::new();
        for from in Square::all() {
            let pc = match self.piece_at(from) {
                Some(p) if p.side == by && p.kind != PieceKind::Pawn => p,
                _ => continue,
            };
            buf.clear();
            piece_pseudo_no_castle(self, from, pc, &mut buf);
            if buf.iter().any(|mv| mv.to == target) {
                return true;
            }
        }
        false
    }

    /// True iff `side`'s king is attacked.
    pub fn in_check(&self, side: Side) -> bool {
        let ksq = self.king_square(side);
        self.is_square_attacked(ksq, side.other())
    }
}

/// All legal moves for `side`, freshly allocated.
/// Internally delegates to `legal_moves_into`, cloning the position once.
pub fn legal_moves(pos: &Position, side: Side) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, side, &mut out);
    out
}

/// All legal moves for `side`, into the provided buffer. Filtering plays
/// each pseudo-legal move on the mutable position and undoes it; the
/// position is bit-identical afterwards.
pub fn legal_moves_into(pos: &mut Position, side: Side, out: &mut Vec<Move>) {
    out.clear();
    pseudo_moves_for(pos, side, out);
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let safe = !pos.in_check(side);
        pos.unmake_move(mv, undo);
        safe
    });
}

/// Legal destination moves for the single piece on `from`.
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let side = match pos.piece_at(from) {
        Some(pc) => pc.side,
        None => return Vec::new(),
    };
    let mut tmp = pos.clone();
    let mut out = pseudo_legal_moves(&tmp, from);
    out.retain(|&mv| {
        let undo = tmp.make_move(mv);
        let safe = !tmp.in_check(side);
        tmp.unmake_move(mv, undo);
        safe
    });
    out
}

/// Short-circuiting legal-move probe for checkmate/stalemate detection;
/// stops at the first move that leaves the king safe.
pub fn has_any_legal_move(pos: &Position, side: Side) -> bool {
    let mut tmp = pos.clone();
    let mut pseudo = Vec::with_capacity(64);
    pseudo_moves_for(&tmp, side, &mut pseudo);
    for mv in pseudo {
        let undo = tmp.make_move(mv);
        let safe = !tmp.in_check(side);
        tmp.unmake_move(mv, undo);
        if safe {
            return true;
        }
    }
    false
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
