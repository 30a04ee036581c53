use crate::{board::Position, types::*};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Pseudo-legal moves for the piece on `from`. Empty when the square is
/// vacant. Moves may still leave the mover's own king in check; see
/// `attacks::legal_moves_from` for the filtered set.
pub fn pseudo_legal_moves(pos: &Position, from: Square) -> Vec<Move> {
    let mut out = Vec::new();
    if let Some(pc) = pos.piece_at(from) {
        gen_piece(pos, from, pc, true, &mut out);
    }
    out
}

/// Pseudo-legal moves for every piece of `side`, appended to `out`.
pub fn pseudo_moves_for(pos: &Position, side: Side, out: &mut Vec<Move>) {
    for from in Square::all() {
        if let Some(pc) = pos.piece_at(from)
            && pc.side == side
        {
            gen_piece(pos, from, pc, true, out);
        }
    }
}

/// Pseudo-legal moves of one piece without castling candidates. Used by
/// the attack query, which must not recurse back into attack testing.
pub(crate) fn piece_pseudo_no_castle(pos: &Position, from: Square, pc: Piece, out: &mut Vec<Move>) {
    gen_piece(pos, from, pc, false, out);
}

fn gen_piece(pos: &Position, from: Square, pc: Piece, include_castle: bool, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.side, out),
        PieceKind::Knight => gen_steps(pos, from, pc.side, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc.side, &DIAG_DIRS, out),
        PieceKind::Rook => gen_slider(pos, from, pc.side, &ORTHO_DIRS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.side, &DIAG_DIRS, out);
            gen_slider(pos, from, pc.side, &ORTHO_DIRS, out);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc.side, &KING_DELTAS, out);
            if include_castle {
                gen_castle(pos, from, pc, out);
            }
        }
    }
}

fn gen_pawn(pos: &Position, from: Square, side: Side, out: &mut Vec<Move>) {
    let dir = Position::pawn_dir(side);
    let start_rank: i8 = match side {
        Side::White => 1,
        Side::Black => 6,
    };

    // Forward steps, blocked by any occupant. No promotion: a pawn on the
    // last rank simply has no forward squares left.
    if let Some(to) = from.offset(0, dir)
        && pos.piece_at(to).is_none()
    {
        out.push(Move::new(from, to));

        if from.rank() == start_rank
            && let Some(to2) = from.offset(0, 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            out.push(Move::new(from, to2));
        }
    }

    // Diagonal captures, plus en passant onto the skipped square.
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, dir) {
            match pos.piece_at(to) {
                Some(tpc) if tpc.side != side => out.push(Move::new(from, to)),
                None if pos.en_passant == Some(to) => {
                    let mut mv = Move::new(from, to);
                    mv.is_en_passant = true;
                    out.push(mv);
                }
                _ => {}
            }
        }
    }
}

fn gen_steps(pos: &Position, from: Square, side: Side, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.side != side => out.push(Move::new(from, to)),
                _ => {}
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, side: Side, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(df, dr) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(df, dr) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to)),
                Some(pc) if pc.side != side => {
                    // Ray stops at the first occupant, inclusive of a capture.
                    out.push(Move::new(from, to));
                    break;
                }
                _ => break,
            }
            cur = to;
        }
    }
}

fn gen_castle(pos: &Position, from: Square, king: Piece, out: &mut Vec<Move>) {
    // The rook/transit squares below assume the e1/e8 home square; a
    // hand-built position can flag a king elsewhere as unmoved, so both
    // coordinates are checked.
    let home_rank: i8 = match king.side {
        Side::White => 0,
        Side::Black => 7,
    };
    if king.has_moved || from.file() != 4 || from.rank() != home_rank {
        return;
    }
    let rank = from.rank();
    let enemy = king.side.other();

    // The attack probes must see through the king's origin square, so the
    // king is lifted off a scratch copy for the duration of the tests.
    let mut probe = pos.clone();
    probe.set_piece(from, None);

    // (rook file, files that must be empty, king transit file, king final file)
    let wings: [(i8, &[i8], i8, i8); 2] = [(7, &[5, 6], 5, 6), (0, &[1, 2, 3], 3, 2)];

    for (rook_file, between, transit_file, final_file) in wings {
        let rook_sq = match Square::new(rook_file, rank) {
            Some(s) => s,
            None => continue,
        };
        let eligible = matches!(
            pos.piece_at(rook_sq),
            Some(r) if r.side == king.side && r.kind == PieceKind::Rook && !r.has_moved
        );
        if !eligible {
            continue;
        }
        if between
            .iter()
            .any(|&f| Square::new(f, rank).is_some_and(|s| pos.piece_at(s).is_some()))
        {
            continue;
        }

        let transit = Square::new(transit_file, rank).expect("castle transit square");
        let dest = Square::new(final_file, rank).expect("castle destination square");
        if [from, transit, dest]
            .iter()
            .any(|&s| probe.is_square_attacked(s, enemy))
        {
            continue;
        }

        let mut mv = Move::new(from, dest);
        mv.is_castle = true;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
