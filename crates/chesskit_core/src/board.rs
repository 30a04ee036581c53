use crate::types::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Full game position: board, side to move, en-passant target and move
/// counters. Mutated in place by `make_move` / `unmake_move`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Side,
    /// Square skipped by a pawn double-step on the previous half-move.
    /// Non-null for exactly one ply.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

/// State clobbered by `make_move`, needed to restore the exact
/// pre-move position (including `has_moved` flags) on `unmake_move`.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    /// Square the captured pawn actually stood on for en-passant captures
    /// (one rank behind the landing square).
    pub ep_captured_sq: Option<Square>,
    /// (rook_from, rook_to) when the move castled.
    pub rook_move: Option<(Square, Square)>,
    pub prev_en_passant: Option<Square>,
    pub moved_had_moved: bool,
    pub prev_halfmove_clock: u32,
    pub prev_fullmove_number: u32,
}

impl Position {
    pub fn empty() -> Self {
        Position {
            board: [None; 64],
            side_to_move: Side::White,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn startpos() -> Self {
        let mut p = Position::empty();

        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Side::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Side::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Side::White, kind));
            p.board[56 + f] = Some(Piece::new(Side::Black, kind));
        }
        p
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq.index()] = pc;
    }

    /// Locate a side's king. Exactly one king per side must exist while the
    /// game is active; a missing king is a board-invariant violation and
    /// panics rather than degrading silently.
    pub fn king_square(&self, side: Side) -> Square {
        for sq in Square::all() {
            if let Some(pc) = self.piece_at(sq)
                && pc.side == side
                && pc.kind == PieceKind::King
            {
                return sq;
            }
        }
        panic!("board invariant violated: no {side:?} king");
    }

    /// Pawn advance direction in ranks.
    pub fn pawn_dir(side: Side) -> i8 {
        match side {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Apply a move. The caller is responsible for the move being at least
    /// pseudo-legal; legality filtering happens in `attacks::legal_moves`.
    pub fn make_move(&mut self, mv: Move) -> Undo {
        let moved = self
            .piece_at(mv.from)
            .expect("make_move: no piece on from-square");
        let mut captured = self.piece_at(mv.to);
        let prev_en_passant = self.en_passant;
        let prev_halfmove_clock = self.halfmove_clock;
        let prev_fullmove_number = self.fullmove_number;

        self.en_passant = None;

        // En-passant capture removes the pawn behind the landing square.
        let mut ep_captured_sq = None;
        if mv.is_en_passant {
            let back = -Self::pawn_dir(moved.side);
            if let Some(cs) = mv.to.offset(0, back) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
            }
        }

        self.set_piece(mv.from, None);
        self.set_piece(
            mv.to,
            Some(Piece {
                has_moved: true,
                ..moved
            }),
        );

        // Castling relocates the rook past the king.
        let mut rook_move = None;
        if mv.is_castle && moved.kind == PieceKind::King {
            let rank = mv.from.rank();
            let (rf, rt) = if mv.to.file() > mv.from.file() {
                (7, 5) // king side: h-file rook to f-file
            } else {
                (0, 3) // queen side: a-file rook to d-file
            };
            let rook_from = Square::new(rf, rank).expect("castle rook square");
            let rook_to = Square::new(rt, rank).expect("castle rook square");
            let rook = self
                .piece_at(rook_from)
                .expect("make_move: castling without a rook");
            self.set_piece(rook_from, None);
            self.set_piece(
                rook_to,
                Some(Piece {
                    has_moved: true,
                    ..rook
                }),
            );
            rook_move = Some((rook_from, rook_to));
        }

        // A pawn double-step exposes the skipped square for one ply.
        if moved.kind == PieceKind::Pawn && (mv.to.rank() - mv.from.rank()).abs() == 2 {
            let mid = (mv.from.rank() + mv.to.rank()) / 2;
            self.en_passant = Square::new(mv.from.file(), mid);
        }

        if moved.kind == PieceKind::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.side_to_move == Side::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            ep_captured_sq,
            rook_move,
            prev_en_passant,
            moved_had_moved: moved.has_moved,
            prev_halfmove_clock,
            prev_fullmove_number,
        }
    }

    /// Exact inverse of `make_move` for the same move and undo record.
    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.en_passant = undo.prev_en_passant;
        self.halfmove_clock = undo.prev_halfmove_clock;
        self.fullmove_number = undo.prev_fullmove_number;

        // Castling preconditions guarantee the rook was unmoved before.
        if let Some((rook_from, rook_to)) = undo.rook_move {
            let rook = self
                .piece_at(rook_to)
                .expect("unmake_move: castled rook missing");
            self.set_piece(rook_to, None);
            self.set_piece(
                rook_from,
                Some(Piece {
                    has_moved: false,
                    ..rook
                }),
            );
        }

        let moved = self
            .piece_at(mv.to)
            .expect("unmake_move: no piece on to-square");
        self.set_piece(mv.to, None);
        self.set_piece(
            mv.from,
            Some(Piece {
                has_moved: undo.moved_had_moved,
                ..moved
            }),
        );

        if mv.is_en_passant {
            if let Some(cs) = undo.ep_captured_sq {
                self.set_piece(cs, undo.captured);
            }
        } else {
            self.set_piece(mv.to, undo.captured);
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
