//! FEN codec: structural validation, decoding and placement encoding.

use crate::{board::Position, types::*};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("FEN must have exactly 6 space-separated fields, found {0}")]
    FieldCount(usize),
    #[error("piece placement must list 8 ranks, found {0}")]
    RankCount(usize),
    #[error("invalid character '{0}' in piece placement")]
    PlacementChar(char),
    #[error("piece placement rank must cover exactly 8 squares")]
    RankWidth,
    #[error("side to move must be \"w\" or \"b\", found {0:?}")]
    SideToMove(String),
    #[error("castling field must match -|[KQkq]+, found {0:?}")]
    Castling(String),
    #[error("en-passant field must match -|[a-h][36], found {0:?}")]
    EnPassant(String),
    #[error("halfmove clock must be a non-negative integer, found {0:?}")]
    HalfmoveClock(String),
    #[error("fullmove number must be an integer >= 1, found {0:?}")]
    FullmoveNumber(String),
}

/// Structural pre-flight check: 6 fields, 8 ranks summing to 8 squares,
/// well-formed side/castling/en-passant/counter fields.
pub fn validate(fen: &str) -> bool {
    check(fen).is_ok()
}

fn check(fen: &str) -> Result<(), FenError> {
    // Strict single-space separation: a doubled space yields an empty
    // field and fails the count.
    let fields: Vec<&str> = fen.split(' ').collect();
    if fields.len() != 6 {
        return Err(FenError::FieldCount(fields.len()));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }
    for rank in &ranks {
        let mut squares = 0u32;
        for ch in rank.chars() {
            if let Some(d) = ch.to_digit(10) {
                squares += d;
            } else if "rnbqkpRNBQKP".contains(ch) {
                squares += 1;
            } else {
                return Err(FenError::PlacementChar(ch));
            }
        }
        if squares != 8 {
            return Err(FenError::RankWidth);
        }
    }

    match fields[1] {
        "w" | "b" => {}
        other => return Err(FenError::SideToMove(other.to_string())),
    }

    let castling = fields[2];
    let castling_ok =
        castling == "-" || (!castling.is_empty() && castling.chars().all(|c| "KQkq".contains(c)));
    if !castling_ok {
        return Err(FenError::Castling(castling.to_string()));
    }

    let ep = fields[3].as_bytes();
    let ep_ok = fields[3] == "-"
        || (ep.len() == 2 && (b'a'..=b'h').contains(&ep[0]) && (ep[1] == b'3' || ep[1] == b'6'));
    if !ep_ok {
        return Err(FenError::EnPassant(fields[3].to_string()));
    }

    if fields[4].parse::<u32>().is_err() {
        return Err(FenError::HalfmoveClock(fields[4].to_string()));
    }
    match fields[5].parse::<u32>() {
        Ok(n) if n >= 1 => {}
        _ => return Err(FenError::FullmoveNumber(fields[5].to_string())),
    }

    Ok(())
}

/// Decode a FEN record into a `Position`.
///
/// Only the piece placement and side-to-move fields are applied; the
/// castling, en-passant and clock fields are validated for shape but not
/// wired into the position. Every decoded piece starts with
/// `has_moved = false`, as if nothing has moved yet.
pub fn decode(fen: &str) -> Result<Position, FenError> {
    check(fen)?;
    let fields: Vec<&str> = fen.split(' ').collect();

    let mut pos = Position::empty();
    // FEN lists rank 8 first.
    for (rank_idx, rank_str) in fields[0].split('/').enumerate() {
        let rank = 7 - rank_idx as i8;
        let mut file: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                file += d as i8;
            } else {
                let side = if ch.is_uppercase() {
                    Side::White
                } else {
                    Side::Black
                };
                let kind = kind_from_char(ch.to_ascii_lowercase())
                    .ok_or(FenError::PlacementChar(ch))?;
                let sq = Square::new(file, rank).ok_or(FenError::RankWidth)?;
                pos.set_piece(sq, Some(Piece::new(side, kind)));
                file += 1;
            }
        }
    }

    pos.side_to_move = match fields[1] {
        "w" => Side::White,
        _ => Side::Black,
    };
    Ok(pos)
}

/// Encode the piece placement field (ranks 8 to 1, run-length-encoded
/// empty squares). Inverse of `decode`'s placement handling.
pub fn encode(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            let sq = Square::new(file, rank).expect("encode square in range");
            match pos.piece_at(sq) {
                None => empty += 1,
                Some(pc) => {
                    if empty > 0 {
                        out.push(char::from_digit(empty, 10).expect("empty run <= 8"));
                        empty = 0;
                    }
                    out.push(kind_to_char(pc.kind, pc.side));
                }
            }
        }
        if empty > 0 {
            out.push(char::from_digit(empty, 10).expect("empty run <= 8"));
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

fn kind_from_char(c: char) -> Option<PieceKind> {
    match c {
        'p' => Some(PieceKind::Pawn),
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        'k' => Some(PieceKind::King),
        _ => None,
    }
}

fn kind_to_char(kind: PieceKind, side: Side) -> char {
    let c = match kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if side == Side::White {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
