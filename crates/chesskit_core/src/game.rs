//! Game state machine: owns the authoritative position, applies validated
//! moves and classifies terminal states.

use crate::{
    attacks::{has_any_legal_move, legal_moves_from},
    board::{Position, Undo},
    fen::{self, FenError},
    types::*,
};
use thiserror::Error;

/// Status of the side to move. Checkmate and Stalemate are terminal; the
/// game rejects further moves once either is reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Check,
    /// The named side delivered mate and wins.
    Checkmate(Side),
    Stalemate,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("no piece on {0}")]
    EmptySquare(Square),
    #[error("piece on {0} does not belong to the side to move")]
    WrongSide(Square),
    #[error("move {0}{1} is not legal")]
    Illegal(Square, Square),
}

/// Everything a rendering layer needs to animate one applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Piece>,
    /// Rook relocation when the move castled.
    pub rook_move: Option<(Square, Square)>,
    /// Square an en-passant victim was removed from (not the landing square).
    pub en_passant_capture: Option<Square>,
    /// Status for the new side to move.
    pub status: GameStatus,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    status: GameStatus,
    /// Pieces captured so far, in capture order.
    captured: Vec<Piece>,
    last_move: Option<Move>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Fresh game from the standard starting position.
    pub fn new() -> Self {
        let position = Position::startpos();
        let status = position_status(&position);
        Self {
            position,
            status,
            captured: Vec::new(),
            last_move: None,
        }
    }

    /// Fresh game from a FEN record. Captured-piece tracking starts empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let position = fen::decode(fen)?;
        let status = position_status(&position);
        Ok(Self {
            position,
            status,
            captured: Vec::new(),
            last_move: None,
        })
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn side_to_move(&self) -> Side {
        self.position.side_to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate(_) | GameStatus::Stalemate)
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal destination squares for the piece on `sq`, for display.
    /// Empty when the square is vacant, holds an opposing piece, or the
    /// game is over.
    pub fn select(&self, sq: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        match self.position.piece_at(sq) {
            Some(pc) if pc.side == self.position.side_to_move => {
                legal_moves_from(&self.position, sq)
                    .into_iter()
                    .map(|mv| mv.to)
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    /// Validate and apply a move. Validation is complete before the board
    /// is touched; on any error the game state is unchanged.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let pc = self
            .position
            .piece_at(from)
            .ok_or(MoveError::EmptySquare(from))?;
        if pc.side != self.position.side_to_move {
            return Err(MoveError::WrongSide(from));
        }
        let mv = legal_moves_from(&self.position, from)
            .into_iter()
            .find(|m| m.to == to)
            .ok_or(MoveError::Illegal(from, to))?;

        let undo = self.position.make_move(mv);
        Ok(self.record(mv, undo))
    }

    /// Apply an already-validated legal move (engine replies).
    pub fn apply_legal(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        let undo = self.position.make_move(mv);
        Ok(self.record(mv, undo))
    }

    fn record(&mut self, mv: Move, undo: Undo) -> MoveOutcome {
        if let Some(taken) = undo.captured {
            self.captured.push(taken);
        }
        self.last_move = Some(mv);
        self.status = position_status(&self.position);
        MoveOutcome {
            mv,
            captured: undo.captured,
            rook_move: undo.rook_move,
            en_passant_capture: undo.ep_captured_sq,
            status: self.status,
        }
    }
}

/// Classify the position for its side to move.
pub fn position_status(pos: &Position) -> GameStatus {
    let side = pos.side_to_move;
    let check = pos.in_check(side);
    let movable = has_any_legal_move(pos, side);
    match (check, movable) {
        (true, false) => GameStatus::Checkmate(side.other()),
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
