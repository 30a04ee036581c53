//! Perft counts pin down move generation and make/unmake together.
//!
//! Depths stay shallow: this engine deliberately has no pawn promotion, and
//! from these positions no promotion is reachable within the tested depth,
//! so the reference node counts still apply.

use chesskit_core::{Position, decode, perft};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

#[test]
fn perft_startpos_shallow() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 1), 20);
    assert_eq!(perft(&mut pos, 2), 400);
    assert_eq!(perft(&mut pos, 3), 8_902);
}

#[test]
fn perft_startpos_depth_4() {
    let mut pos = Position::startpos();
    assert_eq!(perft(&mut pos, 4), 197_281);
}

#[test]
fn perft_kiwipete_shallow() {
    // Castling on both wings, an exposed queen, a pinned knight. The FEN's
    // KQkq field matches the decoder's all-unmoved initialization, so the
    // reference counts hold despite castling rights not being parsed.
    let mut pos = decode(KIWIPETE).unwrap();
    assert_eq!(perft(&mut pos, 1), 48);
    assert_eq!(perft(&mut pos, 2), 2_039);
}

#[test]
fn perft_leaves_position_unchanged() {
    let mut pos = decode(KIWIPETE).unwrap();
    let before = pos.clone();
    perft(&mut pos, 3);
    assert_eq!(pos, before);
}
