use super::*;

#[test]
fn parse_move_accepts_coordinate_pairs() {
    let (from, to) = parse_move("e2e4").unwrap();
    assert_eq!(from, Square::from_coord("e2").unwrap());
    assert_eq!(to, Square::from_coord("e4").unwrap());
}

#[test]
fn parse_move_rejects_bad_input() {
    assert!(parse_move("e2").is_none());
    assert!(parse_move("e2e4q").is_none());
    assert!(parse_move("e2i9").is_none());
    assert!(parse_move("22e4").is_none());
}

#[test]
fn parse_move_survives_multibyte_input() {
    // Four bytes but only three characters; must not panic mid-"é".
    assert!(parse_move("aé4").is_none());
    assert!(parse_move("éé").is_none());
}
