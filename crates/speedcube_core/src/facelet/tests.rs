use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::test_util::{arb_move, arb_size};

/// Returns a cube where every sticker has a unique label.
fn labeled(size: CubeSize) -> FaceletState<u16> {
    let per_face = size.facelets_per_face() as u16;
    FaceletState::from_fn(size, |face, index| face.index() as u16 * per_face + index as u16)
}

fn size(n: u8) -> CubeSize {
    CubeSize::new(n).unwrap()
}

#[test]
fn test_solved_string() {
    let solved = FaceletState::new_solved(CubeSize::THREE);
    assert_eq!(
        "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB",
        solved.to_string(),
    );
    assert_eq!(
        "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB",
        solved.to_string_with(FaceletStringStyle::ColorLetters),
    );
    for n in 2..=9 {
        let solved = FaceletState::new_solved(size(n));
        assert!(solved.is_solved());
        assert_eq!(6 * n as usize * n as usize, solved.to_string().len());
    }
}

#[test]
fn test_known_turns() {
    let solved = FaceletState::new_solved(CubeSize::THREE);
    let cases = [
        (Move::outer(Face::R, true), "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"),
        (Move::outer(Face::U, true), "UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"),
        (Move::outer(Face::F, true), "UUUUUULLLURRURRURRFFFFFFFFFRRRDDDDDDLLDLLDLLDBBBBBBBBB"),
        (Move::new(Face::R, 1, true), "UFUUFUUFURRRRRRRRRFDFFDFFDFDBDDBDDBDLLLLLLLLLBUBBUBBUB"),
    ];
    for (mv, expected) in cases {
        assert_eq!(expected, solved.turn(mv).unwrap().to_string(), "{mv}");
    }

    let two = FaceletState::new_solved(size(2));
    assert_eq!(
        "UFUFRRRRFDFDDBDBLLLLUBUB",
        two.turn(Move::outer(Face::R, true)).unwrap().to_string(),
    );
}

#[test]
fn test_non_identity_move_unsolves() {
    for n in 2..=5 {
        let solved = FaceletState::new_solved(size(n));
        for face in Face::iter() {
            for clockwise in [true, false] {
                let turned = solved.turn(Move::outer(face, clockwise)).unwrap();
                assert!(!turned.is_solved(), "{face} on {n}x{n}x{n}");
            }
        }
    }
}

#[test]
fn test_locality_on_4x4() {
    let n = 4;
    let start = labeled(size(n));
    for face in Face::iter() {
        for clockwise in [true, false] {
            for slice_index in 0..n {
                let mv = Move::new(face, slice_index, clockwise);
                let changed = start.diff(&start.turn(mv).unwrap());
                let expected = match mv.is_outer(size(n)) {
                    true => 16 + 4 * 4,
                    false => 4 * 4,
                };
                assert_eq!(expected, changed.len(), "{mv}");

                let turned_face = match slice_index {
                    0 => Some(face),
                    3 => Some(face.opposite()),
                    _ => None,
                };
                for (f, _) in changed {
                    assert!(
                        Some(f) == turned_face || ring::ring(face).iter().any(|m| m.face == f),
                        "{mv} changed a sticker on {f}",
                    );
                }
            }
        }
    }
}

#[test]
fn test_out_of_range_slice_is_rejected() {
    let start = FaceletState::new_solved(size(4));
    assert_eq!(
        Err(MoveError::SliceOutOfRange {
            slice_index: 4,
            size: size(4),
        }),
        start.turn(Move::new(Face::F, 4, true)),
    );
}

#[test]
fn test_parse_facelet_string() {
    let solved = FaceletState::new_solved(CubeSize::THREE);
    let turned = solved.turn(Move::outer(Face::F, false)).unwrap();
    assert_eq!(Ok(turned.clone()), turned.to_string().parse());
    assert_eq!(
        Ok(turned.clone()),
        turned.to_string_with(FaceletStringStyle::ColorLetters).parse(),
    );

    assert_eq!(
        Err(FaceletParseError::BadLength(53)),
        "U".repeat(53).parse::<FaceletState>(),
    );
    assert_eq!(
        Err(FaceletParseError::BadLength(6)),
        "URFDLB".parse::<FaceletState>(),
    );
    let mut bad = solved.to_string();
    bad.replace_range(10..11, "X");
    assert_eq!(
        Err(FaceletParseError::BadChar { ch: 'X', index: 10 }),
        bad.parse::<FaceletState>(),
    );

    let lopsided: FaceletState = "U".repeat(54).parse().unwrap();
    assert_eq!(
        Err(FaceletParseError::WrongColorCount {
            color: Color::White,
            count: 54,
            expected: 9,
        }),
        lopsided.check_color_counts(),
    );
    assert_eq!(Ok(()), turned.check_color_counts());

    let five: FaceletState = "L".repeat(150).parse().unwrap();
    assert_eq!(size(5), five.size());
}

#[test]
fn test_deserialize_checks_face_lengths() {
    let solved = FaceletState::new_solved(CubeSize::THREE);
    let json = serde_json::to_string(&solved).unwrap();
    assert_eq!(solved, serde_json::from_str::<FaceletState>(&json).unwrap());

    let mut value = serde_json::to_value(&solved).unwrap();
    value["faces"][1].as_array_mut().unwrap().pop();
    let err = serde_json::from_value::<FaceletState>(value).unwrap_err();
    assert!(err.to_string().contains("face R has 8 facelets, expected 9"), "{err}");

    let json = r#"{"size":3,"faces":[["white"],[],[],[],[],[]]}"#;
    let err = serde_json::from_str::<FaceletState>(json).unwrap_err();
    assert!(err.to_string().contains("face U has 1 facelets"), "{err}");
}

proptest! {
    #[test]
    fn proptest_order_four((size, mv) in arb_size().prop_flat_map(|n| (Just(n), arb_move(n)))) {
        let start = labeled(size);
        let mut state = start.clone();
        for i in 1..=4 {
            state = state.turn(mv).unwrap();
            prop_assert_eq!(i == 4, state == start);
        }
    }

    #[test]
    fn proptest_inverse((size, mv) in arb_size().prop_flat_map(|n| (Just(n), arb_move(n)))) {
        let start = labeled(size);
        prop_assert_eq!(&start, &start.turn(mv).unwrap().turn(mv.inverse()).unwrap());
    }

    #[test]
    fn proptest_far_slice_is_opposite_face(
        (size, mv) in arb_size().prop_flat_map(|n| (Just(n), arb_move(n))),
    ) {
        let start = labeled(size);
        let mirrored = Move::new(
            mv.face.opposite(),
            size.max_slice() - mv.slice_index,
            !mv.clockwise,
        );
        prop_assert_eq!(start.turn(mv).unwrap(), start.turn(mirrored).unwrap());
    }

    #[test]
    fn proptest_turns_preserve_color_counts(
        (size, moves) in arb_size().prop_flat_map(|n| (Just(n), prop::collection::vec(arb_move(n), 0..30))),
    ) {
        let state = moves
            .iter()
            .try_fold(FaceletState::new_solved(size), |s, &mv| s.turn(mv))
            .unwrap();
        prop_assert_eq!(Ok(()), state.check_color_counts());
    }
}
