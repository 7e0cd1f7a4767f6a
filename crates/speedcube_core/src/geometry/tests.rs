use cgmath::{Deg, EuclideanSpace, InnerSpace, MetricSpace, Point3, Vector3};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::test_util::{arb_move, arb_size};
use crate::FaceletState;

fn geometry(n: u8) -> SliceGeometry {
    SliceGeometry::new(CubeSize::new(n).unwrap(), DEFAULT_SPACING)
}

#[test]
fn test_target_coordinates() {
    let g = geometry(3);
    assert!((g.target_coordinate(Face::R, 0) - 1.001).abs() < 1e-6);
    assert!((g.target_coordinate(Face::R, 1)).abs() < 1e-6);
    assert!((g.target_coordinate(Face::L, 0) + 1.001).abs() < 1e-6);
    assert!((g.target_coordinate(Face::L, 2) - 1.001).abs() < 1e-6);

    let g = geometry(4);
    assert!((g.target_coordinate(Face::U, 1) - 0.5005).abs() < 1e-6);
    assert!((g.target_coordinate(Face::D, 1) + 0.5005).abs() < 1e-6);
}

#[test]
fn test_invalid_spacing_is_replaced() {
    let size = CubeSize::THREE;
    for spacing in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let g = SliceGeometry::new(size, spacing);
        assert_eq!(DEFAULT_SPACING, g.spacing());
        assert_eq!(9, g.query(Move::outer(Face::R, true)).cubies.len());
    }
    assert_eq!(2.0, SliceGeometry::new(size, 2.0).spacing());

    let g: SliceGeometry = serde_json::from_str(r#"{"size":3,"spacing":0.0}"#).unwrap();
    assert_eq!(geometry(3), g);
}

#[test]
fn test_slice_index_for_positions() {
    let g = geometry(4);
    for face in Face::iter() {
        for slice_index in 0..4 {
            let p = Point3::from_vec(face.axis().unit_vec3() * g.target_coordinate(face, slice_index));
            assert_eq!(slice_index, g.slice_index_for(face, p), "{face}{slice_index}");
        }
    }
    let far_away = Point3::new(100.0, -100.0, 0.0);
    assert_eq!(0, g.slice_index_for(Face::R, far_away));
    assert_eq!(3, g.slice_index_for(Face::U, far_away));
}

#[test]
fn test_cubies_per_slice() {
    for n in 2..=6 {
        let g = geometry(n);
        let per_slice = n as usize * n as usize;
        for face in Face::iter() {
            for slice_index in 0..n {
                let mv = Move::new(face, slice_index, true);
                assert_eq!(per_slice, g.cubies_in_slice(mv).len(), "{mv} on {n}x{n}x{n}");
            }
        }
    }
}

#[test]
fn test_out_of_range_slice_is_clamped() {
    let g = geometry(3);
    let query = g.query(Move::new(Face::F, 7, true));
    assert_eq!(2, query.slice_index);
    assert_eq!(g.cubies_in_slice(Move::outer(Face::B, false)), query.cubies);
}

#[test]
fn test_facelets_in_slice_match_turn() {
    let size = CubeSize::new(4).unwrap();
    let g = SliceGeometry::new(size, DEFAULT_SPACING);
    let per_face = size.facelets_per_face() as u16;
    let labeled = FaceletState::from_fn(size, |face, i| face.index() as u16 * per_face + i as u16);
    for face in Face::iter() {
        for slice_index in 0..4 {
            let mv = Move::new(face, slice_index, true);
            let mut in_slice = g.facelets_in_slice(mv);
            let mut changed = labeled.diff(&labeled.turn(mv).unwrap());
            in_slice.sort();
            changed.sort();
            let expected_len = if mv.is_outer(size) { 32 } else { 16 };
            assert_eq!(expected_len, in_slice.len(), "{mv}");
            assert_eq!(in_slice, changed, "{mv}");
        }
    }
}

#[test]
fn test_rotation_angle_sign() {
    assert_eq!(Rad(-FRAC_PI_2), rotation_angle(Move::outer(Face::R, true)));
    assert_eq!(Rad(FRAC_PI_2), rotation_angle(Move::outer(Face::L, true)));
    assert_eq!(Rad(FRAC_PI_2), rotation_angle(Move::outer(Face::U, false)));
    assert_eq!(Rad(-FRAC_PI_2), rotation_angle(Move::outer(Face::B, false)));
}

#[test]
fn test_snap_angle() {
    let snapped = snap_angle(Deg(100.0_f32).into());
    assert!((snapped.0 - FRAC_PI_2).abs() < 1e-6);
    let snapped = snap_angle(Deg(-40.0_f32).into());
    assert!(snapped.0.abs() < 1e-6);
    let snapped = snap_angle(Deg(-140.0_f32).into());
    assert!((snapped.0 + 2.0 * FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn test_drag_table_matches_cross_product() {
    let g = geometry(3);
    for struck in Face::iter() {
        let position = g.facelet_position(struck, 4);
        for axis in drag_basis(struck) {
            for sign in [Sign::Pos, Sign::Neg] {
                let drag = axis.unit_vec3() * sign.float();
                let omega = struck.normal().cross(drag);
                let mv = g.infer_drag_move(struck, position, drag).unwrap();

                assert_eq!(omega.dot(mv.face.normal()).abs(), 1.0, "{struck} {drag:?}");
                assert_eq!(omega.dot(mv.face.normal()) < 0.0, mv.clockwise, "{struck} {drag:?}");
                assert_eq!(1, mv.slice_index, "{struck} {drag:?}");
            }
        }
    }
}

#[test]
fn test_drag_picks_dominant_axis_and_layer() {
    let g = geometry(3);
    let corner = g.facelet_position(Face::F, 0);

    // Mostly upward on the left column of F turns L counterclockwise.
    let mv = g.infer_drag_move(Face::F, corner, Vector3::new(0.1, 1.0, 0.0)).unwrap();
    assert_eq!(Move::new(Face::R, 2, true), mv);

    // Mostly rightward on the top row of F turns U counterclockwise.
    let mv = g.infer_drag_move(Face::F, corner, Vector3::new(1.0, -0.3, 0.0)).unwrap();
    assert_eq!(Move::outer(Face::U, false), mv);

    assert_eq!(None, g.infer_drag_move(Face::F, corner, Vector3::new(0.0, 0.0, 5.0)));
}

proptest! {
    #[test]
    fn proptest_rotation_carries_stickers(
        (size, mv) in arb_size().prop_flat_map(|n| (Just(n), arb_move(n))),
    ) {
        let g = SliceGeometry::new(size, DEFAULT_SPACING);
        let per_face = size.facelets_per_face();
        let labeled = FaceletState::from_fn(size, |face, i| (face, i));
        let turned = labeled.turn(mv).unwrap();
        let rot = rotation_matrix(mv, 1.0);
        for (face, i, &(from_face, from_i)) in turned.iter() {
            prop_assert!(from_i < per_face);
            let from = g.facelet_position(from_face, from_i);
            let to = g.facelet_position(face, i);
            if !g.contains(mv.face, mv.slice_index, from) {
                prop_assert_eq!((face, i), (from_face, from_i));
                continue;
            }
            let carried = Point3::from_vec(rot * from.to_vec());
            prop_assert!(carried.distance(to) < 1e-3, "{mv}: {from_face}{from_i} -> {face}{i}");
            // The sticker's outward normal must rotate too.
            let normal = rot * from_face.normal();
            prop_assert!((normal - face.normal()).magnitude() < 1e-3);
        }
    }
}
