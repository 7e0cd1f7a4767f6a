//! Mapping from a pointer drag across a sticker to a layer turn.

use cgmath::{Point3, Vector3};

use super::SliceGeometry;
use crate::{Axis, Face, Move, Sign};

/// Turn chosen when a drag along one in-plane axis of a struck face is
/// dominant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DragRule {
    /// Face whose layer is turned.
    pub target: Face,
    /// Sign of the drag component for which the turn is clockwise.
    pub clockwise_when: Sign,
}

const fn rule(target: Face, clockwise_when: Sign) -> DragRule {
    DragRule {
        target,
        clockwise_when,
    }
}

/// Rules for each struck face, indexed by [`Face::index()`]. The first rule
/// applies when the drag is mostly along the first axis of [`drag_basis()`],
/// and the second when it is mostly along the second.
pub const DRAG_TABLE: [[DragRule; 2]; Face::COUNT] = {
    use Face::*;
    use Sign::{Neg, Pos};

    [
        [rule(F, Pos), rule(R, Neg)], // U
        [rule(U, Pos), rule(F, Neg)], // R
        [rule(U, Neg), rule(R, Pos)], // F
        [rule(F, Neg), rule(R, Pos)], // D
        [rule(U, Neg), rule(F, Pos)], // L
        [rule(U, Pos), rule(R, Neg)], // B
    ]
};

/// Returns the two world axes that span the plane of a face.
pub fn drag_basis(face: Face) -> [Axis; 2] {
    match face.axis() {
        Axis::X => [Axis::Z, Axis::Y],
        Axis::Y => [Axis::X, Axis::Z],
        Axis::Z => [Axis::X, Axis::Y],
    }
}

impl SliceGeometry {
    /// Infers the turn for a drag across the sticker on `struck` belonging to
    /// the cubie at `cubie_position`. Components of `drag` perpendicular to
    /// the struck face are ignored.
    ///
    /// Returns `None` if the drag has no in-plane component.
    pub fn infer_drag_move(
        &self,
        struck: Face,
        cubie_position: Point3<f32>,
        drag: Vector3<f32>,
    ) -> Option<Move> {
        let [u, v] = drag_basis(struck);
        let (du, dv) = (u.component(drag), v.component(drag));
        if du == 0.0 && dv == 0.0 {
            return None;
        }

        let [u_rule, v_rule] = DRAG_TABLE[struck.index()];
        let (rule, along) = if du.abs() > dv.abs() {
            (u_rule, du)
        } else {
            (v_rule, dv)
        };
        let slice_index = self.slice_index_for(rule.target, cubie_position);
        let clockwise = Sign::of(along) == rule.clockwise_when;
        log::trace!("drag on {struck} toward {drag:?} turns {} layer {slice_index}", rule.target);
        Some(Move::new(rule.target, slice_index, clockwise))
    }
}
