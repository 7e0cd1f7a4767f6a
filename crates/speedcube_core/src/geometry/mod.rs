//! Spatial layout of the cubies and stickers of a cube.
//!
//! The cube is centered on the origin with +X toward [`Face::R`], +Y toward
//! [`Face::U`], and +Z toward [`Face::F`]. Adjacent cubie centers are
//! `spacing` apart.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix3, Point3, Rad};
use serde::{Deserialize, Serialize};

mod drag;
#[cfg(test)]
mod tests;

pub use drag::{DRAG_TABLE, DragRule, drag_basis};

use crate::{Axis, CubeSize, Face, Move, Sign};

/// Default distance between adjacent cubie centers. Slightly more than 1 so
/// that neighboring cubies do not overlap.
pub const DEFAULT_SPACING: f32 = 1.001;

/// Elements that participate in turning one layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SliceQuery {
    /// Face that the layer is measured from.
    pub face: Face,
    /// Depth of the layer, clamped to the cube.
    pub slice_index: u8,
    /// Axis of rotation.
    pub axis: Axis,
    /// Coordinate of the layer along `axis`.
    pub target: f32,
    /// Distance from `target` within which a cubie is considered part of
    /// the layer.
    pub tolerance: f32,
    /// Signed angle of the turn about the positive `axis`, in radians.
    pub angle: f32,
    /// Indices of participating cubies. See
    /// [`SliceGeometry::cubie_positions()`].
    pub cubies: Vec<usize>,
    /// Participating stickers.
    pub facelets: Vec<(Face, usize)>,
}

/// Spatial layout of a cube of a particular size.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(from = "RawSliceGeometry")]
pub struct SliceGeometry {
    size: CubeSize,
    spacing: f32,
}

#[derive(Deserialize)]
struct RawSliceGeometry {
    size: CubeSize,
    spacing: f32,
}
impl From<RawSliceGeometry> for SliceGeometry {
    fn from(raw: RawSliceGeometry) -> Self {
        Self::new(raw.size, raw.spacing)
    }
}

impl SliceGeometry {
    /// Constructs the layout of a cube. A spacing that is not a positive
    /// finite number is replaced by [`DEFAULT_SPACING`].
    pub fn new(size: CubeSize, spacing: f32) -> Self {
        let spacing = if spacing.is_finite() && spacing > 0.0 {
            spacing
        } else {
            log::warn!("invalid spacing {spacing}, using {DEFAULT_SPACING}");
            DEFAULT_SPACING
        };
        Self { size, spacing }
    }

    /// Returns the number of layers.
    pub fn size(&self) -> CubeSize {
        self.size
    }
    /// Returns the distance between adjacent cubie centers.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Returns the coordinate of the outermost layer on the positive side of
    /// each axis.
    pub fn outer_pos(&self) -> f32 {
        self.size.max_slice() as f32 / 2.0 * self.spacing
    }

    /// Returns the tolerance used when matching cubies to a layer.
    pub fn tolerance(&self) -> f32 {
        self.spacing / 1000.0
    }

    /// Returns the coordinate of a layer along the axis of `face`.
    pub fn target_coordinate(&self, face: Face, slice_index: u8) -> f32 {
        let depth = slice_index as f32 * self.spacing;
        match face.sign() {
            Sign::Neg => -self.outer_pos() + depth,
            _ => self.outer_pos() - depth,
        }
    }

    /// Returns whether a point lies in a layer.
    pub fn contains(&self, face: Face, slice_index: u8, position: Point3<f32>) -> bool {
        let coord = face.axis().component(position);
        (coord - self.target_coordinate(face, slice_index)).abs() <= self.tolerance()
    }

    /// Returns the center of the cubie at integer grid coordinates, each from
    /// 0 to `N-1`.
    pub fn cubie_position(&self, [x, y, z]: [usize; 3]) -> Point3<f32> {
        let c = |i: usize| i as f32 * self.spacing - self.outer_pos();
        Point3::new(c(x), c(y), c(z))
    }

    /// Returns the centers of all `N^3` cubies. The cubie at grid coordinates
    /// `(x, y, z)` has index `x + N*y + N*N*z`.
    pub fn cubie_positions(&self) -> Vec<Point3<f32>> {
        let n = self.size.layers();
        (0..n * n * n)
            .map(|i| self.cubie_position([i % n, i / n % n, i / (n * n)]))
            .collect()
    }

    /// Returns the integer grid coordinates of the cubie holding a sticker.
    pub fn facelet_cubie(&self, face: Face, index: usize) -> [usize; 3] {
        let n = self.size.layers();
        let m = n - 1;
        let (r, c) = (index / n, index % n);
        match face {
            Face::U => [c, m, r],
            Face::R => [m, m - r, m - c],
            Face::F => [c, m - r, m],
            Face::D => [c, 0, m - r],
            Face::L => [0, m - r, c],
            Face::B => [m - c, m - r, 0],
        }
    }

    /// Returns the center of the cubie holding a sticker.
    pub fn facelet_position(&self, face: Face, index: usize) -> Point3<f32> {
        self.cubie_position(self.facelet_cubie(face, index))
    }

    /// Returns the indices of the cubies in the layer turned by `mv`.
    pub fn cubies_in_slice(&self, mv: Move) -> Vec<usize> {
        let slice_index = self.clamp_slice(mv.slice_index);
        self.cubie_positions()
            .into_iter()
            .enumerate()
            .filter(|&(_, p)| self.contains(mv.face, slice_index, p))
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns the stickers in the layer turned by `mv`.
    pub fn facelets_in_slice(&self, mv: Move) -> Vec<(Face, usize)> {
        let slice_index = self.clamp_slice(mv.slice_index);
        Face::iter()
            .flat_map(|face| (0..self.size.facelets_per_face()).map(move |i| (face, i)))
            .filter(|&(face, i)| self.contains(mv.face, slice_index, self.facelet_position(face, i)))
            .collect()
    }

    /// Returns everything a renderer needs to animate `mv`. Out-of-range
    /// slice indices are clamped.
    pub fn query(&self, mv: Move) -> SliceQuery {
        let slice_index = self.clamp_slice(mv.slice_index);
        let cubies = self.cubies_in_slice(mv);
        let facelets = self.facelets_in_slice(mv);
        if cubies.is_empty() {
            log::warn!("no cubies within tolerance for {mv} on {}", self.size);
        }
        SliceQuery {
            face: mv.face,
            slice_index,
            axis: mv.face.axis(),
            target: self.target_coordinate(mv.face, slice_index),
            tolerance: self.tolerance(),
            angle: rotation_angle(mv).0,
            cubies,
            facelets,
        }
    }

    /// Returns the layer of `face` that contains `position`, clamped to the
    /// cube.
    pub fn slice_index_for(&self, face: Face, position: Point3<f32>) -> u8 {
        let center = self.size.max_slice() as f32 / 2.0;
        let val = face.axis().component(position) / self.spacing;
        let index = match face.sign() {
            Sign::Neg => val + center,
            _ => center - val,
        };
        index.round().clamp(0.0, self.size.max_slice() as f32) as u8
    }

    fn clamp_slice(&self, slice_index: u8) -> u8 {
        slice_index.min(self.size.max_slice())
    }
}

/// Returns the signed angle of a full turn about the positive axis of
/// `mv.face`. Clockwise as seen from outside a face is a negative rotation
/// about that face's outward normal.
pub fn rotation_angle(mv: Move) -> Rad<f32> {
    let about_normal = if mv.clockwise { -FRAC_PI_2 } else { FRAC_PI_2 };
    Rad(about_normal * mv.face.sign().float())
}

/// Returns the rotation matrix for `mv` after `t` of the turn has elapsed,
/// where `t` ranges from 0 to 1.
pub fn rotation_matrix(mv: Move, t: f32) -> Matrix3<f32> {
    Matrix3::from_axis_angle(mv.face.axis().unit_vec3(), rotation_angle(mv) * t)
}

/// Rounds an angle to the nearest multiple of 90 degrees.
pub fn snap_angle(angle: Rad<f32>) -> Rad<f32> {
    Rad((angle.0 / FRAC_PI_2).round() * FRAC_PI_2)
}
