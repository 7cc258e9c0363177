//! Basis-change matrix and local-to-global transforms.
//!
//! Shape generators define geometry in a basis-aligned local frame and
//! map it into global coordinates through these helpers.

use glam::{Mat3, Vec3};

use crate::math::normalize_or_default;

/// Builds the 3x3 basis-change matrix whose columns are the
/// (re-normalized) frame axes.
///
/// The matrix maps local-space coordinates into global space.
#[must_use]
pub fn basis_matrix(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Mat3 {
    Mat3::from_cols(
        normalize_or_default(x_axis),
        normalize_or_default(y_axis),
        normalize_or_default(z_axis),
    )
}

/// Transforms local-space points into global space: `m * p + center`.
///
/// Order-preserving; each point is transformed independently.
#[must_use]
pub fn transform_points(points: &[Vec3], center: Vec3, matrix: Mat3) -> Vec<Vec3> {
    points.iter().map(|&p| matrix * p + center).collect()
}

/// Transforms local-space normals into global space.
///
/// Normals are rotated and re-normalized; translation never applies.
#[must_use]
pub fn transform_normals(normals: &[Vec3], matrix: Mat3) -> Vec<Vec3> {
    normals
        .iter()
        .map(|&n| normalize_or_default(matrix * n))
        .collect()
}
