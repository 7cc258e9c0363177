//! Cube glyph.

use glam::{Mat3, Vec3};
use glycoscope_core::color::Color;
use glycoscope_core::primitive::{DrawMode, PrimitiveList};
use glycoscope_core::transform::{transform_normals, transform_points};

/// Per-face unit geometry: outward normal and the four corners in
/// triangle-strip emission order. The strip winding per face is fixed
/// so that all faces present their front side outward.
const FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    // +X
    (
        [1.0, 0.0, 0.0],
        [
            [1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
        ],
    ),
    // -X
    (
        [-1.0, 0.0, 0.0],
        [
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [-1.0, -1.0, -1.0],
        ],
    ),
    // +Y
    (
        [0.0, 1.0, 0.0],
        [
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
        ],
    ),
    // -Y
    (
        [0.0, -1.0, 0.0],
        [
            [-1.0, -1.0, -1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, -1.0],
            [1.0, -1.0, 1.0],
        ],
    ),
    // +Z
    (
        [0.0, 0.0, 1.0],
        [
            [-1.0, 1.0, 1.0],
            [1.0, 1.0, 1.0],
            [-1.0, -1.0, 1.0],
            [1.0, -1.0, 1.0],
        ],
    ),
    // -Z
    (
        [0.0, 0.0, -1.0],
        [
            [-1.0, -1.0, -1.0],
            [1.0, -1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
        ],
    ),
];

/// Generates a cube glyph with half side length `half_side`, aligned
/// to the local frame axes.
#[must_use]
pub fn cube(center: Vec3, half_side: f32, color: Color, basis: Mat3) -> PrimitiveList {
    let mut list = PrimitiveList::new();
    list.color(color);

    for (normal, corners) in &FACES {
        let local: Vec<Vec3> = corners
            .iter()
            .map(|c| Vec3::from_array(*c) * half_side)
            .collect();
        let vertices = transform_points(&local, center, basis);
        let normals = transform_normals(&[Vec3::from_array(*normal)], basis);

        list.begin(DrawMode::TriangleStrip);
        list.normal(normals[0]);
        for v in vertices {
            list.vertex(v);
        }
        list.end();
    }

    list
}
