//! Diamond (octahedron) glyphs, full and half-colored.
//!
//! Six vertices on the local axes, eight triangular faces with fixed
//! winding. Face normals are the normalized sum of the three adjacent
//! axis directions rather than exact per-triangle normals; the visual
//! scheme was tuned against this approximation, so it is kept.

use glam::{Mat3, Vec3};
use glycoscope_core::color::Color;
use glycoscope_core::math::normalize_or_default;
use glycoscope_core::primitive::{DrawMode, PrimitiveList};
use glycoscope_core::transform::{transform_normals, transform_points};

/// Octahedron vertices in local units: +Z, -Z, +Y, -Y, +X, -X.
const VERTICES: [[f32; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [0.0, 1.0, 0.0],
    [0.0, -1.0, 0.0],
    [1.0, 0.0, 0.0],
    [-1.0, 0.0, 0.0],
];

/// Approximate outward normals, one per face, as octant directions.
const NORMALS: [[f32; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
];

/// Face vertex triples, wound to face outward.
const FACES: [[usize; 3]; 8] = [
    [0, 2, 4],
    [0, 5, 2],
    [0, 3, 5],
    [0, 4, 3],
    [1, 4, 2],
    [1, 2, 5],
    [1, 5, 3],
    [1, 3, 4],
];

/// Faces carrying the secondary color in the half-diamond variant.
const SECONDARY_FACES: [usize; 4] = [0, 3, 4, 7];

fn transformed_geometry(center: Vec3, r: f32, basis: Mat3) -> (Vec<Vec3>, Vec<Vec3>) {
    let local_vertices: Vec<Vec3> = VERTICES.iter().map(|v| Vec3::from_array(*v) * r).collect();
    let local_normals: Vec<Vec3> = NORMALS
        .iter()
        .map(|n| normalize_or_default(Vec3::from_array(*n)))
        .collect();
    (
        transform_points(&local_vertices, center, basis),
        transform_normals(&local_normals, basis),
    )
}

/// Generates a single-color diamond glyph with vertex distance `r`.
#[must_use]
pub fn diamond(center: Vec3, r: f32, color: Color, basis: Mat3) -> PrimitiveList {
    let (vertices, normals) = transformed_geometry(center, r, basis);

    let mut list = PrimitiveList::new();
    list.color(color);
    list.begin(DrawMode::Triangles);
    for (face, normal) in FACES.iter().zip(&normals) {
        list.normal(*normal);
        for &i in face {
            list.vertex(vertices[i]);
        }
    }
    list.end();
    list
}

/// Generates a half-diamond glyph: the same octahedron with alternating
/// face sets colored `color` and `color2`.
///
/// The "reversed" variant used to distinguish residue classes sharing
/// this shape is obtained by swapping the two color arguments at the
/// call site.
#[must_use]
pub fn half_diamond(center: Vec3, r: f32, color: Color, color2: Color, basis: Mat3) -> PrimitiveList {
    let (vertices, normals) = transformed_geometry(center, r, basis);

    let mut list = PrimitiveList::new();
    list.begin(DrawMode::Triangles);
    for (face_index, (face, normal)) in FACES.iter().zip(&normals).enumerate() {
        if SECONDARY_FACES.contains(&face_index) {
            list.color(color2);
        } else {
            list.color(color);
        }
        list.normal(*normal);
        for &i in face {
            list.vertex(vertices[i]);
        }
    }
    list.end();
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use glycoscope_core::color::{SNFG_PURPLE, SNFG_WHITE};
    use glycoscope_core::primitive::PrimitiveOp;
    use glycoscope_core::transform::basis_matrix;

    fn identity_basis() -> Mat3 {
        basis_matrix(Vec3::X, Vec3::Y, Vec3::Z)
    }

    #[test]
    fn test_diamond_has_eight_faces() {
        let list = diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, identity_basis());
        let vertices = list
            .iter()
            .filter(|op| matches!(op, PrimitiveOp::Vertex(_)))
            .count();
        let normals = list
            .iter()
            .filter(|op| matches!(op, PrimitiveOp::Normal(_)))
            .count();
        assert_eq!(vertices, 24);
        assert_eq!(normals, 8);
    }

    #[test]
    fn test_diamond_vertices_on_axes() {
        let list = diamond(Vec3::ZERO, 2.0, SNFG_PURPLE, identity_basis());
        for op in list.iter() {
            if let PrimitiveOp::Vertex(v) = op {
                assert!((v.length() - 2.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_diamond_normals_point_outward() {
        // Each approximate face normal must at least agree in direction
        // with the face centroid.
        let list = diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, identity_basis());
        let mut current_normal = Vec3::ZERO;
        let mut face: Vec<Vec3> = Vec::new();
        for op in list.iter() {
            match op {
                PrimitiveOp::Normal(n) => {
                    current_normal = *n;
                    face.clear();
                }
                PrimitiveOp::Vertex(v) => {
                    face.push(*v);
                    if face.len() == 3 {
                        let centroid = (face[0] + face[1] + face[2]) / 3.0;
                        assert!(current_normal.dot(centroid) > 0.0);
                    }
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_half_diamond_color_split() {
        let list = half_diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, SNFG_WHITE, identity_basis());
        let colors: Vec<Color> = list
            .iter()
            .filter_map(|op| match op {
                PrimitiveOp::Color(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(colors.len(), 8);
        // Faces 0, 3, 4, 7 carry the secondary color.
        for (i, c) in colors.iter().enumerate() {
            let expected = if [0, 3, 4, 7].contains(&i) {
                SNFG_WHITE
            } else {
                SNFG_PURPLE
            };
            assert_eq!(*c, expected, "face {i}");
        }
    }

    #[test]
    fn test_half_diamond_reversed_swaps_sets() {
        let forward = half_diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, SNFG_WHITE, identity_basis());
        let reversed = half_diamond(Vec3::ZERO, 1.0, SNFG_WHITE, SNFG_PURPLE, identity_basis());

        let colors = |list: &PrimitiveList| -> Vec<Color> {
            list.iter()
                .filter_map(|op| match op {
                    PrimitiveOp::Color(c) => Some(*c),
                    _ => None,
                })
                .collect()
        };
        for (f, r) in colors(&forward).iter().zip(colors(&reversed)) {
            assert_ne!(*f, r);
        }
    }

    #[test]
    fn test_half_diamond_shares_diamond_topology() {
        let full = diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, identity_basis());
        let half = half_diamond(Vec3::ZERO, 1.0, SNFG_PURPLE, SNFG_WHITE, identity_basis());

        let vertices = |list: &PrimitiveList| -> Vec<Vec3> {
            list.iter()
                .filter_map(|op| match op {
                    PrimitiveOp::Vertex(v) => Some(*v),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(vertices(&full), vertices(&half));
    }
}
