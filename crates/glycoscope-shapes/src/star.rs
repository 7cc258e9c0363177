//! Five-pointed star glyph.
//!
//! A thin double-sided star: outer and inner points alternate in the
//! local X-Z plane, and a front/back apex pair along local Y gives the
//! solid a slight volume. Each side is one triangle fan closed by
//! repeating the first outer vertex.

use glam::{Mat3, Vec3};
use glycoscope_core::color::Color;
use glycoscope_core::primitive::{DrawMode, PrimitiveList};
use glycoscope_core::transform::{transform_normals, transform_points};

/// Inner radius as a fraction of the outer radius.
const INNER_RADIUS_FACTOR: f32 = 0.45;

/// Apex height as a fraction of the outer radius.
const APEX_FACTOR: f32 = 0.6;

/// Generates a star glyph with outer radius `r`.
#[must_use]
pub fn star(center: Vec3, r: f32, color: Color, basis: Mat3) -> PrimitiveList {
    let r_inner = INNER_RADIUS_FACTOR * r;

    let mut outer_local = Vec::with_capacity(5);
    let mut inner_local = Vec::with_capacity(5);
    for i in 0..5 {
        let angle = (i as f32) * 72.0_f32.to_radians();
        outer_local.push(Vec3::new(r * angle.cos(), 0.0, r * angle.sin()));
        let inner_angle = angle + 36.0_f32.to_radians();
        inner_local.push(Vec3::new(
            r_inner * inner_angle.cos(),
            0.0,
            r_inner * inner_angle.sin(),
        ));
    }
    let apex_local = [
        Vec3::new(0.0, APEX_FACTOR * r, 0.0),
        Vec3::new(0.0, -APEX_FACTOR * r, 0.0),
    ];

    let outer = transform_points(&outer_local, center, basis);
    let inner = transform_points(&inner_local, center, basis);
    let apex = transform_points(&apex_local, center, basis);
    let normals = transform_normals(&[Vec3::Y, Vec3::NEG_Y], basis);

    let mut list = PrimitiveList::new();
    list.color(color);

    // Front face
    list.begin(DrawMode::TriangleFan);
    list.normal(normals[0]);
    list.vertex(apex[0]);
    for i in 0..5 {
        list.vertex(outer[i]);
        list.vertex(inner[i]);
    }
    list.vertex(outer[0]); // close the fan
    list.end();

    // Back face
    list.begin(DrawMode::TriangleFan);
    list.normal(normals[1]);
    list.vertex(apex[1]);
    for i in 0..5 {
        list.vertex(outer[i]);
        list.vertex(inner[i]);
    }
    list.vertex(outer[0]); // close the fan
    list.end();

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use glycoscope_core::color::SNFG_ORANGE;
    use glycoscope_core::primitive::PrimitiveOp;
    use glycoscope_core::transform::basis_matrix;

    fn identity_star() -> PrimitiveList {
        star(
            Vec3::ZERO,
            1.0,
            SNFG_ORANGE,
            basis_matrix(Vec3::X, Vec3::Y, Vec3::Z),
        )
    }

    #[test]
    fn test_star_emits_two_closed_fans() {
        let list = identity_star();
        let fans = list
            .iter()
            .filter(|op| matches!(op, PrimitiveOp::Begin(DrawMode::TriangleFan)))
            .count();
        assert_eq!(fans, 2);
        let ends = list
            .iter()
            .filter(|op| matches!(op, PrimitiveOp::End))
            .count();
        assert_eq!(ends, 2);
    }

    #[test]
    fn test_each_fan_has_twelve_vertices() {
        // Apex + 5 outer/5 inner interleaved + closing outer vertex.
        let list = identity_star();
        let vertices = list
            .iter()
            .filter(|op| matches!(op, PrimitiveOp::Vertex(_)))
            .count();
        assert_eq!(vertices, 24);
    }

    #[test]
    fn test_fan_closes_on_first_outer_vertex() {
        let list = identity_star();
        let vertices: Vec<Vec3> = list
            .iter()
            .filter_map(|op| match op {
                PrimitiveOp::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect();
        // Front fan: index 1 is the first outer vertex, index 11 closes.
        assert_eq!(vertices[1], vertices[11]);
        // Back fan likewise.
        assert_eq!(vertices[13], vertices[23]);
    }

    #[test]
    fn test_face_normals_are_opposed() {
        let list = identity_star();
        let normals: Vec<Vec3> = list
            .iter()
            .filter_map(|op| match op {
                PrimitiveOp::Normal(n) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(normals.len(), 2);
        assert!((normals[0] + normals[1]).length() < 1e-6);
    }

    #[test]
    fn test_inner_radius_fraction() {
        let list = identity_star();
        let vertices: Vec<Vec3> = list
            .iter()
            .filter_map(|op| match op {
                PrimitiveOp::Vertex(v) => Some(*v),
                _ => None,
            })
            .collect();
        // vertices[1] outer, vertices[2] inner.
        assert!((vertices[1].length() - 1.0).abs() < 1e-6);
        assert!((vertices[2].length() - 0.45).abs() < 1e-6);
    }
}
