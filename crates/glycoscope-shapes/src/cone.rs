//! Cone glyph.

use glam::{Mat3, Vec3};
use glycoscope_core::color::Color;
use glycoscope_core::primitive::{PrimitiveList, PrimitiveOp};
use glycoscope_core::transform::transform_points;

/// Generates a cone glyph spanning `+/- r` along the local Z axis:
/// tip (radius 0) at `+r`, base (radius `r`) at `-r`.
#[must_use]
pub fn cone(center: Vec3, r: f32, color: Color, basis: Mat3) -> PrimitiveList {
    let local = [Vec3::new(0.0, 0.0, r), Vec3::new(0.0, 0.0, -r)];
    let vertices = transform_points(&local, center, basis);

    let mut list = PrimitiveList::new();
    list.color(color);
    list.push(PrimitiveOp::Cone {
        start: vertices[0],
        end: vertices[1],
        radius_start: 0.0,
        radius_end: r,
        start_color: color,
        end_color: color,
    });
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use glycoscope_core::color::SNFG_RED;
    use glycoscope_core::transform::basis_matrix;

    #[test]
    fn test_cone_spans_local_z() {
        let center = Vec3::new(0.0, 0.0, 10.0);
        // Local Z mapped onto global X.
        let basis = basis_matrix(Vec3::Y, Vec3::Z, Vec3::X);
        let list = cone(center, 2.0, SNFG_RED, basis);

        assert_eq!(list.len(), 2);
        match list.ops()[1] {
            PrimitiveOp::Cone {
                start,
                end,
                radius_start,
                radius_end,
                ..
            } => {
                assert!((start - Vec3::new(2.0, 0.0, 10.0)).length() < 1e-6);
                assert!((end - Vec3::new(-2.0, 0.0, 10.0)).length() < 1e-6);
                assert_eq!(radius_start, 0.0);
                assert_eq!(radius_end, 2.0);
            }
            ref op => panic!("expected cone op, got {op:?}"),
        }
    }
}
