//! Sphere glyph.

use glam::Vec3;
use glycoscope_core::color::Color;
use glycoscope_core::primitive::PrimitiveList;

/// Radial scaling applied on top of the caller's size; tuned for
/// visual parity with the other glyphs.
const RADIUS_FACTOR: f32 = 1.3;

/// Generates a sphere glyph. Orientation-independent, so no basis is
/// needed.
#[must_use]
pub fn sphere(center: Vec3, radius: f32, color: Color) -> PrimitiveList {
    let mut list = PrimitiveList::new();
    list.color(color);
    list.sphere(center, radius * RADIUS_FACTOR);
    list
}
