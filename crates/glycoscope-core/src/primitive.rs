//! Drawing primitive opcodes and the primitive list.
//!
//! A [`PrimitiveList`] is an ordered, renderer-agnostic instruction
//! stream, similar in spirit to an immediate-mode graphics command
//! buffer. The list is append-only and emission order must be
//! preserved: face winding depends on it.

use glam::Vec3;

use crate::color::Color;

/// Primitive mode for Begin/End blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    /// Triangle list.
    Triangles,
    /// Triangle strip.
    TriangleStrip,
    /// Triangle fan.
    TriangleFan,
    /// Line list.
    Lines,
    /// Line strip.
    LineStrip,
}

/// A single drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveOp {
    /// Set the color for subsequent primitives.
    Color(Color),
    /// Begin a primitive block.
    Begin(DrawMode),
    /// End the current primitive block.
    End,
    /// Emit a vertex (within a Begin/End block).
    Vertex(Vec3),
    /// Set the normal for subsequent vertices.
    Normal(Vec3),
    /// Draw a sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },
    /// Draw a cone between two points with per-end radii and colors.
    Cone {
        /// Start point.
        start: Vec3,
        /// End point.
        end: Vec3,
        /// Radius at the start point.
        radius_start: f32,
        /// Radius at the end point.
        radius_end: f32,
        /// Color at the start point.
        start_color: Color,
        /// Color at the end point.
        end_color: Color,
    },
    /// Draw a cylinder between two points.
    Cylinder {
        /// Start point.
        start: Vec3,
        /// End point.
        end: Vec3,
        /// Cylinder radius.
        radius: f32,
        /// Color at the start point.
        start_color: Color,
        /// Color at the end point.
        end_color: Color,
    },
}

/// An ordered sequence of drawing instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrimitiveList {
    ops: Vec<PrimitiveOp>,
}

impl PrimitiveList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an instruction.
    pub fn push(&mut self, op: PrimitiveOp) {
        self.ops.push(op);
    }

    /// Appends all instructions from another list, preserving order.
    pub fn append(&mut self, mut other: PrimitiveList) {
        self.ops.append(&mut other.ops);
    }

    /// Appends a color instruction.
    pub fn color(&mut self, color: Color) {
        self.ops.push(PrimitiveOp::Color(color));
    }

    /// Appends a begin instruction.
    pub fn begin(&mut self, mode: DrawMode) {
        self.ops.push(PrimitiveOp::Begin(mode));
    }

    /// Appends an end instruction.
    pub fn end(&mut self) {
        self.ops.push(PrimitiveOp::End);
    }

    /// Appends a vertex instruction.
    pub fn vertex(&mut self, position: Vec3) {
        self.ops.push(PrimitiveOp::Vertex(position));
    }

    /// Appends a normal instruction.
    pub fn normal(&mut self, direction: Vec3) {
        self.ops.push(PrimitiveOp::Normal(direction));
    }

    /// Appends a sphere instruction.
    pub fn sphere(&mut self, center: Vec3, radius: f32) {
        self.ops.push(PrimitiveOp::Sphere { center, radius });
    }

    /// Returns the instructions in emission order.
    #[must_use]
    pub fn ops(&self) -> &[PrimitiveOp] {
        &self.ops
    }

    /// Returns an iterator over the instructions in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveOp> {
        self.ops.iter()
    }

    /// Returns the number of instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the list holds no instructions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<PrimitiveOp> for PrimitiveList {
    fn from_iter<I: IntoIterator<Item = PrimitiveOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::SNFG_GREEN;

    #[test]
    fn test_emission_order_preserved() {
        let mut list = PrimitiveList::new();
        list.color(SNFG_GREEN);
        list.begin(DrawMode::Triangles);
        list.normal(Vec3::Z);
        list.vertex(Vec3::X);
        list.end();

        let ops = list.ops();
        assert_eq!(ops.len(), 5);
        assert!(matches!(ops[0], PrimitiveOp::Color(_)));
        assert!(matches!(ops[1], PrimitiveOp::Begin(DrawMode::Triangles)));
        assert!(matches!(ops[4], PrimitiveOp::End));
    }

    #[test]
    fn test_append_concatenates() {
        let mut a = PrimitiveList::new();
        a.sphere(Vec3::ZERO, 1.0);
        let mut b = PrimitiveList::new();
        b.sphere(Vec3::X, 2.0);
        a.append(b);
        assert_eq!(a.len(), 2);
    }
}
