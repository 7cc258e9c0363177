//! SNFG glyph generators for glycoscope.
//!
//! One generator per glyph shape. Each defines its geometry in local
//! (basis-aligned) coordinates, then maps vertices and normals into
//! global space through the frame's basis matrix, emitting an ordered
//! [`PrimitiveList`](glycoscope_core::primitive::PrimitiveList).

// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod cone;
pub mod cube;
pub mod diamond;
pub mod kind;
pub mod sphere;
pub mod star;

pub use classify::classify;
pub use cone::cone;
pub use cube::cube;
pub use diamond::{diamond, half_diamond};
pub use kind::ShapeKind;
pub use sphere::sphere;
pub use star::star;
