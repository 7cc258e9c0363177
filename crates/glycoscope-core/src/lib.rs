//! Core abstractions for glycoscope.
//!
//! This crate provides the building blocks of the SNFG glyph pipeline:
//! - [`Atom`]/[`ResidueKey`] input records and the [`StructureSource`]
//!   selection seam
//! - [`estimate_frames`]: per-residue center + right-handed local basis
//!   with explicit fallback state
//! - [`basis_matrix`] and the local-to-global transform helpers
//! - [`PrimitiveList`]: the ordered drawing-opcode stream
//! - [`DrawableRegistry`] and the [`PrimitiveSink`] output seam

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod atom;
pub mod color;
pub mod error;
pub mod frame;
pub mod math;
pub mod primitive;
pub mod registry;
pub mod transform;

pub use atom::{Atom, AtomList, ResidueKey, StructureSource};
pub use color::Color;
pub use error::{GlycoscopeError, Result};
pub use frame::{estimate_frames, FallbackReason, FrameStatus, ResidueFrame};
pub use math::{normalize_or_default, smallest_covariance_axis};
pub use primitive::{DrawMode, PrimitiveList, PrimitiveOp};
pub use registry::{DrawableRegistry, PrimitiveSink};
pub use transform::{basis_matrix, transform_normals, transform_points};

// Re-export glam types for convenience
pub use glam::{Mat3, Vec3};
