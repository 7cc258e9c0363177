//! glycoscope: SNFG glyph rendering for molecular structures.
//!
//! Renders schematic 3D markers (spheres, stars, cones, cubes,
//! diamonds, half-diamonds) over sugar residues following the SNFG
//! (Symbol Nomenclature for Glycans) convention. For each qualifying
//! residue a local coordinate frame is estimated from the ring atoms
//! and used to orient a procedurally generated solid, emitted as a
//! flat primitive list into a named-drawable sink.
//!
//! # Quick Start
//!
//! ```
//! use glycoscope::*;
//!
//! // Atoms come from the host's selection collaborator; AtomList is
//! // the trivial in-memory source.
//! let key = ResidueKey::new("A", 1, "MAN");
//! let source = AtomList::new(vec![
//!     Atom::new("C1", key.clone(), Vec3::new(1.4, 0.0, 0.2)),
//!     Atom::new("C2", key.clone(), Vec3::new(0.4, 1.3, -0.2)),
//!     Atom::new("C3", key.clone(), Vec3::new(-1.1, 0.8, 0.2)),
//!     Atom::new("C4", key.clone(), Vec3::new(-1.1, -0.8, -0.2)),
//!     Atom::new("C5", key.clone(), Vec3::new(0.4, -1.3, 0.2)),
//!     Atom::new("O5", key.clone(), Vec3::new(0.2, -0.3, 0.5)),
//! ]);
//!
//! let mut sink = DrawableRegistry::new();
//! let rendered = render_glyphs(&source, &mut sink, &RenderOptions::default())?;
//! assert_eq!(rendered, 1);
//! assert!(sink.contains("snfg_all"));
//! # Ok::<(), GlycoscopeError>(())
//! ```
//!
//! # Pipeline
//!
//! selection source → [`estimate_frames`] → per-residue glyph
//! generator ([`glycoscope_shapes`]) → combined [`PrimitiveList`] →
//! [`PrimitiveSink`].
//!
//! The pipeline is single-threaded, synchronous, and reentrant:
//! repeated calls with an unchanged selection replace the previously
//! emitted drawable and produce identical output.

mod options;
mod render;

pub use options::RenderOptions;
pub use render::{derived_object_name, render_glyphs};

// Re-export core types
pub use glycoscope_core::{
    atom::{Atom, AtomList, ResidueKey, StructureSource},
    color::Color,
    error::{GlycoscopeError, Result},
    frame::{estimate_frames, FallbackReason, FrameStatus, ResidueFrame},
    primitive::{DrawMode, PrimitiveList, PrimitiveOp},
    registry::{DrawableRegistry, PrimitiveSink},
    Mat3, Vec3,
};

// Re-export shape generators and classification
pub use glycoscope_shapes::{
    classify, cone, cube, diamond, half_diamond, sphere, star, ShapeKind,
};
