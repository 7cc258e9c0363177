//! The render driver: selection filter, frame estimation, glyph
//! dispatch, and emission into the sink.

use glycoscope_core::atom::{Atom, StructureSource};
use glycoscope_core::color::{Color, SNFG_WHITE};
use glycoscope_core::error::Result;
use glycoscope_core::frame::{estimate_frames, ResidueFrame};
use glycoscope_core::primitive::{PrimitiveList, PrimitiveOp};
use glycoscope_core::registry::PrimitiveSink;
use glycoscope_core::transform::basis_matrix;
use glycoscope_shapes::{classify, cone, cube, diamond, half_diamond, sphere, star, ShapeKind};

use crate::options::RenderOptions;

/// Debug axis colors: X red, Y green, Z blue.
const AXIS_X_COLOR: Color = Color::new(1.0, 0.0, 0.0);
const AXIS_Y_COLOR: Color = Color::new(0.0, 1.0, 0.0);
const AXIS_Z_COLOR: Color = Color::new(0.0, 0.0, 1.0);

// Empirical per-shape size factors, tuned for visual balance against
// sugar ring dimensions. The base factor applies to all oriented
// glyphs; spheres scale directly from the global knob.
const BASE_SIZE_FACTOR: f32 = 4.0;
const SPHERE_SIZE_FACTOR: f32 = 1.8;
const CONE_DIAMOND_FACTOR: f32 = 0.75;
const CUBE_FACTOR: f32 = 0.55;
const AXIS_LENGTH_FACTOR: f32 = 1.5;
const AXIS_RADIUS_FACTOR: f32 = 0.1;

/// Derives the drawable name for a selection expression.
///
/// Non-alphanumeric characters become underscores; an empty expression
/// maps to `snfg_selection`.
#[must_use]
pub fn derived_object_name(selection: &str) -> String {
    let safe: String = selection
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect();
    if safe.is_empty() {
        "snfg_selection".to_string()
    } else {
        format!("snfg_{safe}")
    }
}

/// Renders SNFG glyphs for every classified sugar residue in the
/// selection, emitting one combined drawable into the sink (plus a
/// second axes drawable when `debug_axes` is set).
///
/// The primary drawable replaces any prior object under the same
/// derived name, so repeated calls with an unchanged selection are
/// idempotent. An empty emission (no matching residues) is valid: the
/// prior object is deleted and nothing is loaded.
///
/// Returns the number of residues that produced primitives.
pub fn render_glyphs(
    source: &dyn StructureSource,
    sink: &mut dyn PrimitiveSink,
    options: &RenderOptions,
) -> Result<usize> {
    let atoms = source.select(&options.selection)?;
    let filtered: Vec<Atom> = atoms
        .into_iter()
        .filter(|a| classify(&a.residue.name).is_some())
        .collect();

    let frames = estimate_frames(&filtered);
    log::info!(
        "rendering {} residue(s) for selection '{}'",
        frames.len(),
        options.selection
    );
    if options.transparency > 0.0 {
        log::info!(
            "transparency {} requested but not applied to glyph primitives",
            options.transparency
        );
    }

    let base = BASE_SIZE_FACTOR * options.scale;
    let mut glyphs = PrimitiveList::new();
    let mut axes = PrimitiveList::new();
    let mut rendered = 0_usize;

    for frame in frames.values() {
        let Some((color, kind)) = classify(&frame.residue_name) else {
            // The atom filter only passes classified residues.
            continue;
        };

        let list = generate_glyph(frame, kind, color, options.scale, base);
        if list.is_empty() {
            log::warn!(
                "no primitives generated for residue {} at {:?}",
                frame.residue_name,
                frame.center
            );
            continue;
        }
        glyphs.append(list);
        rendered += 1;

        if options.debug_axes {
            append_axes(&mut axes, frame, base, options.scale);
        }
    }

    let name = derived_object_name(&options.selection);
    let axes_name = format!("{name}_axes");

    // Replace semantics: clear prior objects before (re-)emission.
    sink.delete(&name);
    sink.delete(&axes_name);

    if glyphs.is_empty() {
        log::info!("no glyphs emitted for selection '{}'", options.selection);
    } else {
        sink.load(&name, glyphs);
        log::info!("loaded drawable '{name}' ({rendered} residues)");
    }
    if options.debug_axes && !axes.is_empty() {
        sink.load(&axes_name, axes);
    }

    Ok(rendered)
}

/// Dispatches one residue frame to its glyph generator.
///
/// The shape table is a closed enumeration, so every kind has a
/// generator; the match is exhaustive by construction.
fn generate_glyph(
    frame: &ResidueFrame,
    kind: ShapeKind,
    color: Color,
    scale: f32,
    base: f32,
) -> PrimitiveList {
    let basis = basis_matrix(frame.x_axis, frame.y_axis, frame.z_axis);
    match kind {
        ShapeKind::Sphere => sphere(frame.center, SPHERE_SIZE_FACTOR * scale, color),
        ShapeKind::Star => star(frame.center, base, color, basis),
        ShapeKind::Cone => cone(frame.center, CONE_DIAMOND_FACTOR * base, color, basis),
        ShapeKind::Cube => cube(frame.center, CUBE_FACTOR * base, color, basis),
        ShapeKind::Diamond => diamond(frame.center, CONE_DIAMOND_FACTOR * base, color, basis),
        ShapeKind::HalfDiamond => half_diamond(
            frame.center,
            CONE_DIAMOND_FACTOR * base,
            color,
            SNFG_WHITE,
            basis,
        ),
        ShapeKind::HalfDiamondReversed => half_diamond(
            frame.center,
            CONE_DIAMOND_FACTOR * base,
            SNFG_WHITE,
            color,
            basis,
        ),
    }
}

/// Appends one colored cylinder per frame axis to the debug list.
fn append_axes(axes: &mut PrimitiveList, frame: &ResidueFrame, base: f32, scale: f32) {
    let length = base * AXIS_LENGTH_FACTOR;
    let radius = scale * AXIS_RADIUS_FACTOR;
    for (axis, color) in [
        (frame.x_axis, AXIS_X_COLOR),
        (frame.y_axis, AXIS_Y_COLOR),
        (frame.z_axis, AXIS_Z_COLOR),
    ] {
        axes.push(PrimitiveOp::Cylinder {
            start: frame.center,
            end: frame.center + axis * length,
            radius,
            start_color: color,
            end_color: color,
        });
    }
}
