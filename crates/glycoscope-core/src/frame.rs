//! Per-residue local frame estimation.
//!
//! For every residue contributing ring atoms, derives a center and a
//! right-handed orthonormal basis {X, Y, Z}:
//!
//! - Z points from the ring center towards C4.
//! - The plane normal of the best-fit C1-C5 plane, together with Z,
//!   fixes X and Y.
//!
//! Estimation never fails and never omits a residue: every degenerate
//! configuration (missing atoms, coincident points, collinear ring,
//! normal parallel to Z) resolves to a documented fallback so that
//! downstream stages always receive a usable, if approximate,
//! orientation. Fallbacks that substitute the full default basis are
//! flagged in [`FrameStatus`].

use std::collections::BTreeMap;

use glam::Vec3;

use crate::atom::{Atom, ResidueKey};
use crate::math::{normalize_or_default, smallest_covariance_axis};

/// Distance below which the ring center and C4 count as coincident.
const COINCIDENT_EPSILON: f32 = 1e-6;

/// |dot| threshold above which the plane normal and Z axis are treated
/// as parallel.
const PARALLEL_DOT: f32 = 0.995;

/// |dot| threshold for picking the arbitrary in-plane seed vector.
const SEED_DOT: f32 = 0.99;

/// Why a frame fell back to the default global basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Fewer than 3 ring atoms were present for centering.
    TooFewRingAtoms,
    /// The C4 atom, which anchors the Z axis, is missing.
    MissingC4,
    /// The ring center and C4 are coincident.
    CoincidentC4,
    /// The computed axes contained non-finite components.
    NonFiniteAxes,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::TooFewRingAtoms => "fewer than 3 ring atoms",
            Self::MissingC4 => "missing C4 atom",
            Self::CoincidentC4 => "center and C4 coincident",
            Self::NonFiniteAxes => "non-finite axis components",
        };
        f.write_str(s)
    }
}

/// Whether a frame's basis was derived from the residue geometry or
/// substituted with the global default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Axes derived from the residue's ring geometry.
    Computed,
    /// The default basis (global X/Y/Z) was substituted.
    DefaultBasis(FallbackReason),
}

/// A residue's center and right-handed orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueFrame {
    /// Residue name, carried through for shape classification.
    pub residue_name: String,
    /// Ring center (mean of the present C1-C5/O5 atoms).
    pub center: Vec3,
    /// Local X axis (unit).
    pub x_axis: Vec3,
    /// Local Y axis (unit).
    pub y_axis: Vec3,
    /// Local Z axis (unit), towards C4 when computed.
    pub z_axis: Vec3,
    /// Computed-vs-fallback state.
    pub status: FrameStatus,
}

impl ResidueFrame {
    fn default_basis(residue_name: &str, center: Vec3, reason: FallbackReason) -> Self {
        Self {
            residue_name: residue_name.to_string(),
            center,
            x_axis: Vec3::X,
            y_axis: Vec3::Y,
            z_axis: Vec3::Z,
            status: FrameStatus::DefaultBasis(reason),
        }
    }

    /// Returns true if the basis was substituted with the global
    /// default.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.status, FrameStatus::DefaultBasis(_))
    }
}

/// The ring atoms of one residue. Only these positions participate in
/// frame estimation; all other atoms are ignored.
#[derive(Debug, Clone, Copy, Default)]
struct RingAtoms {
    c1: Option<Vec3>,
    c2: Option<Vec3>,
    c3: Option<Vec3>,
    c4: Option<Vec3>,
    c5: Option<Vec3>,
    o5: Option<Vec3>,
}

impl RingAtoms {
    /// Records a position if `name` (already upper-cased) is a ring
    /// atom.
    fn insert(&mut self, name: &str, position: Vec3) {
        let slot = match name {
            "C1" => &mut self.c1,
            "C2" => &mut self.c2,
            "C3" => &mut self.c3,
            "C4" => &mut self.c4,
            "C5" => &mut self.c5,
            "O5" => &mut self.o5,
            _ => return,
        };
        *slot = Some(position);
    }

    fn is_empty(&self) -> bool {
        self.center_coords().is_empty()
    }

    /// Atoms used for centering: C1-C5 and O5.
    fn center_coords(&self) -> Vec<Vec3> {
        [self.c1, self.c2, self.c3, self.c4, self.c5, self.o5]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Atoms defining the ring plane: C1-C5.
    fn plane_coords(&self) -> Vec<Vec3> {
        [self.c1, self.c2, self.c3, self.c4, self.c5]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Estimates a frame for every residue contributing at least one ring
/// atom.
///
/// The returned map iterates in `ResidueKey` order; no significance
/// attaches to that order beyond determinism.
#[must_use]
pub fn estimate_frames(atoms: &[Atom]) -> BTreeMap<ResidueKey, ResidueFrame> {
    let mut rings: BTreeMap<ResidueKey, RingAtoms> = BTreeMap::new();
    for atom in atoms {
        let name = atom.name.to_ascii_uppercase();
        rings
            .entry(atom.residue.clone())
            .or_default()
            .insert(&name, atom.position);
    }
    // Residues that contributed only non-ring atoms carry no geometry.
    rings.retain(|_, ring| !ring.is_empty());

    rings
        .into_iter()
        .map(|(key, ring)| {
            let frame = estimate_one(&key, &ring);
            (key, frame)
        })
        .collect()
}

fn estimate_one(key: &ResidueKey, ring: &RingAtoms) -> ResidueFrame {
    let center_coords = ring.center_coords();

    if center_coords.len() < 3 {
        log::warn!(
            "residue {key}: only {} ring atoms for center calculation, using default basis",
            center_coords.len()
        );
        let center = mean(&center_coords);
        return ResidueFrame::default_basis(&key.name, center, FallbackReason::TooFewRingAtoms);
    }
    let center = mean(&center_coords);

    // Z is the most load-bearing axis; without a trustworthy Z the
    // whole frame is unreliable and the global default is the safest
    // answer.
    let Some(c4) = ring.c4 else {
        log::warn!("residue {key}: missing C4 for Z axis, using default basis");
        return ResidueFrame::default_basis(&key.name, center, FallbackReason::MissingC4);
    };
    let to_c4 = c4 - center;
    if to_c4.length() < COINCIDENT_EPSILON {
        log::warn!("residue {key}: center and C4 nearly coincident, using default basis");
        return ResidueFrame::default_basis(&key.name, center, FallbackReason::CoincidentC4);
    }
    let z_axis = normalize_or_default(to_c4);

    let plane_coords = ring.plane_coords();
    let plane_normal = if plane_coords.len() < 3 {
        log::warn!(
            "residue {key}: only {} of C1-C5 present, using default plane normal",
            plane_coords.len()
        );
        Vec3::Z
    } else {
        smallest_covariance_axis(&plane_coords).unwrap_or_else(|| {
            log::warn!("residue {key}: C1-C5 collinear or coincident, using default plane normal");
            Vec3::Z
        })
    };

    let (x_axis, y_axis) = if plane_normal.dot(z_axis).abs() > PARALLEL_DOT {
        // Ambiguous configuration: the ring plane normal coincides
        // with the center-to-C4 direction. Any vector orthogonal to Z
        // serves to seed Y.
        log::warn!("residue {key}: Z axis nearly parallel to ring plane normal, seeding Y arbitrarily");
        let seed = if z_axis.dot(Vec3::X).abs() > SEED_DOT {
            Vec3::Y
        } else {
            Vec3::X
        };
        let y_axis = normalize_or_default(z_axis.cross(seed));
        let x_axis = normalize_or_default(y_axis.cross(z_axis));
        (x_axis, y_axis)
    } else {
        // X = normal x Z lies roughly in the ring plane; Y = Z x X
        // completes the right-handed triple.
        let x_axis = normalize_or_default(plane_normal.cross(z_axis));
        let y_axis = normalize_or_default(z_axis.cross(x_axis));
        (x_axis, y_axis)
    };

    if !(x_axis.is_finite() && y_axis.is_finite() && z_axis.is_finite()) {
        log::warn!("residue {key}: computed axes contain non-finite values, using default basis");
        return ResidueFrame::default_basis(&key.name, center, FallbackReason::NonFiniteAxes);
    }

    ResidueFrame {
        residue_name: key.name.clone(),
        center,
        x_axis,
        y_axis,
        z_axis,
        status: FrameStatus::Computed,
    }
}

fn mean(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}
