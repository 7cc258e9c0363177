//! Atom records and the selection collaborator seam.

use glam::Vec3;

use crate::error::Result;

/// Identifies a residue within a structure: chain, sequence number,
/// and residue name.
///
/// Keys order lexicographically by (chain, seq, name), which gives the
/// frame estimator a deterministic traversal order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResidueKey {
    /// Chain identifier (e.g. "A").
    pub chain: String,
    /// Residue sequence number.
    pub seq: i32,
    /// Residue name (e.g. "MAN", "NAG").
    pub name: String,
}

impl ResidueKey {
    /// Creates a residue key.
    pub fn new(chain: impl Into<String>, seq: i32, name: impl Into<String>) -> Self {
        Self {
            chain: chain.into(),
            seq,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for ResidueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}{}", self.chain, self.name, self.seq)
    }
}

/// An immutable input atom supplied by the selection collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// Atom name within the residue (e.g. "C1", "O5").
    pub name: String,
    /// The residue this atom belongs to.
    pub residue: ResidueKey,
    /// Position in global coordinates.
    pub position: Vec3,
}

impl Atom {
    /// Creates an atom.
    pub fn new(name: impl Into<String>, residue: ResidueKey, position: Vec3) -> Self {
        Self {
            name: name.into(),
            residue,
            position,
        }
    }
}

/// The selection collaborator: exposes the atoms matching an opaque
/// selection expression.
///
/// This core only reads atoms; it never mutates the host structure.
/// Hosts with a real selection language implement this trait over
/// their own structure model.
pub trait StructureSource {
    /// Returns the atoms matching `expr`.
    ///
    /// Returns an error only if the expression itself is malformed for
    /// the host; an expression that matches nothing yields an empty
    /// vector.
    fn select(&self, expr: &str) -> Result<Vec<Atom>>;
}

/// A trivial in-memory source backed by a flat atom list.
///
/// The selection expression is ignored: every atom is always exposed.
/// Intended for tests and for hosts that pre-filter atoms themselves.
#[derive(Debug, Clone, Default)]
pub struct AtomList {
    atoms: Vec<Atom>,
}

impl AtomList {
    /// Creates a source over the given atoms.
    #[must_use]
    pub fn new(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }

    /// Returns the number of atoms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns true if there are no atoms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

impl StructureSource for AtomList {
    fn select(&self, _expr: &str) -> Result<Vec<Atom>> {
        Ok(self.atoms.clone())
    }
}
