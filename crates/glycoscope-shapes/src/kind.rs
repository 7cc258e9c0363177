//! The closed set of SNFG glyph shapes.

use serde::{Deserialize, Serialize};

/// The glyph shape assigned to a residue class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Filled sphere (hexoses: Glc, Man, Gal).
    Sphere,
    /// Five-pointed star (pentoses: Xyl, Ara, Rib).
    Star,
    /// Cone (deoxyhexoses: Fuc).
    Cone,
    /// Cube (HexNAc: GlcNAc, GalNAc, ManNAc).
    Cube,
    /// Octahedral diamond (sialic acids: Neu5Ac, Neu5Gc, KDN).
    Diamond,
    /// Diamond with alternating faces in a second color (uronic
    /// acids: GlcA, GalA).
    HalfDiamond,
    /// Half-diamond with the two face colors swapped (IdoA).
    HalfDiamondReversed,
}
