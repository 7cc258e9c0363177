//! Residue classification: residue name to (color, shape).
//!
//! The table is a closed enumeration covering the common sugars and
//! their PDB aliases; extending it means editing the `match` below.
//! Several entries deviate from the official SNFG 2D symbol where the
//! 3D scheme has no equivalent solid (e.g. Xyl's star stands in for
//! the orange star, IdoA's reversed half-diamond for the brown
//! half-circle).

use glycoscope_core::color::{
    Color, SNFG_BLUE, SNFG_BROWN, SNFG_GREEN, SNFG_LIGHT_BLUE, SNFG_ORANGE, SNFG_PINK,
    SNFG_PURPLE, SNFG_RED, SNFG_YELLOW,
};

use crate::kind::ShapeKind;

/// Maps a residue name to its SNFG base color and glyph shape.
///
/// Lookup is case-insensitive. Returns `None` for residues outside
/// the table; callers treat those residues as not renderable.
#[must_use]
pub fn classify(residue_name: &str) -> Option<(Color, ShapeKind)> {
    let entry = match residue_name.to_ascii_uppercase().as_str() {
        // Glucose and aliases
        "GLC" | "MAL" | "BGC" => (SNFG_BLUE, ShapeKind::Sphere),
        // Mannose
        "MAN" | "BMA" => (SNFG_GREEN, ShapeKind::Sphere),
        // Galactose
        "GAL" | "GLA" => (SNFG_YELLOW, ShapeKind::Sphere),
        // Fucose
        "FUC" | "FUL" => (SNFG_RED, ShapeKind::Cone),
        // Xylose
        "XYL" | "XYP" | "XYS" => (SNFG_ORANGE, ShapeKind::Star),
        // Arabinose
        "ARA" | "AHR" => (SNFG_GREEN, ShapeKind::Star),
        // Ribose
        "RIB" => (SNFG_PINK, ShapeKind::Star),
        // GlcNAc
        "NAG" | "GLCNAC" | "4YS" | "SGN" | "BGLN" | "NDG" => (SNFG_BLUE, ShapeKind::Cube),
        // GalNAc
        "NGA" | "GALNAC" | "A2G" => (SNFG_YELLOW, ShapeKind::Cube),
        // ManNAc
        "MANNA" => (SNFG_GREEN, ShapeKind::Cube),
        // Neu5Ac / Sia
        "NEU5AC" | "SIA" => (SNFG_PURPLE, ShapeKind::Diamond),
        // Neu5Gc
        "NEU5GC" | "NGC" => (SNFG_LIGHT_BLUE, ShapeKind::Diamond),
        // KDN
        "KDN" => (SNFG_GREEN, ShapeKind::Diamond),
        // Apiose
        "API" => (SNFG_PINK, ShapeKind::Diamond),
        // GalA
        "ADA" => (SNFG_YELLOW, ShapeKind::HalfDiamond),
        // GlcA
        "GLCA" | "GCU" | "BDP" => (SNFG_BLUE, ShapeKind::HalfDiamond),
        // IdoA
        "IDOA" | "IDS" | "IDR" => (SNFG_BROWN, ShapeKind::HalfDiamondReversed),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_names() {
        assert_eq!(classify("MAN"), Some((SNFG_GREEN, ShapeKind::Sphere)));
        assert_eq!(classify("FUC"), Some((SNFG_RED, ShapeKind::Cone)));
        assert_eq!(classify("NAG"), Some((SNFG_BLUE, ShapeKind::Cube)));
        assert_eq!(classify("SIA"), Some((SNFG_PURPLE, ShapeKind::Diamond)));
        assert_eq!(
            classify("IDOA"),
            Some((SNFG_BROWN, ShapeKind::HalfDiamondReversed))
        );
    }

    #[test]
    fn test_aliases_match_canonical() {
        assert_eq!(classify("BMA"), classify("MAN"));
        assert_eq!(classify("GLCNAC"), classify("NAG"));
        assert_eq!(classify("NEU5AC"), classify("SIA"));
        assert_eq!(classify("GCU"), classify("GLCA"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(classify("man"), classify("MAN"));
        assert_eq!(classify("Nag"), classify("NAG"));
    }

    #[test]
    fn test_unknown_residues_are_none() {
        assert_eq!(classify("ALA"), None);
        assert_eq!(classify("HOH"), None);
        assert_eq!(classify(""), None);
    }
}
