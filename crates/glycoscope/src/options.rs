//! Configuration options for glyph rendering.

use serde::{Deserialize, Serialize};

/// Options for one render call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Opaque selection expression handed to the structure source.
    pub selection: String,

    /// Requested glyph transparency in `[0, 1]`.
    ///
    /// Accepted but not applied: the primitive list models opaque
    /// colors only, a documented limitation of this scheme.
    pub transparency: f32,

    /// Global size multiplier for all glyphs. Must be positive.
    pub scale: f32,

    /// Draw per-residue coordinate axes (X red, Y green, Z blue) as a
    /// second drawable, for inspecting frame estimation.
    pub debug_axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            selection: "all".to_string(),
            transparency: 0.3,
            scale: 0.5,
            debug_axes: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.selection, "all");
        assert_eq!(options.scale, 0.5);
        assert!(!options.debug_axes);
    }
}
