// MIT/Apache2 License

use crate::{Color, Texture};

/// Defines how a particular space is filled.
///
/// A shape either fills with a solid color or with a texture, never both at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FillRule {
    SolidColor(Color),
    Texture(Texture),
}

impl FillRule {
    /// The solid color of this fill, if it is one.
    #[inline]
    pub fn solid_color(&self) -> Option<Color> {
        match self {
            FillRule::SolidColor(color) => Some(*color),
            FillRule::Texture(_) => None,
        }
    }

    /// Is this fill using a texture?
    #[inline]
    pub fn uses_texture(&self) -> bool {
        matches!(self, FillRule::Texture(_))
    }
}

impl From<Color> for FillRule {
    #[inline]
    fn from(color: Color) -> Self {
        FillRule::SolidColor(color)
    }
}

impl From<Texture> for FillRule {
    #[inline]
    fn from(texture: Texture) -> Self {
        FillRule::Texture(texture)
    }
}

/// Which scanline algorithm is used to fill polygons.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FillAlgorithm {
    /// Recompute every edge crossing on every row. Handles self-intersecting polygons.
    Parity,
    /// Keep an active edge list and step it from row to row.
    EdgeTable,
}

impl Default for FillAlgorithm {
    #[inline]
    fn default() -> Self {
        FillAlgorithm::Parity
    }
}
