// MIT/Apache2 License

use crate::FillAlgorithm;
use easel_geometry::DEFAULT_SIMPLIFY_THRESHOLD;

/// Options that control how shapes are rendered onto a [`Surface`].
///
/// [`Surface`]: crate::Surface
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Draw outlines with Xiaolin Wu's antialiased lines and circles.
    pub antialiasing: bool,
    /// The scanline algorithm used to fill polygons.
    pub fill_algorithm: FillAlgorithm,
    /// Polygons are simplified with this threshold, in pixels, before they are filled.
    pub simplify_threshold: f32,
}

impl Default for RenderOptions {
    #[inline]
    fn default() -> Self {
        Self {
            antialiasing: false,
            fill_algorithm: FillAlgorithm::Parity,
            simplify_threshold: DEFAULT_SIMPLIFY_THRESHOLD,
        }
    }
}

impl RenderOptions {
    /// The default options, with antialiasing turned on.
    #[inline]
    pub fn antialiased() -> Self {
        Self {
            antialiasing: true,
            ..Self::default()
        }
    }
}
