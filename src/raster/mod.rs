// MIT/Apache2 License

//! Rasterizers for one-dimensional primitives: lines, circles and brush strokes.
//!
//! Every function here is generic over the [`Surface`] it draws onto and is what the default `draw_*`
//! methods of that trait forward to.
//!
//! [`Surface`]: crate::Surface

mod brush;
mod circle;
mod line;

pub use brush::*;
pub use circle::*;
pub use line::*;
