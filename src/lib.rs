// MIT/Apache2 License

//! A small raster engine for vector drawings.
//!
//! Shapes (lines, circles, rectangles, polygons and pills) are rendered onto anything implementing
//! [`Surface`], with an in-memory [`PixelBuffer`] provided. The pixel-level algorithms live in [`raster`],
//! [`scanline`] and [`flood`]; the pure geometry they rely on lives in the `easel-geometry` crate and is
//! re-exported here as [`geometry`]. [`DrawingState`] ties everything together into an editable drawing
//! driven by input events.

//#![forbid(unsafe_code)]

mod error;

pub mod color;
pub mod drawing;
pub mod fill;
pub mod flood;
pub mod intensity;
pub mod raster;
pub mod scanline;
pub mod shape;
pub mod surface;
pub mod texture;

mod buffer;

pub use buffer::*;
pub use color::*;
pub use drawing::*;
pub use error::*;
pub use fill::*;
pub use intensity::*;
pub use shape::*;
pub use surface::*;
pub use texture::*;

pub use easel_geometry as geometry;
pub use easel_geometry::{Bounds, Point, Segment};
