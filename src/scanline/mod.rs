// MIT/Apache2 License

//! Scanline polygon fills.
//!
//! Both algorithms walk the polygon row by row and fill between pairs of sorted edge crossings; they differ
//! in how the crossings are found. Textures are stretched over the polygon's bounding box and wrap around
//! beyond it.

mod edge_table;
mod parity;

pub use edge_table::edge_table_fill;
pub use parity::parity_fill;

use crate::{FillRule, Surface};
use easel_geometry::Bounds;

/// Fill one span of a polygon, from `x1` to `x2` inclusive.
#[inline]
fn paint_span<S: Surface + ?Sized>(
    s: &mut S,
    y: i32,
    x1: i32,
    x2: i32,
    fill: &FillRule,
    bounds: &Bounds,
) {
    match fill {
        FillRule::SolidColor(color) => s.fill_span(y, x1, x2, *color),
        FillRule::Texture(texture) => {
            let left = x1.max(0);
            let right = x2.min(s.width() as i32 - 1);
            for x in left..=right {
                s.set_pixel(x, y, texture.sample_stretched(x, y, bounds));
            }
        }
    }
}

/// Fill between consecutive pairs of sorted crossings.
#[inline]
fn paint_pairs<S: Surface + ?Sized>(
    s: &mut S,
    y: i32,
    crossings: &[i32],
    fill: &FillRule,
    bounds: &Bounds,
) {
    for pair in crossings.chunks_exact(2) {
        paint_span(s, y, pair[0], pair[1], fill, bounds);
    }
}
