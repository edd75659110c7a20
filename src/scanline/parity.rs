// MIT/Apache2 License

use super::paint_pairs;
use crate::{FillRule, Surface};
use easel_geometry::{bounds, edges, Edge, Point};
use tinyvec::TinyVec;

/// Fill a polygon by recomputing every edge crossing on every row.
///
/// An edge crosses row `y` when `y_min <= y < y_max`, which counts every shared vertex exactly once. The
/// bottom row of the polygon is the exception: edges ending there are counted too, so that the last row of
/// the polygon is painted and the fill covers the outline's pixels on every side.
///
/// Rows outside the surface are skipped entirely.
pub fn parity_fill<S: Surface + ?Sized>(s: &mut S, vertices: &[Point], fill: &FillRule) {
    if vertices.len() < 3 {
        return;
    }
    let bounds = match bounds(vertices) {
        Some(bounds) => bounds,
        None => return,
    };

    let edges: Vec<Edge> = edges(vertices).collect();
    let bottom = bounds.max.y;
    let first_row = bounds.min.y.max(0);
    let last_row = bottom.min(s.height() as i32 - 1);
    log::trace!(
        "parity fill of {} vertices over rows {}..={}",
        vertices.len(),
        first_row,
        last_row
    );

    let mut crossings: TinyVec<[i32; 8]> = TinyVec::new();
    for y in first_row..=last_row {
        crossings.clear();
        crossings.extend(
            edges
                .iter()
                .filter(|edge| {
                    (edge.y_min <= y && y < edge.y_max) || (y == edge.y_max && y == bottom)
                })
                .map(|edge| edge.crossing_x(y)),
        );
        crossings.sort_unstable();

        paint_pairs(s, y, &crossings, fill, &bounds);
    }
}
