// MIT/Apache2 License

use super::paint_pairs;
use crate::{FillRule, Surface};
use easel_geometry::{bounds, edges, Point};
use std::collections::BTreeMap;
use tinyvec::TinyVec;

/// An edge on the active edge list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct ActiveEdge {
    y_max: i32,
    x: i32,
    step: i32,
}

/// Fill a polygon with the classic edge table algorithm.
///
/// Edges are bucketed by the row they start on. Walking down the rows, edges are added to the active list
/// when they start and dropped once the row reaches their `y_max`, so the bottom row of the polygon is left
/// for the outline. The active edges are kept sorted by their current X, and the spans between consecutive
/// pairs are filled. Each edge's X then moves by its inverse slope rounded to the nearest whole pixel, so
/// edges steeper than two rows per pixel never move and shallow edges drift from their true position.
pub fn edge_table_fill<S: Surface + ?Sized>(s: &mut S, vertices: &[Point], fill: &FillRule) {
    if vertices.len() < 3 {
        return;
    }
    let bounds = match bounds(vertices) {
        Some(bounds) => bounds,
        None => return,
    };

    let mut table: BTreeMap<i32, Vec<ActiveEdge>> = BTreeMap::new();
    for edge in edges(vertices) {
        table.entry(edge.y_min).or_default().push(ActiveEdge {
            y_max: edge.y_max,
            x: edge.x_at_y_min,
            step: edge.inverse_slope.round() as i32,
        });
    }
    log::trace!(
        "edge table fill of {} vertices, {} starting rows",
        vertices.len(),
        table.len()
    );

    let mut active: TinyVec<[ActiveEdge; 8]> = TinyVec::new();
    let mut crossings: TinyVec<[i32; 8]> = TinyVec::new();

    for y in bounds.min.y..=bounds.max.y {
        if let Some(starting) = table.remove(&y) {
            active.extend(starting);
        }
        active.retain(|edge| edge.y_max > y);
        active.sort_by_key(|edge| edge.x);

        if y >= 0 && y < s.height() as i32 {
            crossings.clear();
            crossings.extend(active.iter().map(|edge| edge.x));
            paint_pairs(s, y, &crossings, fill, &bounds);
        }

        for edge in active.iter_mut() {
            edge.x += edge.step;
        }
    }
}
