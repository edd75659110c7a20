// MIT/Apache2 License

use super::Surface;
use crate::{Color, FillRule, Intensity};
use easel_geometry::{Bounds, Point};

#[inline]
pub(crate) fn blend_pixel<S: Surface + ?Sized>(
    s: &mut S,
    x: i32,
    y: i32,
    color: Color,
    coverage: Intensity,
) {
    let background = match s.pixel(x, y) {
        Some(background) => background,
        None => return,
    };

    if let Some(blended) = color.over(background, coverage) {
        s.set_pixel(x, y, blended);
    }
}

#[inline]
pub(crate) fn fill_span<S: Surface + ?Sized>(s: &mut S, y: i32, x1: i32, x2: i32, color: Color) {
    let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let x1 = x1.max(0);
    let x2 = x2.min(s.width() as i32 - 1);
    (x1..=x2).for_each(|x| s.set_pixel(x, y, color));
}

#[inline]
pub(crate) fn fill_rectangle<S: Surface + ?Sized>(s: &mut S, bounds: Bounds, fill: &FillRule) {
    let top = bounds.min.y.max(0);
    let bottom = bounds.max.y.min(s.height() as i32 - 1);

    for y in top..=bottom {
        match fill {
            FillRule::SolidColor(color) => s.fill_span(y, bounds.min.x, bounds.max.x, *color),
            FillRule::Texture(texture) => {
                let origin = Point::new(bounds.min.x, bounds.min.y);
                let left = bounds.min.x.max(0);
                let right = bounds.max.x.min(s.width() as i32 - 1);
                for x in left..=right {
                    s.set_pixel(x, y, texture.sample_tiled(x, y, origin));
                }
            }
        }
    }
}
