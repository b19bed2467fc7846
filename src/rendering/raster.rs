//! Shape rasterization: filled and outlined rounded rectangles, plain fills

use crate::rendering::canvas::Canvas;
use crate::rendering::layout::Bounds;
use crate::rendering::paint::Color;
use crate::{Error, Result};

/// Integer square root, rounded down.
fn isqrt(n: i64) -> i64 {
    if n <= 0 {
        return 0;
    }
    let mut r = (n as f64).sqrt() as i64;
    while r * r > n {
        r -= 1;
    }
    while (r + 1) * (r + 1) <= n {
        r += 1;
    }
    r
}

/// Radius clamped so opposite corners never overlap.
fn clamp_radius(b: &Bounds, radius: i32) -> i32 {
    radius.min(b.width() / 2).min(b.height() / 2).max(0)
}

/// The inclusive horizontal run of row `y` that lies inside the rounded
/// rectangle `b` with corner radius `r`.
///
/// A pixel is inside when its squared distance to the nearest corner
/// centre is at most `r²`; pixels in the straight bands have distance zero.
fn row_span(b: &Bounds, r: i32, y: i32) -> Option<(i32, i32)> {
    if b.is_empty() || y < b.y0 || y > b.y1 {
        return None;
    }
    let dy: i64 = if y < b.y0 + r {
        (b.y0 + r - y).into()
    } else if y > b.y1 - r {
        (y - (b.y1 - r)).into()
    } else {
        0
    };
    let rr = r as i64 * r as i64;
    if dy * dy > rr {
        return None;
    }
    let reach = isqrt(rr - dy * dy) as i32;
    let x0 = if dy == 0 { b.x0 } else { b.x0 + r - reach };
    let x1 = if dy == 0 { b.x1 } else { b.x1 - r + reach };
    Some((x0.max(b.x0), x1.min(b.x1)))
}

/// Draw a rectangle with rounded corners.
///
/// `fill` paints the interior, `outline` paints a ring `width` pixels thick
/// inside the bounds. At least one of the two must be given.
pub fn rounded_rect(
    canvas: &mut Canvas,
    bounds: Bounds,
    radius: i32,
    fill: Option<Color>,
    outline: Option<Color>,
    width: i32,
) -> Result<()> {
    if fill.is_none() && outline.is_none() {
        return Err(Error::InvalidShape(
            "rounded_rect needs a fill or an outline".into(),
        ));
    }
    let Some(rows) = bounds.clip(canvas.width(), canvas.height()) else {
        return Ok(());
    };
    let r = clamp_radius(&bounds, radius);

    if let Some(color) = fill {
        for y in rows.y0..=rows.y1 {
            if let Some((x0, x1)) = row_span(&bounds, r, y) {
                canvas.fill_span(y, x0, x1, color);
            }
        }
    }

    if let Some(color) = outline {
        let width = width.max(1);
        let inner = bounds.inset(width);
        let inner_r = clamp_radius(&inner, r - width);
        for y in rows.y0..=rows.y1 {
            let Some((ox0, ox1)) = row_span(&bounds, r, y) else {
                continue;
            };
            match row_span(&inner, inner_r, y) {
                Some((ix0, ix1)) => {
                    canvas.fill_span(y, ox0, ix0 - 1, color);
                    canvas.fill_span(y, ix1 + 1, ox1, color);
                }
                None => canvas.fill_span(y, ox0, ox1, color),
            }
        }
    }
    Ok(())
}

/// Fill an axis-aligned inclusive rectangle.
pub fn fill_rect(canvas: &mut Canvas, bounds: Bounds, color: Color) {
    let Some(rows) = bounds.clip(canvas.width(), canvas.height()) else {
        return;
    };
    for y in rows.y0..=rows.y1 {
        canvas.fill_span(y, rows.x0, rows.x1, color);
    }
}

/// One-pixel horizontal line from `x0` to `x1` inclusive.
pub fn hline(canvas: &mut Canvas, x0: i32, x1: i32, y: i32, color: Color) {
    canvas.fill_span(y, x0, x1, color);
}
