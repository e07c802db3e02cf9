//! Even-odd scanline fill sampling pixel centers.

use geo::{BoundingRect, Polygon};
use ndarray::Array2;

/// Fill `polygon` onto the canvas with `label`.
///
/// A pixel `(row, col)` is covered iff its center
/// `(col + 0.5, row + 0.5)` falls inside the polygon under the even-odd
/// rule across the exterior and interior rings. This is the exact inverse
/// of the extractor's pixel-corner convention. Geometry outside the canvas is
/// clipped silently.
pub(crate) fn fill_polygon(canvas: &mut Array2<i32>, polygon: &Polygon<f64>, label: i32) {
    let (rows, cols) = canvas.dim();
    if rows == 0 || cols == 0 {
        return;
    }
    let Some(rect) = polygon.bounding_rect() else {
        return;
    };

    let r_lo = (rect.min().y.floor() - 1.0).max(0.0) as i64;
    let r_hi = (rect.max().y.ceil() + 1.0).min(rows as f64 - 1.0) as i64;
    if r_hi < r_lo {
        return;
    }

    let mut crossings: Vec<f64> = Vec::new();
    for r in r_lo..=r_hi {
        let yc = r as f64 + 0.5;
        crossings.clear();
        for ring in std::iter::once(polygon.exterior()).chain(polygon.interiors().iter()) {
            for segment in ring.0.windows(2) {
                let (p, q) = (segment[0], segment[1]);
                // Half-open rule: a scanline through a vertex counts the
                // vertex for exactly one of its two edges.
                if (p.y <= yc && q.y > yc) || (q.y <= yc && p.y > yc) {
                    let t = (yc - p.y) / (q.y - p.y);
                    crossings.push(p.x + t * (q.x - p.x));
                }
            }
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let (xa, xb) = (pair[0], pair[1]);
            // Pixel centers c + 0.5 in [xa, xb).
            let c_lo = (xa - 0.5).ceil().max(0.0) as i64;
            let c_hi = ((xb - 0.5).ceil() - 1.0).min(cols as f64 - 1.0) as i64;
            if c_hi < c_lo {
                continue;
            }
            for c in c_lo..=c_hi {
                canvas[[r as usize, c as usize]] = label;
            }
        }
    }
}
