//! Point extraction: sparse point masks to point/square annotations.

use geo::{Point, Rect, coord};
use ndarray::Array2;

use crate::annotation::{AnnotationGeometry, AnnotationSlice};

/// Convert a point label mask to one slice per nonzero cell.
///
/// Cells are enumerated in row-major order. Each nonzero cell at
/// `(row, col)` yields a slice labeled with the cell value; cells are not
/// grouped by label. With `points` set the geometry is the point
/// `(x, y) = (col, row)`; otherwise it is the 2x2-unit square with bounds
/// `[x - 1, y - 1, x + 1, y + 1]`, for consumers that need a
/// non-degenerate area per point.
pub fn mask_to_points_2d(mask: &Array2<i32>, points: bool) -> Vec<AnnotationSlice> {
    mask.indexed_iter()
        .filter(|&(_, &value)| value != 0)
        .map(|((r, c), &value)| {
            let (x, y) = (c as f64, r as f64);
            let geometry = if points {
                AnnotationGeometry::Point(Point::new(x, y))
            } else {
                AnnotationGeometry::Polygon(
                    Rect::new(
                        coord! { x: x - 1.0, y: y - 1.0 },
                        coord! { x: x + 1.0, y: y + 1.0 },
                    )
                    .to_polygon(),
                )
            };
            AnnotationSlice::new(geometry, Some(value))
        })
        .collect()
}
