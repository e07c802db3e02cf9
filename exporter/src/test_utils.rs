//! Test Utilities
//!
//! Mask-drawing helpers and geometry assertions shared by the unit tests.
//! This module is only compiled when running tests.

#![cfg(test)]

use geo::{Polygon, Rect, Relate, coord};
use ndarray::Array2;

use crate::annotation::{AnnotationGeometry, AnnotationSlice};

/// Fill an axis-aligned block with top-left corner `(row, col)`.
pub fn draw_rect_by_corner(
    mask: &mut Array2<i32>,
    height: usize,
    width: usize,
    top_left: (usize, usize),
    label: i32,
) {
    let (rows, cols) = mask.dim();
    for r in top_left.0..(top_left.0 + height).min(rows) {
        for c in top_left.1..(top_left.1 + width).min(cols) {
            mask[[r, c]] = label;
        }
    }
}

/// Fill a square of the given side with top-left corner `(row, col)`.
pub fn draw_square_by_corner(
    mask: &mut Array2<i32>,
    side: usize,
    top_left: (usize, usize),
    label: i32,
) {
    draw_rect_by_corner(mask, side, side, top_left, label);
}

/// Axis-aligned box polygon from `(min_x, min_y)` to `(max_x, max_y)`.
pub fn box_polygon(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Polygon<f64> {
    Rect::new(
        coord! { x: min_x, y: min_y },
        coord! { x: max_x, y: max_y },
    )
    .to_polygon()
}

/// Sort slices by their bounding-box top-left corner.
pub fn sort_by_bounds(slices: &mut [AnnotationSlice]) {
    slices.sort_by(|a, b| {
        let ab = a.bounds().unwrap_or_default();
        let bb = b.bounds().unwrap_or_default();
        (ab.0, ab.1)
            .partial_cmp(&(bb.0, bb.1))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Assert topological polygon equality, independent of ring orientation
/// and starting vertex.
pub fn assert_polygon_equals(geometry: &AnnotationGeometry, expected: &Polygon<f64>) {
    let AnnotationGeometry::Polygon(actual) = geometry else {
        panic!("expected a polygon geometry, got {geometry:?}");
    };
    assert!(
        actual.relate(expected).is_equal_topo(),
        "polygons differ:\n  actual:   {actual:?}\n  expected: {expected:?}"
    );
}
