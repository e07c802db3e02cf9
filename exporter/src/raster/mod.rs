//! Rasterization of annotation slices back onto a label mask.

mod fill;

use geo::Point;
use ndarray::Array2;
use tracing::debug;

use crate::annotation::{AnnotationGeometry, AnnotationSlice};
use fill::fill_polygon;

/// Label written for slices that carry none (e.g. text-loaded points), so
/// they still mark their pixels against the zero background.
const FALLBACK_LABEL: i32 = 1;

/// Rasterize slices in order onto a fresh zero-initialized mask of
/// `shape = (rows, cols)`.
///
/// Later slices overwrite earlier ones at overlapping pixels
/// (last-write-wins, no blending); callers wanting a different tie-break
/// can sort the slices first. Geometry falling outside the canvas is
/// clipped silently. For masks whose regions have no sub-pixel holes and
/// no label ties, `slices_to_mask(mask_to_objects_2d(mask), shape)`
/// reproduces the mask exactly.
pub fn slices_to_mask(slices: &[AnnotationSlice], shape: (usize, usize)) -> Array2<i32> {
    let mut canvas = Array2::zeros(shape);
    debug!(
        "rasterizing {} slice(s) onto {}x{} canvas",
        slices.len(),
        shape.0,
        shape.1
    );
    for slice in slices {
        let label = slice.label.unwrap_or(FALLBACK_LABEL);
        match &slice.geometry {
            AnnotationGeometry::Point(point) => set_pixel(&mut canvas, point, label),
            AnnotationGeometry::Polygon(polygon) => fill_polygon(&mut canvas, polygon, label),
            AnnotationGeometry::MultiPolygon(multi) => {
                for polygon in &multi.0 {
                    fill_polygon(&mut canvas, polygon, label);
                }
            }
        }
    }
    canvas
}

fn set_pixel(canvas: &mut Array2<i32>, point: &Point<f64>, label: i32) {
    let (rows, cols) = canvas.dim();
    let c = point.x().floor();
    let r = point.y().floor();
    if r >= 0.0 && c >= 0.0 && (r as usize) < rows && (c as usize) < cols {
        canvas[[r as usize, c as usize]] = label;
    }
}
