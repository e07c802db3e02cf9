//! Annotation Exporter Library
//!
//! Converts between raster label masks (`ndarray` 2D integer grids, zero
//! meaning background) and vector annotation sets (labeled `geo` points
//! and polygons in continuous coordinates):
//!
//! - [`mask_to_objects_2d`] extracts one polygon slice per label value,
//!   with full boundary topology (multi-part objects, holes);
//! - [`mask_to_points_2d`] extracts one point (or small square) slice per
//!   nonzero cell of a sparse point mask;
//! - [`slices_to_mask`] rasterizes slices back onto a label mask;
//! - [`load_coordinates`] ingests delimited coordinate files as point
//!   slices.
//!
//! Coordinate convention, everywhere: the mask row index maps to `y` and
//! the column index maps to `x`; geometry coordinates are `(x, y)` pairs,
//! the inverse of the `mask[[row, col]]` storage order. Object extraction
//! emits pixel-corner coordinates (the outer edges of filled cells);
//! rasterization samples pixel centers, making the two exact inverses for
//! hole-free regions.

pub mod annotation;
pub mod extract;
pub mod loader;
pub mod raster;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use annotation::{AnnotationGeometry, AnnotationSlice};
pub use extract::{Connectivity, ObjectExtractor, mask_to_objects_2d, mask_to_points_2d};
pub use loader::{CoordinateError, CoordinateFormat, load_coordinates, load_coordinates_with};
pub use raster::slices_to_mask;
