//! Mask-to-annotation extraction
//!
//! Turns raster label masks into vector annotation slices: object
//! extraction with full boundary topology, and per-pixel point extraction
//! for sparse point masks.

pub mod contours;
pub mod objects;
pub mod points;

pub use contours::{Connectivity, TracedRing, trace_boundaries};
pub use objects::{ObjectExtractor, mask_to_objects_2d};
pub use points::mask_to_points_2d;
