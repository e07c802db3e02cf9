//! Annotation value types
//!
//! Defines the slice type exchanged between the raster and vector worlds.

pub mod types;

pub use types::{AnnotationGeometry, AnnotationSlice};
