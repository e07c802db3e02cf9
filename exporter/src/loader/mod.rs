//! Text coordinate ingestion
//!
//! Parses delimited coordinate files into point annotation slices, the
//! independent ingestion path feeding the same rasterizer as mask
//! extraction.

pub mod coordinates;
pub mod types;

pub use coordinates::{load_coordinates, load_coordinates_with, split_and_parse};
pub use types::{CoordinateError, CoordinateFormat};
