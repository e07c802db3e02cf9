//! Annotation slice and geometry definitions

use geo::{BoundingRect, MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Geometry carried by an annotation slice.
///
/// Extractors emit coordinates as `(x, y)` pairs where the mask row index
/// maps to `y` and the column index maps to `x`, the inverse of the
/// `mask[[row, col]]` storage order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnnotationGeometry {
    /// A single point, e.g. one nonzero cell of a point mask.
    Point(Point<f64>),
    /// A polygon, possibly with interior rings (holes).
    Polygon(Polygon<f64>),
    /// Several disjoint polygons sharing one label.
    MultiPolygon(MultiPolygon<f64>),
}

impl AnnotationGeometry {
    /// Axis-aligned envelope as `(min_x, min_y, max_x, max_y)`.
    ///
    /// Returns `None` for an empty multi-polygon, which extraction never
    /// produces.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let rect = match self {
            AnnotationGeometry::Point(p) => Some(p.bounding_rect()),
            AnnotationGeometry::Polygon(p) => p.bounding_rect(),
            AnnotationGeometry::MultiPolygon(mp) => mp.bounding_rect(),
        }?;
        Some((rect.min().x, rect.min().y, rect.max().x, rect.max().y))
    }
}

impl From<Point<f64>> for AnnotationGeometry {
    fn from(point: Point<f64>) -> Self {
        AnnotationGeometry::Point(point)
    }
}

impl From<Polygon<f64>> for AnnotationGeometry {
    fn from(polygon: Polygon<f64>) -> Self {
        AnnotationGeometry::Polygon(polygon)
    }
}

impl From<MultiPolygon<f64>> for AnnotationGeometry {
    fn from(multi: MultiPolygon<f64>) -> Self {
        AnnotationGeometry::MultiPolygon(multi)
    }
}

/// One labeled annotation in continuous coordinates.
///
/// Slices are immutable value objects: created by an extractor or loader,
/// consumed read-only by the rasterizer or a downstream exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSlice {
    /// Shape of the annotation in pixel units.
    pub geometry: AnnotationGeometry,
    /// Label value from the source mask; `None` for points loaded from
    /// coordinate files.
    pub label: Option<i32>,
    /// Optional third spatial coordinate.
    pub depth: Option<f64>,
    /// Optional temporal coordinate.
    pub time: Option<f64>,
}

impl AnnotationSlice {
    /// Create a slice with no depth/time metadata.
    pub fn new(geometry: impl Into<AnnotationGeometry>, label: Option<i32>) -> Self {
        Self {
            geometry: geometry.into(),
            label,
            depth: None,
            time: None,
        }
    }

    /// Create a slice carrying depth and/or time metadata.
    pub fn with_position(
        geometry: impl Into<AnnotationGeometry>,
        label: Option<i32>,
        depth: Option<f64>,
        time: Option<f64>,
    ) -> Self {
        Self {
            geometry: geometry.into(),
            label,
            depth,
            time,
        }
    }

    /// Axis-aligned envelope as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.geometry.bounds()
    }
}
