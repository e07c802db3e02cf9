//! Object extraction: dense label masks to polygon annotations.
//!
//! Every connected region of identical nonzero value is one logical
//! object; all objects sharing a label value are aggregated into a single
//! slice (a `Polygon` for one component, a `MultiPolygon` otherwise).

use std::collections::BTreeMap;

use geo::{Area, Contains, LineString, MultiPolygon, Point, Polygon};
use ndarray::Array2;
use tracing::debug;

use crate::annotation::{AnnotationGeometry, AnnotationSlice};
use crate::extract::contours::{Connectivity, TracedRing, trace_boundaries};

/// Configurable mask-to-objects extraction.
#[derive(Debug, Clone)]
pub struct ObjectExtractor {
    /// Foreground adjacency rule for the boundary trace.
    pub connectivity: Connectivity,
    /// Translation `(dx, dy)` applied to every emitted coordinate.
    pub offset: (i64, i64),
}

impl Default for ObjectExtractor {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Eight,
            offset: (0, 0),
        }
    }
}

impl ObjectExtractor {
    /// Create an extractor with the default 8-connectivity and no offset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor translating all coordinates by `(dx, dy)`.
    pub fn with_offset(offset: (i64, i64)) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Extract one slice per distinct nonzero label value.
    ///
    /// Coordinates are pixel-corner coordinates: a filled block spanning
    /// rows 150..=249 and columns 50..=149 extracts to the box
    /// `(50, 150)` to `(150, 250)`. Labels are visited in ascending order, so
    /// the output sequence is deterministic for a given input. An
    /// all-background mask yields an empty vector.
    pub fn extract(&self, mask: &Array2<i32>) -> Vec<AnnotationSlice> {
        // Group-by pass: one boolean indicator per distinct label value.
        let mut groups: BTreeMap<i32, Array2<bool>> = BTreeMap::new();
        for ((r, c), &value) in mask.indexed_iter() {
            if value == 0 {
                continue;
            }
            let indicator = groups
                .entry(value)
                .or_insert_with(|| Array2::from_elem(mask.dim(), false));
            indicator[[r, c]] = true;
        }

        let (rows, cols) = mask.dim();
        debug!(
            "extracting {} label group(s) from {}x{} mask",
            groups.len(),
            rows,
            cols
        );

        let mut slices = Vec::with_capacity(groups.len());
        for (label, indicator) in &groups {
            let rings = trace_boundaries(indicator, self.connectivity);
            if let Some(geometry) = self.assemble(&rings) {
                slices.push(AnnotationSlice::new(geometry, Some(*label)));
            }
        }
        slices
    }

    /// Pair exterior rings with the hole rings they enclose.
    ///
    /// Each hole attaches to the smallest exterior containing its cavity
    /// representative point, which is equivalent to nesting-parity
    /// classification for rings traced from one indicator image.
    fn assemble(&self, rings: &[TracedRing]) -> Option<AnnotationGeometry> {
        let (dx, dy) = self.offset;
        let to_ring = |ring: &TracedRing| -> LineString<f64> {
            LineString::from(
                ring.points
                    .iter()
                    .map(|&(x, y)| ((x + dx) as f64, (y + dy) as f64))
                    .collect::<Vec<_>>(),
            )
        };

        let mut shells: Vec<(Polygon<f64>, f64, Vec<LineString<f64>>)> = rings
            .iter()
            .filter(|ring| ring.is_exterior())
            .map(|ring| {
                let shell = Polygon::new(to_ring(ring), vec![]);
                let area = shell.unsigned_area();
                (shell, area, Vec::new())
            })
            .collect();
        if shells.is_empty() {
            return None;
        }

        for ring in rings.iter().filter(|ring| !ring.is_exterior()) {
            let Some((px, py)) = ring.interior_point() else {
                continue;
            };
            let probe = Point::new(px + dx as f64, py + dy as f64);
            let parent = shells
                .iter_mut()
                .filter(|(shell, _, _)| shell.contains(&probe))
                .min_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((_, _, interiors)) = parent {
                interiors.push(to_ring(ring));
            }
        }

        let mut polygons: Vec<Polygon<f64>> = shells
            .into_iter()
            .map(|(shell, _, interiors)| Polygon::new(shell.into_inner().0, interiors))
            .collect();

        Some(if polygons.len() == 1 {
            AnnotationGeometry::Polygon(polygons.pop()?)
        } else {
            AnnotationGeometry::MultiPolygon(MultiPolygon::new(polygons))
        })
    }
}

/// Extract polygon annotations with default settings (8-connectivity, no
/// offset).
pub fn mask_to_objects_2d(mask: &Array2<i32>) -> Vec<AnnotationSlice> {
    ObjectExtractor::new().extract(mask)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        assert_polygon_equals, box_polygon, draw_square_by_corner, sort_by_bounds,
    };

    #[test]
    fn test_export_one_square() {
        let mut mask = Array2::zeros((300, 200));
        draw_square_by_corner(&mut mask, 100, (150, 50), 255);

        let slices = mask_to_objects_2d(&mask);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(&slices[0].geometry, &box_polygon(50.0, 150.0, 150.0, 250.0));
    }

    #[test]
    fn test_offset_translates_coordinates() {
        let mut mask = Array2::zeros((300, 200));
        draw_square_by_corner(&mut mask, 100, (150, 50), 255);

        let slices = ObjectExtractor::with_offset((255, 320)).extract(&mask);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(
            &slices[0].geometry,
            &box_polygon(305.0, 470.0, 405.0, 570.0),
        );
    }

    #[test]
    fn test_several_objects() {
        let mut mask = Array2::zeros((300, 200));
        draw_square_by_corner(&mut mask, 50, (150, 50), 255);
        draw_square_by_corner(&mut mask, 50, (205, 105), 127);

        let mut slices = mask_to_objects_2d(&mask);
        sort_by_bounds(&mut slices);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(&slices[0].geometry, &box_polygon(50.0, 150.0, 100.0, 200.0));
        assert_eq!(slices[1].label, Some(127));
        assert_polygon_equals(
            &slices[1].geometry,
            &box_polygon(105.0, 205.0, 155.0, 255.0),
        );
    }

    #[test]
    fn test_adjacent_labels_without_separation() {
        let mut mask = Array2::zeros((300, 200));
        draw_square_by_corner(&mut mask, 50, (150, 50), 255);
        draw_square_by_corner(&mut mask, 50, (150, 100), 127);

        let mut slices = mask_to_objects_2d(&mask);
        sort_by_bounds(&mut slices);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(&slices[0].geometry, &box_polygon(50.0, 150.0, 100.0, 200.0));
        assert_eq!(slices[1].label, Some(127));
        // Touching but not overlapping: shared boundary at x = 100.
        assert_polygon_equals(
            &slices[1].geometry,
            &box_polygon(100.0, 150.0, 150.0, 200.0),
        );
    }

    #[test]
    fn test_adjacent_labels_with_separation() {
        let mut mask = Array2::zeros((300, 200));
        draw_square_by_corner(&mut mask, 50, (150, 50), 255);
        draw_square_by_corner(&mut mask, 50, (150, 102), 127);

        let mut slices = mask_to_objects_2d(&mask);
        sort_by_bounds(&mut slices);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(&slices[0].geometry, &box_polygon(50.0, 150.0, 100.0, 200.0));
        assert_eq!(slices[1].label, Some(127));
        assert_polygon_equals(
            &slices[1].geometry,
            &box_polygon(102.0, 150.0, 152.0, 200.0),
        );
    }

    #[test]
    fn test_small_objects_still_extract() {
        let mut mask = Array2::zeros((100, 100));
        // A solitary pixel and a 2x2 block.
        mask[[77, 15]] = 127;
        draw_square_by_corner(&mut mask, 2, (1, 1), 255);

        let mut slices = mask_to_objects_2d(&mask);
        sort_by_bounds(&mut slices);

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, Some(255));
        assert_polygon_equals(&slices[0].geometry, &box_polygon(1.0, 1.0, 3.0, 3.0));
        assert_eq!(slices[1].label, Some(127));
        assert_polygon_equals(&slices[1].geometry, &box_polygon(15.0, 77.0, 16.0, 78.0));
    }

    #[test]
    fn test_same_label_components_aggregate_to_multipolygon() {
        let mut mask = Array2::zeros((100, 100));
        draw_square_by_corner(&mut mask, 10, (5, 5), 42);
        draw_square_by_corner(&mut mask, 10, (50, 50), 42);

        let slices = mask_to_objects_2d(&mask);

        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, Some(42));
        match &slices[0].geometry {
            AnnotationGeometry::MultiPolygon(mp) => assert_eq!(mp.0.len(), 2),
            other => panic!("expected a multi-polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_diagonal_same_label_pixels_do_not_merge() {
        let mut mask = Array2::zeros((10, 10));
        mask[[2, 2]] = 5;
        mask[[3, 3]] = 5;

        let slices = mask_to_objects_2d(&mask);

        assert_eq!(slices.len(), 1);
        match &slices[0].geometry {
            AnnotationGeometry::MultiPolygon(mp) => {
                assert_eq!(mp.0.len(), 2);
                for poly in &mp.0 {
                    assert_eq!(poly.unsigned_area(), 1.0);
                }
            }
            other => panic!("expected a multi-polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_connectivity_policy_on_corner_touching_diamond() {
        let mut mask = Array2::zeros((5, 5));
        for (r, c) in [(1, 2), (2, 1), (2, 3), (3, 2)] {
            mask[[r, c]] = 6;
        }

        // Default 8-connectivity merges the cells into one region whose
        // enclosed center becomes a hole.
        let eight = mask_to_objects_2d(&mask);
        assert_eq!(eight.len(), 1);
        let AnnotationGeometry::Polygon(polygon) = &eight[0].geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.unsigned_area(), 4.0);
        assert!(!polygon.contains(&Point::new(2.5, 2.5)));

        // 4-connectivity keeps the four pixels as separate parts.
        let extractor = ObjectExtractor {
            connectivity: Connectivity::Four,
            offset: (0, 0),
        };
        let four = extractor.extract(&mask);
        assert_eq!(four.len(), 1);
        match &four[0].geometry {
            AnnotationGeometry::MultiPolygon(mp) => {
                assert_eq!(mp.0.len(), 4);
                for part in &mp.0 {
                    assert_eq!(part.unsigned_area(), 1.0);
                    assert!(part.interiors().is_empty());
                }
            }
            other => panic!("expected a multi-polygon, got {other:?}"),
        }
    }

    #[test]
    fn test_region_with_cavity_gets_interior_ring() {
        let mut mask = Array2::zeros((20, 20));
        draw_square_by_corner(&mut mask, 6, (2, 2), 9);
        // Clear a 2x2 cavity in the middle.
        for r in 4..6 {
            for c in 4..6 {
                mask[[r, c]] = 0;
            }
        }

        let slices = mask_to_objects_2d(&mask);

        assert_eq!(slices.len(), 1);
        let AnnotationGeometry::Polygon(polygon) = &slices[0].geometry else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.interiors().len(), 1);
        assert_eq!(polygon.unsigned_area(), 32.0);
        assert!(!polygon.contains(&Point::new(4.5, 4.5)));
        assert!(polygon.contains(&Point::new(2.5, 2.5)));
    }

    #[test]
    fn test_labels_emitted_in_ascending_order() {
        let mut mask = Array2::zeros((20, 20));
        draw_square_by_corner(&mut mask, 3, (10, 10), 7);
        draw_square_by_corner(&mut mask, 3, (2, 2), 3);

        let slices = mask_to_objects_2d(&mask);

        let labels: Vec<_> = slices.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Some(3), Some(7)]);
    }

    #[test]
    fn test_empty_mask_yields_empty_sequence() {
        let mask = Array2::zeros((50, 50));
        assert!(mask_to_objects_2d(&mask).is_empty());
    }
}
