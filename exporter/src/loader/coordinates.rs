//! Delimited-text ingestion of point coordinates.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use geo::Point;
use tracing::{debug, info};

use super::types::{CoordinateError, CoordinateFormat};
use crate::annotation::AnnotationSlice;

/// Default per-line parser: split on the separator and float-cast every
/// field.
pub fn split_and_parse(line: &str, separator: char) -> Result<Vec<f64>, String> {
    line.split(separator)
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f64>()
                .map_err(|e| format!("invalid float {field:?}: {e}"))
        })
        .collect()
}

/// Load a coordinate file with the default split-and-float-cast parser.
///
/// One slice is emitted per non-skipped line, with `label = None` and
/// `depth`/`time` populated only when declared present in `format`.
pub fn load_coordinates(
    path: &Path,
    format: &CoordinateFormat,
) -> Result<Vec<AnnotationSlice>, CoordinateError> {
    let separator = format.separator;
    load_coordinates_with(path, format, move |line| split_and_parse(line, separator))
}

/// Load a coordinate file with a caller-supplied per-line parser.
///
/// The parser returns the coordinate fields of one line; its output count
/// must equal `format.expected_fields()` exactly, otherwise loading fails
/// with [`CoordinateError::DimensionMismatch`] naming the file and the
/// 1-based line number. Skipped lines (the header when `has_headers`,
/// blank lines when `skip_blank_lines`) are never parsed nor validated
/// but still count toward line numbers.
pub fn load_coordinates_with<P>(
    path: &Path,
    format: &CoordinateFormat,
    parser: P,
) -> Result<Vec<AnnotationSlice>, CoordinateError>
where
    P: Fn(&str) -> Result<Vec<f64>, String>,
{
    info!("loading coordinate file: {}", path.display());
    let reader = BufReader::new(File::open(path)?);
    let expected = format.expected_fields();

    let mut slices = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if format.has_headers && number == 1 {
            continue;
        }
        if format.skip_blank_lines && line.trim().is_empty() {
            continue;
        }

        let fields = parser(&line).map_err(|detail| CoordinateError::Parse {
            path: path.to_path_buf(),
            line: number,
            detail,
        })?;
        if fields.len() != expected {
            return Err(CoordinateError::DimensionMismatch {
                path: path.to_path_buf(),
                line: number,
                expected,
                actual: fields.len(),
            });
        }

        let depth = format.has_z.then(|| fields[2]);
        let time = format.has_t.then(|| fields[2 + usize::from(format.has_z)]);
        slices.push(AnnotationSlice::with_position(
            Point::new(fields[0], fields[1]),
            None,
            depth,
            time,
        ));
    }

    debug!("loaded {} point(s) from {}", slices.len(), path.display());
    Ok(slices)
}
