//! Coordinate loader options and error definitions

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a delimited coordinate file.
///
/// Parse and validation errors carry the file path and 1-based line
/// number so a bad record can be located directly.
#[derive(Debug, Error)]
pub enum CoordinateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{}, line {line}: failed to parse coordinates: {detail}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error(
        "{}, line {line}: expected {expected} coordinate(s), found {actual}",
        .path.display()
    )]
    DimensionMismatch {
        path: PathBuf,
        line: usize,
        expected: usize,
        actual: usize,
    },
}

/// Layout of a delimited coordinate file.
///
/// Each non-skipped line holds one point: `x`, `y`, then `z` if `has_z`,
/// then `t` if `has_t`, separated by `separator`.
#[derive(Debug, Clone)]
pub struct CoordinateFormat {
    /// Field separator, tab by default.
    pub separator: char,
    /// Whether each record carries a third spatial coordinate.
    pub has_z: bool,
    /// Whether each record carries a temporal coordinate.
    pub has_t: bool,
    /// Whether the first line is a header, skipped without parsing.
    pub has_headers: bool,
    /// Whether blank lines are skipped without parsing.
    pub skip_blank_lines: bool,
}

impl Default for CoordinateFormat {
    fn default() -> Self {
        Self {
            separator: '\t',
            has_z: false,
            has_t: false,
            has_headers: false,
            skip_blank_lines: true,
        }
    }
}

impl CoordinateFormat {
    /// Tab-separated `x`/`y` records, no header.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_z(mut self) -> Self {
        self.has_z = true;
        self
    }

    pub fn with_t(mut self) -> Self {
        self.has_t = true;
        self
    }

    pub fn with_headers(mut self) -> Self {
        self.has_headers = true;
        self
    }

    /// Coordinate count every record must match exactly.
    pub fn expected_fields(&self) -> usize {
        2 + usize::from(self.has_z) + usize::from(self.has_t)
    }
}
