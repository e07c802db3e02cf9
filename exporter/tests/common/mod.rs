//! Shared helpers for integration tests.

use ndarray::Array2;

/// Initialize a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Fill an axis-aligned block with top-left corner `(row, col)`.
pub fn draw_rect_by_corner(
    mask: &mut Array2<i32>,
    height: usize,
    width: usize,
    top_left: (usize, usize),
    label: i32,
) {
    for r in top_left.0..top_left.0 + height {
        for c in top_left.1..top_left.1 + width {
            mask[[r, c]] = label;
        }
    }
}
