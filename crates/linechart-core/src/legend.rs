// File: crates/linechart-core/src/legend.rs
// Summary: Legend layout: x-label decimation and the percentage scale on the y axis.

use crate::grid::linspace;
use crate::types::TICK_COUNT;

/// How many points to skip after each rendered x label.
///
/// Below ten points every label is drawn. From ten on, the count with its
/// last decimal digit dropped (i.e. `count / 10`), which keeps roughly ten
/// labels on screen whatever the dataset size.
pub fn passes_in_legend_x(count: usize) -> usize {
    if count < 10 { 0 } else { count / 10 }
}

/// Indices of the points whose x label is rendered. The last point never gets one.
pub fn x_label_indices(count: usize) -> Vec<usize> {
    let stride = passes_in_legend_x(count) + 1;
    (0..count.saturating_sub(1)).step_by(stride).collect()
}

/// `(text, pixel_y)` for the y scale: `0%` on the lowest row (`max_px`) up to
/// `100%` on the highest (`min_px`).
pub fn y_labels(min_px: f64, max_px: f64) -> Vec<(String, f64)> {
    linspace(max_px, min_px, TICK_COUNT)
        .into_iter()
        .enumerate()
        .map(|(i, y)| (format!("{}%", i * 10), y))
        .collect()
}
