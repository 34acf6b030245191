// File: crates/linechart-core/src/geometry.rs
// Summary: Plot-area pixel math derived from the container size.

use crate::error::{ChartError, Result};
use crate::types::Size;

/// Container split into the plot area and the left/bottom legend gutter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub full_width: f64,
    pub full_height: f64,
    pub graph_width: f64,
    pub graph_height: f64,
    pub padding: f64,
}

impl PlotArea {
    /// Fails when the container has no room left once `padding` is taken off.
    pub fn new(container: Size, padding: f64) -> Result<Self> {
        let graph_width = container.width - padding;
        let graph_height = container.height - padding;
        let finite = container.width.is_finite() && container.height.is_finite();
        if !finite || graph_width <= 0.0 || graph_height <= 0.0 {
            return Err(ChartError::ZeroSizedContainer {
                width: container.width,
                height: container.height,
            });
        }
        Ok(Self {
            full_width: container.width,
            full_height: container.height,
            graph_width,
            graph_height,
            padding,
        })
    }

    /// Horizontal distance between consecutive points.
    pub fn step(&self, count: usize) -> f64 {
        self.graph_width / count.max(1) as f64
    }

    /// Pixel x of the point at `index`; the first point sits one step right of the gutter.
    #[inline]
    pub fn point_x(&self, step: f64, index: usize) -> f64 {
        self.padding + step * (index + 1) as f64
    }
}
