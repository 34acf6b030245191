// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (data points, container size, layout percentages).

use chrono::NaiveDate;

/// Pixels reserved on the left (y legend) and bottom (x legend) of the container.
pub const AXIS_PADDING: f64 = 30.0;
/// Percentage of the plot height kept free above the largest value.
pub const TOP_HEADROOM_PCT: f64 = 15.0;
/// Percentage of the plot height kept free below the smallest value.
pub const BOTTOM_MARGIN_PCT: f64 = 5.0;
/// Number of horizontal grid lines and y-axis legend labels.
pub const TICK_COUNT: usize = 11;

/// Raw input point. `x` is a label, usually a `day.month.year` date.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub x: String,
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self { x: x.into(), y }
    }
}

/// Point after normalization: `y` is a pixel coordinate inside the plot area
/// (0 at the top), `x` is the canonical label.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPoint {
    pub x: String,
    pub y: f64,
}

impl NormalizedPoint {
    /// Parse the canonical `year-month-day` label, if it is one.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.x, "%Y-%m-%d").ok()
    }
}

/// Measured size of the host container, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
