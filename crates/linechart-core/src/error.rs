// File: crates/linechart-core/src/error.rs
// Summary: Error type shared by normalization, scene construction and SVG export.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("dataset is empty; at least one point is required")]
    EmptyDataset,

    /// The container must be strictly larger than the axis padding on both sides.
    #[error("container {width}x{height} leaves no room for the plot area")]
    ZeroSizedContainer { width: f64, height: f64 },

    #[error("point {index} has a non-finite y value")]
    NonFiniteValue { index: usize },

    #[error("point {index} label {label:?} is not a day.month.year date")]
    InvalidLabel { index: usize, label: String },

    #[error("chart has already been drawn; create a new chart to draw again")]
    AlreadyDrawn,

    #[error("failed to write svg: {0}")]
    Io(#[from] std::io::Error),
}
