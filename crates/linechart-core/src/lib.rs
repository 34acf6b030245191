// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports the line chart, its scene tree capability and the reveal animation.

pub mod animation;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod legend;
pub mod normalize;
pub mod theme;
pub mod tree;
pub mod types;

pub use animation::{reveal_transition, ContainerStyle, Easing, FrameQueue, FrameScheduler, RevealTask, Transition};
pub use chart::{ChartOptions, LineChart, Mount, RevealOptions};
pub use error::{ChartError, Result};
pub use legend::{passes_in_legend_x, x_label_indices, y_labels};
pub use normalize::{canonical_label, normalize, LabelPolicy};
pub use theme::Theme;
pub use tree::{GraphicsTree, NodeId, SvgTree};
pub use types::{DataPoint, NormalizedPoint, Size};
