// File: crates/linechart-core/src/normalize.rs
// Summary: Rescales raw values into plot pixel rows and rewrites dotted date labels.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::{ChartError, Result};
use crate::types::{DataPoint, NormalizedPoint, BOTTOM_MARGIN_PCT};

/// What to do with labels that are not `day.month.year` dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPolicy {
    /// Keep non-date labels as they are.
    #[default]
    PassThrough,
    /// Reject any label that does not canonicalize to a calendar date.
    RequireDate,
}

/// Smallest and largest `y`, or `None` for an empty slice.
pub fn value_range(points: &[DataPoint]) -> Option<(f64, f64)> {
    let first = points.first()?.y;
    Some(points.iter().fold((first, first), |(lo, hi), p| (lo.min(p.y), hi.max(p.y))))
}

/// Rewrite `day.month.year` as `year-month-day`, keeping each segment verbatim.
/// Labels without a dot are returned unchanged.
pub fn canonical_label(raw: &str) -> String {
    if !raw.contains('.') {
        return raw.to_string();
    }
    let replaced = raw.replace('.', "-");
    let mut parts: Vec<&str> = replaced.split('-').collect();
    parts.reverse();
    parts.join("-")
}

/// Pixel row for `value` inside a plot of `graph_height`, 0 being the top edge.
///
/// The minimum lands `BOTTOM_MARGIN_PCT` above the bottom edge and the maximum
/// `headroom_pct` below the top edge. A flat range puts every value on the
/// bottom margin.
pub fn pixel_y(value: f64, min: f64, max: f64, graph_height: f64, headroom_pct: f64) -> f64 {
    let span_pct = 100.0 - BOTTOM_MARGIN_PCT - headroom_pct;
    let rel = relative_position(value, min, max);
    let lifted = (BOTTOM_MARGIN_PCT + rel * span_pct) * 0.01 * graph_height;
    graph_height - lifted
}

/// Where `value` sits between `min` and `max`, in `[0, 1]`. A range wider than
/// `f64::MAX` is measured at half scale so it stays finite.
fn relative_position(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let rel = if range.is_finite() {
        (value - min) / range
    } else {
        (value / 2.0 - min / 2.0) / (max / 2.0 - min / 2.0)
    };
    if range > 0.0 && rel.is_finite() { rel.clamp(0.0, 1.0) } else { 0.0 }
}

pub fn normalize(
    points: &[DataPoint],
    graph_height: f64,
    headroom_pct: f64,
    policy: LabelPolicy,
) -> Result<Vec<NormalizedPoint>> {
    if let Some(index) = points.iter().position(|p| !p.y.is_finite()) {
        return Err(ChartError::NonFiniteValue { index });
    }
    let (min, max) = value_range(points).ok_or(ChartError::EmptyDataset)?;
    if min == max {
        warn!(count = points.len(), value = min, "flat dataset, drawing a baseline");
    }

    let mut out = Vec::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        let label = canonical_label(&p.x);
        if policy == LabelPolicy::RequireDate
            && NaiveDate::parse_from_str(&label, "%Y-%m-%d").is_err()
        {
            return Err(ChartError::InvalidLabel { index, label: p.x.clone() });
        }
        out.push(NormalizedPoint {
            x: label,
            y: pixel_y(p.y, min, max, graph_height, headroom_pct),
        });
    }
    debug!(count = out.len(), min, max, graph_height, "normalized dataset");
    Ok(out)
}
