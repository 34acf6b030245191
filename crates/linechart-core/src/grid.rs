// File: crates/linechart-core/src/grid.rs
// Summary: Evenly spaced tick positions shared by grid lines and the y legend.

/// `count` values from `start` to `end`, both ends included. A single tick
/// sits on `start`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count).map(|i| start + step * i as f64).collect()
        }
    }
}
