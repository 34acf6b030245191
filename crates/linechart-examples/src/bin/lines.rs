// File: crates/linechart-examples/src/bin/lines.rs
// Summary: Minimal example that renders a week of daily values to SVG.

use anyhow::Result;
use linechart_core::{DataPoint, LineChart, Size};

fn main() -> Result<()> {
    let data = vec![
        DataPoint::new("01.03.2024", 12.0),
        DataPoint::new("02.03.2024", 18.5),
        DataPoint::new("03.03.2024", 15.0),
        DataPoint::new("04.03.2024", 22.0),
        DataPoint::new("05.03.2024", 19.5),
        DataPoint::new("06.03.2024", 27.0),
        DataPoint::new("07.03.2024", 24.0),
    ];

    let chart = LineChart::new(Size::new(600.0, 300.0), &data)?;
    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    chart.render_to_svg_file(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
