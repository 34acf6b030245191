// File: crates/linechart-demo/src/main.rs
// Summary: Demo loads a labelled CSV (date/value) and renders it as an SVG line chart.
// Usage: linechart-demo [data.csv] [width] [height] [theme]

use anyhow::{Context, Result};
use linechart_core::{theme, ChartOptions, DataPoint, LineChart, Size};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "data/daily_values.csv".to_string());
    let width = parse_dim(args.next(), 600.0)?;
    let height = parse_dim(args.next(), 300.0)?;
    let theme_name = args.next().unwrap_or_else(|| "dark".to_string());

    let (path, used_alt) = resolve_path(&raw)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let points = load_points_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    info!(count = points.len(), "loaded points");

    if points.is_empty() {
        anyhow::bail!("no points loaded; check headers/delimiter.");
    }

    let opts = ChartOptions { theme: theme::find(&theme_name), ..ChartOptions::default() };
    let chart = LineChart::with_options(Size::new(width, height), &points, opts)
        .context("building chart")?;

    let out = out_name(&path);
    chart.render_to_svg_file(&out)?;
    info!(out = %out.display(), legend_skip = chart.passes_in_legend_x(), "wrote chart");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn parse_dim(arg: Option<String>, default: f64) -> Result<f64> {
    match arg {
        Some(s) => s.trim().parse::<f64>().with_context(|| format!("invalid dimension '{s}'")),
        None => Ok(default),
    }
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Produce output file name like target/out/chart_<stem>.svg
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{}.svg", stem))
}

/// Load `label,value` rows. Header names are matched case-insensitively;
/// without a recognised label column the row number is used.
fn load_points_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["date", "day", "label", "x", "time"]);
    let Some(i_value) = idx(&["value", "y", "close", "amount"]) else {
        anyhow::bail!("no value column among headers {:?}", headers);
    };

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let label = i_label
            .and_then(|ix| rec.get(ix))
            .map(str::to_string)
            .unwrap_or_else(|| (row + 1).to_string());
        match rec.get(i_value).and_then(|s| s.parse::<f64>().ok()) {
            Some(y) if y.is_finite() => out.push(DataPoint::new(label, y)),
            _ => warn!(row = row + 1, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
