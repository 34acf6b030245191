// File: crates/linechart-core/src/theme.rs
// Summary: Color palettes for the chart scene and its container.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    /// Container background behind the svg.
    pub background: &'static str,
    /// Line stroke, gradient stops and point markers.
    pub line_stroke: &'static str,
    pub grid: &'static str,
    /// Left/bottom axis walls.
    pub axis_line: &'static str,
    /// Bottom/right frame around the plot.
    pub border: &'static str,
    pub legend_text: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#1E1F25",
            line_stroke: "#5150F9",
            grid: "#282932",
            axis_line: "#4f4f52",
            border: "#1E1F25",
            legend_text: "#898999",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#FAFAFC",
            line_stroke: "#2078C8",
            grid: "#E6E6EB",
            axis_line: "#3C3C46",
            border: "#FAFAFC",
            legend_text: "#64646E",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
