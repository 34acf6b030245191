// File: crates/linechart-core/src/chart.rs
// Summary: LineChart: validation and layout at construction, scene building in `draw`, SVG export.

use std::path::Path;
use std::time::Duration;

use tracing::debug;

use crate::animation::{dash_style, ContainerStyle, Easing, FrameScheduler, RevealTask};
use crate::error::{ChartError, Result};
use crate::geometry::PlotArea;
use crate::grid::linspace;
use crate::legend::{passes_in_legend_x, x_label_indices, y_labels};
use crate::normalize::{normalize, LabelPolicy};
use crate::theme::Theme;
use crate::tree::{GraphicsTree, SvgTree};
use crate::types::{DataPoint, NormalizedPoint, Size, AXIS_PADDING, TICK_COUNT, TOP_HEADROOM_PCT};

/// Length of one dash per skipped legend pass, in path units.
const DASH_UNIT: f64 = 1000.0;

#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// How far below its resting place the container starts.
    pub offset_px: f64,
    /// Container fade/slide duration.
    pub fade: Duration,
    /// Path stroke draw-in duration.
    pub draw_in: Duration,
    /// Timing function for both the fade and the draw-in.
    pub easing: Easing,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            offset_px: 40.0,
            fade: Duration::from_millis(500),
            draw_in: Duration::from_secs(1),
            easing: Easing::Ease,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    pub axis_padding: f64,
    pub top_headroom_pct: f64,
    pub marker_radius: f64,
    pub font_family: String,
    pub font_size: f64,
    /// Id of the fill gradient; must be unique within the host document.
    pub gradient_id: String,
    pub label_policy: LabelPolicy,
    pub theme: Theme,
    pub reveal: RevealOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            axis_padding: AXIS_PADDING,
            top_headroom_pct: TOP_HEADROOM_PCT,
            marker_radius: 3.0,
            font_family: "DM Sans, sans-serif".to_string(),
            font_size: 9.0,
            gradient_id: "purple".to_string(),
            label_policy: LabelPolicy::PassThrough,
            theme: Theme::dark(),
            reveal: RevealOptions::default(),
        }
    }
}

/// Handle to a mounted scene.
#[derive(Clone, Debug)]
pub struct Mount<N> {
    /// Root `svg` element, already appended to the container.
    pub svg: N,
    /// The area path the reveal animates.
    pub path: N,
    hidden: ContainerStyle,
}

impl<N> Mount<N> {
    /// Style the host applies to the container right away, before the reveal frame.
    pub fn hidden_style(&self) -> &ContainerStyle {
        &self.hidden
    }
}

struct Scene<N> {
    svg: N,
    path: N,
}

pub struct LineChart {
    plot: PlotArea,
    points: Vec<NormalizedPoint>,
    step: f64,
    passes: usize,
    options: ChartOptions,
    drawn: bool,
}

impl LineChart {
    pub fn new(container: Size, data: &[DataPoint]) -> Result<Self> {
        Self::with_options(container, data, ChartOptions::default())
    }

    pub fn with_options(container: Size, data: &[DataPoint], options: ChartOptions) -> Result<Self> {
        if data.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        let plot = PlotArea::new(container, options.axis_padding)?;
        let points = normalize(data, plot.graph_height, options.top_headroom_pct, options.label_policy)?;
        let step = plot.step(points.len());
        let passes = passes_in_legend_x(points.len());
        debug!(
            count = points.len(),
            width = plot.full_width,
            height = plot.full_height,
            step,
            passes,
            "line chart constructed"
        );
        Ok(Self { plot, points, step, passes, options, drawn: false })
    }

    pub fn points(&self) -> &[NormalizedPoint] { &self.points }

    pub fn plot(&self) -> &PlotArea { &self.plot }

    pub fn options(&self) -> &ChartOptions { &self.options }

    /// Horizontal pixel distance between consecutive points.
    pub fn step(&self) -> f64 { self.step }

    pub fn passes_in_legend_x(&self) -> usize { self.passes }

    pub fn is_drawn(&self) -> bool { self.drawn }

    /// Dash length used by the draw-in animation.
    pub fn dash_length(&self) -> f64 { DASH_UNIT * self.passes as f64 }

    /// Container style declared before anything is drawn.
    pub fn hidden_style(&self) -> ContainerStyle {
        ContainerStyle::hidden(&self.options.theme, self.options.reveal.offset_px)
    }

    /// Smallest and largest pixel row among the points.
    pub fn pixel_range(&self) -> (f64, f64) {
        self.points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)))
    }

    /// Vertices of the area outline: bottom-left corner, one per point, then
    /// the bottom-right and bottom-left corners to close it.
    pub fn path_coords(&self) -> Vec<(f64, f64)> {
        let bottom = self.plot.graph_height;
        let mut coords = Vec::with_capacity(self.points.len() + 3);
        coords.push((self.plot.padding, bottom));
        for (i, p) in self.points.iter().enumerate() {
            coords.push((self.plot.point_x(self.step, i), p.y));
        }
        coords.push((self.plot.full_width, bottom));
        coords.push((self.plot.padding, bottom));
        coords
    }

    /// SVG path data for `path_coords`.
    pub fn path_data(&self) -> String {
        self.path_coords()
            .iter()
            .enumerate()
            .map(|(i, (x, y))| format!("{} {} {}", if i == 0 { "M" } else { "L" }, x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Build the scene into `tree`, append it to `parent`, and post the reveal
    /// to `scheduler`. A chart draws once; later calls fail with `AlreadyDrawn`
    /// and leave the tree alone.
    pub fn draw<T, S>(&mut self, tree: &mut T, parent: T::Node, scheduler: &mut S) -> Result<Mount<T::Node>>
    where
        T: GraphicsTree,
        S: FrameScheduler<T::Node>,
    {
        if self.drawn {
            return Err(ChartError::AlreadyDrawn);
        }
        let scene = self.build_scene(tree);
        tree.append_child(parent, scene.svg);
        scheduler.request_animation_frame(self.reveal_task(scene.path));
        self.drawn = true;
        debug!(count = self.points.len(), dash = self.dash_length(), "line chart mounted");
        Ok(Mount { svg: scene.svg, path: scene.path, hidden: self.hidden_style() })
    }

    /// Standalone SVG markup of the fully revealed chart.
    pub fn render_to_svg(&self) -> String {
        let mut tree = SvgTree::new();
        let scene = self.build_scene(&mut tree);
        let reveal = &self.options.reveal;
        tree.set_attribute(scene.path, "style", &dash_style(self.dash_length(), 0.0, reveal.draw_in, reveal.easing));
        tree.to_markup(scene.svg)
    }

    /// Write `render_to_svg` to `output_path`, creating parent directories.
    pub fn render_to_svg_file(&self, output_path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render_to_svg();
        if let Some(parent) = output_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_path, svg)?;
        Ok(())
    }

    fn reveal_task<N>(&self, path: N) -> RevealTask<N> {
        RevealTask {
            path,
            dash_length: self.dash_length(),
            draw_in: self.options.reveal.draw_in,
            fade: self.options.reveal.fade,
            easing: self.options.reveal.easing,
            hidden: self.hidden_style(),
            visible: ContainerStyle::visible(&self.options.theme),
        }
    }

    fn build_scene<T: GraphicsTree>(&self, tree: &mut T) -> Scene<T::Node> {
        let svg = self.create_main_svg(tree);

        let path = self.create_path(tree);
        let border = self.create_border(tree);
        let circles = self.create_circles(tree);
        let gradient = self.create_gradient(tree);
        let lines = self.create_lines(tree);
        let walls = self.create_walls(tree);
        let legend = self.create_legend(tree);

        for node in [lines, path, gradient, border, walls, legend, circles] {
            tree.append_child(svg, node);
        }
        Scene { svg, path }
    }

    // ---- helpers ----------------------------------------------------------------

    fn create_main_svg<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let svg = tree.create_element("svg");
        let (w, h) = (self.plot.full_width, self.plot.full_height);
        tree.set_attribute(svg, "viewBox", &format!("0 0 {} {}", w, h));
        tree.set_attribute(svg, "height", &h.to_string());
        tree.set_attribute(svg, "width", &w.to_string());
        svg
    }

    fn create_path<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let path = tree.create_element("path");
        tree.set_attribute(path, "d", &self.path_data());
        tree.set_attribute(path, "stroke-width", "1");
        tree.set_attribute(path, "stroke", self.options.theme.line_stroke);
        tree.set_attribute(path, "fill", &format!("url(#{})", self.options.gradient_id));
        let dash = self.dash_length();
        let reveal = &self.options.reveal;
        tree.set_attribute(path, "style", &dash_style(dash, dash, reveal.draw_in, reveal.easing));
        path
    }

    fn create_border<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let PlotArea { full_width: w, graph_height: gh, .. } = self.plot;
        let border = tree.create_element("path");
        tree.set_attribute(border, "d", &format!("M 0 {gh} L {w} {gh} L {w} 0"));
        tree.set_attribute(border, "stroke-width", "2");
        tree.set_attribute(border, "stroke", self.options.theme.border);
        tree.set_attribute(border, "fill", "transparent");
        border
    }

    fn create_walls<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let PlotArea { full_width: w, graph_height: gh, padding: pad, .. } = self.plot;
        let wall = tree.create_element("path");
        tree.set_attribute(wall, "d", &format!("M {pad} 0 L {pad} {gh} L {w} {gh}"));
        tree.set_attribute(wall, "stroke-width", "1");
        tree.set_attribute(wall, "stroke", self.options.theme.axis_line);
        tree.set_attribute(wall, "fill", "transparent");
        wall
    }

    fn create_gradient<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let g = tree.create_element("g");
        let gradient = tree.create_element("linearGradient");
        tree.set_attribute(gradient, "id", &self.options.gradient_id);
        for (attr, value) in [("x1", "0"), ("y1", "0"), ("x2", "0"), ("y2", "1")] {
            tree.set_attribute(gradient, attr, value);
        }
        for (offset, opacity) in [("0", "0.3"), ("1", "0.1")] {
            let stop = tree.create_element("stop");
            tree.set_attribute(stop, "offset", offset);
            tree.set_attribute(stop, "stop-color", self.options.theme.line_stroke);
            tree.set_attribute(stop, "stop-opacity", opacity);
            tree.append_child(gradient, stop);
        }
        tree.append_child(g, gradient);
        g
    }

    fn create_lines<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let g = tree.create_element("g");
        let (min, max) = self.pixel_range();
        let x1 = self.plot.padding.to_string();
        let x2 = self.plot.full_width.to_string();
        for y in linspace(min, max, TICK_COUNT) {
            let y = y.to_string();
            let line = tree.create_element("line");
            tree.set_attribute(line, "x1", &x1);
            tree.set_attribute(line, "x2", &x2);
            tree.set_attribute(line, "y1", &y);
            tree.set_attribute(line, "y2", &y);
            tree.set_attribute(line, "stroke", self.options.theme.grid);
            tree.set_attribute(line, "stroke-width", "1");
            tree.append_child(g, line);
        }
        g
    }

    fn create_circles<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let g = tree.create_element("g");
        let r = self.options.marker_radius.to_string();
        for (i, p) in self.points.iter().enumerate() {
            let circle = tree.create_element("circle");
            tree.set_attribute(circle, "cx", &self.plot.point_x(self.step, i).to_string());
            tree.set_attribute(circle, "cy", &p.y.to_string());
            tree.set_attribute(circle, "fill", self.options.theme.line_stroke);
            tree.set_attribute(circle, "r", &r);
            let title = tree.create_element("title");
            let text = tree.create_text(&p.x);
            tree.append_child(title, text);
            tree.append_child(circle, title);
            tree.append_child(g, circle);
        }
        g
    }

    fn create_legend<T: GraphicsTree>(&self, tree: &mut T) -> T::Node {
        let g = tree.create_element("g");
        let (min, max) = self.pixel_range();
        for (label, y) in y_labels(min, max) {
            let text = self.create_text_node(tree, &label, 0.0, y);
            tree.append_child(g, text);
        }
        let baseline = self.plot.full_height - 10.0;
        for i in x_label_indices(self.points.len()) {
            let x = self.plot.point_x(self.step, i);
            let text = self.create_text_node(tree, &self.points[i].x, x, baseline);
            tree.append_child(g, text);
        }
        g
    }

    fn create_text_node<T: GraphicsTree>(&self, tree: &mut T, content: &str, x: f64, y: f64) -> T::Node {
        let color = self.options.theme.legend_text;
        let text = tree.create_element("text");
        tree.set_attribute(text, "fill", color);
        tree.set_attribute(text, "stroke", color);
        tree.set_attribute(text, "font-weight", "400");
        tree.set_attribute(text, "font-size", &self.options.font_size.to_string());
        tree.set_attribute(text, "stroke-width", ".1");
        tree.set_attribute(text, "font-family", &self.options.font_family);
        tree.set_attribute(text, "x", &x.to_string());
        tree.set_attribute(text, "y", &y.to_string());
        let node = tree.create_text(content);
        tree.append_child(text, node);
        text
    }
}
