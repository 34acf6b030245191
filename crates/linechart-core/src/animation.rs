// File: crates/linechart-core/src/animation.rs
// Summary: Entrance animation: hidden/revealed container styles, path draw-in, and the one-shot frame task.

use std::fmt::Write as _;
use std::time::Duration;

use tracing::trace;

use crate::theme::Theme;
use crate::tree::GraphicsTree;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    #[default]
    Ease,
    Linear,
}

impl Easing {
    pub fn as_css(&self) -> &'static str {
        match self {
            Easing::Ease => "ease",
            Easing::Linear => "linear",
        }
    }
}

/// CSS transition applied to a set of properties with one duration and easing.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub properties: Vec<&'static str>,
    pub duration: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn to_css(&self) -> String {
        self.properties
            .iter()
            .map(|p| format!("{} {}s {}", p, self.duration.as_secs_f64(), self.easing.as_css()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Style the chart declares for its host container. The host applies it; the
/// chart never touches caller-owned state itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    pub opacity: f64,
    /// Vertical offset with `position: relative`.
    pub top_px: f64,
    pub transition: Option<Transition>,
    pub background: &'static str,
    pub border_radius_rem: f64,
    pub padding_px: f64,
}

impl ContainerStyle {
    /// Invisible and pushed down by `offset_px`, with the theme chrome.
    pub fn hidden(theme: &Theme, offset_px: f64) -> Self {
        Self {
            opacity: 0.0,
            top_px: offset_px,
            transition: None,
            background: theme.background,
            border_radius_rem: 0.75,
            padding_px: 20.0,
        }
    }

    /// Fully visible, in place.
    pub fn visible(theme: &Theme) -> Self {
        Self { opacity: 1.0, top_px: 0.0, ..Self::hidden(theme, 0.0) }
    }

    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("border-radius", format!("{}rem", self.border_radius_rem)),
            ("background-color", self.background.to_string()),
            ("padding", format!("{}px", self.padding_px)),
            ("opacity", format!("{}", self.opacity)),
            ("position", "relative".to_string()),
            ("top", format!("{}px", self.top_px)),
        ];
        if let Some(t) = &self.transition {
            out.push(("transition", t.to_css()));
        }
        out
    }

    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (k, v) in self.declarations() {
            if !css.is_empty() { css.push(' '); }
            let _ = write!(css, "{}: {};", k, v);
        }
        css
    }
}

/// Move from `pre` to `post`, animating whichever of opacity and offset change.
pub fn reveal_transition(
    pre: &ContainerStyle,
    post: &ContainerStyle,
    duration: Duration,
    easing: Easing,
) -> ContainerStyle {
    let mut properties = Vec::new();
    if pre.opacity != post.opacity { properties.push("opacity"); }
    if pre.top_px != post.top_px { properties.push("top"); }
    let transition = (!properties.is_empty())
        .then(|| Transition { properties, duration, easing });
    ContainerStyle { transition, ..post.clone() }
}

/// Inline style for the line path's dash-offset draw-in.
pub fn dash_style(length: f64, offset: f64, draw_in: Duration, easing: Easing) -> String {
    let t = Transition { properties: vec!["stroke-dashoffset"], duration: draw_in, easing };
    format!("stroke-dasharray: {}; stroke-dashoffset: {}; transition: {};", length, offset, t.to_css())
}

/// The single deferred task posted by `LineChart::draw`. While it is pending
/// the container stays hidden; running consumes it, so the reveal happens once.
#[derive(Clone, Debug)]
pub struct RevealTask<N> {
    pub path: N,
    pub dash_length: f64,
    pub draw_in: Duration,
    pub fade: Duration,
    pub easing: Easing,
    pub hidden: ContainerStyle,
    pub visible: ContainerStyle,
}

impl<N: Copy> RevealTask<N> {
    /// Start the path draw-in and return the container style to apply.
    pub fn run<T: GraphicsTree<Node = N>>(self, tree: &mut T) -> ContainerStyle {
        tree.set_attribute(self.path, "style", &dash_style(self.dash_length, 0.0, self.draw_in, self.easing));
        trace!(dash = self.dash_length, "reveal frame");
        reveal_transition(&self.hidden, &self.visible, self.fade, self.easing)
    }
}

/// Host capability: run a task once, before the next repaint.
pub trait FrameScheduler<N> {
    fn request_animation_frame(&mut self, task: RevealTask<N>);
}

/// Headless scheduler: tasks wait until the host pumps a frame.
#[derive(Debug)]
pub struct FrameQueue<N> {
    pending: Vec<RevealTask<N>>,
}

impl<N> Default for FrameQueue<N> {
    fn default() -> Self { Self { pending: Vec::new() } }
}

impl<N: Copy> FrameQueue<N> {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.pending.len() }

    pub fn is_empty(&self) -> bool { self.pending.is_empty() }

    /// Run every pending task in posting order; each yields the container style to apply.
    pub fn run_frame<T: GraphicsTree<Node = N>>(&mut self, tree: &mut T) -> Vec<ContainerStyle> {
        let mut styles = Vec::with_capacity(self.pending.len());
        for task in self.pending.drain(..) {
            styles.push(task.run(&mut *tree));
        }
        styles
    }
}

impl<N> FrameScheduler<N> for FrameQueue<N> {
    fn request_animation_frame(&mut self, task: RevealTask<N>) {
        self.pending.push(task);
    }
}
