// File: crates/chart-layout/src/curve.rs
// Summary: Line-chart path geometry: straight polylines, horizontal-tangent cubic smoothing, and fill-area closure.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::clamp_progress;
use crate::types::Point;

/// One drawing instruction. Coordinates are in whatever space the input points
/// were in (data space unless the path went through a `PlotTransform`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CubicTo { c1: (f64, f64), c2: (f64, f64), to: (f64, f64) },
    Close,
}

/// Ordered path commands consumed by a renderer.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurvePath {
    commands: Vec<PathCommand>,
}

impl CurvePath {
    pub fn empty() -> Self { Self { commands: Vec::new() } }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }

    pub fn len(&self) -> usize { self.commands.len() }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    /// On-curve points (move/line/cubic endpoints), control points excluded.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => Some((x, y)),
                PathCommand::CubicTo { to, .. } => Some(to),
                PathCommand::Close => None,
            })
            .collect()
    }

    /// New path with every coordinate (control points included) passed through `f`.
    pub fn map<F: Fn(f64, f64) -> (f64, f64)>(&self, f: F) -> CurvePath {
        let commands = self
            .commands
            .iter()
            .map(|c| match *c {
                PathCommand::MoveTo { x, y } => {
                    let (x, y) = f(x, y);
                    PathCommand::MoveTo { x, y }
                }
                PathCommand::LineTo { x, y } => {
                    let (x, y) = f(x, y);
                    PathCommand::LineTo { x, y }
                }
                PathCommand::CubicTo { c1, c2, to } => PathCommand::CubicTo {
                    c1: f(c1.0, c1.1),
                    c2: f(c2.0, c2.1),
                    to: f(to.0, to.1),
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        CurvePath { commands }
    }
}

/// Path builder carrying the chart-level options.
///
/// `baseline` is the y value the reveal animation grows out of (the bottom of
/// the y axis on a line chart). `progress = 0` collapses every point onto it,
/// `progress = 1` reproduces the data exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveBuilder {
    pub smooth: bool,
    pub baseline: f64,
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self { smooth: false, baseline: 0.0 }
    }
}

impl CurveBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    #[inline]
    fn deflect(&self, y: f64, progress: f64) -> f64 {
        if progress == 1.0 { y } else { self.baseline + (y - self.baseline) * progress }
    }

    /// Stroke path through `points`. Fewer than two points gives an empty path.
    pub fn build(&self, points: &[Point], progress: f64) -> CurvePath {
        if points.len() < 2 {
            return CurvePath::empty();
        }
        let progress = clamp_progress(progress);
        let mut commands = Vec::with_capacity(points.len());
        let first = &points[0];
        commands.push(PathCommand::MoveTo { x: first.x, y: self.deflect(first.y, progress) });
        self.push_segments(points, progress, &mut commands);
        CurvePath { commands }
    }

    /// Closed area under the curve: down to the baseline at the first and last x.
    pub fn build_fill(&self, points: &[Point], progress: f64) -> CurvePath {
        if points.len() < 2 {
            return CurvePath::empty();
        }
        let progress = clamp_progress(progress);
        let mut commands = Vec::with_capacity(points.len() + 3);
        let first = &points[0];
        let last = &points[points.len() - 1];
        commands.push(PathCommand::MoveTo { x: first.x, y: self.baseline });
        commands.push(PathCommand::LineTo { x: first.x, y: self.deflect(first.y, progress) });
        self.push_segments(points, progress, &mut commands);
        commands.push(PathCommand::LineTo { x: last.x, y: self.baseline });
        commands.push(PathCommand::Close);
        CurvePath { commands }
    }

    fn push_segments(&self, points: &[Point], progress: f64, out: &mut Vec<PathCommand>) {
        for pair in points.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            let curr_y = self.deflect(curr.y, progress);
            if self.smooth {
                let prev_y = self.deflect(prev.y, progress);
                // control points at 1/3 and 2/3 of the horizontal span; flat tangents at both ends
                let c1 = (prev.x + (curr.x - prev.x) / 3.0, prev_y);
                let c2 = (prev.x + 2.0 * (curr.x - prev.x) / 3.0, curr_y);
                out.push(PathCommand::CubicTo { c1, c2, to: (curr.x, curr_y) });
            } else {
                out.push(PathCommand::LineTo { x: curr.x, y: curr_y });
            }
        }
    }
}

/// Stroke path with baseline 0; see [`CurveBuilder::build`].
pub fn build_path(points: &[Point], smooth: bool, progress: f64) -> CurvePath {
    CurveBuilder::new().smooth(smooth).build(points, progress)
}

/// Fill path with baseline 0; see [`CurveBuilder::build_fill`].
pub fn build_fill_path(points: &[Point], smooth: bool, progress: f64) -> CurvePath {
    CurveBuilder::new().smooth(smooth).build_fill(points, progress)
}
