// File: crates/chart-layout/src/bar.rs
// Summary: Grouped and stacked bar rectangles in plot pixels, keyed by point label.

use crate::axis::AxisRange;
use crate::geometry::{clamp, clamp_progress, Rect};
use crate::types::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    /// One bar per series side by side inside each category group.
    Grouped,
    /// Series stacked upward in input order.
    Stacked,
}

/// One laid-out bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub series_index: usize,
    pub category_index: usize,
    pub rect: Rect,
}

/// Distinct point labels across all series, in first-seen order.
pub fn categories(series: &[Series]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for p in series.iter().flat_map(|s| s.points.iter()) {
        if !out.iter().any(|c| c == &p.label) {
            out.push(p.label.clone());
        }
    }
    out
}

/// Bar rectangles inside `plot` (y grows downward, bars rise from `plot.bottom`).
///
/// Gaps of `plot.width * spacing_ratio / n` separate the `n` category groups.
/// Bar height is `y / y_range.span() * plot.height * progress`; a degenerate
/// range draws zero-height bars. A series without a point for a category
/// contributes no bar there. `spacing_ratio` is clamped so the gaps never
/// exceed the plot width (NaN counts as no spacing); groups then shrink to zero
/// width rather than invert.
pub fn layout(
    series: &[Series],
    categories: &[String],
    y_range: AxisRange,
    plot: Rect,
    mode: BarMode,
    progress: f64,
    spacing_ratio: f64,
) -> Vec<BarRect> {
    let n = categories.len();
    if n == 0 || series.is_empty() {
        return Vec::new();
    }
    let progress = clamp_progress(progress);
    let width = plot.width();
    let height = plot.height();
    let max_ratio = n as f64 / (n as f64 + 1.0);
    let ratio = if spacing_ratio.is_nan() { 0.0 } else { clamp(spacing_ratio, 0.0, max_ratio) };
    let spacing = width * ratio / n as f64;
    let group_width = ((width - (n as f64 + 1.0) * spacing) / n as f64).max(0.0);
    let span = y_range.span();
    let bar_height = |y: f64| if span == 0.0 { 0.0 } else { y / span * height * progress };

    let mut out = Vec::new();
    for (ci, cat) in categories.iter().enumerate() {
        let x = plot.left + spacing + ci as f64 * (group_width + spacing);
        match mode {
            BarMode::Stacked => {
                let mut offset = 0.0;
                for (si, s) in series.iter().enumerate() {
                    if let Some(p) = s.find_label(cat) {
                        let h = bar_height(p.y);
                        let rect = Rect::from_ltrb(x, plot.bottom - offset - h, x + group_width, plot.bottom - offset);
                        out.push(BarRect { series_index: si, category_index: ci, rect });
                        offset += h;
                    }
                }
            }
            BarMode::Grouped => {
                let bar_width = group_width / series.len() as f64;
                for (si, s) in series.iter().enumerate() {
                    if let Some(p) = s.find_label(cat) {
                        let h = bar_height(p.y);
                        let rect = Rect::from_ltrb(
                            x + si as f64 * bar_width,
                            plot.bottom - h,
                            x + (si as f64 + 1.0) * bar_width,
                            plot.bottom,
                        );
                        out.push(BarRect { series_index: si, category_index: ci, rect });
                    }
                }
            }
        }
    }
    out
}

/// Centre x of each category slot, for axis labels.
pub fn category_label_positions(count: usize, plot: Rect) -> Vec<f64> {
    (0..count)
        .map(|i| plot.left + plot.width() * (i as f64 + 0.5) / count as f64)
        .collect()
}
