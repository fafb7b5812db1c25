// File: crates/chart-layout/src/axis.rs
// Summary: Axis ranges and the calculator deriving them from point collections (overrides, zero floor, headroom).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::debug;

use crate::config::{LayoutConfig, DEFAULT_HEADROOM_RATIO};
use crate::error::{LayoutError, Result};
use crate::grid::linspace;
use crate::types::Point;

/// Closed value interval of an axis.
/// Contract: `max >= min`. `max == min` is legal and every helper below
/// handles it without dividing by zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Build a range from already-ordered bounds. Callers that cannot
    /// guarantee ordering should use [`AxisRange::try_new`].
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Construct enforcing `min <= max` and finite bounds.
    pub fn try_new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(LayoutError::invalid(format!("axis range bounds must be finite, got [{min}, {max}]")));
        }
        if min > max {
            return Err(LayoutError::invalid(format!("axis range min {min} above max {max}")));
        }
        Ok(Self { min, max })
    }

    pub fn span(&self) -> f64 { self.max - self.min }

    pub fn is_degenerate(&self) -> bool { self.span() == 0.0 }

    pub fn contains(&self, v: f64) -> bool { v >= self.min && v <= self.max }

    /// Position of `v` inside the range as a fraction (0 at min, 1 at max).
    /// A degenerate range maps everything to 0.
    pub fn fraction(&self, v: f64) -> f64 {
        let span = self.span();
        if span == 0.0 { 0.0 } else { (v - self.min) / span }
    }

    /// Inverse of [`fraction`](Self::fraction).
    pub fn lerp(&self, t: f64) -> f64 {
        self.min + self.span() * t
    }

    /// Tick values for `divisions` equal grid divisions (divisions + 1 values).
    pub fn ticks(&self, divisions: usize) -> Vec<f64> {
        linspace(self.min, self.max, divisions.max(1) + 1)
    }

    /// Grow `max` by `span * ratio`, saturating at `f64::MAX`.
    pub fn with_headroom(self, ratio: f64) -> Self {
        // half span is finite for any pair of finite bounds
        let headroom = (self.max * 0.5 - self.min * 0.5) * (2.0 * ratio);
        let max = self.max + headroom;
        if max.is_finite() {
            return Self { min: self.min, max };
        }
        debug!("axis headroom overflowed above {}, saturating at f64::MAX", self.max);
        Self { min: self.min, max: if max > 0.0 { f64::MAX } else { self.max } }
    }
}

fn fold_min_max<I: Iterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Y range over every point in `points`.
///
/// An override is returned unchanged. `force_min_zero` pins `min` to 0
/// whatever the data says (and lifts `max` to 0 for all-negative data so the
/// range stays ordered). Empty input yields `{0, 0}`.
pub fn compute_range<'a, I>(points: I, override_range: Option<AxisRange>, force_min_zero: bool) -> AxisRange
where
    I: IntoIterator<Item = &'a Point>,
{
    if let Some(r) = override_range {
        return r;
    }
    let Some((mut min, mut max)) = fold_min_max(points.into_iter().map(|p| p.y)) else {
        debug!("compute_range: no points, falling back to [0, 0]");
        return AxisRange::default();
    };
    if force_min_zero {
        min = 0.0;
        max = max.max(0.0);
    }
    AxisRange { min, max }
}

/// [`compute_range`] followed by `ratio` headroom above the maximum. Headroom
/// never touches an override.
pub fn compute_range_with_headroom<'a, I>(
    points: I,
    override_range: Option<AxisRange>,
    force_min_zero: bool,
    ratio: f64,
) -> AxisRange
where
    I: IntoIterator<Item = &'a Point>,
{
    if let Some(r) = override_range {
        return r;
    }
    compute_range(points, None, force_min_zero).with_headroom(ratio)
}

/// X range over every point; `{0, 0}` when empty.
pub fn compute_x_range<'a, I>(points: I) -> AxisRange
where
    I: IntoIterator<Item = &'a Point>,
{
    match fold_min_max(points.into_iter().map(|p| p.x)) {
        Some((min, max)) => AxisRange { min, max },
        None => AxisRange::default(),
    }
}

/// Reusable calculator carrying the per-chart policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRangeCalculator {
    pub headroom_ratio: f64,
    pub force_min_zero: bool,
}

impl Default for AxisRangeCalculator {
    fn default() -> Self {
        Self { headroom_ratio: 0.0, force_min_zero: false }
    }
}

impl AxisRangeCalculator {
    /// Line-chart policy: headroom from config; filled areas start at zero.
    pub fn for_line_chart(config: &LayoutConfig, fill_area: bool) -> Self {
        Self { headroom_ratio: config.headroom_ratio, force_min_zero: fill_area }
    }

    /// Bar-chart policy: plain data min/max.
    pub fn for_bar_chart() -> Self {
        Self::default()
    }

    /// Switch to the stock headroom ratio.
    pub fn with_default_headroom(mut self) -> Self {
        self.headroom_ratio = DEFAULT_HEADROOM_RATIO;
        self
    }

    pub fn y_range<'a, I>(&self, points: I, override_range: Option<AxisRange>) -> AxisRange
    where
        I: IntoIterator<Item = &'a Point>,
    {
        compute_range_with_headroom(points, override_range, self.force_min_zero, self.headroom_ratio)
    }

}
