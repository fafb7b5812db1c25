// File: crates/chart-layout/src/scale.rs
// Summary: Data-to-plot transform (x left-to-right, y flipped) used to hand renderers pixel geometry.

use crate::axis::AxisRange;
use crate::curve::CurvePath;
use crate::geometry::Rect;

/// Linear mapping from data space into a plot rectangle.
///
/// Degenerate axis ranges pin every value to the left (x) or bottom (y) edge;
/// a zero-sized plot maps pixels back to the range minimum.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotTransform {
    pub plot: Rect,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
}

impl PlotTransform {
    pub fn new(plot: Rect, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self { plot, x_range, y_range }
    }

    #[inline]
    pub fn to_px_x(&self, x: f64) -> f64 {
        self.plot.left + self.x_range.fraction(x) * self.plot.width()
    }

    #[inline]
    pub fn to_px_y(&self, y: f64) -> f64 {
        self.plot.bottom - self.y_range.fraction(y) * self.plot.height()
    }

    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to_px_x(x), self.to_px_y(y))
    }

    pub fn from_px_x(&self, px: f64) -> f64 {
        let w = self.plot.width();
        if w == 0.0 { return self.x_range.min; }
        self.x_range.lerp((px - self.plot.left) / w)
    }

    pub fn from_px_y(&self, py: f64) -> f64 {
        let h = self.plot.height();
        if h == 0.0 { return self.y_range.min; }
        self.y_range.lerp((self.plot.bottom - py) / h)
    }

    /// Re-express a data-space path in plot pixels.
    pub fn map_path(&self, path: &CurvePath) -> CurvePath {
        path.map(|x, y| self.to_px(x, y))
    }
}
