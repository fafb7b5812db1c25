// File: crates/chart-layout/src/geometry.rs
// Summary: Lightweight geometry primitives (rects, insets) for plot-space math.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in plot space (y grows downward, like a canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    /// Rectangle anchored at the origin.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::from_ltwh(0.0, 0.0, width, height)
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Shrink by `insets`; collapses to zero size instead of inverting.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left;
        let top = self.top + insets.top;
        let width = (self.width() - insets.hsum()).max(0.0);
        let height = (self.height() - insets.vsum()).max(0.0);
        Self::from_ltwh(left, top, width, height)
    }
}

/// Plot margins.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        // chart padding on the left/right/bottom, title sits above
        Self::new(36.0, 36.0, 0.0, 36.0)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Clamp an animation factor into [0, 1]; NaN collapses to 0.
#[inline]
pub fn clamp_progress(progress: f64) -> f64 {
    if progress.is_nan() { 0.0 } else { clamp(progress, 0.0, 1.0) }
}
