// File: crates/chart-layout/src/arc.rs
// Summary: Pie/donut arc layout (start/sweep per segment), angle lookup, and label anchor placement.
// Notes:
// - Angles are degrees in screen orientation: 0 at 3 o'clock, growing clockwise.
// - Spans follow input order; reordering equal values changes the picture.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use log::trace;

use crate::config::LayoutConfig;
use crate::error::{LayoutError, Result};
use crate::geometry::clamp_progress;
use crate::types::Segment;

/// Angular extent of one segment, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArcSpan {
    pub start_angle: f64,
    pub sweep_angle: f64,
}

impl ArcSpan {
    pub fn end_angle(&self) -> f64 { self.start_angle + self.sweep_angle }

    pub fn mid_angle(&self) -> f64 { self.start_angle + self.sweep_angle / 2.0 }

    /// Half-open containment `[start, start + sweep)`; zero-width spans contain nothing.
    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.start_angle && angle < self.end_angle()
    }
}

/// Spans for a segment list plus what is needed to query them afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLayout {
    segments: Vec<Segment>,
    spans: Vec<ArcSpan>,
    total: f64,
    progress: f64,
}

impl ArcLayout {
    /// Lay out `segments` clockwise from 0°. `sweep_i = value_i / total * 360 * progress`.
    ///
    /// Fails when a value is negative or non-finite, or when the values sum to 0.
    pub fn new(segments: &[Segment], progress: f64) -> Result<Self> {
        if let Some(bad) = segments.iter().find(|s| !s.value.is_finite() || s.value < 0.0) {
            return Err(LayoutError::invalid(format!(
                "segment '{}' has value {}; values must be finite and >= 0",
                bad.label, bad.value
            )));
        }
        let total: f64 = segments.iter().map(|s| s.value).sum();
        if total == 0.0 {
            return Err(LayoutError::invalid("segment values sum to 0; at least one positive value is required"));
        }
        if !total.is_finite() {
            return Err(LayoutError::invalid("segment values overflow when summed"));
        }
        let progress = clamp_progress(progress);
        let mut start = 0.0f64;
        let spans = segments
            .iter()
            .map(|s| {
                let sweep = (s.value / total) * 360.0 * progress;
                let span = ArcSpan { start_angle: start, sweep_angle: sweep };
                start += sweep;
                span
            })
            .collect::<Vec<_>>();
        trace!("arc layout: {} segments, total {total}, swept {start:.4} deg", spans.len());
        Ok(Self { segments: segments.to_vec(), spans, total, progress })
    }

    pub fn spans(&self) -> &[ArcSpan] { &self.spans }

    pub fn segments(&self) -> &[Segment] { &self.segments }

    pub fn total(&self) -> f64 { self.total }

    pub fn into_spans(self) -> Vec<ArcSpan> { self.spans }

    /// Index of the segment under `angle` (normalised into [0, 360)).
    pub fn index_at_angle(&self, angle: f64) -> Option<usize> {
        if !angle.is_finite() {
            return None;
        }
        let a = normalize_degrees(angle);
        if let Some(i) = self.spans.iter().position(|s| s.contains(a)) {
            return Some(i);
        }
        // Summed sweeps can land a hair short of 360; the tail belongs to the
        // last visible span once the layout is fully revealed.
        if self.progress == 1.0 {
            if let Some(i) = self.spans.iter().rposition(|s| s.sweep_angle > 0.0) {
                if a >= self.spans[i].start_angle {
                    return Some(i);
                }
            }
        }
        None
    }

    /// Segment whose span contains `angle`; `None` past the revealed sweep or
    /// where only zero-width segments sit.
    pub fn segment_at_angle(&self, angle: f64) -> Option<&Segment> {
        self.index_at_angle(angle).map(|i| &self.segments[i])
    }

    /// Share of the total as a percentage (independent of progress).
    pub fn percentage(&self, index: usize) -> Option<f64> {
        self.segments.get(index).map(|s| s.value / self.total * 100.0)
    }

    /// Where to place the percentage label of span `index`, relative to the pie
    /// centre. Spans not wider than `min_sweep` degrees get no label.
    pub fn label_anchor(&self, index: usize, pie: &PieGeometry, min_sweep: f64) -> Option<(f64, f64)> {
        let span = self.spans.get(index)?;
        if span.sweep_angle <= min_sweep {
            return None;
        }
        let r = pie.label_radius();
        let mid = span.mid_angle().to_radians();
        Some((mid.cos() * r, mid.sin() * r))
    }
}

/// Spans only; see [`ArcLayout::new`].
pub fn layout(segments: &[Segment], progress: f64) -> Result<Vec<ArcSpan>> {
    ArcLayout::new(segments, progress).map(ArcLayout::into_spans)
}

/// Segment under `angle` in the fully revealed layout of `segments`.
pub fn segment_at_angle(segments: &[Segment], angle: f64) -> Result<Option<&Segment>> {
    let arcs = ArcLayout::new(segments, 1.0)?;
    Ok(arcs.index_at_angle(angle).map(|i| &segments[i]))
}

/// Screen-space offset from the pie centre (y down) to an angle in [0, 360).
pub fn angle_of_offset(dx: f64, dy: f64) -> f64 {
    normalize_degrees(dy.atan2(dx).to_degrees())
}

fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid of a tiny negative rounds up to 360
    if a >= 360.0 { 0.0 } else { a }
}

/// Pie or donut dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieGeometry {
    pub radius: f64,
    /// Inner/outer radius ratio; 0 for a full pie.
    pub donut_ratio: f64,
    /// Label radius for a full pie, relative to `radius`.
    pub label_radius_ratio: f64,
}

impl PieGeometry {
    pub fn pie(radius: f64) -> Self {
        Self { radius, donut_ratio: 0.0, label_radius_ratio: LayoutConfig::default().pie_label_radius }
    }

    pub fn donut(radius: f64, donut_ratio: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&donut_ratio) {
            return Err(LayoutError::invalid(format!("donut ratio must be between 0 and 1, got {donut_ratio}")));
        }
        Ok(Self { donut_ratio, ..Self::pie(radius) })
    }

    /// Outer radius `min(width, height) / 2`; donut ratio and label radius from config.
    pub fn from_config(width: f64, height: f64, donut: bool, config: &LayoutConfig) -> Result<Self> {
        let radius = width.min(height) / 2.0;
        let mut g = if donut { Self::donut(radius, config.donut_ratio)? } else { Self::pie(radius) };
        g.label_radius_ratio = config.pie_label_radius;
        Ok(g)
    }

    pub fn inner_radius(&self) -> f64 { self.radius * self.donut_ratio }

    pub fn is_donut(&self) -> bool { self.donut_ratio > 0.0 }

    /// Midway through the ring for donuts, `label_radius_ratio * radius` for pies.
    pub fn label_radius(&self) -> f64 {
        if self.is_donut() {
            (self.radius + self.inner_radius()) / 2.0
        } else {
            self.radius * self.label_radius_ratio
        }
    }

    /// Whether an offset from the centre lands on the painted area (not in the hole).
    pub fn contains_offset(&self, dx: f64, dy: f64) -> bool {
        let d = dx.hypot(dy);
        d <= self.radius && (!self.is_donut() || d >= self.inner_radius())
    }
}
