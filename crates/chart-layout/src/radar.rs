// File: crates/chart-layout/src/radar.rs
// Summary: Radar chart layout on the unit disk (polygon vertices, spokes, label anchors, grid rings).

use std::f64::consts::PI;

use log::debug;

use crate::error::{LayoutError, Result};
use crate::geometry::clamp_progress;
use crate::types::Series;

/// Angle of category `index` out of `count`: index 0 at 12 o'clock, then
/// clockwise in screen coordinates.
#[inline]
pub fn category_angle(index: usize, count: usize) -> f64 {
    2.0 * PI * index as f64 / count as f64 - PI / 2.0
}

/// Polygon vertices for `series` on the unit disk; the caller scales by its radius.
///
/// Each category's radius is the matching point's `y / max_value`, scaled by
/// `progress`. Categories the series lacks sit at the centre.
pub fn layout(categories: &[String], series: &Series, max_value: f64, progress: f64) -> Result<Vec<(f64, f64)>> {
    if !max_value.is_finite() || max_value <= 0.0 {
        return Err(LayoutError::invalid(format!("radar max value must be > 0, got {max_value}")));
    }
    let progress = clamp_progress(progress);
    let n = categories.len();
    let vertices = categories
        .iter()
        .enumerate()
        .map(|(i, cat)| {
            let value = match series.find_label(cat) {
                Some(p) => p.y,
                None => {
                    debug!("radar: series '{}' has no point for category '{cat}', using centre", series.name);
                    0.0
                }
            };
            let r = value / max_value * progress;
            let angle = category_angle(i, n);
            (angle.cos() * r, angle.sin() * r)
        })
        .collect();
    Ok(vertices)
}

/// Largest y over every point of every series; `None` when there are no points.
pub fn max_value(series: &[Series]) -> Option<f64> {
    series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.y))
        .fold(None, |acc: Option<f64>, y| Some(acc.map_or(y, |m| m.max(y))))
}

/// Outer endpoints of the category axes on the unit disk.
pub fn spokes(count: usize) -> Vec<(f64, f64)> {
    label_anchors(count, 1.0)
}

/// Category label positions at `distance` (relative to the outer radius).
pub fn label_anchors(count: usize, distance: f64) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let a = category_angle(i, count);
            (a.cos() * distance, a.sin() * distance)
        })
        .collect()
}

/// Values printed on the concentric grid rings: `max * i / steps` for `i in 1..=steps`.
pub fn ring_values(max_value: f64, steps: usize) -> Vec<f64> {
    (1..=steps).map(|i| max_value * i as f64 / steps as f64).collect()
}
