// File: crates/chart-layout/src/config.rs
// Summary: Tunable layout constants (headroom, grid steps, donut ratio, label thresholds) with validation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

/// Extra margin above the data maximum on line charts, as a fraction of the span.
pub const DEFAULT_HEADROOM_RATIO: f64 = 0.1;

/// Layout knobs that are design choices rather than data-derived values.
///
/// Every field has a sensible default; deserialising a partial document fills
/// the rest from [`LayoutConfig::default`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Headroom above the y maximum (line charts only).
    pub headroom_ratio: f64,
    /// Grid divisions along each axis.
    pub grid_steps: usize,
    /// Default histogram bin count.
    pub histogram_bins: usize,
    /// Default moving-average window.
    pub smoothing_window: usize,
    /// Concentric rings on a radar chart.
    pub radar_rings: usize,
    /// Category label distance on a radar chart, relative to the outer radius.
    pub radar_label_distance: f64,
    /// Inner/outer radius ratio for donut charts, in [0, 1].
    pub donut_ratio: f64,
    /// Pie spans narrower than this (degrees) get no percentage label.
    pub pie_label_min_sweep: f64,
    /// Label radius on a full pie, relative to the outer radius.
    pub pie_label_radius: f64,
    /// Share of the plot width used as gaps between bar groups.
    pub bar_spacing_ratio: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            headroom_ratio: DEFAULT_HEADROOM_RATIO,
            grid_steps: 5,
            histogram_bins: 10,
            smoothing_window: 3,
            radar_rings: 5,
            radar_label_distance: 1.1,
            donut_ratio: 0.6,
            pie_label_min_sweep: 15.0,
            pie_label_radius: 0.7,
            bar_spacing_ratio: 0.1,
        }
    }
}

impl LayoutConfig {
    /// Reject values outside the domain each consumer expects.
    pub fn validate(&self) -> Result<()> {
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(LayoutError::invalid(format!(
                "headroom_ratio must be finite and >= 0, got {}",
                self.headroom_ratio
            )));
        }
        if self.histogram_bins <= 1 {
            return Err(LayoutError::invalid(format!(
                "histogram_bins must be greater than 1, got {}",
                self.histogram_bins
            )));
        }
        if !(0.0..=1.0).contains(&self.donut_ratio) {
            return Err(LayoutError::invalid(format!(
                "donut_ratio must be between 0 and 1, got {}",
                self.donut_ratio
            )));
        }
        if !(0.0..1.0).contains(&self.bar_spacing_ratio) {
            return Err(LayoutError::invalid(format!(
                "bar_spacing_ratio must be in [0, 1), got {}",
                self.bar_spacing_ratio
            )));
        }
        if !self.pie_label_min_sweep.is_finite() || !self.pie_label_radius.is_finite() || !self.radar_label_distance.is_finite() {
            return Err(LayoutError::invalid("label distances must be finite"));
        }
        Ok(())
    }
}
