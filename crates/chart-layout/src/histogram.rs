// File: crates/chart-layout/src/histogram.rs
// Summary: Equal-width bucketing of raw values (histogram counts, bin edges, label positions).

use log::debug;

use crate::error::{LayoutError, Result};

/// Bucket counts over `[min, max]` split into equal-width bins.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub counts: Vec<usize>,
    pub min: f64,
    pub max: f64,
    /// Zero when every value is identical (or the range is a single point).
    pub bin_width: f64,
}

/// Counts per bin; see [`Histogram::build`] for the rules.
pub fn bucketize(values: &[f64], bin_count: usize, range: Option<(f64, f64)>) -> Result<Vec<usize>> {
    Histogram::build(values, bin_count, range).map(|h| h.counts)
}

impl Histogram {
    /// Bucket `values` into `bin_count` bins.
    ///
    /// - The domain is `range` when given, otherwise the min/max of `values`.
    /// - A value at exactly `max` lands in the last bin.
    /// - Values outside the domain are dropped, so counts sum to the number of
    ///   in-range values.
    /// - Zero-width bins put every in-range value in bin 0.
    /// - No values and no range gives all-zero counts.
    pub fn build(values: &[f64], bin_count: usize, range: Option<(f64, f64)>) -> Result<Self> {
        if bin_count <= 1 {
            return Err(LayoutError::invalid(format!("number of bins must be greater than 1, got {bin_count}")));
        }
        let (min, max) = match range {
            Some((lo, hi)) => {
                if !lo.is_finite() || !hi.is_finite() || lo > hi {
                    return Err(LayoutError::invalid(format!("histogram range [{lo}, {hi}] is not an ordered finite interval")));
                }
                (lo, hi)
            }
            None => match min_max(values) {
                Some(mm) => mm,
                None => {
                    debug!("histogram: no values, returning {bin_count} empty bins");
                    return Ok(Self { counts: vec![0; bin_count], min: 0.0, max: 0.0, bin_width: 0.0 });
                }
            },
        };

        // halved operands keep the width finite when the domain spans most of f64
        let bin_width = (max * 0.5 - min * 0.5) / bin_count as f64 * 2.0;
        if bin_width == 0.0 {
            debug!("histogram: zero-width bins over [{min}, {max}], in-range values go to bin 0");
        }
        let mut counts = vec![0usize; bin_count];
        let mut dropped = 0usize;
        for &v in values {
            match bin_index(v, min, max, bin_width, bin_count) {
                Some(i) => counts[i] += 1,
                None => dropped += 1,
            }
        }
        if dropped > 0 {
            debug!("histogram: dropped {dropped} value(s) outside [{min}, {max}]");
        }
        Ok(Self { counts, min, max, bin_width })
    }

    pub fn bin_count(&self) -> usize { self.counts.len() }

    /// Number of values that landed in some bin.
    pub fn total(&self) -> usize { self.counts.iter().sum() }

    /// Tallest bar; 0 when empty.
    pub fn max_frequency(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Bin a value would land in, or `None` when outside the domain.
    pub fn bin_of(&self, value: f64) -> Option<usize> {
        bin_index(value, self.min, self.max, self.bin_width, self.counts.len())
    }

    /// `bin_count + 1` boundaries; the last one is `max` exactly.
    pub fn edges(&self) -> Vec<f64> {
        let n = self.counts.len();
        (0..=n)
            .map(|i| if i == n { self.max } else { self.min + self.bin_width * i as f64 })
            .collect()
    }

    /// Edge indices worth labelling when roughly `divisions` labels fit: every
    /// `bins / divisions`-th edge plus the final one.
    pub fn label_edge_indices(&self, divisions: usize) -> Vec<usize> {
        let n = self.counts.len();
        let stride = (n / divisions.max(1)).max(1);
        (0..=n).filter(|i| i % stride == 0 || *i == n).collect()
    }
}

fn bin_index(v: f64, min: f64, max: f64, width: f64, bins: usize) -> Option<usize> {
    // NaN fails both comparisons and is dropped here
    if !(v >= min && v <= max) {
        return None;
    }
    if width == 0.0 {
        return Some(0);
    }
    let offset = v - min;
    let steps = if offset.is_finite() { offset / width } else { (v * 0.5 - min * 0.5) / (width * 0.5) };
    Some((steps.floor() as usize).min(bins - 1))
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut it = values.iter().copied();
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}
