// File: crates/chart-layout/src/stats.rs
// Summary: Descriptive statistics, moving-average smoothing and least-squares trend lines over series data.

use crate::error::{LayoutError, Result};
use crate::types::{Point, Series};

fn require_non_empty(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(LayoutError::invalid(format!("{what} of an empty sequence is undefined")));
    }
    Ok(())
}

/// Arithmetic mean. Sums that overflow fall back to averaging pre-scaled values.
pub fn mean(values: &[f64]) -> Result<f64> {
    require_non_empty(values, "mean")?;
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return Ok(sum / n);
    }
    Ok(values.iter().map(|v| v / n).sum())
}

/// Middle value; the average of the two middle values for an even count.
pub fn median(values: &[f64]) -> Result<f64> {
    require_non_empty(values, "median")?;
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    Ok(if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    })
}

/// Population standard deviation (divides by N).
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let m = mean(values)?;
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / n;
    if variance.is_finite() {
        return Ok(variance.sqrt());
    }
    // squares overflowed: measure half-deviations relative to the largest one
    let half: Vec<f64> = values.iter().map(|v| v * 0.5 - m * 0.5).collect();
    let scale = half.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));
    let ratio = half.iter().map(|d| (d / scale) * (d / scale)).sum::<f64>() / n;
    Ok(scale * (2.0 * ratio.sqrt()))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// All descriptive statistics in one pass over the caller's data.
pub fn summarize(values: &[f64]) -> Result<Summary> {
    require_non_empty(values, "summary")?;
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    Ok(Summary { min, max, mean: mean(values)?, median: median(values)?, std_dev: std_dev(values)? })
}

/// Unweighted moving average of `y`.
///
/// The first and last `window / 2` points are kept as-is; every other point
/// gets the mean of the `window` values starting `window / 2` before it.
/// Returns the input unchanged when `window <= 1` or `points.len() <= window`.
pub fn moving_average(points: &[Point], window: usize) -> Vec<Point> {
    if window <= 1 || points.len() <= window {
        return points.to_vec();
    }
    let half = window / 2;
    let n = points.len();
    let mut out = Vec::with_capacity(n);
    out.extend_from_slice(&points[..half]);
    for i in half..n - half {
        let sum: f64 = points[i - half..i - half + window].iter().map(|p| p.y).sum();
        out.push(points[i].with_xy(points[i].x, sum / window as f64));
    }
    out.extend_from_slice(&points[n - half..]);
    out
}

/// [`moving_average`] over a whole series; the result is named `"<name> (smoothed)"`.
pub fn smooth_series(series: &Series, window: usize) -> Series {
    if window <= 1 || series.points.len() <= window {
        return series.clone();
    }
    Series::new(format!("{} (smoothed)", series.name), moving_average(&series.points, window))
}

/// Least-squares line through a point set.
#[derive(Clone, Debug, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Line evaluated at the smallest input x.
    pub start: Point,
    /// Line evaluated at the largest input x.
    pub end: Point,
}

impl Regression {
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// The two endpoints as a drawable polyline.
    pub fn points(&self) -> Vec<Point> {
        vec![self.start.clone(), self.end.clone()]
    }

    /// Trend line as a series named `"Regression (<name>)"`.
    pub fn to_series(&self, source_name: &str) -> Series {
        Series::new(format!("Regression ({source_name})"), self.points())
    }
}

/// Ordinary least squares fit of `y` on `x`.
///
/// Fails with fewer than two points or when every x is identical.
pub fn linear_regression(points: &[Point]) -> Result<Regression> {
    if points.len() < 2 {
        return Err(LayoutError::invalid(format!(
            "linear regression needs at least 2 points, got {}",
            points.len()
        )));
    }
    let (min_x, max_x) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| (lo.min(p.x), hi.max(p.x)));
    if min_x == max_x {
        return Err(LayoutError::invalid("linear regression is undefined when all x values are identical"));
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;
    let (sxy, sxx) = points.iter().fold((0.0, 0.0), |(sxy, sxx), p| {
        let dx = p.x - mean_x;
        (sxy + dx * (p.y - mean_y), sxx + dx * dx)
    });
    if sxx == 0.0 {
        return Err(LayoutError::invalid("linear regression x variance is zero"));
    }
    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;
    Ok(Regression {
        slope,
        intercept,
        start: Point::labeled(min_x, slope * min_x + intercept, "start"),
        end: Point::labeled(max_x, slope * max_x + intercept, "end"),
    })
}

/// Series with evenly spaced x (`start_x + i * step_x`) over `values`; each
/// point is labelled with its x.
pub fn series_from_values(name: impl Into<String>, values: &[f64], start_x: f64, step_x: f64) -> Series {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &y)| {
            let x = start_x + i as f64 * step_x;
            Point::labeled(x, y, x.to_string())
        })
        .collect();
    Series::new(name, points)
}
