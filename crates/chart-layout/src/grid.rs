// File: crates/chart-layout/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Fractions `i / divisions` for `i in 0..=divisions`; grid lines drawn at these
/// positions across the plot. Zero divisions yields just the two edges.
pub fn grid_fractions(divisions: usize) -> Vec<f64> {
    if divisions == 0 { return vec![0.0, 1.0]; }
    (0..=divisions).map(|i| i as f64 / divisions as f64).collect()
}
