// File: crates/chart-layout/tests/stats.rs
// Purpose: Validate descriptive statistics, moving-average smoothing and linear regression.

use chart_layout::stats::smooth_series;
use chart_layout::{linear_regression, mean, median, moving_average, std_dev, summarize, LayoutError, Point, Series};
use pretty_assertions::assert_eq;

fn ys(points: &[Point]) -> Vec<f64> {
    points.iter().map(|p| p.y).collect()
}

fn line(values: &[f64]) -> Vec<Point> {
    values.iter().enumerate().map(|(i, &y)| Point::new(i as f64, y)).collect()
}

#[test]
fn empty_input_is_invalid() {
    assert!(matches!(mean(&[]), Err(LayoutError::InvalidArgument(_))));
    assert!(median(&[]).is_err());
    assert!(std_dev(&[]).is_err());
    assert!(summarize(&[]).is_err());
}

#[test]
fn summary_of_small_sample() {
    let s = summarize(&[3.0, 1.0, 2.0]).unwrap();
    assert_eq!(s.min, 1.0);
    assert_eq!(s.max, 3.0);
    assert_eq!(s.mean, 2.0);
    assert_eq!(s.median, 2.0);
    assert!((s.std_dev - (2.0f64 / 3.0).sqrt()).abs() < 1e-12);
}

#[test]
fn moving_average_window_three() {
    let out = moving_average(&line(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3);
    assert_eq!(ys(&out), vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let out = moving_average(&line(&[1.0, 5.0, 3.0, 7.0, 5.0]), 3);
    assert_eq!(ys(&out), vec![1.0, 3.0, 5.0, 5.0, 5.0]);
}

#[test]
fn moving_average_keeps_x_and_labels() {
    let pts = vec![
        Point::labeled(0.0, 0.0, "a"),
        Point::labeled(1.0, 3.0, "b"),
        Point::labeled(2.0, 0.0, "c"),
        Point::labeled(3.0, 3.0, "d"),
    ];
    let out = moving_average(&pts, 3);
    assert_eq!(out[1], Point::labeled(1.0, 1.0, "b"));
    assert_eq!(out[2], Point::labeled(2.0, 2.0, "c"));
    assert_eq!(out[3], pts[3]);
}

#[test]
fn moving_average_no_op_cases() {
    let pts = line(&[4.0, 1.0, 9.0]);
    assert_eq!(moving_average(&pts, 1), pts);
    assert_eq!(moving_average(&pts, 3), pts);
    assert_eq!(moving_average(&pts, 5), pts);
}

#[test]
fn smoothed_series_is_renamed() {
    let s = Series::new("temp", line(&[1.0, 5.0, 3.0, 7.0, 5.0]));
    let smoothed = smooth_series(&s, 3);
    assert_eq!(smoothed.name, "temp (smoothed)");
    assert_eq!(smoothed.len(), 5);
}

#[test]
fn regression_on_identity_line() {
    let r = linear_regression(&line(&[0.0, 1.0, 2.0, 3.0])).unwrap();
    assert_eq!(r.slope, 1.0);
    assert_eq!(r.intercept, 0.0);
    assert_eq!((r.start.x, r.start.y), (0.0, 0.0));
    assert_eq!((r.end.x, r.end.y), (3.0, 3.0));
    assert_eq!(r.points().len(), 2);
}

#[test]
fn regression_endpoints_use_x_extremes_not_order() {
    let pts = vec![Point::new(4.0, 9.0), Point::new(0.0, 1.0), Point::new(2.0, 5.0)];
    let r = linear_regression(&pts).unwrap();
    assert!((r.slope - 2.0).abs() < 1e-12);
    assert!((r.intercept - 1.0).abs() < 1e-12);
    assert_eq!(r.start.x, 0.0);
    assert_eq!(r.end.x, 4.0);
    assert!((r.value_at(10.0) - 21.0).abs() < 1e-9);
}

#[test]
fn regression_rejects_degenerate_input() {
    assert!(linear_regression(&[Point::new(1.0, 1.0)]).is_err());
    let vertical = vec![Point::new(0.1, 1.0), Point::new(0.1, 2.0), Point::new(0.1, 3.0)];
    assert!(matches!(linear_regression(&vertical), Err(LayoutError::InvalidArgument(_))));
}

#[test]
fn regression_series_name() {
    let r = linear_regression(&line(&[1.0, 2.0])).unwrap();
    assert_eq!(r.to_series("sales").name, "Regression (sales)");
}

#[test]
fn mean_and_std_dev_survive_overflowing_sums() {
    assert_eq!(mean(&[1e308, 1e308]).unwrap(), 1e308);
    assert_eq!(std_dev(&[1e308, 1e308]).unwrap(), 0.0);

    let spread = [-1e308, 1e308];
    assert_eq!(mean(&spread).unwrap(), 0.0);
    let sd = std_dev(&spread).unwrap();
    assert!(sd.is_finite());
    assert!((sd - 1e308).abs() <= 1e293);
}
