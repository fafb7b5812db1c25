// File: crates/chart-layout/src/types.rs
// Summary: Plain data inputs (points, series, pie segments) consumed read-only by the layout functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single data point. `label` is an opaque display tag, only used as a
/// category key by the bar and radar layouts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub label: String,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: String::new() }
    }

    pub fn labeled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self { x, y, label: label.into() }
    }

    /// Same label, new coordinates.
    pub fn with_xy(&self, x: f64, y: f64) -> Self {
        Self { x, y, label: self.label.clone() }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// Named, ordered collection of points.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Series {
    pub name: String,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(name: impl Into<String>, points: Vec<Point>) -> Self {
        Self { name: name.into(), points }
    }

    /// Build from raw `(x, y)` pairs with empty labels.
    pub fn from_xy(name: impl Into<String>, data: &[(f64, f64)]) -> Self {
        Self::new(name, data.iter().copied().map(Point::from).collect())
    }

    /// First point whose label equals `label`.
    pub fn find_label(&self, label: &str) -> Option<&Point> {
        self.points.iter().find(|p| p.label == label)
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Pie/donut weight. `value` must be non-negative; zero is legal and yields a
/// zero-width span.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub label: String,
    pub value: f64,
}

impl Segment {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}
