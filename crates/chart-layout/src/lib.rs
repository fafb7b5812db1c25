// File: crates/chart-layout/src/lib.rs
// Summary: Core library entry point; exports the pure layout API (ranges, bins, curves, arcs, radar, bars, stats).

pub mod error;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod config;
pub mod axis;
pub mod scale;
pub mod histogram;
pub mod curve;
pub mod arc;
pub mod radar;
pub mod bar;
pub mod stats;

pub use error::{LayoutError, Result};
pub use types::{Point, Segment, Series};
pub use geometry::{Insets, Rect};
pub use config::LayoutConfig;
pub use axis::{compute_range, compute_range_with_headroom, compute_x_range, AxisRange, AxisRangeCalculator};
pub use scale::PlotTransform;
pub use histogram::{bucketize, Histogram};
pub use curve::{build_fill_path, build_path, CurveBuilder, CurvePath, PathCommand};
pub use arc::{angle_of_offset, ArcLayout, ArcSpan, PieGeometry};
pub use bar::{BarMode, BarRect};
pub use stats::{linear_regression, mean, median, moving_average, std_dev, summarize, Regression, Summary};
