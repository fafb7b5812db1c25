// File: crates/chart-examples/src/bin/layouts.rs
// Summary: Runs every layout over sample data and prints the resulting geometry (a stand-in render step).
// Usage: example-layouts [config.json]   (RUST_LOG=debug shows fallback decisions)

use anyhow::{Context, Result};
use chart_layout::bar::{self, BarMode};
use chart_layout::grid::grid_fractions;
use chart_layout::stats::{series_from_values, smooth_series};
use chart_layout::{
    radar, summarize, AxisRangeCalculator, ArcLayout, CurveBuilder, Histogram, Insets, LayoutConfig, PieGeometry,
    PlotTransform, Point, Rect, Segment, Series,
};
use log::info;
use std::path::Path;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 300.0;

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => LayoutConfig::default(),
    };
    config.validate().context("layout config rejected")?;
    info!("Using layout config: {config:?}");

    let plot = Rect::from_size(WIDTH, HEIGHT).inset(&Insets::default());
    line_chart(&config, plot)?;
    bar_chart(&config, plot);
    histogram(&config)?;
    pie_chart(&config)?;
    radar_chart(&config)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<LayoutConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read config '{}'", path.display()))?;
    let config = serde_json::from_str(&text).with_context(|| format!("failed to parse config '{}'", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

fn line_chart(config: &LayoutConfig, plot: Rect) -> Result<()> {
    let raw = series_from_values("visits", &[12.0, 15.0, 11.0, 19.0, 24.0, 21.0, 28.0, 26.0], 0.0, 1.0);
    let smoothed = smooth_series(&raw, config.smoothing_window);
    let trend = chart_layout::linear_regression(&raw.points).context("trend line")?;

    let calc = AxisRangeCalculator::for_line_chart(config, true);
    let all = [&raw, &smoothed];
    let x_range = chart_layout::compute_x_range(all.iter().flat_map(|s| s.points.iter()));
    let y_range = calc.y_range(all.iter().flat_map(|s| s.points.iter()), None);
    let transform = PlotTransform::new(plot, x_range, y_range);

    println!("== line chart: x {x_range:?}, y {y_range:?}");
    println!("   y ticks: {:?}", y_range.ticks(config.grid_steps));
    let grid_x: Vec<f64> = grid_fractions(config.grid_steps).iter().map(|f| plot.left + f * plot.width()).collect();
    println!("   vertical grid lines at: {grid_x:?}");
    let builder = CurveBuilder::new().smooth(true).baseline(y_range.min);
    for progress in [0.0, 0.5, 1.0] {
        let stroke = transform.map_path(&builder.build(&smoothed.points, progress));
        println!("   progress {progress:.1}: {} commands, vertices {:?}", stroke.len(), stroke.vertices());
    }
    let fill = transform.map_path(&builder.build_fill(&raw.points, 1.0));
    println!("   fill area: {} commands", fill.len());
    println!("   trend: slope {:.3}, intercept {:.3}", trend.slope, trend.intercept);

    let ys: Vec<f64> = raw.points.iter().map(|p| p.y).collect();
    let summary = summarize(&ys)?;
    println!("   summary: {summary:?}");
    Ok(())
}

fn bar_chart(config: &LayoutConfig, plot: Rect) {
    let series = vec![
        Series::new("2024", vec![Point::labeled(0.0, 30.0, "Q1"), Point::labeled(1.0, 45.0, "Q2"), Point::labeled(2.0, 25.0, "Q3")]),
        Series::new("2025", vec![Point::labeled(0.0, 35.0, "Q1"), Point::labeled(1.0, 40.0, "Q2"), Point::labeled(2.0, 50.0, "Q4")]),
    ];
    let categories = bar::categories(&series);
    let y_range = AxisRangeCalculator::for_bar_chart().y_range(series.iter().flat_map(|s| s.points.iter()), None);
    println!("== bar chart: categories {categories:?}, y {y_range:?}");
    for mode in [BarMode::Grouped, BarMode::Stacked] {
        let bars = bar::layout(&series, &categories, y_range, plot, mode, 1.0, config.bar_spacing_ratio);
        println!("   {mode:?}: {} bars", bars.len());
        for b in &bars {
            println!("     {} / {}: {:?}", series[b.series_index].name, categories[b.category_index], b.rect);
        }
    }
}

fn histogram(config: &LayoutConfig) -> Result<()> {
    let values: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64 / 10.0).collect();
    let h = Histogram::build(&values, config.histogram_bins, None)?;
    println!("== histogram: counts {:?} (max {})", h.counts, h.max_frequency());
    let edges = h.edges();
    let labels: Vec<f64> = h.label_edge_indices(config.grid_steps).into_iter().map(|i| edges[i]).collect();
    println!("   labelled edges: {labels:?}");
    Ok(())
}

fn pie_chart(config: &LayoutConfig) -> Result<()> {
    let segments = vec![
        Segment::new("Rent", 1200.0),
        Segment::new("Food", 450.0),
        Segment::new("Transport", 150.0),
        Segment::new("Unused", 0.0),
        Segment::new("Leisure", 60.0),
    ];
    let arcs = ArcLayout::new(&segments, 1.0)?;
    let donut = PieGeometry::from_config(WIDTH, HEIGHT, true, config)?;
    println!("== donut: radius {:.1}, inner {:.1}, total {}", donut.radius, donut.inner_radius(), arcs.total());
    for (i, (seg, span)) in arcs.segments().iter().zip(arcs.spans()).enumerate() {
        let pct = arcs.percentage(i).unwrap_or(0.0);
        match arcs.label_anchor(i, &donut, config.pie_label_min_sweep) {
            Some((x, y)) => println!("   {:<10} {span:?} {pct:.1}% label at ({x:.1}, {y:.1})", seg.label),
            None => println!("   {:<10} {span:?} {pct:.1}% (no label)", seg.label),
        }
    }
    let tap = (40.0, 60.0);
    if donut.contains_offset(tap.0, tap.1) {
        let angle = chart_layout::angle_of_offset(tap.0, tap.1);
        let hit = arcs.segment_at_angle(angle).map(|s| s.label.as_str());
        println!("   offset {tap:?} -> {angle:.1} deg -> {hit:?}");
    }
    Ok(())
}

fn radar_chart(config: &LayoutConfig) -> Result<()> {
    let categories: Vec<String> = ["Speed", "Power", "Range", "Comfort", "Price"].iter().map(|s| s.to_string()).collect();
    let series = vec![
        Series::new("A", vec![Point::labeled(0.0, 8.0, "Speed"), Point::labeled(1.0, 6.0, "Power"), Point::labeled(2.0, 7.0, "Range"), Point::labeled(3.0, 5.0, "Comfort")]),
        Series::new("B", vec![Point::labeled(0.0, 5.0, "Speed"), Point::labeled(1.0, 9.0, "Power"), Point::labeled(4.0, 8.0, "Price")]),
    ];
    let max = radar::max_value(&series).context("radar chart has no points")?;
    println!("== radar: max {max}, rings {:?}", radar::ring_values(max, config.radar_rings));
    println!("   label anchors: {:?}", radar::label_anchors(categories.len(), config.radar_label_distance));
    for s in &series {
        let poly = radar::layout(&categories, s, max, 1.0)?;
        println!("   {}: {poly:.3?}", s.name);
    }
    Ok(())
}
