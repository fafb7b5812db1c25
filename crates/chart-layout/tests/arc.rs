// File: crates/chart-layout/tests/arc.rs
// Purpose: Validate pie/donut arc layout: sweep totals, ordering, progress, angle lookup, labels.

use chart_layout::arc::{layout, segment_at_angle};
use chart_layout::{ArcLayout, ArcSpan, LayoutConfig, LayoutError, PieGeometry, Segment};
use pretty_assertions::assert_eq;

fn segs(values: &[(&str, f64)]) -> Vec<Segment> {
    values.iter().map(|&(l, v)| Segment::new(l, v)).collect()
}

#[test]
fn quarters_of_the_circle() {
    let spans = layout(&segs(&[("a", 1.0), ("b", 1.0), ("c", 2.0)]), 1.0).unwrap();
    assert_eq!(
        spans,
        vec![
            ArcSpan { start_angle: 0.0, sweep_angle: 90.0 },
            ArcSpan { start_angle: 90.0, sweep_angle: 90.0 },
            ArcSpan { start_angle: 180.0, sweep_angle: 180.0 },
        ]
    );
}

#[test]
fn input_order_drives_layout() {
    let a = layout(&segs(&[("a", 1.0), ("b", 3.0)]), 1.0).unwrap();
    let b = layout(&segs(&[("b", 3.0), ("a", 1.0)]), 1.0).unwrap();
    assert_eq!(a[0].sweep_angle, 90.0);
    assert_eq!(b[0].sweep_angle, 270.0);
    assert_ne!(a, b);
}

#[test]
fn all_zero_is_rejected() {
    let err = layout(&segs(&[("a", 0.0), ("b", 0.0)]), 1.0).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidArgument(_)));
    assert!(layout(&[], 1.0).is_err());
}

#[test]
fn negative_value_is_rejected() {
    assert!(layout(&segs(&[("a", 2.0), ("b", -1.0)]), 1.0).is_err());
}

#[test]
fn progress_scales_every_sweep() {
    let spans = layout(&segs(&[("a", 1.0), ("b", 1.0)]), 0.5).unwrap();
    assert_eq!(spans[0], ArcSpan { start_angle: 0.0, sweep_angle: 90.0 });
    assert_eq!(spans[1], ArcSpan { start_angle: 90.0, sweep_angle: 90.0 });
}

#[test]
fn zero_segment_has_zero_sweep_and_is_never_hit() {
    let s = segs(&[("a", 1.0), ("zero", 0.0), ("b", 1.0)]);
    let arcs = ArcLayout::new(&s, 1.0).unwrap();
    assert_eq!(arcs.spans()[1], ArcSpan { start_angle: 180.0, sweep_angle: 0.0 });
    assert_eq!(arcs.segment_at_angle(180.0).map(|s| s.label.as_str()), Some("b"));
    assert_eq!(arcs.segment_at_angle(179.9).map(|s| s.label.as_str()), Some("a"));
}

#[test]
fn lookup_normalises_angles() {
    let s = segs(&[("a", 1.0), ("b", 3.0)]);
    assert_eq!(segment_at_angle(&s, 45.0).unwrap().map(|s| s.label.as_str()), Some("a"));
    assert_eq!(segment_at_angle(&s, 405.0).unwrap().map(|s| s.label.as_str()), Some("a"));
    assert_eq!(segment_at_angle(&s, -10.0).unwrap().map(|s| s.label.as_str()), Some("b"));
    assert_eq!(segment_at_angle(&s, f64::NAN).unwrap(), None);
}

#[test]
fn lookup_past_revealed_sweep_is_none() {
    let arcs = ArcLayout::new(&segs(&[("a", 1.0), ("b", 1.0)]), 0.5).unwrap();
    assert_eq!(arcs.segment_at_angle(270.0), None);
}

#[test]
fn percentages_and_label_anchors() {
    let arcs = ArcLayout::new(&segs(&[("big", 9.0), ("tiny", 0.3)]), 1.0).unwrap();
    let pct = arcs.percentage(0).unwrap();
    assert!((pct - 96.774).abs() < 1e-3);

    let cfg = LayoutConfig::default();
    let pie = PieGeometry::from_config(200.0, 100.0, false, &cfg).unwrap();
    assert_eq!(pie.radius, 50.0);
    let (x, y) = arcs.label_anchor(0, &pie, cfg.pie_label_min_sweep).unwrap();
    assert!((x.hypot(y) - 35.0).abs() < 1e-9);
    // ~11.6 degrees: too narrow for a label
    assert_eq!(arcs.label_anchor(1, &pie, cfg.pie_label_min_sweep), None);
}

#[test]
fn donut_labels_sit_mid_ring() {
    let arcs = ArcLayout::new(&segs(&[("a", 1.0)]), 1.0).unwrap();
    let donut = PieGeometry::from_config(100.0, 100.0, true, &LayoutConfig::default()).unwrap();
    let (x, y) = arcs.label_anchor(0, &donut, 15.0).unwrap();
    assert!((x.hypot(y) - 40.0).abs() < 1e-9);
}

#[test]
fn total_ignores_progress() {
    let segments = segs(&[("a", 30.0), ("b", 0.0), ("c", 90.0)]);
    let half = ArcLayout::new(&segments, 0.5).unwrap();
    assert_eq!(half.total(), 120.0);
    assert_eq!(half.percentage(2), Some(75.0));
}
