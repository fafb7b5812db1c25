// File: crates/chart-layout/tests/properties.rs
// Purpose: Property checks over generated inputs: bucket sums, arc sweep totals and lookup, determinism.

use chart_layout::arc::layout as arc_layout;
use chart_layout::{
    bucketize, build_path, compute_range, linear_regression, moving_average, radar, ArcLayout, Point, Segment, Series,
};
use proptest::prelude::*;

fn values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
}

fn segments() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec(0.0f64..1000.0, 1..24)
        .prop_filter("need a positive total", |v| v.iter().sum::<f64>() > 0.0)
        .prop_map(|v| v.into_iter().enumerate().map(|(i, x)| Segment::new(format!("s{i}"), x)).collect())
}

fn points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1.0e3f64..1.0e3, -1.0e3f64..1.0e3), 0..64)
        .prop_map(|v| v.into_iter().map(Point::from).collect())
}

proptest! {
    #[test]
    fn bucket_counts_sum_to_input(v in values(), bins in 2usize..64) {
        let counts = bucketize(&v, bins, None).unwrap();
        prop_assert_eq!(counts.len(), bins);
        prop_assert_eq!(counts.iter().sum::<usize>(), v.len());

        let max = v.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = v.iter().copied().fold(f64::INFINITY, f64::min);
        if max > min {
            let at_max = v.iter().filter(|&&x| x == max).count();
            prop_assert!(counts[bins - 1] >= at_max);
        }
    }

    #[test]
    fn bucket_counts_only_cover_custom_range(v in values(), bins in 2usize..16) {
        let (lo, hi) = (-1.0e5, 1.0e5);
        let counts = bucketize(&v, bins, Some((lo, hi))).unwrap();
        let inside = v.iter().filter(|&&x| x >= lo && x <= hi).count();
        prop_assert_eq!(counts.iter().sum::<usize>(), inside);
    }

    #[test]
    fn sweeps_sum_to_full_circle(s in segments()) {
        let spans = arc_layout(&s, 1.0).unwrap();
        let total: f64 = spans.iter().map(|sp| sp.sweep_angle).sum();
        prop_assert!((total - 360.0).abs() < 1e-4);
        for pair in spans.windows(2) {
            prop_assert_eq!(pair[1].start_angle, pair[0].end_angle());
        }
    }

    #[test]
    fn lookup_inverts_layout(s in segments(), t in 0.01f64..0.99) {
        let arcs = ArcLayout::new(&s, 1.0).unwrap();
        for (i, span) in arcs.spans().iter().enumerate() {
            if span.sweep_angle > 1e-6 {
                let angle = span.start_angle + span.sweep_angle * t;
                prop_assert_eq!(arcs.index_at_angle(angle), Some(i));
            }
        }
    }

    #[test]
    fn layouts_are_deterministic(p in points(), smooth in any::<bool>(), progress in 0.0f64..=1.0) {
        prop_assert_eq!(build_path(&p, smooth, progress), build_path(&p, smooth, progress));
        prop_assert_eq!(compute_range(&p, None, false), compute_range(&p, None, false));
        prop_assert_eq!(moving_average(&p, 3), moving_average(&p, 3));
        prop_assert_eq!(linear_regression(&p), linear_regression(&p));
    }

    #[test]
    fn value_layouts_are_deterministic(v in values(), segs in segments(), p in points(), progress in 0.0f64..=1.0) {
        prop_assert_eq!(bucketize(&v, 7, None), bucketize(&v, 7, None));
        prop_assert_eq!(arc_layout(&segs, progress), arc_layout(&segs, progress));

        let categories: Vec<String> = (0..6).map(|i| format!("c{i}")).collect();
        let labeled: Vec<Point> = p.iter().enumerate().map(|(i, q)| Point::labeled(q.x, q.y.abs(), format!("c{}", i % 8))).collect();
        let series = Series::new("s", labeled);
        prop_assert_eq!(
            radar::layout(&categories, &series, 1.0e3, progress),
            radar::layout(&categories, &series, 1.0e3, progress)
        );
    }

    #[test]
    fn straight_path_visits_every_point(p in points()) {
        let path = build_path(&p, false, 1.0);
        if p.len() < 2 {
            prop_assert!(path.is_empty());
        } else {
            let want: Vec<(f64, f64)> = p.iter().map(|q| (q.x, q.y)).collect();
            prop_assert_eq!(path.vertices(), want);
        }
    }
}
