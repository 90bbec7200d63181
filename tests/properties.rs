use boundary_centers::domain::PointSequence;
use boundary_centers::{estimate_centroid, parse_boundary};
use proptest::prelude::*;

fn point_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-1000.0f64..1000.0, -1000.0f64..1000.0)
}

fn wide_point_strategy() -> impl Strategy<Value = (f64, f64)> {
    let coordinate = prop_oneof![
        -1000.0f64..1000.0,
        -1e200f64..1e200,
        -1e307f64..1e307,
        proptest::num::f64::NORMAL,
    ];
    (coordinate.clone(), coordinate)
}

fn marker_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some("M")),
        1 => Just(Some("L")),
        1 => Just(Some("z")),
        1 => Just(Some("Z")),
    ]
}

proptest! {
    #[test]
    fn markers_never_change_points(
        entries in proptest::collection::vec((marker_strategy(), point_strategy()), 2..40),
        trailing in marker_strategy(),
    ) {
        let mut path = String::new();
        for (marker, (x, y)) in &entries {
            if let Some(m) = marker {
                path.push_str(m);
                path.push(' ');
            }
            path.push_str(&format!("{},{} ", x, y));
        }
        if let Some(m) = trailing {
            path.push_str(m);
        }

        let seq = parse_boundary(&path).unwrap();
        let expected: Vec<(f64, f64)> = entries.iter().map(|(_, p)| *p).collect();
        prop_assert_eq!(seq.to_pairs(), expected);
    }
}

proptest! {
    #[test]
    fn centroid_reversal_invariant(points in proptest::collection::vec(point_strategy(), 2..50)) {
        let seq = PointSequence::from_pairs(&points);
        prop_assume!(seq.perimeter() > 0.0);

        let forward = estimate_centroid(&seq).unwrap();
        let backward = estimate_centroid(&seq.reversed()).unwrap();
        prop_assert!((forward.x - backward.x).abs() < 1e-6);
        prop_assert!((forward.y - backward.y).abs() < 1e-6);
    }
}

proptest! {
    #[test]
    fn centroid_is_finite_and_bounded(points in proptest::collection::vec(point_strategy(), 2..50)) {
        let seq = PointSequence::from_pairs(&points);
        prop_assume!(seq.perimeter() > 0.0);

        let c = estimate_centroid(&seq).unwrap();
        let (min_x, max_x) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.0), hi.max(p.0)));
        let (min_y, max_y) = points.iter().fold((f64::MAX, f64::MIN), |(lo, hi), p| (lo.min(p.1), hi.max(p.1)));
        prop_assert!(c.x.is_finite() && c.y.is_finite());
        prop_assert!(c.x >= min_x - 1e-6 && c.x <= max_x + 1e-6);
        prop_assert!(c.y >= min_y - 1e-6 && c.y <= max_y + 1e-6);
    }
}

proptest! {
    #[test]
    fn repeated_point_is_degenerate(p in point_strategy(), n in 1usize..10) {
        let seq = PointSequence::from_pairs(&vec![p; n]);
        let err = estimate_centroid(&seq).unwrap_err();
        prop_assert_eq!(err.points(), n);
    }
}

proptest! {
    #[test]
    fn centroid_never_escapes_non_finite(points in proptest::collection::vec(wide_point_strategy(), 2..20)) {
        let seq = PointSequence::from_pairs(&points);
        match estimate_centroid(&seq) {
            Ok(c) => prop_assert!(c.x.is_finite() && c.y.is_finite(), "non-finite center {:?}", c),
            Err(err) => prop_assert_eq!(err.points(), points.len()),
        }
    }
}
