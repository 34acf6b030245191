// File: crates/linechart-core/tests/normalize.rs
// Purpose: Value rescaling, label rewriting and construction-time validation.

use linechart_core::normalize::{pixel_y, value_range};
use linechart_core::{canonical_label, normalize, ChartError, ChartOptions, DataPoint, LabelPolicy, LineChart, Size};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool { (a - b).abs() <= 1e-9 }

#[test]
fn middle_peak_renders_highest() {
    let data = vec![
        DataPoint::new("01.01.2020", 10.0),
        DataPoint::new("02.01.2020", 20.0),
        DataPoint::new("03.01.2020", 10.0),
    ];
    let chart = LineChart::new(Size::new(300.0, 200.0), &data).expect("chart");
    let pts = chart.points();

    assert!(pts[1].y < pts[0].y);
    assert!(close(pts[0].y, pts[2].y));
    // graph height 170: min sits 5% above the bottom, max 15% below the top
    assert!(close(pts[0].y, 161.5));
    assert!(close(pts[1].y, 25.5));

    let labels: Vec<&str> = pts.iter().map(|p| p.x.as_str()).collect();
    assert_eq!(labels, ["2020-01-01", "2020-01-02", "2020-01-03"]);
    assert!(close(chart.step(), 90.0));
}

#[test]
fn flat_dataset_sits_on_the_bottom_margin() {
    let data: Vec<DataPoint> = (0..5).map(|i| DataPoint::new(format!("{i}.1.2021"), 7.0)).collect();
    let pts = normalize(&data, 200.0, 15.0, LabelPolicy::PassThrough).expect("normalize");
    for p in &pts {
        assert!(p.y.is_finite());
        assert!(close(p.y, 190.0));
    }
}

#[test]
fn empty_dataset_is_rejected() {
    assert!(matches!(
        normalize(&[], 100.0, 15.0, LabelPolicy::PassThrough),
        Err(ChartError::EmptyDataset)
    ));
    assert!(matches!(LineChart::new(Size::new(300.0, 200.0), &[]), Err(ChartError::EmptyDataset)));
}

#[test]
fn non_finite_values_are_rejected() {
    let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", f64::NAN)];
    assert!(matches!(
        LineChart::new(Size::new(300.0, 200.0), &data),
        Err(ChartError::NonFiniteValue { index: 1 })
    ));
}

#[test]
fn container_must_leave_room_for_the_plot() {
    let data = vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)];
    for size in [Size::new(0.0, 0.0), Size::new(300.0, 0.0), Size::new(30.0, 200.0)] {
        assert!(matches!(
            LineChart::new(size, &data),
            Err(ChartError::ZeroSizedContainer { .. })
        ));
    }
}

#[test]
fn dotted_dates_are_reversed_verbatim() {
    assert_eq!(canonical_label("01.01.2020"), "2020-01-01");
    assert_eq!(canonical_label("1.2.2020"), "2020-2-1");
    assert_eq!(canonical_label("Q1 2020"), "Q1 2020");
    assert_eq!(canonical_label("2020-01-01"), "2020-01-01");
}

#[test]
fn non_date_labels_pass_through_by_default() {
    let data = vec![DataPoint::new("Mon", 1.0), DataPoint::new("05.03.2024", 2.0)];
    let chart = LineChart::new(Size::new(300.0, 200.0), &data).expect("chart");
    assert_eq!(chart.points()[0].x, "Mon");
    assert_eq!(chart.points()[0].date(), None);
    assert_eq!(chart.points()[1].date(), chrono::NaiveDate::from_ymd_opt(2024, 3, 5));
}

#[test]
fn require_date_policy_rejects_other_labels() {
    let data = vec![DataPoint::new("05.03.2024", 1.0), DataPoint::new("Tue", 2.0)];
    let opts = ChartOptions { label_policy: LabelPolicy::RequireDate, ..ChartOptions::default() };
    match LineChart::with_options(Size::new(300.0, 200.0), &data, opts) {
        Err(ChartError::InvalidLabel { index, label }) => {
            assert_eq!(index, 1);
            assert_eq!(label, "Tue");
        }
        other => panic!("expected InvalidLabel, got {:?}", other.err()),
    }
}

#[test]
fn value_range_spans_all_points() {
    let data = vec![DataPoint::new("a", 3.0), DataPoint::new("b", -2.0), DataPoint::new("c", 9.5)];
    assert_eq!(value_range(&data), Some((-2.0, 9.5)));
    assert_eq!(value_range(&[]), None);
}

#[test]
fn extreme_magnitudes_stay_finite() {
    let data = vec![
        DataPoint::new("lo", -f64::MAX),
        DataPoint::new("mid", 0.0),
        DataPoint::new("hi", f64::MAX),
    ];
    let gh = 170.0;
    let ys: Vec<f64> = normalize(&data, gh, 15.0, LabelPolicy::PassThrough)
        .expect("normalize")
        .iter()
        .map(|p| p.y)
        .collect();
    assert!(ys.iter().all(|y| y.is_finite()), "{:?}", ys);
    assert!((ys[0] - gh * 0.95).abs() < 1e-9);
    assert!((ys[1] - gh * 0.55).abs() < 1e-9, "middle value lands mid-span, got {}", ys[1]);
    assert!((ys[2] - gh * 0.15).abs() < 1e-9);

    let chart = LineChart::new(Size::new(300.0, 200.0), &data).expect("chart");
    assert!(!chart.render_to_svg().contains("NaN"));
}

proptest! {
    #[test]
    fn normalized_rows_stay_inside_the_margins(
        values in proptest::collection::vec(-1_000_000.0f64..1_000_000.0, 2..64),
        height in 31.0f64..2_000.0
    ) {
        let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        prop_assume!(max > min);

        let data: Vec<DataPoint> = values.iter().enumerate().map(|(i, v)| DataPoint::new(i.to_string(), *v)).collect();
        let gh = height - 30.0;
        let pts = normalize(&data, gh, 15.0, LabelPolicy::PassThrough).expect("normalize");
        prop_assert_eq!(pts.len(), data.len());

        let eps = 1e-6 * gh.max(1.0);
        for p in &pts {
            prop_assert!(p.y.is_finite());
            prop_assert!(p.y >= gh * 0.15 - eps, "y {} above headroom for gh {}", p.y, gh);
            prop_assert!(p.y <= gh * 0.95 + eps, "y {} below bottom margin for gh {}", p.y, gh);
        }
        prop_assert!((pixel_y(max, min, max, gh, 15.0) - gh * 0.15).abs() <= eps);
        prop_assert!((pixel_y(min, min, max, gh, 15.0) - gh * 0.95).abs() <= eps);
    }
}

proptest! {
    #[test]
    fn rows_stay_inside_the_margins_near_f64_limits(
        values in proptest::collection::vec(proptest::num::f64::NORMAL, 2..32),
        height in 31.0f64..2_000.0
    ) {
        let (min, max) = values.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        prop_assume!(max > min);

        let data: Vec<DataPoint> = values.iter().enumerate().map(|(i, v)| DataPoint::new(i.to_string(), *v)).collect();
        let gh = height - 30.0;
        let pts = normalize(&data, gh, 15.0, LabelPolicy::PassThrough).expect("normalize");

        let eps = 1e-6 * gh;
        for p in &pts {
            prop_assert!(p.y.is_finite(), "non-finite row for values {:?}", values);
            prop_assert!(p.y >= gh * 0.15 - eps && p.y <= gh * 0.95 + eps, "y {} out of bounds for gh {}", p.y, gh);
        }
    }
}
