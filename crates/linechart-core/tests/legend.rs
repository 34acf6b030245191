// File: crates/linechart-core/tests/legend.rs
// Purpose: X-label decimation and the y percentage scale.

use linechart_core::{passes_in_legend_x, x_label_indices, y_labels, DataPoint, FrameQueue, GraphicsTree, LineChart, Size, SvgTree};

#[test]
fn passes_drop_the_last_digit() {
    for n in 1..10 {
        assert_eq!(passes_in_legend_x(n), 0, "count {n}");
    }
    assert_eq!(passes_in_legend_x(10), 1);
    assert_eq!(passes_in_legend_x(19), 1);
    assert_eq!(passes_in_legend_x(45), 4);
    assert_eq!(passes_in_legend_x(120), 12);
    assert_eq!(passes_in_legend_x(237), 23);
    assert_eq!(passes_in_legend_x(1000), 100);
}

#[test]
fn small_datasets_label_every_point_but_the_last() {
    assert_eq!(x_label_indices(5), vec![0, 1, 2, 3]);
    assert_eq!(x_label_indices(1), Vec::<usize>::new());
}

#[test]
fn larger_datasets_skip_between_labels() {
    assert_eq!(x_label_indices(10), vec![0, 2, 4, 6, 8]);
    assert_eq!(x_label_indices(25), vec![0, 3, 6, 9, 12, 15, 18, 21]);
    // 120 points: one label every 13 points, never the last one
    let idx = x_label_indices(120);
    assert_eq!(idx.first(), Some(&0));
    assert!(idx.windows(2).all(|w| w[1] - w[0] == 13));
    assert!(!idx.contains(&119));
}

#[test]
fn y_scale_runs_from_bottom_to_top() {
    let labels = y_labels(20.0, 120.0);
    assert_eq!(labels.len(), 11);
    assert_eq!(labels[0], ("0%".to_string(), 120.0));
    assert_eq!(labels[10].0, "100%");
    assert!((labels[10].1 - 20.0).abs() <= 1e-9);
    assert!((labels[5].1 - 70.0).abs() <= 1e-9);
}

#[test]
fn legend_holds_eleven_y_labels_for_any_size() {
    for n in [2usize, 9, 37, 250] {
        let data: Vec<DataPoint> = (0..n).map(|i| DataPoint::new(format!("{}.1.2020", i % 28 + 1), (i % 7) as f64)).collect();
        let mut chart = LineChart::new(Size::new(640.0, 320.0), &data).expect("chart");
        let mut tree = SvgTree::new();
        let root = tree.create_element("div");
        let mut frames = FrameQueue::new();
        let mount = chart.draw(&mut tree, root, &mut frames).expect("draw");

        let legend = tree.children(mount.svg)[5];
        let texts = tree.find_all(legend, "text");
        let percent = texts.iter().filter(|&&t| tree.text_content(t).ends_with('%')).count();
        assert_eq!(percent, 11, "count {n}");
        assert_eq!(texts.len(), 11 + x_label_indices(n).len(), "count {n}");
    }
}
