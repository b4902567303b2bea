use chart_coords::core::{AxisModel, ZoomWindow};

fn labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("x{i}")).collect()
}

fn hidden() -> ZoomWindow {
    ZoomWindow::default()
}

#[test]
fn split_count_adapts_to_sparse_category_data() {
    let mut axis = AxisModel::category(labels(5));
    assert_eq!(axis.split_count(&hidden()), 5);

    let mut tight = AxisModel::category(labels(7)).with_tick_count(4);
    // 7 <= 2 * 4, so the data count wins.
    assert_eq!(tight.split_count(&hidden()), 7);
}

#[test]
fn split_count_falls_back_to_nominal_for_dense_data() {
    let mut axis = AxisModel::category(labels(20));
    assert_eq!(axis.split_count(&hidden()), 5);
}

#[test]
fn split_count_of_empty_category_axis_is_nominal() {
    let mut axis = AxisModel::category(Vec::new());
    assert_eq!(axis.split_count(&hidden()), 5);
}

#[test]
fn value_axis_split_count_is_unconditional() {
    let mut axis = AxisModel::value(0.0, 1.0)
        .expect("valid value axis")
        .with_tick_count(7);
    assert_eq!(axis.split_count(&hidden()), 7);
}

#[test]
fn scale_count_follows_boundary_gap() {
    let mut value = AxisModel::value(0.0, 1.0).expect("valid value axis");
    assert_eq!(value.scale_count(&hidden()), 5);
    value.set_boundary_gap(true);
    assert_eq!(value.scale_count(&hidden()), 6);

    let mut sparse = AxisModel::category(labels(5));
    assert_eq!(sparse.scale_count(&hidden()), 6);
    sparse.set_boundary_gap(false);
    assert_eq!(sparse.scale_count(&hidden()), 5);

    let mut dense = AxisModel::category(labels(20));
    assert_eq!(dense.scale_count(&hidden()), 6);
    dense.set_boundary_gap(false);
    assert_eq!(dense.scale_count(&hidden()), 5);
}

#[test]
fn split_width_divides_the_axis_span() {
    let mut axis = AxisModel::category(labels(5));
    assert_eq!(axis.split_width(500.0, &hidden()), 100.0);

    axis.set_boundary_gap(false);
    assert_eq!(axis.split_width(500.0, &hidden()), 125.0);
}

#[test]
fn scale_width_never_divides_by_zero() {
    let mut single = AxisModel::value(0.0, 1.0)
        .expect("valid value axis")
        .with_tick_count(1);
    assert_eq!(single.scale_count(&hidden()), 1);
    assert_eq!(single.scale_width(640.0, &hidden()), 640.0);

    let mut axis = AxisModel::value(0.0, 1.0)
        .expect("valid value axis")
        .with_boundary_gap(true);
    assert_eq!(axis.scale_width(500.0, &hidden()), 100.0);
}

#[test]
fn data_width_divides_by_visible_count() {
    let mut axis = AxisModel::category(labels(5));
    assert_eq!(axis.data_width(500.0, &hidden()), 100.0);

    axis.set_boundary_gap(false);
    assert_eq!(axis.data_width(500.0, &hidden()), 125.0);
}

#[test]
fn value_labels_interpolate_across_the_range() {
    let mut axis = AxisModel::value(0.0, 100.0).expect("valid value axis");
    let collected: Vec<String> = (0..5).map(|i| axis.scale_label(i, &hidden())).collect();
    assert_eq!(collected, vec!["0", "25", "50", "75", "100"]);
}

#[test]
fn fractional_value_labels_use_one_decimal() {
    let mut axis = AxisModel::value(0.0, 10.0).expect("valid value axis");
    let collected: Vec<String> = (0..5).map(|i| axis.scale_label(i, &hidden())).collect();
    assert_eq!(collected, vec!["0", "2.5", "5", "7.5", "10"]);
}

#[test]
fn collapsed_value_range_labels_every_slot_the_same() {
    let mut axis = AxisModel::default_y();
    assert_eq!(axis.scale_label(0, &hidden()), "0");
    assert_eq!(axis.scale_label(4, &hidden()), "0");
}

#[test]
fn last_category_label_without_boundary_gap_is_the_last_element() {
    let mut axis = AxisModel::category(labels(5)).with_boundary_gap(false);
    assert_eq!(axis.scale_label(4, &hidden()), "x5");
}

#[test]
fn last_category_label_with_boundary_gap_matches_sparse_sampling() {
    // Five categories against five splits: rate 1, offset 0, so the final
    // tick still lands on the last element.
    let mut axis = AxisModel::category(labels(5));
    assert_eq!(axis.scale_label(4, &hidden()), "x5");
}

#[test]
fn dense_category_labels_downsample_deterministically() {
    // Twenty categories against five splits: rate 4, half-rate offset 2 in
    // boundary-gap mode.
    let mut gapped = AxisModel::category(labels(20));
    assert_eq!(gapped.scale_label(0, &hidden()), "x3");
    assert_eq!(gapped.scale_label(1, &hidden()), "x7");
    assert_eq!(gapped.scale_label(4, &hidden()), "x19");

    let mut flush = AxisModel::category(labels(20)).with_boundary_gap(false);
    assert_eq!(flush.scale_label(0, &hidden()), "x1");
    assert_eq!(flush.scale_label(1, &hidden()), "x5");
    assert_eq!(flush.scale_label(4, &hidden()), "x20");
}

#[test]
fn offset_sampling_clamps_to_the_last_label() {
    // 22 categories, rate 4, offset 2: the final gap-mode tick would index
    // past the end without the clamp.
    let mut axis = AxisModel::category(labels(22));
    assert_eq!(axis.scale_count(&hidden()), 6);
    assert_eq!(axis.scale_label(5, &hidden()), "x22");
}

#[test]
fn category_labels_sample_the_zoomed_slice() {
    let mut axis = AxisModel::category(labels(10)).with_boundary_gap(false);
    let window = ZoomWindow::new(true, 0.0, 50.0);

    // Visible slice is x1..x5; the final tick reads its last element.
    assert_eq!(axis.scale_label(4, &window), "x5");
    assert_eq!(axis.scale_label(0, &window), "x1");
}

#[test]
fn empty_category_axis_labels_are_empty_strings() {
    let mut axis = AxisModel::category(Vec::new());
    assert_eq!(axis.scale_label(0, &hidden()), "");
    assert_eq!(axis.scale_label(3, &hidden()), "");
}

#[test]
fn zero_tick_count_degrades_without_panicking() {
    let mut axis = AxisModel::category(labels(5))
        .with_tick_count(0)
        .with_boundary_gap(false);
    assert_eq!(axis.scale_label(0, &hidden()), "x5");
}

#[test]
fn category_label_reads_the_visible_slice() {
    let mut axis = AxisModel::category(labels(10));
    let window = ZoomWindow::new(true, 0.0, 50.0);

    assert_eq!(axis.category_label(0, &window), "x1");
    assert_eq!(axis.category_label(4, &window), "x5");
    assert_eq!(axis.category_label(9, &window), "");
}

#[test]
fn non_finite_value_bounds_are_rejected() {
    assert!(AxisModel::value(f64::NAN, 1.0).is_err());
    assert!(AxisModel::value(0.0, f64::INFINITY).is_err());
}

#[test]
fn stock_axes_match_their_documented_defaults() {
    let x = AxisModel::default_x();
    assert!(x.boundary_gap());
    assert_eq!(x.tick_count(), 5);
    assert_eq!(x.categories(), &["x1", "x2", "x3", "x4", "x5"]);
    assert!(x.style().show);

    let y = AxisModel::default_y();
    assert!(!y.boundary_gap());
    let range = y.value_range().expect("value domain");
    assert_eq!((range.min, range.max), (0.0, 0.0));
}
