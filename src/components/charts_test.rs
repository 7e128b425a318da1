use super::*;

#[test]
fn bar_height_scales_to_max() {
    assert!((bar_height(5, 10, 200.0) - 100.0).abs() < f64::EPSILON);
    assert!((bar_height(10, 10, 200.0) - 200.0).abs() < f64::EPSILON);
}

#[test]
fn bar_height_zero_max_draws_nothing() {
    assert!(bar_height(0, 0, 200.0).abs() < f64::EPSILON);
}

#[test]
fn percent_label_rounds_to_whole_percent() {
    assert_eq!(percent_label("Clients", 2, 3), "Clients 67%");
    assert_eq!(percent_label("Engineers", 1, 3), "Engineers 33%");
}

#[test]
fn percent_label_handles_empty_total() {
    assert_eq!(percent_label("Clients", 0, 0), "Clients 0%");
}

#[test]
fn pie_slice_path_is_empty_for_zero_span() {
    assert_eq!(pie_slice_path(0.2, 0.2, 120.0, 120.0, 80.0), "");
}

#[test]
fn pie_slice_path_uses_large_arc_for_majority_share() {
    let path = pie_slice_path(0.0, 0.75, 120.0, 120.0, 80.0);
    assert!(path.contains(" 1 1 "), "{path}");
    assert!(path.starts_with("M 120 120 L "), "{path}");
}

#[test]
fn pie_slice_path_uses_small_arc_for_minority_share() {
    let path = pie_slice_path(0.0, 0.25, 120.0, 120.0, 80.0);
    assert!(path.contains(" 0 1 "), "{path}");
}

#[test]
fn pie_slice_path_full_circle_closes() {
    let path = pie_slice_path(0.0, 1.0, 120.0, 120.0, 80.0);
    assert!(path.ends_with('Z'), "{path}");
    assert_eq!(path.matches('A').count(), 2, "{path}");
}
