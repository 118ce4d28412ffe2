use super::*;

fn cfg() -> RadarConfig {
    RadarConfig::default()
}

// =============================================================
// control_points
// =============================================================

#[test]
fn one_control_point_per_axis_tagged_with_index() {
    let points = control_points(&cfg(), &[0.5, 0.5, 0.5, 0.5, 0.5]);
    assert_eq!(points.len(), 5);
    for (i, p) in points.iter().enumerate() {
        assert_eq!(p.axis, i);
        assert!((p.radius - 10.0).abs() < f64::EPSILON);
    }
}

#[test]
fn control_point_sits_at_value_position() {
    let c = cfg();
    let points = control_points(&c, &[1.0, 0.25, 0.5]);
    assert_eq!(points[0].center, c.point_on_axis(0, 3, 1.0));
    assert_eq!(points[1].center, c.point_on_axis(1, 3, 0.25));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_inside_marker_returns_axis() {
    let points = control_points(&cfg(), &[0.5, 0.5, 0.5, 0.5, 0.5]);
    let target = points[3].center;
    let near = Point::new(target.x + 4.0, target.y - 4.0);
    assert_eq!(hit_test(near, &points), Some(3));
}

#[test]
fn miss_returns_none() {
    let points = control_points(&cfg(), &[0.5, 0.5, 0.5, 0.5, 0.5]);
    assert_eq!(hit_test(Point::new(0.0, 0.0), &points), None);
}

#[test]
fn hit_on_boundary_counts() {
    let points = control_points(&cfg(), &[1.0, 1.0, 1.0]);
    let c = points[0].center;
    assert_eq!(hit_test(Point::new(c.x + 10.0, c.y), &points), Some(0));
}

#[test]
fn overlapping_markers_prefer_last_drawn() {
    // All values at the floor: markers pile up near the center.
    let points = control_points(&cfg(), &[0.05, 0.05, 0.05, 0.05, 0.05]);
    assert_eq!(hit_test(cfg().center, &points), Some(4));
}

// =============================================================
// parse_axis_tag
// =============================================================

#[test]
fn parse_axis_tag_accepts_valid_index() {
    assert_eq!(parse_axis_tag("2", 5), Some(2));
    assert_eq!(parse_axis_tag(" 0 ", 5), Some(0));
}

#[test]
fn parse_axis_tag_rejects_garbage_and_out_of_range() {
    assert_eq!(parse_axis_tag("5", 5), None);
    assert_eq!(parse_axis_tag("-1", 5), None);
    assert_eq!(parse_axis_tag("two", 5), None);
    assert_eq!(parse_axis_tag("", 5), None);
}
