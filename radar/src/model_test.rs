#![allow(clippy::float_cmp)]

use super::*;

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

fn five() -> RadarModel {
    RadarModel::with_labels(labels(&["Conception", "Research", "Drafting", "Style", "Proofing"]))
}

// =============================================================
// reset
// =============================================================

#[test]
fn new_model_is_empty() {
    let m = RadarModel::new();
    assert!(m.is_empty());
    assert_eq!(m.len(), 0);
    assert!(m.values().is_empty());
}

#[test]
fn with_labels_defaults_every_value_to_half() {
    let m = five();
    assert_eq!(m.len(), 5);
    assert_eq!(m.values(), &[0.5; 5]);
}

#[test]
fn reset_replaces_labels_and_discards_old_values() {
    let mut m = five();
    m.set_value(1, 0.9).unwrap();
    m.reset(labels(&["A", "B", "C"]));
    assert_eq!(m.labels(), &["A", "B", "C"]);
    assert_eq!(m.values(), &[0.5, 0.5, 0.5]);
}

#[test]
fn values_and_labels_stay_the_same_length() {
    let mut m = five();
    for n in [3, 8, 4] {
        let names: Vec<String> = (0..n).map(|i| format!("axis {i}")).collect();
        m.reset(names);
        assert_eq!(m.labels().len(), m.values().len());
    }
}

// =============================================================
// set_value
// =============================================================

#[test]
fn set_value_stores_magnitude() {
    let mut m = five();
    m.set_value(2, 0.8).unwrap();
    assert_eq!(m.value(2), Some(0.8));
    assert_eq!(m.value(1), Some(0.5));
}

#[test]
fn set_value_rejects_out_of_range_index() {
    let mut m = five();
    let err = m.set_value(5, 0.3).unwrap_err();
    assert_eq!(err, ModelError::AxisOutOfRange { index: 5, count: 5 });
    assert_eq!(m.values(), &[0.5; 5]);
}

#[test]
fn set_value_does_not_clamp() {
    let mut m = five();
    m.set_value(0, 0.01).unwrap();
    assert_eq!(m.value(0), Some(0.01));
}

#[test]
fn model_error_message_names_index_and_count() {
    let err = ModelError::AxisOutOfRange { index: 7, count: 3 };
    assert_eq!(err.to_string(), "axis index 7 out of range for 3 axes");
}

// =============================================================
// axes / summary
// =============================================================

#[test]
fn axes_carry_their_index() {
    let m = five();
    let axes = m.axes();
    assert_eq!(axes.len(), 5);
    assert_eq!(axes[3], Axis { label: "Style".into(), index: 3 });
}

#[test]
fn usage_summary_rounds_percentages() {
    let mut m = RadarModel::with_labels(labels(&["Conception", "Research", "Drafting"]));
    m.set_value(1, 0.804).unwrap();
    m.set_value(2, 0.05).unwrap();
    assert_eq!(m.usage_summary(), "50% Conception — 80% Research — 5% Drafting");
}

#[test]
fn usage_summary_of_empty_model_is_empty() {
    assert_eq!(RadarModel::new().usage_summary(), "");
}
