use super::*;

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::default().is_dragging());
}

#[test]
fn idle_has_no_axis() {
    assert_eq!(DragState::Idle.axis(), None);
}

#[test]
fn dragging_reports_axis() {
    let s = DragState::Dragging { axis: 3, kind: PointerKind::Touch };
    assert!(s.is_dragging());
    assert_eq!(s.axis(), Some(3));
}

#[test]
fn dragging_states_compare_by_axis_and_kind() {
    let a = DragState::Dragging { axis: 1, kind: PointerKind::Mouse };
    let b = DragState::Dragging { axis: 1, kind: PointerKind::Touch };
    assert_ne!(a, b);
    assert_eq!(a, DragState::Dragging { axis: 1, kind: PointerKind::Mouse });
}

#[test]
fn cancel_reason_display() {
    assert_eq!(CancelReason::Blur.to_string(), "window blur");
    assert_eq!(CancelReason::Hidden.to_string(), "document hidden");
    assert_eq!(CancelReason::TouchCancel.to_string(), "touch cancel");
}
