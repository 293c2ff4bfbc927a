//! Observable contract of the layout component, exercised through the public
//! surface only — the view a chart renderer gets: states, transitions, size.
//!
//! Orientation is probed the way a renderer would notice it: by comparing how
//! far apart the first and last state centers are on each axis. The dominant
//! axis must win by more than 4×, which keeps the probe insensitive to small
//! secondary-axis wobble.

use flowlayout::*;

// ---- Probes ----

fn center_of(label: &str, states: &[GeometryState]) -> Point {
    states
        .iter()
        .find(|s| s.label == label)
        .map(|s| s.center)
        .unwrap_or_else(|| panic!("no state labeled `{label}`"))
}

/// The axis along which the chart visibly flows, if any.
fn dominant_axis(layout: &Layout) -> Option<Orientation> {
    let first = layout.states().first()?;
    let last = layout.states().last()?;
    let dx = (last.center.x - first.center.x).abs();
    let dy = (last.center.y - first.center.y).abs();
    if dx > 4.0 * dy {
        Some(Orientation::Horizontal)
    } else if dy > 4.0 * dx {
        Some(Orientation::Vertical)
    } else {
        None
    }
}

fn simple_workflow() -> Workflow {
    Workflow::new()
        .state("first")
        .state("second")
        .transition("state_id1", "state_id2")
}

// ---- States ----

#[test]
fn empty_workflow_has_no_geometry() {
    let layout = Layout::from_workflow(&Workflow::new(), Orientation::default()).unwrap();

    assert_eq!(layout.states(), &[]);
    assert_eq!(layout.transitions(), &[]);
}

#[test]
fn states_carry_id_label_and_finite_center() {
    let layout =
        Layout::from_workflow(&Workflow::new().state("first"), Orientation::default()).unwrap();

    let [state] = layout.states() else {
        panic!("expected exactly one state");
    };
    assert_eq!(state.id, "state_id1");
    assert_eq!(state.label, "first");
    assert!(state.center.x.is_finite());
    assert!(state.center.y.is_finite());
}

#[test]
fn size_change_recomputes_center() {
    let mut layout =
        Layout::from_workflow(&Workflow::new().state("first"), Orientation::default()).unwrap();
    let old_center = center_of("first", layout.states());

    layout
        .set_workflow(
            &Workflow::new()
                .with_state(StateDescriptor::new("state_id1", "first").sized(100.0, 50.0)),
        )
        .unwrap();

    assert_ne!(center_of("first", layout.states()), old_center);
}

// ---- Transitions ----

#[test]
fn transition_geometry_is_complete() {
    let workflow = Workflow::new()
        .state("first")
        .state("second")
        .labeled_transition("state_id1", "state_id2", "trans");
    let layout = Layout::from_workflow(&workflow, Orientation::default()).unwrap();

    let [transition] = layout.transitions() else {
        panic!("expected exactly one transition");
    };
    assert_eq!(transition.id, "transition_id1");
    assert!(transition.path.len() >= 2);
    assert!(transition.label.point.x.is_finite());
    assert!(transition.label.point.y.is_finite());
    assert_eq!(transition.label.text, "trans");
}

#[test]
fn unlabeled_transition_defaults_to_empty_text() {
    let layout = Layout::from_workflow(&simple_workflow(), Orientation::default()).unwrap();

    assert_eq!(layout.transitions()[0].label.text, "");
}

#[test]
fn path_stays_outside_the_endpoint_states() {
    let layout = Layout::from_workflow(&simple_workflow(), Orientation::default()).unwrap();

    let first = center_of("first", layout.states());
    let second = center_of("second", layout.states());
    let path = &layout.transitions()[0].path;

    // Starts strictly between the two centers, on the source's side.
    assert!(path[0].x > first.x);
    assert!(path[0].x < second.x);
    assert!(path.last().unwrap().x < second.x);
    assert!(path.last().unwrap().x > first.x);
}

// ---- Size ----

#[test]
fn chart_size_is_positive_with_any_state() {
    let layout =
        Layout::from_workflow(&Workflow::new().state("first"), Orientation::default()).unwrap();

    let size = layout.size();
    assert!(size.width > 0.0 && size.width.is_finite());
    assert!(size.height > 0.0 && size.height.is_finite());
}

// ---- Orientation ----

#[test]
fn horizontal_by_default() {
    let layout = Layout::from_workflow(&simple_workflow(), Orientation::default()).unwrap();

    assert_eq!(dominant_axis(&layout), Some(Orientation::Horizontal));
}

#[test]
fn vertical_when_requested() {
    let layout = Layout::from_workflow(&simple_workflow(), Orientation::Vertical).unwrap();

    assert_eq!(dominant_axis(&layout), Some(Orientation::Vertical));
}

#[test]
fn unrecognized_orientation_matches_horizontal_exactly() {
    let fallback = Layout::from_workflow(
        &simple_workflow(),
        Orientation::from_name_or_default("WrongOrientation"),
    )
    .unwrap();
    let horizontal =
        Layout::from_workflow(&simple_workflow(), Orientation::Horizontal).unwrap();

    assert_eq!(fallback, horizontal);
}

// ---- End-to-end scenario ----

#[test]
fn two_state_chart_in_both_orientations() {
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let layout = Layout::from_workflow(&simple_workflow(), orientation).unwrap();

        assert_eq!(layout.states().len(), 2);
        assert_eq!(layout.transitions().len(), 1);
        assert_eq!(layout.transitions()[0].id, "transition_id1");
        assert_eq!(layout.transitions()[0].label.text, "");
        assert_eq!(dominant_axis(&layout), Some(orientation));
    }
}
