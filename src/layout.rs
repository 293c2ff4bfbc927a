//! State placement, transition routing, and chart size.
//!
//! [`Layout`] turns a [`WorkflowModel`] into a geometry snapshot: one
//! [`GeometryState`] per state, one [`GeometryTransition`] per transition,
//! and the enclosing chart [`Size`]. The snapshot is owned by the `Layout`
//! and replaced wholesale by [`set_workflow`](Layout::set_workflow) — readers
//! never observe a partially recomputed chart.
//!
//! Placement is a single pass along the orientation's primary axis: each
//! state's center is stepped past the previous state's extent plus
//! [`STATE_GAP`], so a state's declared size participates in placement, not
//! just rendering. The secondary coordinate stays aligned to [`CHART_MARGIN`],
//! which keeps the chart anchored at the top-left origin.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec, vec::Vec};

use num_traits::Float;

use crate::geometry::{Point, Size};
use crate::model::WorkflowModel;
use crate::orientation::Orientation;

/// Padding between the chart origin and the first state, and around the
/// bounding box on the far edges.
pub const CHART_MARGIN: f64 = 40.0;
/// Gap between the facing boundaries of adjacent states along the primary axis.
pub const STATE_GAP: f64 = 40.0;

/// A state with its computed center.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryState {
    /// The state id from the model.
    pub id: String,
    /// The display text from the model.
    pub label: String,
    /// Center of the state's shape in chart coordinates.
    pub center: Point,
}

/// Label placement for a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionLabel {
    /// Anchor point at the connector's midpoint.
    pub point: Point,
    /// The declared label, or the empty string when the model declared none.
    pub text: String,
}

/// A transition with its computed connector path.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryTransition {
    /// Synthesized id `transition_id<N>`, 1-based, in the model's transition
    /// order. Independent of source/target ids.
    pub id: String,
    /// Connector waypoints from the source state's boundary to the target
    /// state's boundary.
    pub path: Vec<Point>,
    /// Label text and anchor.
    pub label: TransitionLabel,
}

/// Layout computation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A transition references a state id the model never declared.
    ///
    /// Surfaced at computation time: missing geometry cannot be recovered
    /// downstream, so the reference error is loud and immediate.
    UnknownStateId {
        /// 1-based index of the offending transition, matching the
        /// `transition_id<N>` it would have received.
        transition: usize,
        /// The id that resolved to no state.
        state_id: String,
    },
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownStateId {
                transition,
                state_id,
            } => write!(
                f,
                "transition {transition} references unknown state id `{state_id}`"
            ),
        }
    }
}

impl core::error::Error for LayoutError {}

/// Computed chart geometry for one workflow model.
///
/// Construct with [`from_workflow`](Self::from_workflow); recompute for a
/// changed model with [`set_workflow`](Self::set_workflow). Orientation is
/// normalized once at construction and fixed for the lifetime of the value.
///
/// # Example
///
/// ```
/// use flowlayout::{Layout, Orientation, Workflow};
///
/// let workflow = Workflow::new()
///     .state("draft")
///     .state("review")
///     .labeled_transition("state_id1", "state_id2", "submit");
///
/// let layout = Layout::from_workflow(&workflow, Orientation::Vertical).unwrap();
///
/// assert_eq!(layout.transitions()[0].label.text, "submit");
/// assert!(layout.size().height > layout.size().width);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    states: Vec<GeometryState>,
    transitions: Vec<GeometryTransition>,
    size: Size,
}

impl Layout {
    /// Compute the layout of `model` along the given orientation.
    ///
    /// Orientation hints arriving as strings go through
    /// [`Orientation::from_name_or_default`], which maps unrecognized names
    /// to [`Orientation::Horizontal`].
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownStateId`] when a transition references a state
    /// id absent from the model's state sequence.
    pub fn from_workflow<M: WorkflowModel + ?Sized>(
        model: &M,
        orientation: Orientation,
    ) -> Result<Self, LayoutError> {
        let mut layout = Self {
            orientation,
            states: Vec::new(),
            transitions: Vec::new(),
            size: Size::ZERO,
        };
        layout.set_workflow(model)?;
        Ok(layout)
    }

    /// Replace the owned snapshot with a fresh computation over `model`,
    /// keeping the orientation fixed at construction.
    ///
    /// The new snapshot is computed completely before any field is touched;
    /// on error the previous snapshot is left intact.
    ///
    /// # Errors
    ///
    /// [`LayoutError::UnknownStateId`] as in [`from_workflow`](Self::from_workflow).
    pub fn set_workflow<M: WorkflowModel + ?Sized>(
        &mut self,
        model: &M,
    ) -> Result<(), LayoutError> {
        let placed = place_states(model, self.orientation);
        let transitions = route_transitions(model, &placed)?;
        let size = chart_size(&placed);

        self.states = placed.into_iter().map(Placed::into_geometry).collect();
        self.transitions = transitions;
        self.size = size;
        Ok(())
    }

    /// The computed states, one per model state.
    pub fn states(&self) -> &[GeometryState] {
        &self.states
    }

    /// The computed transitions, one per model transition, in model order.
    pub fn transitions(&self) -> &[GeometryTransition] {
        &self.transitions
    }

    /// Bounding box of all states plus [`CHART_MARGIN`], anchored at (0, 0).
    /// [`Size::ZERO`] for a chart with no states.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The orientation fixed at construction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

/// A state with its resolved half-extents, kept until transition routing and
/// size computation are done with it.
struct Placed {
    id: String,
    label: String,
    center: Point,
    half_w: f64,
    half_h: f64,
}

impl Placed {
    fn into_geometry(self) -> GeometryState {
        GeometryState {
            id: self.id,
            label: self.label,
            center: self.center,
        }
    }
}

/// Step through the model's states along the primary axis.
fn place_states<M: WorkflowModel + ?Sized>(model: &M, orientation: Orientation) -> Vec<Placed> {
    let mut placed = Vec::with_capacity(model.states().len());
    let mut cursor = CHART_MARGIN;

    for state in model.states() {
        let (w, h) = state.extent();
        let (primary_extent, secondary_extent) = orientation.split(w, h);
        let primary = cursor + primary_extent / 2.0;
        let secondary = CHART_MARGIN + secondary_extent / 2.0;

        placed.push(Placed {
            id: state.id.clone(),
            label: state.label.clone(),
            center: orientation.point(primary, secondary),
            half_w: w / 2.0,
            half_h: h / 2.0,
        });

        cursor += primary_extent + STATE_GAP;
    }

    placed
}

/// Route every transition as a straight connector between state boundaries.
fn route_transitions<M: WorkflowModel + ?Sized>(
    model: &M,
    placed: &[Placed],
) -> Result<Vec<GeometryTransition>, LayoutError> {
    let mut transitions = Vec::with_capacity(model.transitions().len());

    for (index, descriptor) in model.transitions().iter().enumerate() {
        let source = resolve(placed, &descriptor.source, index)?;
        let target = resolve(placed, &descriptor.target, index)?;

        let start = boundary_exit(source, target.center);
        let end = boundary_exit(target, source.center);

        transitions.push(GeometryTransition {
            id: format!("transition_id{}", index + 1),
            label: TransitionLabel {
                point: start.midpoint(end),
                text: descriptor.label.clone().unwrap_or_default(),
            },
            path: vec![start, end],
        });
    }

    Ok(transitions)
}

fn resolve<'a>(
    placed: &'a [Placed],
    state_id: &str,
    index: usize,
) -> Result<&'a Placed, LayoutError> {
    placed
        .iter()
        .find(|p| p.id == state_id)
        .ok_or_else(|| LayoutError::UnknownStateId {
            transition: index + 1,
            state_id: String::from(state_id),
        })
}

/// The point where the segment from `from.center` toward `toward` leaves
/// `from`'s rectangle.
///
/// Clamped to the segment itself: when the states overlap (or coincide, as
/// for a self-transition) the exit point degrades toward the center rather
/// than overshooting past the other state.
fn boundary_exit(from: &Placed, toward: Point) -> Point {
    let dx = toward.x - from.center.x;
    let dy = toward.y - from.center.y;
    if dx == 0.0 && dy == 0.0 {
        return from.center;
    }

    let tx = if dx == 0.0 {
        f64::INFINITY
    } else {
        from.half_w / Float::abs(dx)
    };
    let ty = if dy == 0.0 {
        f64::INFINITY
    } else {
        from.half_h / Float::abs(dy)
    };
    let t = tx.min(ty).min(1.0);

    Point::new(from.center.x + dx * t, from.center.y + dy * t)
}

/// Smallest rectangle anchored at (0, 0) containing every state's center plus
/// its half-extents, padded by [`CHART_MARGIN`] on the far edges.
fn chart_size(placed: &[Placed]) -> Size {
    if placed.is_empty() {
        return Size::ZERO;
    }

    let mut max_x: f64 = 0.0;
    let mut max_y: f64 = 0.0;
    for p in placed {
        max_x = max_x.max(p.center.x + p.half_w);
        max_y = max_y.max(p.center.y + p.half_h);
    }

    Size::new(max_x + CHART_MARGIN, max_y + CHART_MARGIN)
}
